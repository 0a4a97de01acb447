//! Parser for the comma-separated catalogue record format.
//!
//! One record per line, exactly seven fields, no header and no quoting:
//!
//! ```text
//! kind,name,apparent_magnitude,declination,right_ascension,distance,radius
//! star,Sirius,-1.46,-163942,063345,2.64,1.71
//! ```
//!
//! # Example
//!
//! ```
//! use star_catalogue::parsing::record_parser::parse_record;
//!
//! let sirius = parse_record("star,Sirius,-1.46,-163942,063345,2.64,1.71", 1)
//!     .expect("valid record")
//!     .expect("known kind");
//! assert_eq!(sirius.name(), "Sirius");
//! ```

pub mod record_parser;


pub use record_parser::{parse_record, parse_records, FIELD_COUNT};
