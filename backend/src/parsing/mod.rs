//! Parser for the delivery-load row export.
//!
//! The export is plain comma-delimited text, one row per stop, with the rows
//! of a load kept next to each other. Parsing happens in two steps:
//!
//! - [`row`]: decode one line into a named [`row::LoadRow`] record
//! - [`csv_parser`]: fold rows into finished [`crate::models::Load`] records
//!
//! # Example
//!
//! ```
//! use fleet_insights::parsing::parse_loads;
//!
//! let loads = parse_loads("1,R1,1,S1,StoreA,,,,,0,10,5,2,D1,T1,TR1,8:00");
//! assert_eq!(loads.len(), 1);
//! assert_eq!(loads[0].driver, "D1");
//! ```

pub mod csv_parser;
pub mod row;


pub use csv_parser::{parse_loads, parse_loads_file, LoadAccumulator, LoadBuilder};
pub use row::{LoadRow, UNKNOWN_DRIVER};
