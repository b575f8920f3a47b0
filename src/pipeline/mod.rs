//! Pipeline module - loads, normalizes and writes the apps table

pub mod coerce;
pub mod dates;
pub mod driver;
pub mod encoding;
pub mod error;
pub mod loader;
pub mod rules;
pub mod schema;
pub mod size;
pub mod writer;

pub use coerce::*;
pub use driver::*;
pub use encoding::*;
pub use error::*;
pub use loader::*;
pub use rules::*;
pub use schema::{validate_schema, OUTPUT_COLUMNS, REQUIRED_COLUMNS};
pub use writer::*;
