//! tabclean - typed CSV loading and missing-value removal
//!
//! Two leaf operations over an in-memory table of typed cells:
//! [`load_data`] reads a comma-separated file (header row included) into a
//! [`Table`], inferring a type tag per column; [`clean_data`] returns a new
//! table with every row that contains a missing value dropped.

pub mod cleaner;
pub mod error;
pub mod loader;
pub mod model;

pub use cleaner::clean_data;
pub use error::{DataError, ParseErrorKind};
pub use loader::load_data;
pub use model::{CellType, CellValue, Column, Row, Table};
