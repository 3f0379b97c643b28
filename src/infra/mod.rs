//! Concrete trip sources and the city catalog.
//!
//! [`CityCatalog`] maps city names to trip log file names.
//! [`LocalDirSource`] reads those files from a directory, [`HttpSource`]
//! downloads them from a base URL.

mod catalog;
mod local;
mod remote;

pub use catalog::{CityCatalog, CityEntry, file_name_for};
pub use local::LocalDirSource;
pub use remote::HttpSource;
