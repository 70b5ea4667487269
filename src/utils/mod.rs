//! Utility module
//!
//! File and stream IO helpers and logger setup.

pub mod io;
pub mod logger;

pub use self::{io::*, logger::Logger};
