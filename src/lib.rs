pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod report;
pub mod summary;
pub mod table;
pub mod trace;

pub use error::{ReportError, Result};

#[cfg(test)]
mod test;
