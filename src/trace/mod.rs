//! Mobility trace flattening.
//!
//! Turns a SUMO-style trace (`<vehicle id=..><position time=.. x=.. y=../></vehicle>`) into one CSV
//! row per position sample, in document order, copying attribute text verbatim.

mod convert;

pub use convert::{TRACE_HEADER, TraceRow, TraceStats, convert_trace, convert_trace_file};
