//! Adapter implementations for port traits
//!
//! Concrete [`ReportSink`](crate::core::ports::ReportSink) implementations:
//!
//! - [`CollectingSink`] - Records events in memory
//! - [`ConsoleSink`] - Writes one line per event, human or JSON
//! - [`LogSink`] - Forwards events to the `log` facade

mod collecting;
mod console;
mod log_sink;

pub use collecting::{CollectingSink, SinkEvent};
pub use console::ConsoleSink;
pub use log_sink::LogSink;
