//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK provider → FileExporter → legio-otlp.json
//! ```
//!
//! The trace file lives in the configured data directory and rotates at
//! 10 MB, keeping 3 numbered backups. The filter comes from the
//! `trace_level` config value and defaults to `info`.
//!
//! - [`init`]: subscriber installation
//! - `tracer`: provider and span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
