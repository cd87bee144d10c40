//! CLI utilities for ferro-annotate
//!
//! Formatting lives in the library so the binary stays a thin wrapper and
//! the output can be tested against in-memory buffers.

pub mod format;

pub use format::{output_annotation, output_error, output_ids, OutputFormat};
