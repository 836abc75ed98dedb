//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where legio keeps its admin records and trace output, with
//! `~` expansion for user-supplied paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde, store_path, trace_path};
