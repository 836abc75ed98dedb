//! Storage layer for admin-managed gallery and event records.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction for backend implementations
//! - `json`: JSON file-based store implementation
//! - `models`: Record and draft types separate from the gallery domain model

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Store;
pub use json::JsonStore;
pub use models::{EventDraft, EventRecord, GalleryDraft, GalleryRecord};
