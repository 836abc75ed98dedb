//! Plain-text rendering layer.
//!
//! Renderers turn immutable view models and records into strings; the caller
//! decides where they go.
//!
//! ```text
//! GalleryState → compute_viewmodel → GalleryViewModel → render_gallery → String
//! ```
//!
//! # Modules
//!
//! - [`renderer`]: Top-level page renderers
//! - [`components`]: Header, cards, lightbox, transcript and table pieces

pub mod components;
pub mod renderer;

pub use renderer::{render_carousel, render_chat, render_events, render_gallery, render_gallery_records};
