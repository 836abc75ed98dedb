//! Gallery engine: filtering, sorting, projection and lightbox navigation.
//!
//! The pure core is four functions that the view layer calls on every input
//! change:
//!
//! ```text
//! FilterState ─┐
//!              ├─► project(collection, filter, sort) ─► Projection ─► advance(projection, focus, dir)
//! SortKey ─────┘        │                                   │
//!                   matches / compare                  reconcile_focus
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Search and category predicate
//! - [`sort`]: Sort keys and comparator
//! - [`projection`]: Filter-then-stable-sort composition
//! - [`lightbox`]: Wraparound navigation and focus reconciliation
//! - [`catalog`]: Validated ingestion of raw gallery records
//! - [`state`]: Owning view state for the gallery page
//! - [`handler`]: Event routing into [`GalleryState`]
//! - [`viewmodel`]: Immutable render model
//! - [`carousel`]: Testimonial carousel with autoplay

pub mod carousel;
pub mod catalog;
pub mod filter;
pub mod handler;
pub mod lightbox;
pub mod projection;
pub mod sort;
pub mod state;
pub mod viewmodel;

pub use carousel::{Carousel, Testimonial, TESTIMONIALS};
pub use catalog::{Catalog, RawItem};
pub use filter::{matches, CategoryFilter, FilterState};
pub use handler::{handle_event, Event};
pub use lightbox::{advance, reconcile_focus, Direction};
pub use projection::{project, project_indices};
pub use sort::{compare, SortKey};
pub use state::GalleryState;
pub use viewmodel::GalleryViewModel;
