//! Domain layer for legio.
//!
//! Core types shared by the gallery engine, the chat assistant and the admin
//! panel, independent of any storage or presentation concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Gallery content items, categories and date parsing
//! - [`event`]: Society event categories
//!
//! # Examples
//!
//! ```
//! use legio::domain::{parse_item_date, Category, ContentItem, ItemId, Result, LegioError};
//!
//! fn armor() -> Result<ContentItem> {
//!     let date = parse_item_date("May 2024")
//!         .ok_or_else(|| LegioError::Catalog("bad date".to_string()))?;
//!     Ok(ContentItem::new(ItemId(2), "Authentic Armor", Category::Equipment, date))
//! }
//! # assert!(armor().is_ok());
//! ```

pub mod error;
pub mod event;
pub mod item;

pub use error::{LegioError, NavigationError, Result};
pub use event::EventCategory;
pub use item::{parse_item_date, Category, ContentItem, ItemId};
