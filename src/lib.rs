//! Legio: the content engine behind a Roman reenactment society's website.
//!
//! Legio provides:
//! - Photo gallery filtering, sorting and projection over a content catalog
//! - Lightbox navigation with wraparound over the current projection
//! - A keyword-driven scripted chat assistant
//! - A testimonial carousel with autoplay
//! - Admin management of gallery and event records in a JSON store

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gallery       │   │ Chat          │   │ Admin         │
//! │ (gallery/)    │   │ (chat/)       │   │ (admin/)      │
//! │ - Projection  │   │ - Responder   │   │ - Forms       │
//! │ - Lightbox    │   │ - Session     │   │ - Panel       │
//! │ - View state  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                                         │
//! ┌───────────────┐                        ┌───────────────┐
//! │ UI (ui/)      │                        │ Storage       │
//! │ - Text render │                        │ (storage/)    │
//! └───────────────┘                        └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Configured paths (infrastructure/)               │
//! │  - Error types (domain/error)                       │
//! │  - Content items and categories (domain/item)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a local OTLP file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is a flat key/value set, read from a TOML file and
//! overridden by command line flags:
//!
//! ```toml
//! catalog_path = "~/legio/gallery.json"
//! data_dir = "~/.local/share/legio"
//! trace_level = "legio=debug"
//! reply_delay_ms = 1500
//! carousel_interval_ms = 5000
//! ```
//!
//! # Examples
//!
//! ```rust
//! use legio::gallery::{handle_event, CategoryFilter, Event, SortKey};
//! use legio::{initialize, Category, Config, ItemId};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! handle_event(&mut state, &Event::CategorySelected(CategoryFilter::Only(Category::Education)))?;
//! handle_event(&mut state, &Event::SortSelected(SortKey::Oldest))?;
//! handle_event(&mut state, &Event::Open(ItemId(8)))?;
//! handle_event(&mut state, &Event::Next)?;
//!
//! assert_eq!(state.focused(), Some(ItemId(3)));
//! # Ok::<(), legio::LegioError>(())
//! ```

pub mod admin;
pub mod chat;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use domain::{Category, ContentItem, EventCategory, ItemId, LegioError, NavigationError, Result};
pub use gallery::{advance, project, GalleryState};
pub use chat::respond;

use gallery::Catalog;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = "~/.local/share/legio";
const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to browse. The built-in catalog is used when unset.
    pub catalog_path: Option<String>,

    /// Directory for the admin store and trace file. Default:
    /// `~/.local/share/legio`
    pub data_dir: String,

    /// `EnvFilter` directive, e.g. `info` or `legio=debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Delay before the assistant's reply is shown. Default: 1500
    pub reply_delay_ms: u64,

    /// Carousel autoplay period. Default: 5000
    pub carousel_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            data_dir: DEFAULT_DATA_DIR.to_string(),
            trace_level: None,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Unknown keys are ignored. Numbers that fail to parse and blank
    /// strings fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use legio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("reply_delay_ms".to_string(), "800".to_string());
    /// map.insert("carousel_interval_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.reply_delay_ms, 800);
    /// assert_eq!(config.carousel_interval_ms, 5000);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, default: u64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            catalog_path: text("catalog_path"),
            data_dir: text("data_dir").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            trace_level: text("trace_level"),
            reply_delay_ms: millis("reply_delay_ms", DEFAULT_REPLY_DELAY_MS),
            carousel_interval_ms: millis("carousel_interval_ms", DEFAULT_CAROUSEL_INTERVAL_MS),
        }
    }

    /// Reads a TOML configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LegioError::Io`] if the file cannot be read and
    /// [`LegioError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| LegioError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlays `key=value` overrides on top of this configuration.
    #[must_use]
    pub fn merged_with(self, overrides: &BTreeMap<String, String>) -> Self {
        let parsed = Self::from_map(overrides);
        Self {
            catalog_path: parsed.catalog_path.or(self.catalog_path),
            data_dir: if overrides.contains_key("data_dir") { parsed.data_dir } else { self.data_dir },
            trace_level: parsed.trace_level.or(self.trace_level),
            reply_delay_ms: if overrides.contains_key("reply_delay_ms") {
                parsed.reply_delay_ms
            } else {
                self.reply_delay_ms
            },
            carousel_interval_ms: if overrides.contains_key("carousel_interval_ms") {
                parsed.carousel_interval_ms
            } else {
                self.carousel_interval_ms
            },
        }
    }

    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    #[must_use]
    pub const fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

/// Builds a loaded gallery state from the configured catalog, or from the
/// built-in catalog when no path is set.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or fails validation.
pub fn initialize(config: &Config) -> Result<GalleryState> {
    let _span = tracing::debug_span!("initialize", catalog = ?config.catalog_path).entered();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(Path::new(&infrastructure::expand_tilde(path)))?,
        None => Catalog::builtin(),
    };
    tracing::debug!(items = catalog.len(), "catalog loaded");

    let mut state = GalleryState::new();
    state.load(catalog);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn map_parsing_is_tolerant() {
        let mut map = BTreeMap::new();
        map.insert("catalog_path".to_string(), "   ".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("reply_delay_ms".to_string(), "-5".to_string());
        map.insert("unrelated".to_string(), "x".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
        assert_eq!(config.data_dir, DEFAULT_DATA_DIR);
    }

    #[test]
    fn toml_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legio.toml");
        std::fs::write(&path, "data_dir = \"/srv/legio\"\nreply_delay_ms = 900\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, "/srv/legio");
        assert_eq!(config.reply_delay(), Duration::from_millis(900));
        assert_eq!(config.carousel_interval_ms, DEFAULT_CAROUSEL_INTERVAL_MS);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legio.toml");
        std::fs::write(&path, "reply_delay_ms = \"fast\"").unwrap();
        assert!(matches!(Config::from_file(&path), Err(LegioError::Config(_))));
    }

    #[test]
    fn overrides_only_replace_given_keys() {
        let base = Config {
            data_dir: "/srv/legio".to_string(),
            reply_delay_ms: 900,
            ..Config::default()
        };
        let mut overrides = BTreeMap::new();
        overrides.insert("trace_level".to_string(), "warn".to_string());

        let merged = base.merged_with(&overrides);
        assert_eq!(merged.data_dir, "/srv/legio");
        assert_eq!(merged.reply_delay_ms, 900);
        assert_eq!(merged.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn initialize_uses_builtin_catalog_by_default() {
        let state = initialize(&Config::default()).unwrap();
        assert!(state.is_loaded());
        assert_eq!(state.projection().len(), Catalog::builtin().len());
    }

    #[test]
    fn initialize_reports_bad_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");
        std::fs::write(&path, "[{\"id\": 1, \"title\": \"x\", \"category\": \"cooking\", \"date\": \"2024-01-01\"}]").unwrap();

        let config = Config {
            catalog_path: Some(path.display().to_string()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(LegioError::Catalog(_))));
    }
}
