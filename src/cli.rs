use clap::{Parser, Subcommand};
use legio::gallery::{CategoryFilter, Direction, SortKey};
use legio::ItemId;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "legio")]
#[command(about = "Gallery, chat assistant and admin records for a Roman reenactment society", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML configuration file
    #[arg(long, env = "LEGIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// JSON catalog to browse instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Directory for the admin store and trace file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Log filter, e.g. `info` or `legio=debug`
    #[arg(long, global = true)]
    pub trace_level: Option<String>,

    /// Delay before the assistant's reply is shown
    #[arg(long, global = true)]
    pub reply_delay_ms: Option<u64>,

    /// Carousel autoplay period
    #[arg(long, global = true)]
    pub carousel_interval_ms: Option<u64>,
}

impl Cli {
    /// Configuration keys given on the command line, to lay over the file.
    pub fn overrides(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        };
        put("catalog_path", self.catalog.clone());
        put("data_dir", self.data_dir.clone());
        put("trace_level", self.trace_level.clone());
        put("reply_delay_ms", self.reply_delay_ms.map(|v| v.to_string()));
        put("carousel_interval_ms", self.carousel_interval_ms.map(|v| v.to_string()));
        map
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the photo gallery
    ///
    /// Options apply in a fixed order: reset, search, category, sort, open,
    /// each step, close.
    Gallery {
        /// Clear search and category first
        #[arg(long)]
        reset: bool,

        /// Case-insensitive text matched against title, description and tags
        #[arg(long)]
        search: Option<String>,

        /// Category name, or `all`
        #[arg(long)]
        category: Option<CategoryFilter>,

        /// newest, oldest, popular or views
        #[arg(long)]
        sort: Option<SortKey>,

        /// Item to open in the lightbox
        #[arg(long)]
        open: Option<ItemId>,

        /// Lightbox step, `next` or `prev`; repeatable
        #[arg(long = "step")]
        steps: Vec<Direction>,

        /// Close the lightbox at the end
        #[arg(long)]
        close: bool,
    },

    /// Ask the society assistant a question
    Chat {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show the testimonial carousel
    Testimonials {
        /// Time spent autoplaying, at one slide per interval
        #[arg(long)]
        elapsed_ms: Option<u64>,

        /// Arrow click, `next` or `prev`; repeatable
        #[arg(long = "step")]
        steps: Vec<Direction>,

        /// Dot click on a zero-based slide
        #[arg(long)]
        go: Option<usize>,
    },

    /// Manage gallery items and events
    Admin {
        #[command(subcommand)]
        table: AdminTable,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminTable {
    /// Gallery records
    Gallery {
        #[command(subcommand)]
        action: Option<AdminAction>,
    },
    /// Event records
    Events {
        #[command(subcommand)]
        action: Option<AdminAction>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// List records
    List,

    /// Create a record from `field=value` pairs
    Add {
        #[arg(required = true, value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Replace record ID with `field=value` pairs
    Update {
        id: u64,
        #[arg(required = true, value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Delete record ID
    Delete { id: u64 },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected field=value, got `{raw}`")),
    }
}
