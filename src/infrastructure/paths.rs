//! Path helpers for configured locations.
//!
//! Every configured path may start with `~`, which resolves against `HOME`.
//! Without `HOME` the path is used as written.

use crate::Config;
use std::path::PathBuf;

/// File name of the admin record store inside the data directory.
pub const STORE_FILE: &str = "records.json";

/// File name of the OTLP trace export inside the data directory.
pub const TRACE_FILE: &str = "legio-otlp.json";

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use legio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~/path"), "relative/~/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, std::env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    match (home, path.strip_prefix('~')) {
        (Some(home), Some("")) => home.to_string(),
        (Some(home), Some(rest)) if rest.starts_with('/') => {
            format!("{}{rest}", home.trim_end_matches('/'))
        }
        _ => path.to_string(),
    }
}

/// Data directory from configuration, tilde-expanded.
#[must_use]
pub fn data_dir(config: &Config) -> PathBuf {
    PathBuf::from(expand_tilde(&config.data_dir))
}

/// Location of the admin JSON store.
#[must_use]
pub fn store_path(config: &Config) -> PathBuf {
    data_dir(config).join(STORE_FILE)
}

/// Location of the OTLP trace export.
#[must_use]
pub fn trace_path(config: &Config) -> PathBuf {
    data_dir(config).join(TRACE_FILE)
}
