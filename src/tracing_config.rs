//! Opt-in logging for hosts embedding the resolver.
//!
//! The library crates only emit `tracing` events; they never install a
//! subscriber. A host that wants to see which resolution rule fired for a
//! name calls [`init_tracing`] once at startup.
//!
//! Environment:
//!
//! - `TYRES_LOG`: filter directives in `RUST_LOG` syntax, e.g. `trace` or
//!   `tyres_checker=trace,tyres_solver=debug`. `RUST_LOG` is read when it
//!   is unset.
//! - `TYRES_LOG_FORMAT`: `text` (one line per event), `tree` (events
//!   indented under their spans) or `json` (one object per line).
//!
//! ```bash
//! TYRES_LOG=tyres_checker=trace TYRES_LOG_FORMAT=tree my-host
//! ```
//!
//! With neither variable set nothing is installed.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const FILTER_VAR: &str = "TYRES_LOG";
const FORMAT_VAR: &str = "TYRES_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Read a `TYRES_LOG_FORMAT` value, case-insensitively. Anything
    /// unrecognised selects `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// The filter requested through the environment, if any.
fn requested_filter() -> Option<EnvFilter> {
    match std::env::var(FILTER_VAR) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() => {
            Some(EnvFilter::from_default_env())
        }
        Err(_) => None,
    }
}

/// Install a global subscriber writing to stderr, if logging was requested.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let Some(filter) = requested_filter() else {
        return;
    };
    let format = LogFormat::parse(&std::env::var(FORMAT_VAR).unwrap_or_default());

    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!(?format, "subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }
}
