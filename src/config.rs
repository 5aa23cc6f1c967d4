//! Environment-driven settings.
//!
//! Every variable is optional; unset or unparseable values fall back to
//! the defaults below.

use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const DEFAULT_MIN_DELAY_MS: u64 = 100;
pub const DEFAULT_MAX_DELAY_MS: u64 = 600;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding override response templates (`TEMPLATE_DIR`).
    pub template_dir: Option<PathBuf>,
    /// Lower bound of the synthetic latency (`MIN_DELAY_MS`).
    pub min_delay_ms: u64,
    /// Upper bound, inclusive, of the synthetic latency (`MAX_DELAY_MS`).
    pub max_delay_ms: u64,
    /// Log output format (`LOG_FORMAT`).
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            template_dir: None,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let template_dir = lookup("TEMPLATE_DIR")
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let min_delay_ms = lookup("MIN_DELAY_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MIN_DELAY_MS);

        let max_delay_ms = lookup("MAX_DELAY_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_DELAY_MS);

        let log_format = match lookup("LOG_FORMAT") {
            Some(format) if format.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Settings {
            template_dir,
            min_delay_ms: min_delay_ms.min(max_delay_ms),
            max_delay_ms: max_delay_ms.max(min_delay_ms),
            log_format,
        }
    }

    /// Inclusive synthetic latency range in milliseconds.
    pub fn delay_range(&self) -> RangeInclusive<u64> {
        self.min_delay_ms..=self.max_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(settings(&[]), Settings::default());
        assert_eq!(Settings::default().delay_range(), 100..=600);
    }

    #[test]
    fn test_reads_every_variable() {
        let s = settings(&[
            ("TEMPLATE_DIR", "/srv/templates"),
            ("MIN_DELAY_MS", "0"),
            ("MAX_DELAY_MS", " 50 "),
            ("LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(s.template_dir, Some(PathBuf::from("/srv/templates")));
        assert_eq!(s.delay_range(), 0..=50);
        assert_eq!(s.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let s = settings(&[("MIN_DELAY_MS", "soon"), ("MAX_DELAY_MS", "-5"), ("LOG_FORMAT", "xml")]);
        assert_eq!(s.delay_range(), DEFAULT_MIN_DELAY_MS..=DEFAULT_MAX_DELAY_MS);
        assert_eq!(s.log_format, LogFormat::Text);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let s = settings(&[("MIN_DELAY_MS", "900"), ("MAX_DELAY_MS", "200")]);
        assert_eq!(s.delay_range(), 200..=900);
    }

    #[test]
    fn test_blank_template_dir_is_unset() {
        assert_eq!(settings(&[("TEMPLATE_DIR", "  ")]).template_dir, None);
    }
}
