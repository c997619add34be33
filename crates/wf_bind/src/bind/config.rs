use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Runtime settings of a [`Binder`](crate::bind::Binder).
///
/// Every field has a default, so a partial document is enough:
///
/// ```
/// use wf_bind::bind::BinderConfig;
///
/// let config: BinderConfig = serde_json::from_str(r#"{ "max_index": 64 }"#).unwrap();
/// assert_eq!(config.max_index, 64);
/// assert_eq!(config.reserved_paths, ["context"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Path prefixes that request input may never reach. Matched without
    /// regard to case or surrounding whitespace.
    pub reserved_paths: Vec<String>,
    /// Parameter names skipped without a failure.
    pub ignored_parameters: Vec<String>,
    /// `chrono` formats tried in order for dates.
    pub date_formats: Vec<String>,
    /// `chrono` formats tried in order for date-times, before the date formats.
    pub datetime_formats: Vec<String>,
    /// The largest list index a parameter may create.
    pub max_index: usize,
    /// Trim non-string scalar values before converting them.
    pub trim_values: bool,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| String::from(*value)).collect()
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            reserved_paths: strings(&["context"]),
            ignored_parameters: strings(&["_sourcePage", "__fp", "__fsk"]),
            date_formats: strings(&["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%B %d %Y", "%b %d %Y"]),
            datetime_formats: strings(&["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]),
            max_index: 10_000,
            trim_values: true,
        }
    }
}

impl BinderConfig {
    /// Adds a reserved path prefix.
    pub fn reserve(mut self, path: impl Into<String>) -> Self {
        self.reserved_paths.push(path.into());
        self
    }

    /// Adds a parameter name to skip.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignored_parameters.push(name.into());
        self
    }

    #[inline]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_parameters.iter().any(|ignored| ignored == name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::BinderConfig;

    #[test]
    fn json_fills_defaults() {
        let config: BinderConfig =
            serde_json::from_str(r#"{ "reserved_paths": ["context", "admin"], "trim_values": false }"#)
                .unwrap();
        assert_eq!(config.reserved_paths, ["context", "admin"]);
        assert!(!config.trim_values);
        assert_eq!(config.max_index, 10_000);
        assert!(config.is_ignored("_sourcePage"));

        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<BinderConfig>(&text).unwrap(), config);
    }

    #[test]
    fn ron_document() {
        let config: BinderConfig = ron::from_str(
            r#"(
                max_index: 100,
                date_formats: ["%d.%m.%Y"],
            )"#,
        )
        .unwrap();
        assert_eq!(config.max_index, 100);
        assert_eq!(config.date_formats, ["%d.%m.%Y"]);
        assert_eq!(config.datetime_formats, BinderConfig::default().datetime_formats);
    }

    #[test]
    fn builders_append() {
        let config = BinderConfig::default()
            .reserve("session")
            .ignore(String::from("csrf"));
        assert_eq!(config.reserved_paths, ["context", "session"]);
        assert!(config.is_ignored("csrf"));
        assert!(!config.is_ignored("CSRF"));
    }
}
