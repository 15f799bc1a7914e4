//! Splitter configuration.

/// Default marker class toggled by a font-loading detection script.
pub const DEFAULT_CLASS_NAME: &str = "wf-loaded";

/// Configuration for [`RuleSplitter`](crate::RuleSplitter).
///
/// Defaults are applied once at construction: an empty family list (nothing
/// ever matches) and the `wf-loaded` marker class.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Family names treated as web fonts.
    ///
    /// A declaration matches when any comma-separated token of its value
    /// contains one of these names as a substring. Empty means no
    /// declaration ever matches and the transform is a no-op.
    pub families: Vec<String>,
    /// Marker class used to build gated selectors.
    pub class_name: String,
}

impl SplitterConfig {
    /// Create a configuration for the given web font families.
    pub fn new(families: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            families: families.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Use a marker class other than [`DEFAULT_CLASS_NAME`].
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            families: vec![],
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SplitterConfig::default();
        assert!(config.families.is_empty());
        assert_eq!(config.class_name, "wf-loaded");
    }

    #[test]
    fn builder_helpers() {
        let config = SplitterConfig::new(["MyWebFont"]).with_class_name("fonts-ready");
        assert_eq!(config.families, ["MyWebFont"]);
        assert_eq!(config.class_name, "fonts-ready");
    }
}
