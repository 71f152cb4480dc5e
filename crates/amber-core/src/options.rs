//! Configuration options for Amber XML rendering

/// Value of the `version` attribute on the root `document` element
pub const AMBER_VERSION: &str = "2.0";

/// Options for Amber XML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Snippet language used when the source code block declared none
    pub default_language: String,

    /// Drop level-1 headings together with their content
    pub drop_level_one_headings: bool,

    /// `type` attribute of callouts produced from blockquotes
    pub callout_type: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_language: "bash".to_string(),
            drop_level_one_headings: true,
            callout_type: "info".to_string(),
        }
    }
}
