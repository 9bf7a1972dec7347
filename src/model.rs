use crate::palette::Theme;

/// Metadata for one preview image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PagePreviewRequest {
    /// Page title, rendered large and bold.
    pub title: String,
    /// Page summary, rendered as secondary text.
    pub description: String,
    /// Badge label; rendered uppercase.
    pub category: String,
    /// Palette selector.
    #[serde(default)]
    pub theme: Theme,
}

impl PagePreviewRequest {
    /// Convenience constructor.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            theme,
        }
    }
}

/// Footer labels shown on every card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Branding {
    /// Left footer label.
    pub name: String,
    /// Right footer label.
    pub domain: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "Max Bytefield".to_owned(),
            domain: "maxbytefield.dev".to_owned(),
        }
    }
}
