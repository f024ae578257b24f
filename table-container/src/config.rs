//! Container configuration.

use serde::Deserialize;
use tabledom::{CssSize, Style};

use crate::error::Result;
use crate::scrollbar::ScrollbarStyle;

/// Prefix of generated element ids unless configured otherwise.
pub const DEFAULT_ID_PREFIX: &str = "rtc";

/// Options for a [`crate::Container`].
///
/// Sizes accept `"100px"`, `"100%"`, `"auto"` or a bare number of pixels.
///
/// ```ignore
/// let config = ContainerConfig::from_json(r#"{
///     "width": "100%",
///     "height": "300px",
///     "customHeader": ["x-filters"],
///     "scrollbarStyle": { "foregroundFocus": { "backgroundColor": "#333333" } }
/// }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub width: CssSize,
    pub height: CssSize,
    #[serde(default)]
    pub max_height: Option<CssSize>,
    /// Caller style for the wrapper. Layout-critical properties are
    /// overridden by the container.
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub scrollbar_style: Option<ScrollbarStyle>,
    /// Extra tag names copied into the pinned header next to
    /// `colgroup` and `thead`.
    #[serde(default)]
    pub custom_header: Vec<String>,
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl ContainerConfig {
    pub fn new(width: CssSize, height: CssSize) -> Self {
        Self {
            width,
            height,
            max_height: None,
            style: None,
            class_name: None,
            scrollbar_style: None,
            custom_header: Vec::new(),
            id_prefix: default_id_prefix(),
        }
    }

    /// Parse both sizes from CSS strings.
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        Ok(Self::new(width.parse()?, height.parse()?))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn max_height(mut self, max_height: CssSize) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn scrollbar_style(mut self, style: ScrollbarStyle) -> Self {
        self.scrollbar_style = Some(style);
        self
    }

    pub fn custom_header(mut self, tag: impl Into<String>) -> Self {
        self.custom_header.push(tag.into());
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}
