use crate::component::Component;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page definition: routing descriptor plus the root of its component tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub routing: ScreenRouting,

    #[serde(default)]
    pub props: Component,

    /// Legacy custom layout linkage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_id: Option<String>,

    /// Display width (e.g. "Small", "Large", "Max")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(default)]
    pub show_navigation: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ScreenVariant>,

    /// Ordering weight, only present on resolver output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    /// Document fields the resolver doesn't read (`_rev`, `onLoad`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRouting {
    #[serde(default)]
    pub route: String,

    #[serde(default)]
    pub role_id: String,

    #[serde(default)]
    pub home_screen: bool,
}

/// Screen variant as stored (`"pdf"`, `"standard"`). Unknown variants keep
/// their original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScreenVariant {
    Pdf,
    Standard,
    Other(String),
}

impl From<String> for ScreenVariant {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pdf" => ScreenVariant::Pdf,
            "standard" => ScreenVariant::Standard,
            _ => ScreenVariant::Other(value),
        }
    }
}

impl From<ScreenVariant> for String {
    fn from(variant: ScreenVariant) -> Self {
        match variant {
            ScreenVariant::Pdf => "pdf".to_string(),
            ScreenVariant::Standard => "standard".to_string(),
            ScreenVariant::Other(value) => value,
        }
    }
}

impl Screen {
    pub fn new(id: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            routing: ScreenRouting {
                route: route.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn with_props(mut self, props: Component) -> Self {
        self.props = props;
        self
    }

    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.routing.role_id = role_id.into();
        self
    }

    pub fn as_home_screen(mut self) -> Self {
        self.routing.home_screen = true;
        self
    }

    pub fn with_layout_id(mut self, layout_id: impl Into<String>) -> Self {
        self.layout_id = Some(layout_id.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_navigation(mut self, show: bool) -> Self {
        self.show_navigation = show;
        self
    }

    pub fn with_variant(mut self, variant: ScreenVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self.variant, Some(ScreenVariant::Pdf))
    }

    /// Whether the root props declare the free-form grid layout
    pub fn declares_grid_layout(&self) -> bool {
        self.props.setting("layout").and_then(|v| v.as_str()) == Some("grid")
    }
}
