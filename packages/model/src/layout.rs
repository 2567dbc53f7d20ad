//! # Layouts and Navigation Settings
//!
//! A layout frames the active screen. Its navigation settings are spread
//! onto the root props, so [`Layout::settings`] reads them back through a
//! typed view instead of storing them twice.

use crate::component::Component;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navigation/layout wrapper around a screen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub props: Component,

    /// Document fields the resolver doesn't read (`_rev`, `name`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
    None,
    Top,
    Left,
}

/// Navigation settings, as stored on the application, supplied by an edit
/// session, or spread onto a layout root
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_title: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_width: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<bool>,

    /// Pass-through settings (colours, links, sticky, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Layout {
    pub fn new(id: impl Into<String>, props: Component) -> Self {
        Self {
            id: id.into(),
            props,
            extra: Map::new(),
        }
    }

    /// Typed view of the settings spread onto the root props
    pub fn settings(&self) -> NavigationSettings {
        match serde_json::from_value(Value::Object(self.props.settings.clone())) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(layout_id = %self.id, error = %err, "Unreadable layout settings");
                NavigationSettings::default()
            }
        }
    }
}

impl NavigationSettings {
    /// Spread `other` over `self`: every key `other` defines wins.
    pub fn overlay(mut self, other: &NavigationSettings) -> Self {
        if other.navigation.is_some() {
            self.navigation = other.navigation;
        }
        if other.title.is_some() {
            self.title = other.title.clone();
        }
        if other.hide_title.is_some() {
            self.hide_title = other.hide_title;
        }
        if other.logo_url.is_some() {
            self.logo_url = other.logo_url.clone();
        }
        if other.page_width.is_some() {
            self.page_width = other.page_width.clone();
        }
        if other.embedded.is_some() {
            self.embedded = other.embedded;
        }
        for (key, value) in &other.extra {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn hides_title(&self) -> bool {
        self.hide_title.unwrap_or(false)
    }

    /// Settings as a flat props map, ready to spread onto a component
    pub fn into_props(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
