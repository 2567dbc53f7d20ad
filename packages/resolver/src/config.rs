use screenkit_model::NavigationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolver tuning knobs. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Added to a home screen's role priority. Must stay larger than the
    /// spread of role priorities or home screens stop dominating.
    #[serde(default = "default_home_screen_bonus")]
    pub home_screen_bonus: i32,

    #[serde(default = "default_page_width")]
    pub default_page_width: String,

    /// Navigation kind used when a screen shows navigation but nothing sets one
    #[serde(default = "default_navigation")]
    pub default_navigation: NavigationKind,

    #[serde(default = "default_placeholder_width")]
    pub placeholder_width: f64,

    #[serde(default = "default_placeholder_height")]
    pub placeholder_height: f64,

    #[serde(default = "default_placeholder_component")]
    pub placeholder_component: String,

    #[serde(default = "default_layout_component")]
    pub layout_component: String,

    #[serde(default = "default_screenslot_component")]
    pub screenslot_component: String,

    /// Per-role priority overrides on top of the builtin role table
    #[serde(default)]
    pub role_priorities: BTreeMap<String, i32>,
}

fn default_home_screen_bonus() -> i32 {
    100
}

fn default_page_width() -> String {
    "Large".to_string()
}

fn default_navigation() -> NavigationKind {
    NavigationKind::Top
}

fn default_placeholder_width() -> f64 {
    400.0
}

fn default_placeholder_height() -> f64 {
    200.0
}

fn default_placeholder_component() -> String {
    "@standard-components/container".to_string()
}

fn default_layout_component() -> String {
    "@standard-components/layout".to_string()
}

fn default_screenslot_component() -> String {
    "screenslot".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            home_screen_bonus: default_home_screen_bonus(),
            default_page_width: default_page_width(),
            default_navigation: default_navigation(),
            placeholder_width: default_placeholder_width(),
            placeholder_height: default_placeholder_height(),
            placeholder_component: default_placeholder_component(),
            layout_component: default_layout_component(),
            screenslot_component: default_screenslot_component(),
            role_priorities: BTreeMap::new(),
        }
    }
}
