//! # Input States
//!
//! The five independently-mutating states the screen resolver reads:
//!
//! ```text
//! AppState ──────┐
//! RouteState ────┤
//! BuilderSession ┼──► ResolverInputs ──► resolver
//! OrgState ──────┤
//! DragState ─────┘
//! ```
//!
//! All of them are plain data. Whoever owns them (a store, a test, a
//! snapshot file) hands the resolver a consistent [`ResolverInputs`].

use crate::error::ModelResult;
use crate::layout::{Layout, NavigationSettings};
use crate::screen::Screen;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Document state: every screen and layout of the current application
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default)]
    pub screens: Vec<Screen>,

    #[serde(default)]
    pub layouts: Vec<Layout>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    #[serde(default)]
    pub embedded: bool,
}

/// Application-level defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationSettings>,

    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

/// Reusable code snippet available to bindings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    #[serde(default)]
    pub code: String,
}

/// Route state: the currently matched route, if any
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_route: Option<ActiveRoute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRoute {
    #[serde(default)]
    pub path: String,
    pub screen_id: String,
}

/// Edit session state supplied by the builder preview
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderSession {
    #[serde(default)]
    pub in_builder: bool,

    /// Authoritative in-progress screen definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<Screen>,

    /// Validation errors keyed by component id
    #[serde(default)]
    pub component_errors: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_component_id: Option<String>,

    /// Navigation overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets: Option<Vec<Snippet>>,
}

/// Tenant-level branding defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// In-progress drag-and-reorder operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    /// Target parent id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Insertion index within the target parent's children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DragSource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSource {
    /// A brand-new component rather than an existing node being moved
    #[serde(default)]
    pub is_new: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<DragBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Consistent snapshot of every resolver input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverInputs {
    #[serde(default)]
    pub app: AppState,

    #[serde(default)]
    pub route: RouteState,

    #[serde(default)]
    pub builder: BuilderSession,

    #[serde(default)]
    pub org: OrgState,

    #[serde(default)]
    pub dnd: DragState,
}

impl AppState {
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.id == id)
    }

    pub fn layout(&self, id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|layout| layout.id == id)
    }

    pub fn app_name(&self) -> Option<&str> {
        self.application.as_ref()?.name.as_deref()
    }

    pub fn app_navigation(&self) -> Option<&NavigationSettings> {
        self.application.as_ref()?.navigation.as_ref()
    }
}

impl RouteState {
    pub fn to_screen(screen_id: impl Into<String>) -> Self {
        Self {
            active_route: Some(ActiveRoute {
                path: String::new(),
                screen_id: screen_id.into(),
            }),
        }
    }

    pub fn screen_id(&self) -> Option<&str> {
        self.active_route.as_ref().map(|route| route.screen_id.as_str())
    }
}

impl BuilderSession {
    /// Preview session over `screen`
    pub fn previewing(screen: Screen) -> Self {
        Self {
            in_builder: true,
            screen: Some(screen),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.in_builder
    }

    /// Errors recorded for a component; unknown ids have none
    pub fn errors_for(&self, component_id: Option<&str>) -> &[String] {
        component_id
            .and_then(|id| self.component_errors.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl DragState {
    /// Target parent id, treating an empty id as unset
    pub fn target_parent(&self) -> Option<&str> {
        self.parent.as_deref().filter(|id| !id.is_empty())
    }

    /// A drag preview is shown when both a target and an index are known
    pub fn is_active(&self) -> bool {
        self.target_parent().is_some() && self.index.is_some()
    }
}

impl ResolverInputs {
    pub fn from_json(source: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> ModelResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}
