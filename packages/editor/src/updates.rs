//! # Store Updates
//!
//! Typed changes to the resolver inputs. Each update touches exactly one
//! input state.
//!
//! ## Update Semantics
//!
//! ### Document / route / org
//! - Wholesale replacement, last write wins
//! - Always valid
//!
//! ### Edit session
//! - `EnterPreview` starts a fresh session; `ExitPreview` drops it
//! - Every other session update fails unless a session is active
//!
//! ### Drag
//! - `StartDrag` records the source and clears any previous target
//! - `MoveDrag` fails unless a drag was started
//! - `EndDrag` always clears, even when nothing was dragging

use crate::errors::UpdateError;
use screenkit_model::{
    ActiveRoute, AppState, Application, BuilderSession, DragSource, DragState, Layout,
    NavigationSettings, OrgState, ResolverInputs, Screen, Snippet,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreUpdate {
    /// Replace the whole document state
    #[serde(rename_all = "camelCase")]
    SetApp { app: AppState },

    SetScreens { screens: Vec<Screen> },

    SetLayouts { layouts: Vec<Layout> },

    SetApplication { application: Option<Application> },

    /// Set or clear the matched route
    #[serde(rename_all = "camelCase")]
    SetRoute { active_route: Option<ActiveRoute> },

    SetOrg { org: OrgState },

    EnterPreview { screen: Screen },

    ExitPreview,

    /// Replace the in-progress screen of the active session
    SetPreviewScreen { screen: Screen },

    #[serde(rename_all = "camelCase")]
    SelectComponent { component_id: Option<String> },

    SetComponentErrors { errors: BTreeMap<String, Vec<String>> },

    SetNavigation { navigation: Option<NavigationSettings> },

    SetSnippets { snippets: Option<Vec<Snippet>> },

    StartDrag { source: DragSource },

    MoveDrag { parent: String, index: usize },

    EndDrag,
}

impl StoreUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            StoreUpdate::SetApp { .. } => "setApp",
            StoreUpdate::SetScreens { .. } => "setScreens",
            StoreUpdate::SetLayouts { .. } => "setLayouts",
            StoreUpdate::SetApplication { .. } => "setApplication",
            StoreUpdate::SetRoute { .. } => "setRoute",
            StoreUpdate::SetOrg { .. } => "setOrg",
            StoreUpdate::EnterPreview { .. } => "enterPreview",
            StoreUpdate::ExitPreview => "exitPreview",
            StoreUpdate::SetPreviewScreen { .. } => "setPreviewScreen",
            StoreUpdate::SelectComponent { .. } => "selectComponent",
            StoreUpdate::SetComponentErrors { .. } => "setComponentErrors",
            StoreUpdate::SetNavigation { .. } => "setNavigation",
            StoreUpdate::SetSnippets { .. } => "setSnippets",
            StoreUpdate::StartDrag { .. } => "startDrag",
            StoreUpdate::MoveDrag { .. } => "moveDrag",
            StoreUpdate::EndDrag => "endDrag",
        }
    }

    /// Apply to `inputs`, validating first. On error `inputs` is untouched.
    pub fn apply(&self, inputs: &mut ResolverInputs) -> Result<(), UpdateError> {
        self.validate(inputs)?;

        match self {
            StoreUpdate::SetApp { app } => inputs.app = app.clone(),
            StoreUpdate::SetScreens { screens } => inputs.app.screens = screens.clone(),
            StoreUpdate::SetLayouts { layouts } => inputs.app.layouts = layouts.clone(),
            StoreUpdate::SetApplication { application } => {
                inputs.app.application = application.clone()
            }

            StoreUpdate::SetRoute { active_route } => {
                inputs.route.active_route = active_route.clone()
            }

            StoreUpdate::SetOrg { org } => inputs.org = org.clone(),

            StoreUpdate::EnterPreview { screen } => {
                inputs.builder = BuilderSession::previewing(screen.clone())
            }
            StoreUpdate::ExitPreview => inputs.builder = BuilderSession::default(),
            StoreUpdate::SetPreviewScreen { screen } => {
                inputs.builder.screen = Some(screen.clone())
            }
            StoreUpdate::SelectComponent { component_id } => {
                inputs.builder.selected_component_id = component_id.clone()
            }
            StoreUpdate::SetComponentErrors { errors } => {
                inputs.builder.component_errors = errors.clone()
            }
            StoreUpdate::SetNavigation { navigation } => {
                inputs.builder.navigation = navigation.clone()
            }
            StoreUpdate::SetSnippets { snippets } => inputs.builder.snippets = snippets.clone(),

            StoreUpdate::StartDrag { source } => {
                inputs.dnd = DragState {
                    source: Some(source.clone()),
                    ..Default::default()
                }
            }
            StoreUpdate::MoveDrag { parent, index } => {
                inputs.dnd.parent = Some(parent.clone());
                inputs.dnd.index = Some(*index);
            }
            StoreUpdate::EndDrag => inputs.dnd = DragState::default(),
        }

        Ok(())
    }

    fn validate(&self, inputs: &ResolverInputs) -> Result<(), UpdateError> {
        match self {
            StoreUpdate::SetPreviewScreen { .. }
            | StoreUpdate::SelectComponent { .. }
            | StoreUpdate::SetComponentErrors { .. }
            | StoreUpdate::SetNavigation { .. }
            | StoreUpdate::SetSnippets { .. } => {
                if !inputs.builder.is_active() {
                    return Err(UpdateError::NoActiveSession(self.name()));
                }
            }

            StoreUpdate::MoveDrag { parent, .. } => {
                if inputs.dnd.source.is_none() {
                    return Err(UpdateError::NoDragInProgress);
                }
                if parent.is_empty() {
                    return Err(UpdateError::EmptyDragTarget);
                }
            }

            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn previewing() -> ResolverInputs {
        ResolverInputs {
            builder: BuilderSession::previewing(Screen::new("draft", "/draft")),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_updates_require_session() {
        let mut inputs = ResolverInputs::default();
        let update = StoreUpdate::SelectComponent {
            component_id: Some("c1".to_string()),
        };

        assert_eq!(
            update.apply(&mut inputs),
            Err(UpdateError::NoActiveSession("selectComponent"))
        );
        assert!(inputs.builder.selected_component_id.is_none());

        let mut inputs = previewing();
        update.apply(&mut inputs).unwrap();
        assert_eq!(inputs.builder.selected_component_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_enter_preview_starts_fresh_session() {
        let mut inputs = previewing();
        inputs.builder.selected_component_id = Some("stale".to_string());

        StoreUpdate::EnterPreview {
            screen: Screen::new("other", "/other"),
        }
        .apply(&mut inputs)
        .unwrap();

        assert!(inputs.builder.in_builder);
        assert_eq!(inputs.builder.screen.as_ref().unwrap().id, "other");
        assert!(inputs.builder.selected_component_id.is_none());

        StoreUpdate::ExitPreview.apply(&mut inputs).unwrap();
        assert_eq!(inputs.builder, BuilderSession::default());
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut inputs = ResolverInputs::default();
        let move_drag = StoreUpdate::MoveDrag {
            parent: "root".to_string(),
            index: 2,
        };

        assert_eq!(move_drag.apply(&mut inputs), Err(UpdateError::NoDragInProgress));

        StoreUpdate::StartDrag {
            source: DragSource {
                is_new: true,
                ..Default::default()
            },
        }
        .apply(&mut inputs)
        .unwrap();
        assert!(!inputs.dnd.is_active());

        move_drag.apply(&mut inputs).unwrap();
        assert!(inputs.dnd.is_active());
        assert_eq!(inputs.dnd.index, Some(2));

        let empty_target = StoreUpdate::MoveDrag {
            parent: String::new(),
            index: 0,
        };
        assert_eq!(empty_target.apply(&mut inputs), Err(UpdateError::EmptyDragTarget));

        StoreUpdate::EndDrag.apply(&mut inputs).unwrap();
        assert_eq!(inputs.dnd, DragState::default());
    }

    #[test]
    fn test_wire_format() {
        let update: StoreUpdate = serde_json::from_value(json!({
            "type": "selectComponent",
            "componentId": "c42"
        }))
        .unwrap();
        assert_eq!(
            update,
            StoreUpdate::SelectComponent {
                component_id: Some("c42".to_string())
            }
        );

        let value = serde_json::to_value(StoreUpdate::MoveDrag {
            parent: "root".to_string(),
            index: 1,
        })
        .unwrap();
        assert_eq!(value, json!({"type": "moveDrag", "parent": "root", "index": 1}));

        let value = serde_json::to_value(StoreUpdate::EndDrag).unwrap();
        assert_eq!(value, json!({"type": "endDrag"}));
    }
}
