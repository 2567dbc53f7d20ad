//! # Drag-and-Reorder Splice
//!
//! Mutates the resolver's private copy of the active screen so it previews a
//! pending move:
//!
//! 1. Find the selected component's parent (edit sessions only).
//! 2. Moving an existing node: pick it up first, so reordering inside the
//!    same parent never duplicates it.
//! 3. Build a transparent placeholder sized like the drag source.
//! 4. Insert the placeholder under the target parent, or skip silently when
//!    the target is gone.
//!
//! A node removed in step 2 whose target then can't be found is missing from
//! that one derivation. The copy is thrown away on the next pass.

use crate::config::ResolverConfig;
use screenkit_model::{
    BuilderSession, Component, ComponentStyles, DragBounds, DragState, Screen,
};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

/// Reserved identity of the drag placeholder
pub const DND_PLACEHOLDER_ID: &str = "dnd-placeholder";

/// What the splice did to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// No drag in progress
    Inactive,

    Inserted { removed_selected: bool },

    /// Target parent not in the tree; no placeholder inserted
    TargetMissing { removed_selected: bool },
}

pub fn splice(
    screen: &mut Screen,
    session: &BuilderSession,
    dnd: &DragState,
    config: &ResolverConfig,
) -> SpliceOutcome {
    let (Some(target_id), Some(index)) = (dnd.target_parent(), dnd.index) else {
        return SpliceOutcome::Inactive;
    };

    // Selection only means something inside an edit session
    let selected_id = session
        .is_active()
        .then(|| session.selected_component_id.as_deref())
        .flatten();

    let is_new = match &dnd.source {
        Some(source) => source.is_new,
        None => {
            warn!(parent = target_id, "Drag in progress without a source - treating as new");
            true
        }
    };

    let mut removed_selected = false;
    if !is_new {
        if let Some(selected_id) = selected_id {
            if let Some(parent) = screen.props.find_parent_mut(selected_id) {
                removed_selected = parent.remove_child(selected_id);
            }
        }
    }

    let bounds = dnd.source.as_ref().and_then(|source| source.bounds);
    let placeholder = placeholder(bounds, config);

    match screen.props.find_by_id_mut(target_id) {
        Some(parent) => {
            parent.insert_child(index, placeholder);
            debug!(parent = target_id, index, removed_selected, "Inserted drag placeholder");
            SpliceOutcome::Inserted { removed_selected }
        }
        None => {
            debug!(parent = target_id, "Drag target not in tree - skipping placeholder");
            SpliceOutcome::TargetMissing { removed_selected }
        }
    }
}

/// Transparent, never-persisted node sized like the drag source
pub fn placeholder(bounds: Option<DragBounds>, config: &ResolverConfig) -> Component {
    let width = dimension(bounds.and_then(|b| b.width)).unwrap_or(config.placeholder_width);
    let height = dimension(bounds.and_then(|b| b.height)).unwrap_or(config.placeholder_height);

    let mut normal = Map::new();
    normal.insert("width".to_string(), json!(format!("{}px", width)));
    normal.insert("height".to_string(), json!(format!("{}px", height)));
    normal.insert("opacity".to_string(), json!(0));
    normal.insert("--default-width".to_string(), css_number(width));
    normal.insert("--default-height".to_string(), css_number(height));

    Component {
        id: Some(DND_PLACEHOLDER_ID.to_string()),
        component: config.placeholder_component.clone(),
        instance_name: Some(String::new()),
        styles: Some(ComponentStyles {
            normal,
            ..Default::default()
        }),
        is_static: true,
        ..Default::default()
    }
}

// Whole numbers are written as integers (400, not 400.0)
fn css_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

// Zero and NaN count as unset
fn dimension(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenkit_model::DragSource;

    fn tree() -> Screen {
        Screen::new("s1", "/a").with_props(
            Component::new("container")
                .with_id("root")
                .with_child(Component::new("heading").with_id("a"))
                .with_child(Component::new("button").with_id("b"))
                .with_child(Component::new("container").with_id("empty")),
        )
    }

    fn ids(component: &Component) -> Vec<&str> {
        component
            .children()
            .iter()
            .filter_map(|c| c.id.as_deref())
            .collect()
    }

    fn session_selecting(id: &str) -> BuilderSession {
        BuilderSession {
            in_builder: true,
            selected_component_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn drag(parent: &str, index: usize, is_new: bool) -> DragState {
        DragState {
            parent: Some(parent.to_string()),
            index: Some(index),
            source: Some(DragSource {
                is_new,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_inactive_drag_is_noop() {
        let mut screen = tree();
        let outcome = splice(
            &mut screen,
            &BuilderSession::default(),
            &DragState::default(),
            &ResolverConfig::default(),
        );
        assert_eq!(outcome, SpliceOutcome::Inactive);
        assert_eq!(screen, tree());
    }

    #[test]
    fn test_new_component_inserts_without_removal() {
        let mut screen = tree();
        let outcome = splice(
            &mut screen,
            &session_selecting("a"),
            &drag("root", 1, true),
            &ResolverConfig::default(),
        );

        assert_eq!(outcome, SpliceOutcome::Inserted { removed_selected: false });
        assert_eq!(ids(&screen.props), vec!["a", DND_PLACEHOLDER_ID, "b", "empty"]);
    }

    #[test]
    fn test_existing_component_is_picked_up_first() {
        let mut screen = tree();
        let outcome = splice(
            &mut screen,
            &session_selecting("a"),
            &drag("root", 1, false),
            &ResolverConfig::default(),
        );

        assert_eq!(outcome, SpliceOutcome::Inserted { removed_selected: true });
        assert_eq!(ids(&screen.props), vec!["b", DND_PLACEHOLDER_ID, "empty"]);
    }

    #[test]
    fn test_insert_into_empty_parent() {
        let mut screen = tree();
        splice(
            &mut screen,
            &BuilderSession::default(),
            &drag("empty", 5, true),
            &ResolverConfig::default(),
        );

        let empty = screen.props.find_by_id("empty").unwrap();
        assert_eq!(ids(empty), vec![DND_PLACEHOLDER_ID]);
    }

    #[test]
    fn test_missing_target_skips_insert_but_keeps_removal() {
        let mut screen = tree();
        let outcome = splice(
            &mut screen,
            &session_selecting("b"),
            &drag("ghost", 0, false),
            &ResolverConfig::default(),
        );

        assert_eq!(outcome, SpliceOutcome::TargetMissing { removed_selected: true });
        assert!(screen.props.find_by_id(DND_PLACEHOLDER_ID).is_none());
        assert!(screen.props.find_by_id("b").is_none());
    }

    #[test]
    fn test_selection_ignored_outside_session() {
        let mut screen = tree();
        let mut session = session_selecting("a");
        session.in_builder = false;

        splice(&mut screen, &session, &drag("root", 0, false), &ResolverConfig::default());

        assert!(screen.props.find_by_id("a").is_some());
        assert_eq!(screen.props.children().len(), 4);
    }

    #[test]
    fn test_placeholder_defaults() {
        let node = placeholder(None, &ResolverConfig::default());
        let styles = node.styles.as_ref().unwrap();

        assert_eq!(node.id.as_deref(), Some(DND_PLACEHOLDER_ID));
        assert!(node.is_static);
        assert_eq!(styles.normal.get("width"), Some(&json!("400px")));
        assert_eq!(styles.normal.get("height"), Some(&json!("200px")));
        assert_eq!(styles.normal.get("opacity"), Some(&json!(0)));

        let encoded = serde_json::to_string(&node).unwrap();
        assert!(encoded.contains(r#""--default-width":400"#));
        assert!(!encoded.contains("400.0"));
        assert_eq!(styles.normal.get("--default-height"), Some(&json!(200)));
    }

    #[test]
    fn test_placeholder_uses_source_bounds() {
        let bounds = DragBounds {
            width: Some(120.5),
            height: Some(0.0),
        };
        let node = placeholder(Some(bounds), &ResolverConfig::default());
        let styles = node.styles.as_ref().unwrap();

        assert_eq!(styles.normal.get("width"), Some(&json!("120.5px")));
        // Zero height falls back to the default
        assert_eq!(styles.normal.get("height"), Some(&json!("200px")));
        assert_eq!(styles.normal.get("--default-width"), Some(&json!(120.5)));
    }
}
