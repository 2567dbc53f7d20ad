//! # Activation Phase
//!
//! Picks the active screen (or none) and, when legacy linkage exists, the
//! custom layout that frames it.
//!
//! - Inside an edit session the session's in-progress screen is authoritative.
//!   Its tree is annotated with the session's validation errors.
//! - Otherwise the route's `screenId` selects from the document's screens.
//!
//! Every screen handed out here is a deep copy; the inputs are never touched.

use screenkit_model::{
    visitor::walk_component_mut, BuilderSession, Component, ComponentMeta, Layout,
    ResolverInputs, Screen, VisitorMut,
};
use tracing::{debug, warn};

/// Where the active screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    EditSession,
    Route,
}

/// Result of the activation phase
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub source: ActivationSource,

    /// Full screen list (route mode only; session mode derives it later)
    pub screens: Vec<Screen>,

    pub active_screen: Option<Screen>,

    /// Legacy custom layout, when the active screen links one that exists
    pub layout: Option<Layout>,
}

pub fn activate(inputs: &ResolverInputs) -> Activation {
    if inputs.builder.is_active() {
        activate_from_session(&inputs.builder)
    } else {
        activate_from_route(inputs)
    }
}

fn activate_from_session(session: &BuilderSession) -> Activation {
    let active_screen = match &session.screen {
        Some(screen) => {
            check_component_ids(screen);
            let mut screen = screen.clone();
            attach_component_meta(&mut screen, session);
            Some(screen)
        }
        None => {
            warn!("Edit session is active without a screen - nothing to render");
            None
        }
    };

    debug!(
        screen_id = active_screen.as_ref().map(|s| s.id.as_str()),
        "Activated edit session screen"
    );

    Activation {
        source: ActivationSource::EditSession,
        screens: Vec::new(),
        active_screen,
        layout: None,
    }
}

fn activate_from_route(inputs: &ResolverInputs) -> Activation {
    let app = &inputs.app;

    let active_screen = inputs
        .route
        .screen_id()
        .and_then(|screen_id| app.screen(screen_id))
        .cloned();

    if let Some(screen) = &active_screen {
        check_component_ids(screen);
    }

    // Legacy - find the custom layout for the selected screen
    let layout = active_screen
        .as_ref()
        .and_then(|screen| screen.layout_id.as_deref())
        .and_then(|layout_id| app.layout(layout_id))
        .cloned();

    debug!(
        route_screen = inputs.route.screen_id(),
        matched = active_screen.is_some(),
        legacy_layout = layout.as_ref().map(|l| l.id.as_str()),
        "Activated route screen"
    );

    Activation {
        source: ActivationSource::Route,
        screens: app.screens.clone(),
        active_screen,
        layout,
    }
}

/// Advisory identity check. A duplicate id is logged and the tree is kept.
pub fn check_component_ids(screen: &Screen) -> bool {
    match screen.props.validate_ids() {
        Ok(()) => true,
        Err(err) => {
            warn!(screen_id = %screen.id, error = %err, "Active screen has a duplicate component id");
            false
        }
    }
}

/// Attach each node's validation errors as `_meta`, over the whole tree
pub fn attach_component_meta(screen: &mut Screen, session: &BuilderSession) {
    ErrorAnnotator { session }.visit_screen_mut(screen);
}

struct ErrorAnnotator<'a> {
    session: &'a BuilderSession,
}

impl VisitorMut for ErrorAnnotator<'_> {
    fn visit_component_mut(&mut self, component: &mut Component) {
        let errors = self.session.errors_for(component.id.as_deref()).to_vec();
        component.meta = Some(ComponentMeta { errors });
        walk_component_mut(self, component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenkit_model::{AppState, RouteState};

    fn screen(id: &str, route: &str) -> Screen {
        Screen::new(id, route).with_props(
            Component::new("container")
                .with_id(format!("{}-root", id))
                .with_child(Component::new("button").with_id(format!("{}-button", id))),
        )
    }

    fn app_with(screens: Vec<Screen>, layouts: Vec<Layout>) -> AppState {
        AppState {
            screens,
            layouts,
            ..Default::default()
        }
    }

    fn screen_with_duplicate_ids(id: &str) -> Screen {
        Screen::new(id, "/dup").with_props(
            Component::new("container")
                .with_id("root")
                .with_child(Component::new("button").with_id("dup"))
                .with_child(Component::new("text").with_id("dup")),
        )
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        assert!(!check_component_ids(&screen_with_duplicate_ids("s1")));
        assert!(check_component_ids(&screen("s1", "/a")));
    }

    #[test]
    fn test_duplicate_ids_do_not_refuse_the_tree() {
        let routed = ResolverInputs {
            app: app_with(vec![screen_with_duplicate_ids("s1")], vec![]),
            route: RouteState::to_screen("s1"),
            ..Default::default()
        };
        let active = activate(&routed).active_screen.unwrap();
        assert_eq!(active.props.children().len(), 2);

        let session = ResolverInputs {
            builder: BuilderSession::previewing(screen_with_duplicate_ids("draft")),
            ..Default::default()
        };
        let active = activate(&session).active_screen.unwrap();
        assert_eq!(active.id, "draft");
        assert_eq!(active.props.children().len(), 2);
    }

    #[test]
    fn test_route_selects_first_match() {
        let inputs = ResolverInputs {
            app: app_with(vec![screen("s1", "/a"), screen("s2", "/b")], vec![]),
            route: RouteState::to_screen("s2"),
            ..Default::default()
        };

        let activation = activate(&inputs);
        assert_eq!(activation.source, ActivationSource::Route);
        assert_eq!(activation.active_screen.unwrap().id, "s2");
        assert_eq!(activation.screens.len(), 2);
        assert!(activation.layout.is_none());
    }

    #[test]
    fn test_unmatched_route_has_no_active_screen() {
        let inputs = ResolverInputs {
            app: app_with(vec![screen("s1", "/a")], vec![]),
            route: RouteState::to_screen("nope"),
            ..Default::default()
        };

        let activation = activate(&inputs);
        assert!(activation.active_screen.is_none());
        assert_eq!(activation.screens.len(), 1);
    }

    #[test]
    fn test_legacy_layout_linkage() {
        let layout = Layout::new("layout_private", Component::new("layout"));
        let inputs = ResolverInputs {
            app: app_with(
                vec![screen("s1", "/a").with_layout_id("layout_private")],
                vec![layout.clone()],
            ),
            route: RouteState::to_screen("s1"),
            ..Default::default()
        };

        assert_eq!(activate(&inputs).layout, Some(layout));
    }

    #[test]
    fn test_unknown_legacy_layout_falls_through() {
        let inputs = ResolverInputs {
            app: app_with(vec![screen("s1", "/a").with_layout_id("gone")], vec![]),
            route: RouteState::to_screen("s1"),
            ..Default::default()
        };

        assert!(activate(&inputs).layout.is_none());
    }

    #[test]
    fn test_session_screen_wins_over_route() {
        let mut builder = BuilderSession::previewing(screen("draft", "/draft"));
        builder
            .component_errors
            .insert("draft-button".to_string(), vec!["No action set".to_string()]);

        let inputs = ResolverInputs {
            app: app_with(vec![screen("s1", "/a")], vec![]),
            route: RouteState::to_screen("s1"),
            builder,
            ..Default::default()
        };

        let activation = activate(&inputs);
        assert_eq!(activation.source, ActivationSource::EditSession);

        let active = activation.active_screen.unwrap();
        assert_eq!(active.id, "draft");

        let button = active.props.find_by_id("draft-button").unwrap();
        assert_eq!(button.meta.as_ref().unwrap().errors, vec!["No action set"]);

        // Nodes without an entry still get an empty error list
        assert_eq!(active.props.meta, Some(ComponentMeta::default()));
    }

    #[test]
    fn test_session_without_screen() {
        let inputs = ResolverInputs {
            builder: BuilderSession {
                in_builder: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let activation = activate(&inputs);
        assert!(activation.active_screen.is_none());
        assert!(activation.screens.is_empty());
    }

    #[test]
    fn test_annotation_leaves_session_input_untouched() {
        let inputs = ResolverInputs {
            builder: BuilderSession::previewing(screen("draft", "/draft")),
            ..Default::default()
        };

        let _ = activate(&inputs);
        let source = inputs.builder.screen.as_ref().unwrap();
        assert!(source.props.meta.is_none());
    }
}
