//! # Screenkit Model
//!
//! Data model shared by the screenkit crates: screens, component trees,
//! layouts, navigation settings and the input states the screen resolver
//! reads.
//!
//! Trees are owned values. Cloning a [`Screen`] or [`Component`] is a deep
//! copy with no shared mutable substructure, which is what lets the
//! resolver splice nodes into its output without touching the document.

pub mod component;
pub mod error;
pub mod layout;
pub mod screen;
pub mod state;
pub mod visitor;

pub use component::{
    find_component_by_id, find_component_by_id_mut, find_component_parent,
    find_component_parent_mut, Component, ComponentMeta, ComponentStyles,
};
pub use error::{ModelError, ModelResult};
pub use layout::{Layout, NavigationKind, NavigationSettings};
pub use screen::{Screen, ScreenRouting, ScreenVariant};
pub use state::{
    ActiveRoute, AppState, Application, BuilderSession, DragBounds, DragSource, DragState,
    OrgState, ResolverInputs, RouteState, Snippet,
};
pub use visitor::{Visitor, VisitorMut};
