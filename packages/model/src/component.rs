//! # Component Trees
//!
//! A screen's `props` field is the root of a component tree. Every node
//! carries a unique `_id`, a component type reference and an ordered child
//! list. Any key the model does not know about is kept verbatim in
//! [`Component::settings`] so documents survive a decode/encode cycle.

use crate::error::ModelError;
use crate::visitor::Visitor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Component tree node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Component type reference (e.g. `@standard-components/container`)
    #[serde(rename = "_component", default)]
    pub component: String,

    #[serde(rename = "_instanceName", default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,

    #[serde(rename = "_children", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,

    #[serde(rename = "_styles", default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,

    /// Editor-only annotations; never present on persisted documents
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ComponentMeta>,

    /// Synthetic node that must never be persisted
    #[serde(rename = "static", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,

    /// Component settings (everything that isn't a reserved `_` key)
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// Style map attached to a component, keyed by interaction state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentStyles {
    #[serde(default)]
    pub normal: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub hover: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub active: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata attached to nodes while an editing session is active
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentMeta {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Component {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn with_normal_style(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.styles
            .get_or_insert_with(ComponentStyles::default)
            .normal
            .insert(property.into(), value.into());
        self
    }

    /// Children as a slice (empty when the sequence is absent)
    pub fn children(&self) -> &[Component] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Find a node anywhere in this subtree (depth-first, pre-order)
    pub fn find_by_id(&self, id: &str) -> Option<&Component> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Component> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Find the node whose children sequence contains `id`
    pub fn find_parent(&self, id: &str) -> Option<&Component> {
        if self.children().iter().any(|child| child.has_id(id)) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_parent(id))
    }

    pub fn find_parent_mut(&mut self, id: &str) -> Option<&mut Component> {
        if self.children().iter().any(|child| child.has_id(id)) {
            return Some(self);
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_parent_mut(id))
    }

    /// Insert a child, creating the sequence if it doesn't exist yet.
    ///
    /// An index past the end appends.
    pub fn insert_child(&mut self, index: usize, child: Component) {
        let children = self.children.get_or_insert_with(Vec::new);
        let index = index.min(children.len());
        children.insert(index, child);
    }

    /// Remove every direct child with the given id
    pub fn remove_child(&mut self, id: &str) -> bool {
        match self.children.as_mut() {
            Some(children) => {
                let before = children.len();
                children.retain(|child| !child.has_id(id));
                children.len() != before
            }
            None => false,
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Component::node_count).sum::<usize>()
    }

    /// Check the identity-uniqueness invariant for this subtree
    pub fn validate_ids(&self) -> Result<(), ModelError> {
        let mut collector = IdCollector::default();
        collector.visit_component(self);
        match collector.duplicate {
            Some(id) => Err(ModelError::DuplicateComponentId(id)),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct IdCollector {
    seen: HashSet<String>,
    duplicate: Option<String>,
}

impl Visitor for IdCollector {
    fn visit_component(&mut self, component: &Component) {
        if self.duplicate.is_some() {
            return;
        }
        if let Some(id) = &component.id {
            if !self.seen.insert(id.clone()) {
                self.duplicate = Some(id.clone());
                return;
            }
        }
        crate::visitor::walk_component(self, component);
    }
}

/// Find a component by id anywhere in `tree`
pub fn find_component_by_id<'a>(tree: &'a Component, id: &str) -> Option<&'a Component> {
    tree.find_by_id(id)
}

pub fn find_component_by_id_mut<'a>(tree: &'a mut Component, id: &str) -> Option<&'a mut Component> {
    tree.find_by_id_mut(id)
}

/// Find the parent of the component with `id` in `tree`
pub fn find_component_parent<'a>(tree: &'a Component, id: &str) -> Option<&'a Component> {
    tree.find_parent(id)
}

pub fn find_component_parent_mut<'a>(
    tree: &'a mut Component,
    id: &str,
) -> Option<&'a mut Component> {
    tree.find_parent_mut(id)
}
