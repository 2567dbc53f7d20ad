//! # Builder UI State
//!
//! Editor chrome that sits next to the edit session: which setting is
//! highlighted, which property has focus, side panel visibility and so on.
//! None of it feeds the screen resolver.
//!
//! Outbound events (resource selection) go through an in-process channel
//! opened by [`BuilderStore::init`]. Whatever forwards them to other
//! clients lives outside this crate.

use crate::errors::EditorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error};

const DEFAULT_HIGHLIGHT_TYPE: &str = "info";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    /// Last visited url per top-nav route
    #[serde(default)]
    pub previous_top_nav_path: BTreeMap<String, String>,

    #[serde(default)]
    pub highlighted_setting: Option<HighlightedSetting>,

    #[serde(default)]
    pub property_focus: Option<String>,

    #[serde(default)]
    pub builder_side_panel: bool,

    #[serde(default)]
    pub hovered_component_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedSetting {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BuilderEvent {
    #[serde(rename_all = "camelCase")]
    SelectResource { resource_id: String },
}

pub struct BuilderStore {
    state: watch::Sender<BuilderState>,
    events: Option<mpsc::UnboundedSender<BuilderEvent>>,
}

impl Default for BuilderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(BuilderState::default());
        Self {
            state,
            events: None,
        }
    }

    /// Open the outbound event channel for `app_id`.
    ///
    /// Returns the receiving end, or `None` when the id is empty or a
    /// channel is already open.
    pub fn init(&mut self, app_id: &str) -> Option<mpsc::UnboundedReceiver<BuilderEvent>> {
        if app_id.is_empty() {
            error!("No app id supplied for builder events");
            return None;
        }
        if self.events.is_some() {
            debug!(app_id, "Builder events already connected");
            return None;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        debug!(app_id, "Connected builder events");
        Some(rx)
    }

    pub fn is_connected(&self) -> bool {
        self.events.is_some()
    }

    pub fn state(&self) -> BuilderState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BuilderState> {
        self.state.subscribe()
    }

    /// Wake subscribers without changing anything
    pub fn refresh(&self) {
        self.state.send_modify(|_| {});
    }

    /// Back to the initial state; the event channel is closed
    pub fn reset(&mut self) {
        self.state.send_replace(BuilderState::default());
        self.events = None;
    }

    /// Highlight a setting. No key (or an empty one) clears the highlight.
    pub fn highlight_setting(&self, key: Option<&str>, kind: Option<&str>) {
        let highlighted = key.filter(|k| !k.is_empty()).map(|key| HighlightedSetting {
            key: key.to_string(),
            kind: kind
                .filter(|k| !k.is_empty())
                .unwrap_or(DEFAULT_HIGHLIGHT_TYPE)
                .to_string(),
        });
        self.state
            .send_modify(|state| state.highlighted_setting = highlighted);
    }

    pub fn property_focus(&self, key: Option<String>) {
        self.state.send_modify(|state| state.property_focus = key);
    }

    pub fn show_side_panel(&self) {
        self.state.send_modify(|state| state.builder_side_panel = true);
    }

    pub fn hide_side_panel(&self) {
        self.state.send_modify(|state| state.builder_side_panel = false);
    }

    pub fn set_previous_top_nav_path(&self, route: impl Into<String>, url: impl Into<String>) {
        let (route, url) = (route.into(), url.into());
        self.state.send_modify(|state| {
            state.previous_top_nav_path.insert(route, url);
        });
    }

    pub fn hover_component(&self, component_id: Option<String>) {
        self.state
            .send_modify(|state| state.hovered_component_id = component_id);
    }

    pub fn select_resource(&self, resource_id: impl Into<String>) -> Result<(), EditorError> {
        let events = self.events.as_ref().ok_or(EditorError::NotConnected)?;
        events
            .send(BuilderEvent::SelectResource {
                resource_id: resource_id.into(),
            })
            .map_err(|_| EditorError::ChannelClosed)
    }
}
