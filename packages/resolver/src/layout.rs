//! # Layout Synthesis
//!
//! When no legacy layout was resolved, one is built from cascading defaults.
//! Precedence, highest first:
//!
//! ```text
//! screen  ─► page width, whether navigation shows at all
//! session ─► navigation overrides (only while editing)
//! app     ─► persisted navigation settings
//! org     ─► logo, as a last resort
//! ```
//!
//! Live edits always beat persisted config; org branding never overrides.

use crate::config::ResolverConfig;
use screenkit_model::{Component, Layout, NavigationKind, NavigationSettings, ResolverInputs, Screen};
use tracing::debug;

pub const LAYOUT_ID: &str = "layout";
pub const SCREENSLOT_ID: &str = "screenslot";

/// First present candidate, in precedence order
pub fn first_defined<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

// Empty strings count as unset
fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

/// Merge screen, session, application and org settings into one set
pub fn layout_settings(
    active_screen: Option<&Screen>,
    inputs: &ResolverInputs,
    config: &ResolverConfig,
) -> NavigationSettings {
    let page_width = first_defined([
        non_empty(active_screen.and_then(|screen| screen.width.as_ref())),
        Some(config.default_page_width.clone()),
    ]);

    let mut settings = NavigationSettings {
        navigation: Some(NavigationKind::None),
        page_width,
        embedded: Some(inputs.app.embedded),
        ..Default::default()
    };

    let shows_navigation = active_screen.map_or(false, |screen| screen.show_navigation);
    if !shows_navigation {
        return settings;
    }

    let session_navigation = inputs
        .builder
        .is_active()
        .then(|| inputs.builder.navigation.as_ref())
        .flatten();
    let overrides = first_defined([session_navigation, inputs.app.app_navigation()]);

    let navigation = first_defined([
        overrides.and_then(|nav| nav.navigation),
        Some(config.default_navigation),
    ]);

    if let Some(overrides) = overrides {
        settings = settings.overlay(overrides);
    }
    settings.navigation = navigation;

    if !settings.hides_title() {
        settings.title = first_defined([
            non_empty(settings.title.as_ref()),
            inputs.app.app_name().map(str::to_string),
        ]);
    }

    settings.logo_url = first_defined([
        non_empty(settings.logo_url.as_ref()),
        non_empty(inputs.org.logo_url.as_ref()),
    ]);

    settings
}

/// Root "layout" component wrapping a single screenslot, with the merged
/// settings spread onto the root
pub fn synthesize_layout(
    active_screen: Option<&Screen>,
    inputs: &ResolverInputs,
    config: &ResolverConfig,
) -> Layout {
    let settings = layout_settings(active_screen, inputs, config);
    debug!(
        navigation = ?settings.navigation,
        page_width = settings.page_width.as_deref(),
        "Synthesized layout"
    );

    let screenslot = Component::new(config.screenslot_component.clone())
        .with_id(SCREENSLOT_ID)
        .with_normal_style("flex", "1 1 auto")
        .with_normal_style("display", "flex")
        .with_normal_style("flex-direction", "column")
        .with_normal_style("justify-content", "flex-start")
        .with_normal_style("align-items", "stretch");

    let mut root = Component::new(config.layout_component.clone()).with_child(screenslot);
    root.settings.extend(settings.into_props());

    Layout::new(LAYOUT_ID, root)
}
