//! # Screen Resolver
//!
//! Pure function of one [`ResolverInputs`] snapshot:
//!
//! ```text
//! activate ─► splice drag placeholder ─► rank ─► layout (legacy or synthesized)
//! ```
//!
//! Nothing here fails. Unmatched routes, unknown layouts, vanished drag
//! targets and missing errors all degrade to "absent" so a live editing
//! pipeline always gets a well-formed result.

use crate::activation::{activate, Activation, ActivationSource};
use crate::classify::is_grid_screen;
use crate::config::ResolverConfig;
use crate::dnd::splice;
use crate::layout::synthesize_layout;
use crate::ranking::{rank_screens, screen_rank};
use crate::roles::{RolePriority, RoleTable};
use crate::snippets::active_snippets;
use screenkit_model::{Layout, ResolverInputs, Screen, Snippet};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Resolver output: `{screens, activeLayout, activeScreen}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScreens {
    /// Every screen, best first
    pub screens: Vec<Screen>,

    pub active_layout: Layout,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_screen: Option<Screen>,
}

impl ResolvedScreens {
    pub fn is_grid_screen(&self) -> bool {
        is_grid_screen(self.active_screen.as_ref())
    }

    /// Highest-ranked screen (the default/home pick)
    pub fn best_screen(&self) -> Option<&Screen> {
        self.screens.first()
    }
}

#[derive(Debug, Clone)]
pub struct ScreenResolver<R = RoleTable> {
    config: ResolverConfig,
    roles: R,
}

impl ScreenResolver<RoleTable> {
    /// Resolver using the builtin role table plus the configured overrides
    pub fn new(config: ResolverConfig) -> Self {
        let roles = RoleTable::with_overrides(&config.role_priorities);
        Self { config, roles }
    }
}

impl Default for ScreenResolver<RoleTable> {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl<R: RolePriority> ScreenResolver<R> {
    pub fn with_roles(config: ResolverConfig, roles: R) -> Self {
        Self { config, roles }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn roles(&self) -> &R {
        &self.roles
    }

    #[instrument(skip_all, fields(in_builder = inputs.builder.in_builder))]
    pub fn resolve(&self, inputs: &ResolverInputs) -> ResolvedScreens {
        let Activation {
            source,
            screens,
            mut active_screen,
            layout,
        } = activate(inputs);

        let bonus = self.config.home_screen_bonus;

        let splice_outcome = active_screen.as_mut().map(|screen| {
            let outcome = splice(screen, &inputs.builder, &inputs.dnd, &self.config);
            screen.rank = Some(screen_rank(screen, &self.roles, bonus));
            outcome
        });

        // Inside a session the list is just the (spliced) session screen
        let mut screens = match source {
            ActivationSource::EditSession => active_screen.iter().cloned().collect(),
            ActivationSource::Route => screens,
        };
        rank_screens(&mut screens, &self.roles, bonus);

        let active_layout = match layout {
            Some(layout) => layout,
            None => synthesize_layout(active_screen.as_ref(), inputs, &self.config),
        };

        debug!(
            screens = screens.len(),
            active_screen = active_screen.as_ref().map(|s| s.id.as_str()),
            active_layout = %active_layout.id,
            splice = ?splice_outcome,
            "Resolved screens"
        );

        ResolvedScreens {
            screens,
            active_layout,
            active_screen,
        }
    }

    pub fn snippets(&self, inputs: &ResolverInputs) -> Vec<Snippet> {
        active_snippets(inputs)
    }
}
