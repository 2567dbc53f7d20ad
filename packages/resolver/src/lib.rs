//! # Screenkit Resolver
//!
//! Computes, from a consistent snapshot of the document, route, edit
//! session, org and drag states:
//!
//! - which screen is active,
//! - its component tree, with a drag placeholder spliced in while a
//!   reorder is underway,
//! - the layout that frames it,
//! - a stable ranking of every screen.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use screenkit_resolver::{ResolverConfig, ScreenResolver};
//! use screenkit_model::ResolverInputs;
//!
//! let resolver = ScreenResolver::new(ResolverConfig::default());
//! let inputs = ResolverInputs::from_path("snapshot.json".as_ref())?;
//!
//! let resolved = resolver.resolve(&inputs);
//! println!("{:?}", resolved.active_screen.map(|s| s.id));
//! ```
//!
//! The resolver only ever reads its inputs. Every tree it edits is a deep
//! copy owned by the output.

pub mod activation;
pub mod classify;
pub mod config;
pub mod dnd;
pub mod layout;
pub mod ranking;
pub mod resolver;
pub mod roles;
pub mod snippets;

pub use activation::{activate, check_component_ids, Activation, ActivationSource};
pub use classify::is_grid_screen;
pub use config::ResolverConfig;
pub use dnd::{placeholder, splice, SpliceOutcome, DND_PLACEHOLDER_ID};
pub use layout::{first_defined, layout_settings, synthesize_layout, LAYOUT_ID, SCREENSLOT_ID};
pub use ranking::{compare_ranked, rank_screens, screen_rank};
pub use resolver::{ResolvedScreens, ScreenResolver};
pub use roles::{RolePriority, RoleTable};
pub use snippets::active_snippets;
