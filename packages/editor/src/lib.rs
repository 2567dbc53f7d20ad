//! # Screenkit Editor
//!
//! Store substrate around the screen resolver.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ StoreUpdate: typed change to one input      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ ScreenStore                                 │
//! │  - Stage updates on a copy of the inputs    │
//! │  - Commit a batch all-or-nothing            │
//! │  - Re-resolve once per commit               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ watch channels: screens, isGridScreen,      │
//! │ snippets                                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! [`BuilderStore`] holds the editor chrome state that the resolver never
//! reads.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use screenkit_editor::{ScreenStore, StoreUpdate};
//!
//! let mut store = ScreenStore::default();
//! let mut grid = store.subscribe_grid();
//!
//! store.apply(StoreUpdate::SetApp { app })?;
//! store.apply(StoreUpdate::SetRoute { active_route: Some(route) })?;
//!
//! if grid.has_changed()? {
//!     println!("grid: {}", *grid.borrow_and_update());
//! }
//! ```
//!
//! One store per running application. Share it behind a lock if more than
//! one task writes to it.

mod builder;
mod errors;
mod store;
mod updates;

pub use builder::{BuilderEvent, BuilderState, BuilderStore, HighlightedSetting};
pub use errors::{EditorError, UpdateError};
pub use store::ScreenStore;
pub use updates::StoreUpdate;

// Re-export common types for convenience
pub use screenkit_resolver::{ResolvedScreens, ResolverConfig};
