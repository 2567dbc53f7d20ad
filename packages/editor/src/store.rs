//! # Screen Store
//!
//! Owns the resolver inputs and republishes the resolved screens whenever
//! they change.
//!
//! ## Design
//!
//! - Updates land on a staged copy of the inputs
//! - A batch commits all-or-nothing, then recomputes exactly once, so no
//!   subscriber ever observes half of a batch
//! - Each commit bumps the version, even when the output didn't change
//! - Subscribers are only woken when the value they watch changed
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut store = ScreenStore::default();
//! let mut screens = store.subscribe();
//!
//! store.apply_batch([
//!     StoreUpdate::StartDrag { source },
//!     StoreUpdate::MoveDrag { parent: "root".into(), index: 1 },
//! ])?;
//!
//! screens.changed().await?;
//! let resolved = screens.borrow().clone();
//! ```

use crate::errors::EditorError;
use crate::updates::StoreUpdate;
use screenkit_model::{ResolverInputs, Snippet};
use screenkit_resolver::{ResolvedScreens, ResolverConfig, RolePriority, RoleTable, ScreenResolver};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

pub struct ScreenStore<R = RoleTable> {
    inputs: ResolverInputs,
    resolver: ScreenResolver<R>,
    version: u64,
    screens: watch::Sender<Arc<ResolvedScreens>>,
    grid: watch::Sender<bool>,
    snippets: watch::Sender<Vec<Snippet>>,
}

impl ScreenStore<RoleTable> {
    pub fn new(config: ResolverConfig, inputs: ResolverInputs) -> Self {
        Self::with_resolver(ScreenResolver::new(config), inputs)
    }

    /// Store seeded from a snapshot file
    pub fn load(config: ResolverConfig, path: &Path) -> Result<Self, EditorError> {
        let inputs = ResolverInputs::from_path(path)?;
        Ok(Self::new(config, inputs))
    }
}

impl Default for ScreenStore<RoleTable> {
    fn default() -> Self {
        Self::new(ResolverConfig::default(), ResolverInputs::default())
    }
}

impl<R: RolePriority> ScreenStore<R> {
    pub fn with_resolver(resolver: ScreenResolver<R>, inputs: ResolverInputs) -> Self {
        let resolved = resolver.resolve(&inputs);
        let grid = resolved.is_grid_screen();
        let snippets = resolver.snippets(&inputs);

        // Senders keep their value with no receivers attached
        let (screens, _) = watch::channel(Arc::new(resolved));
        let (grid, _) = watch::channel(grid);
        let (snippets, _) = watch::channel(snippets);

        Self {
            inputs,
            resolver,
            version: 0,
            screens,
            grid,
            snippets,
        }
    }

    pub fn inputs(&self) -> &ResolverInputs {
        &self.inputs
    }

    pub fn resolver(&self) -> &ScreenResolver<R> {
        &self.resolver
    }

    /// Number of commits so far
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Latest resolved screens
    pub fn current(&self) -> Arc<ResolvedScreens> {
        self.screens.borrow().clone()
    }

    pub fn is_grid_screen(&self) -> bool {
        *self.grid.borrow()
    }

    pub fn snippets(&self) -> Vec<Snippet> {
        self.snippets.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<ResolvedScreens>> {
        self.screens.subscribe()
    }

    pub fn subscribe_grid(&self) -> watch::Receiver<bool> {
        self.grid.subscribe()
    }

    pub fn subscribe_snippets(&self) -> watch::Receiver<Vec<Snippet>> {
        self.snippets.subscribe()
    }

    /// Resolved screens as a stream, starting with the current value
    pub fn stream(&self) -> WatchStream<Arc<ResolvedScreens>> {
        WatchStream::new(self.subscribe())
    }

    /// Apply one update and recompute
    pub fn apply(&mut self, update: StoreUpdate) -> Result<u64, EditorError> {
        self.apply_batch([update])
    }

    /// Apply every update, then recompute once. The first failing update
    /// aborts the batch and leaves the inputs as they were.
    pub fn apply_batch(
        &mut self,
        updates: impl IntoIterator<Item = StoreUpdate>,
    ) -> Result<u64, EditorError> {
        let mut staged = self.inputs.clone();
        let mut applied = 0usize;

        for update in updates {
            if let Err(e) = update.apply(&mut staged) {
                warn!(update = update.name(), applied, error = %e, "Aborting update batch");
                return Err(e.into());
            }
            applied += 1;
        }

        if applied == 0 {
            return Ok(self.version);
        }

        self.commit(staged);
        debug!(version = self.version, updates = applied, "Committed update batch");
        Ok(self.version)
    }

    /// Replace every input at once
    pub fn replace_inputs(&mut self, inputs: ResolverInputs) -> u64 {
        self.commit(inputs);
        self.version
    }

    fn commit(&mut self, inputs: ResolverInputs) {
        self.inputs = inputs;
        self.version += 1;
        self.recompute();
    }

    fn recompute(&self) {
        let resolved = self.resolver.resolve(&self.inputs);
        let grid = resolved.is_grid_screen();
        let snippets = self.resolver.snippets(&self.inputs);

        let screens_changed = self.screens.send_if_modified(|current| {
            if **current == resolved {
                return false;
            }
            *current = Arc::new(resolved);
            true
        });
        self.grid.send_if_modified(|current| replace_if_changed(current, grid));
        self.snippets
            .send_if_modified(|current| replace_if_changed(current, snippets));

        debug!(version = self.version, screens_changed, "Recomputed screens");
    }
}

fn replace_if_changed<T: PartialEq>(current: &mut T, next: T) -> bool {
    if *current == next {
        return false;
    }
    *current = next;
    true
}
