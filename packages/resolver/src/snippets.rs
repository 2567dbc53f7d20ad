use screenkit_model::{ResolverInputs, Snippet};

/// Snippets available to bindings: the session's list when it supplies one
/// (even an empty one), else the application's.
pub fn active_snippets(inputs: &ResolverInputs) -> Vec<Snippet> {
    match &inputs.builder.snippets {
        Some(snippets) => snippets.clone(),
        None => inputs
            .app
            .application
            .as_ref()
            .map(|app| app.snippets.clone())
            .unwrap_or_default(),
    }
}
