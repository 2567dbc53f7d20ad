use screenkit_model::Screen;

/// Whether the active screen renders on the free-form grid: the root props
/// declare `layout: "grid"`, or the screen is a PDF.
pub fn is_grid_screen(active_screen: Option<&Screen>) -> bool {
    active_screen.map_or(false, |screen| screen.declares_grid_layout() || screen.is_pdf())
}
