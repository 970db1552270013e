use crate::ui::mvi::UiState;

/// Scroll offset beyond which the bar switches to its condensed style.
pub const SCROLL_THRESHOLD: u16 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    /// Derived purely from the scroll offset; recomputed on every scroll
    /// event.
    pub scrolled: bool,
    /// Menu overlay; toggled by explicit user action, force-closed by any
    /// navigation selection.
    pub menu_open: bool,
    /// Highlighted link inside the open menu.
    pub menu_selection: usize,
}

impl UiState for NavState {}
