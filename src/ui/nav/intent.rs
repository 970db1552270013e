use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// The page scrolled; carries the new offset in rows.
    ScrollChanged { offset: u16 },
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// A navigation link was activated. The reducer only closes the menu;
    /// the smooth scroll itself is the caller's side effect.
    Activate,
}

impl Intent for NavIntent {}
