use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Timer-driven advance. A tick that raced a manual action must not
    /// move the index, so the reducer ignores this once autoplay is off.
    AutoAdvance,
    /// "Next" control.
    Next,
    /// "Previous" control.
    Prev,
    /// Dot control, bound 1:1 to the item list.
    Select(usize),
}

impl Intent for CarouselIntent {}
