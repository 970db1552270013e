use std::time::Duration;

use crate::site::{Testimonial, TESTIMONIALS};
use crate::ui::mvi::UiState;

/// Fixed autoplay period.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Rotation state over a fixed, immutable item list.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    items: &'static [Testimonial],
    active_index: usize,
    autoplay: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::with_items(&TESTIMONIALS)
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Requires a non-empty item list.
    pub fn with_items(items: &'static [Testimonial]) -> Self {
        assert!(!items.is_empty(), "carousel requires at least one item");
        Self {
            items,
            active_index: 0,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn active(&self) -> &Testimonial {
        &self.items[self.active_index]
    }

    /// Index of the card shown as the left-hand preview.
    pub fn previous_index(&self) -> usize {
        (self.active_index + self.len() - 1) % self.len()
    }

    /// Index of the card shown as the right-hand preview.
    pub fn next_index(&self) -> usize {
        (self.active_index + 1) % self.len()
    }

    pub fn previous(&self) -> &Testimonial {
        &self.items[self.previous_index()]
    }

    pub fn next(&self) -> &Testimonial {
        &self.items[self.next_index()]
    }

    pub(super) fn advanced(mut self) -> Self {
        self.active_index = self.next_index();
        self
    }

    pub(super) fn retreated(mut self) -> Self {
        self.active_index = self.previous_index();
        self
    }

    pub(super) fn jumped_to(mut self, index: usize) -> Self {
        self.active_index = index;
        self
    }

    /// Manual navigation permanently disables autoplay.
    pub(super) fn manual(mut self) -> Self {
        self.autoplay = false;
        self
    }
}
