//! Virtual page geometry.
//!
//! The site is one fixed column of sections scrolled behind the terminal
//! viewport. This module owns the scroll offset, the per-section extents,
//! the visible-fraction signal the reveal triggers consume, and the eased
//! smooth-scroll animation used by anchor navigation.

use crate::site::SectionId;

/// Minimum hero height when the terminal is very short.
const MIN_HERO_HEIGHT: u16 = 16;

/// Rows scrolled per eased animation step is `remaining / EASE_DIVISOR`,
/// floored at one row so the animation always terminates.
const EASE_DIVISOR: u16 = 4;

fn base_height(section: SectionId) -> u16 {
    match section {
        // Stretches to the viewport; see `Page::resize`.
        SectionId::Home => 0,
        SectionId::About => 38,
        SectionId::Services => 42,
        SectionId::Work => 34,
        SectionId::Testimonials => 19,
        SectionId::Cta => 11,
        SectionId::Contact => 25,
        SectionId::Footer => 13,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    scroll: u16,
    target: Option<u16>,
    viewport: u16,
    heights: [u16; SectionId::ALL.len()],
}

impl Page {
    pub fn new(viewport: u16) -> Self {
        let mut page = Self {
            scroll: 0,
            target: None,
            viewport: viewport.max(1),
            heights: [0; SectionId::ALL.len()],
        };
        page.recompute_heights();
        page
    }

    pub fn resize(&mut self, viewport: u16) {
        self.viewport = viewport.max(1);
        self.recompute_heights();
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn recompute_heights(&mut self) {
        for (slot, section) in self.heights.iter_mut().zip(SectionId::ALL) {
            *slot = match section {
                SectionId::Home => self.viewport.max(MIN_HERO_HEIGHT),
                other => base_height(other),
            };
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport)
    }

    pub fn height_of(&self, section: SectionId) -> u16 {
        let index = SectionId::ALL
            .into_iter()
            .position(|s| s == section)
            .unwrap_or(0);
        self.heights[index]
    }

    /// First row of the section within the virtual page.
    pub fn top_of(&self, section: SectionId) -> u16 {
        let mut top = 0u16;
        for (candidate, height) in SectionId::ALL.into_iter().zip(self.heights) {
            if candidate == section {
                break;
            }
            top = top.saturating_add(height);
        }
        top
    }

    /// Fraction of the section currently inside the viewport, in `0..=1`.
    pub fn visible_fraction(&self, section: SectionId) -> f32 {
        let top = self.top_of(section);
        let height = self.height_of(section);
        if height == 0 {
            return 0.0;
        }
        let bottom = top.saturating_add(height);
        let view_top = self.scroll;
        let view_bottom = self.scroll.saturating_add(self.viewport);

        let overlap_top = top.max(view_top);
        let overlap_bottom = bottom.min(view_bottom);
        if overlap_bottom <= overlap_top {
            return 0.0;
        }
        f32::from(overlap_bottom - overlap_top) / f32::from(height)
    }

    /// Section whose top row is closest above the current scroll position.
    pub fn current_section(&self) -> SectionId {
        let mut current = SectionId::Home;
        for section in SectionId::ALL {
            if self.top_of(section) <= self.scroll {
                current = section;
            }
        }
        current
    }

    /// Manual scrolling cancels any in-flight smooth scroll.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.target = None;
        let current = i32::from(self.scroll);
        let next = (current + delta).clamp(0, i32::from(self.max_scroll())) as u16;
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_by(-i32::from(self.scroll))
    }

    /// Begin an eased scroll toward the section's first row.
    pub fn request_scroll_to(&mut self, section: SectionId) {
        let target = self.top_of(section).min(self.max_scroll());
        if target == self.scroll {
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Advance the smooth-scroll animation one tick.
    ///
    /// Returns `true` if the offset moved.
    pub fn animate(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = i32::from(target) - i32::from(self.scroll);
        if remaining == 0 {
            self.target = None;
            return false;
        }
        let step = (remaining.abs() / i32::from(EASE_DIVISOR)).max(1) * remaining.signum();
        self.scroll = (i32::from(self.scroll) + step).clamp(0, i32::from(self.max_scroll())) as u16;
        if self.scroll == target {
            self.target = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}
