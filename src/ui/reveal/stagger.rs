use std::time::Duration;

/// Delay before the first staggered child starts its entrance.
pub const BASE_DELAY: Duration = Duration::ZERO;

/// Additional delay per stagger index.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Per-child animation pose derived from the section trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerPose {
    /// Time after the trigger at which this child leaves its initial pose.
    pub delay: Duration,
    /// Mirrors the trigger: children of an untriggered section stay hidden.
    pub visible: bool,
}

/// The one reusable stagger computation used by every section.
///
/// `delay = BASE_DELAY + index * STAGGER_STEP`; the pose flag simply
/// mirrors `triggered`.
pub fn stagger(triggered: bool, index: u32) -> StaggerPose {
    StaggerPose {
        delay: BASE_DELAY + STAGGER_STEP * index,
        visible: triggered,
    }
}

/// Snapshot handed to section renderers: whether the section has entered
/// and how long ago, so each child can decide if its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    triggered: bool,
    elapsed: Duration,
}

impl Reveal {
    pub fn new(triggered: bool, elapsed: Duration) -> Self {
        Self { triggered, elapsed }
    }

    /// Section never entered: every child stays in its initial pose.
    pub fn hidden() -> Self {
        Self::new(false, Duration::ZERO)
    }

    /// Section entered long ago: every child is at rest. Used for regions
    /// that do not animate.
    pub fn settled() -> Self {
        Self::new(true, Duration::MAX)
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Whether the child at `index` is currently shown.
    pub fn child(&self, index: u32) -> bool {
        let pose = stagger(self.triggered, index);
        pose.visible && self.elapsed >= pose.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_linearly_with_index() {
        assert_eq!(stagger(true, 0).delay, BASE_DELAY);
        assert_eq!(stagger(true, 3).delay, BASE_DELAY + STAGGER_STEP * 3);
        assert_eq!(stagger(false, 7).delay, BASE_DELAY + STAGGER_STEP * 7);
    }

    #[test]
    fn pose_flag_mirrors_trigger() {
        assert!(stagger(true, 2).visible);
        assert!(!stagger(false, 2).visible);
    }

    #[test]
    fn untriggered_children_never_show() {
        let reveal = Reveal::hidden();
        for index in 0..10 {
            assert!(!reveal.child(index));
        }
    }

    #[test]
    fn children_appear_in_stagger_order() {
        let reveal = Reveal::new(true, STAGGER_STEP * 2);
        assert!(reveal.child(0));
        assert!(reveal.child(1));
        assert!(reveal.child(2));
        assert!(!reveal.child(3));
    }

    #[test]
    fn settled_reveal_shows_everything() {
        let reveal = Reveal::settled();
        assert!(reveal.child(0));
        assert!(reveal.child(40));
    }
}
