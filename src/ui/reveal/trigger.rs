/// One-shot latch over an ambient visibility signal.
///
/// Fires "entered" the first time the observed intersection ratio reaches
/// the threshold, then disconnects: later observations are no-ops no matter
/// how the ratio moves. Dropping an unfired trigger emits nothing.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    threshold: f32,
    fired: bool,
}

impl VisibilityTrigger {
    /// Trigger that fires once the visible fraction reaches `threshold`.
    ///
    /// The threshold is clamped to `(0, 1]`.
    pub fn at_ratio(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            fired: false,
        }
    }

    /// Trigger that fires on the first observation regardless of ratio.
    pub fn on_mount() -> Self {
        Self {
            threshold: 0.0,
            fired: false,
        }
    }

    /// Feed one visibility sample. Returns `true` exactly once, the first
    /// time the ratio reaches the threshold.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = VisibilityTrigger::at_ratio(0.2);
        assert!(!trigger.observe(0.1));
        assert!(trigger.observe(0.25));
        assert!(trigger.has_fired());
    }

    #[test]
    fn never_fires_twice_despite_toggling_signal() {
        let mut trigger = VisibilityTrigger::at_ratio(0.2);
        assert!(trigger.observe(1.0));
        // Signal drops below and crosses the threshold again.
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(1.0));
        assert!(!trigger.observe(0.5));
    }

    #[test]
    fn unfired_trigger_stays_silent_below_threshold() {
        let mut trigger = VisibilityTrigger::at_ratio(0.5);
        for ratio in [0.0, 0.1, 0.49] {
            assert!(!trigger.observe(ratio));
        }
        assert!(!trigger.has_fired());
    }

    #[test]
    fn on_mount_fires_with_zero_ratio() {
        let mut trigger = VisibilityTrigger::on_mount();
        assert!(trigger.observe(0.0));
        assert!(!trigger.observe(1.0));
    }

    #[test]
    fn exact_threshold_counts_as_entered() {
        let mut trigger = VisibilityTrigger::at_ratio(0.2);
        assert!(trigger.observe(0.2));
    }
}
