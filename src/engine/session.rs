//! Per-session flags and edge detection

use serde::{Deserialize, Serialize};

/// Flags that live for one session and are never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    has_acknowledged_completion: bool,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_acknowledged_completion(&self) -> bool {
        self.has_acknowledged_completion
    }

    /// Record the acknowledgment. Returns `true` only on the first call.
    pub fn acknowledge_completion(&mut self) -> bool {
        if self.has_acknowledged_completion {
            return false;
        }
        self.has_acknowledged_completion = true;
        true
    }
}

/// Detects a one-time false -> true change across consecutive samples.
///
/// The detector latches: once it has fired it never fires again, even if the
/// sampled value drops back to false and rises again.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: bool,
    fired: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next sample; returns `true` when this sample is the rising edge
    pub fn observe(&mut self, current: bool) -> bool {
        let rising = current && !self.previous && !self.fired;
        self.previous = current;
        if rising {
            self.fired = true;
        }
        rising
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgment_is_idempotent() {
        let mut flags = SessionFlags::new();
        assert!(!flags.has_acknowledged_completion());

        assert!(flags.acknowledge_completion());
        assert!(!flags.acknowledge_completion());
        assert!(flags.has_acknowledged_completion());
    }

    #[test]
    fn edge_fires_once_on_rise() {
        let mut edge = EdgeDetector::new();

        let fired: Vec<bool> = [false, false, true, true, true]
            .into_iter()
            .map(|sample| edge.observe(sample))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false]);
        assert!(edge.has_fired());
    }

    #[test]
    fn edge_latches_after_firing() {
        let mut edge = EdgeDetector::new();

        assert!(edge.observe(true));
        assert!(!edge.observe(false));
        assert!(!edge.observe(true));
    }
}
