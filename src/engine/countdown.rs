//! Countdown engine: turns clock samples into display values and flags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{EdgeDetector, EventPhase, EventWindow, RemainingDuration, SessionFlags, TargetDeadline};

/// Everything the presentation layer needs from one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub sampled_at: DateTime<Utc>,
    pub phase: EventPhase,
    pub remaining: RemainingDuration,
    pub deadline_reached: bool,
    pub show_completion_notice: bool,
    pub acknowledged: bool,
}

/// Result of feeding one clock sample through the engine
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub snapshot: CountdownSnapshot,
    /// Set on the single sample where the deadline flips to reached
    pub deadline_just_reached: bool,
}

/// Owns the event window and the session state derived from it
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    window: EventWindow,
    flags: SessionFlags,
    edge: EdgeDetector,
}

impl CountdownEngine {
    pub fn new(window: EventWindow) -> Self {
        info!("Countdown engine initialized for deadline {}", window.deadline().at());
        Self {
            window,
            flags: SessionFlags::new(),
            edge: EdgeDetector::new(),
        }
    }

    pub fn window(&self) -> &EventWindow {
        &self.window
    }

    pub fn deadline(&self) -> TargetDeadline {
        self.window.deadline()
    }

    /// Remaining time at `now`. Pins to zero once the deadline is reached.
    pub fn tick(&self, now: DateTime<Utc>) -> RemainingDuration {
        match self.window.phase(now) {
            EventPhase::Ended => RemainingDuration::zero(),
            EventPhase::Upcoming => self
                .window
                .length_millis()
                .map(RemainingDuration::from_millis)
                .unwrap_or_default(),
            EventPhase::Running => {
                let millis = (self.deadline().at() - now).num_milliseconds().max(0) as u64;
                RemainingDuration::from_millis(millis)
            }
        }
    }

    pub fn is_deadline_reached(&self, now: DateTime<Utc>) -> bool {
        self.deadline().is_reached(now)
    }

    /// Whether the completion notice should be visible for the given acknowledgment state
    pub fn should_show_completion_notice(
        &self,
        now: DateTime<Utc>,
        has_acknowledged: bool,
    ) -> bool {
        self.is_deadline_reached(now) && !has_acknowledged
    }

    /// Same as [`Self::should_show_completion_notice`], using this session's flag
    pub fn completion_notice_pending(&self, now: DateTime<Utc>) -> bool {
        self.should_show_completion_notice(now, self.flags.has_acknowledged_completion())
    }

    pub fn has_acknowledged_completion(&self) -> bool {
        self.flags.has_acknowledged_completion()
    }

    /// Suppress the completion notice for the rest of the session.
    /// Returns `true` only for the call that changed the flag.
    pub fn acknowledge_completion(&mut self) -> bool {
        let changed = self.flags.acknowledge_completion();
        if changed {
            info!("Completion notice acknowledged");
        } else {
            debug!("Completion notice already acknowledged");
        }
        changed
    }

    /// Snapshot at `now` without advancing edge detection
    pub fn snapshot(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        CountdownSnapshot {
            sampled_at: now,
            phase: self.window.phase(now),
            remaining: self.tick(now),
            deadline_reached: self.is_deadline_reached(now),
            show_completion_notice: self.completion_notice_pending(now),
            acknowledged: self.has_acknowledged_completion(),
        }
    }

    /// Take one sample: compute the snapshot and advance edge detection
    pub fn sample(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let snapshot = self.snapshot(now);
        let deadline_just_reached = self.edge.observe(snapshot.deadline_reached);

        if deadline_just_reached {
            info!("Deadline {} reached at {}", self.deadline().at(), now);
        }

        TickOutcome {
            snapshot,
            deadline_just_reached,
        }
    }
}
