//! Event window: the fixed deadline and the optional event start

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The immutable instant the countdown runs towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetDeadline(DateTime<Utc>);

impl TargetDeadline {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    /// Inclusive: the deadline instant itself counts as reached
    pub fn is_reached(&self, now: DateTime<Utc>) -> bool {
        now >= self.0
    }
}

/// Phase of the event as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPhase {
    Upcoming,
    Running,
    Ended,
}

/// The span of the event: an optional start and the deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    start: Option<DateTime<Utc>>,
    deadline: TargetDeadline,
}

impl EventWindow {
    /// A window with only a deadline; the countdown runs from process start
    pub fn until(deadline: DateTime<Utc>) -> Self {
        Self {
            start: None,
            deadline: TargetDeadline::new(deadline),
        }
    }

    /// A window with an explicit start. The start must come strictly before the deadline.
    pub fn between(start: DateTime<Utc>, deadline: DateTime<Utc>) -> Result<Self, ConfigError> {
        if start >= deadline {
            return Err(ConfigError::WindowInverted { start, deadline });
        }

        Ok(Self {
            start: Some(start),
            deadline: TargetDeadline::new(deadline),
        })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn deadline(&self) -> TargetDeadline {
        self.deadline
    }

    /// Milliseconds between start and deadline, if a start is configured
    pub fn length_millis(&self) -> Option<u64> {
        self.start
            .map(|start| (self.deadline.at() - start).num_milliseconds().max(0) as u64)
    }

    pub fn phase(&self, now: DateTime<Utc>) -> EventPhase {
        if self.deadline.is_reached(now) {
            EventPhase::Ended
        } else if self.start.is_some_and(|start| now < start) {
            EventPhase::Upcoming
        } else {
            EventPhase::Running
        }
    }
}
