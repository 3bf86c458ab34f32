//! Telemetry events sent to the ping host.

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

/// Length of a pause, in whole minutes.
///
/// A pause of zero minutes unpauses the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauseDuration(pub u32);

impl PauseDuration {
    /// The zero-length pause, which resumes a paused monitor.
    pub const UNPAUSE: PauseDuration = PauseDuration(0);

    /// Create from minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Get the value in minutes.
    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Whether this pause resumes the monitor.
    pub const fn is_unpause(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for PauseDuration {
    fn from(minutes: u32) -> Self {
        Self(minutes)
    }
}

impl From<Duration> for PauseDuration {
    /// Truncates to whole minutes, saturating at `u32::MAX`.
    fn from(d: Duration) -> Self {
        Self(u32::try_from(d.as_secs() / 60).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for PauseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event reported against a monitor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PingEvent {
    /// The job started.
    Run,
    /// The job finished successfully.
    Complete,
    /// The job failed.
    Fail,
    /// Suspend alerting for the given duration.
    Pause(PauseDuration),
}

impl PingEvent {
    /// A pause event of `minutes` minutes.
    pub fn pause(minutes: u32) -> Self {
        PingEvent::Pause(PauseDuration(minutes))
    }

    /// The unpause event (a zero-minute pause).
    pub fn unpause() -> Self {
        PingEvent::Pause(PauseDuration::UNPAUSE)
    }

    /// Path segment(s) following the monitor code, e.g. `run` or `pause/5`.
    pub fn path(&self) -> String {
        match self {
            PingEvent::Run => "run".to_string(),
            PingEvent::Complete => "complete".to_string(),
            PingEvent::Fail => "fail".to_string(),
            PingEvent::Pause(duration) => format!("pause/{}", duration),
        }
    }

    /// Whether the ping host accepts a `msg` with this event.
    pub fn accepts_message(&self) -> bool {
        !matches!(self, PingEvent::Pause(_))
    }
}

impl fmt::Display for PingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
