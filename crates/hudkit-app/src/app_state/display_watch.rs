//! Change detection for monitor layout and compositing support.

use std::time::Instant;

use hudkit_common::MonitorInfo;

use super::types::DISPLAY_SAMPLE_INTERVAL;

/// What changed since the previous sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct DisplayChanges {
    pub(super) monitors_changed: bool,
    /// New compositing state, if it flipped.
    pub(super) composited_changed: Option<bool>,
}

impl DisplayChanges {
    pub(super) fn any(&self) -> bool {
        self.monitors_changed || self.composited_changed.is_some()
    }
}

pub(super) struct DisplayWatch {
    last_sample: Instant,
    monitors: Vec<MonitorInfo>,
    composited: bool,
}

impl DisplayWatch {
    pub(super) fn new(monitors: Vec<MonitorInfo>, composited: bool, now: Instant) -> Self {
        Self {
            last_sample: now,
            monitors,
            composited,
        }
    }

    pub(super) fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_sample) >= DISPLAY_SAMPLE_INTERVAL
    }

    /// Record a fresh sample and report the differences.
    pub(super) fn observe(
        &mut self,
        now: Instant,
        monitors: Vec<MonitorInfo>,
        composited: bool,
    ) -> DisplayChanges {
        self.last_sample = now;
        let mut changes = DisplayChanges::default();
        if monitors != self.monitors {
            self.monitors = monitors;
            changes.monitors_changed = true;
        }
        if composited != self.composited {
            self.composited = composited;
            changes.composited_changed = Some(composited);
        }
        changes
    }

    pub(super) fn monitors(&self) -> &[MonitorInfo] {
        &self.monitors
    }
}
