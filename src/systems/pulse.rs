//! Click scale pulse with a deferred, one-shot revert
//!
//! Reverts are keyed by body: re-triggering a body replaces its pending revert
//! (fresh deadline, original scale kept), so an older timer can never shrink
//! a body that was clicked again. `tick` runs on the frame loop; nothing here
//! is shared across threads.

use std::collections::HashMap;

use crate::domain::{Body, BodyId, BodyRegistry, PulseConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingRevert {
    pub due_ms: f64,
    pub original_scale: f64,
}

#[derive(Clone, Debug)]
pub struct PulseScheduler {
    config: PulseConfig,
    pending: HashMap<BodyId, PendingRevert>,
}

impl PulseScheduler {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            pending: HashMap::new(),
        }
    }

    pub fn config(&self) -> PulseConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PulseConfig) {
        self.config = config;
    }

    /// Enlarge `body` now and schedule its revert.
    pub fn trigger(&mut self, body: &mut Body, now_ms: f64) {
        let original_scale = self
            .pending
            .get(&body.id)
            .map(|p| p.original_scale)
            .unwrap_or(body.scale);

        body.scale = self.config.scale;
        self.pending.insert(
            body.id,
            PendingRevert {
                due_ms: now_ms + self.config.duration_ms,
                original_scale,
            },
        );
    }

    pub fn pending(&self, id: BodyId) -> Option<PendingRevert> {
        self.pending.get(&id).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Fire every revert due at `now_ms`. Returns how many fired.
    pub fn tick(&mut self, bodies: &mut BodyRegistry, now_ms: f64) -> u32 {
        let mut fired = 0u32;
        self.pending.retain(|id, revert| {
            if revert.due_ms > now_ms {
                return true;
            }
            if let Some(body) = bodies.get_mut(*id) {
                body.scale = revert.original_scale;
            }
            fired += 1;
            false
        });
        fired
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
