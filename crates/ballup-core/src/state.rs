//! Per-node animation progress

/// Outcome of advancing a node by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateResult {
    /// Still travelling (or idle)
    Unsettled,
    /// A full unit transition completed; carries the new anchor (0 or 1)
    SettledAt(f64),
}

impl UpdateResult {
    pub fn is_settled(&self) -> bool {
        matches!(self, UpdateResult::SettledAt(_))
    }
}

/// Progress of a single node between its two settled extremes
///
/// `direction == 0` means the node is idle. `anchor` is the scale recorded
/// at the last settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub scale: f64,
    pub direction: f64,
    pub anchor: f64,
    step_gap: f64,
}

impl NodeState {
    pub fn new(step_gap: f64) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            anchor: 0.0,
            step_gap,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance by one step and report settlement exactly once per transition
    pub fn update(&mut self) -> UpdateResult {
        self.scale += self.step_gap * self.direction;
        if (self.scale - self.anchor).abs() > 1.0 {
            self.scale = self.anchor + self.direction;
            self.direction = 0.0;
            self.anchor = self.scale;
            return UpdateResult::SettledAt(self.anchor);
        }
        UpdateResult::Unsettled
    }

    /// Start moving away from the current anchor
    ///
    /// Returns `false` without touching anything if a transition is already
    /// in flight.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.anchor;
        true
    }
}
