use super::output::ControlOutput;
use super::policy::{ControlPolicy, Observation};

/// Snapshot of the keys the flight controls listen to, filled in by
/// whatever polls the keyboard each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub w: bool,
    pub left: bool,
    pub a: bool,
    pub right: bool,
    pub d: bool,
}

impl KeyState {
    pub fn control(&self) -> ControlOutput {
        ControlOutput::discrete(self.up || self.w, self.left || self.a, self.right || self.d)
    }
}

impl From<KeyState> for ControlOutput {
    fn from(keys: KeyState) -> Self {
        keys.control()
    }
}

// Human pilots ignore the observation; the keys are the policy.
impl ControlPolicy for KeyState {
    fn decide(&mut self, _observation: &Observation) -> ControlOutput {
        self.control()
    }
}
