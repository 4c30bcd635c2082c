use super::constants::{
    COMPLETE_AT_MS, EXPLODE_AT_MS, EXPLODE_TRANSITION, FORM_TEXT_AT_MS, FORM_TEXT_TRANSITION,
    RETURN_AT_MS, RETURN_TRANSITION,
};
use smallvec::SmallVec;

/// Loader phases after the initial assembled logo, in schedule order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Explode,
    FormText,
    Return,
    Complete,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Explode, Phase::FormText, Phase::Return, Phase::Complete];

    /// Offset from animation start, not from the previous phase.
    #[inline]
    pub fn at_ms(self) -> u32 {
        match self {
            Phase::Explode => EXPLODE_AT_MS,
            Phase::FormText => FORM_TEXT_AT_MS,
            Phase::Return => RETURN_AT_MS,
            Phase::Complete => COMPLETE_AT_MS,
        }
    }

    #[inline]
    pub fn transition(self) -> Option<&'static str> {
        match self {
            Phase::Explode => Some(EXPLODE_TRANSITION),
            Phase::FormText => Some(FORM_TEXT_TRANSITION),
            Phase::Return => Some(RETURN_TRANSITION),
            Phase::Complete => None,
        }
    }
}

/// Emits each phase once, in order, as elapsed time passes its offset.
///
/// Timer callbacks only ever poll; a late or early timer can neither skip nor
/// reorder phases. After `cancel` nothing is emitted again.
#[derive(Clone, Debug, Default)]
pub struct PhaseTimeline {
    next: usize,
    cancelled: bool,
}

impl PhaseTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, elapsed_ms: f64) -> SmallVec<[Phase; 4]> {
        let mut due = SmallVec::new();
        if self.cancelled {
            return due;
        }
        while let Some(&phase) = Phase::ALL.get(self.next) {
            if elapsed_ms < phase.at_ms() as f64 {
                break;
            }
            due.push(phase);
            self.next += 1;
        }
        due
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once `Complete` has been emitted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.next == Phase::ALL.len()
    }
}
