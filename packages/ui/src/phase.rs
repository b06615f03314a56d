//! Submission phase shared by every async form.
//!
//! ```text
//! idle ──► validating ──► submitting ──► success ──► navigating
//!   ▲          │              │
//!   └──────────┘              ▼
//!   ▲                       error ──► submitting
//!   └─────────────────────────┘
//! ```
//!
//! `success` is terminal for the form instance: it never returns to an
//! editable phase. `navigating` is its only follow-on, the redirect that
//! unmounts the form.

/// Where a form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
    Navigating,
}

impl SubmitPhase {
    pub fn can_transition(self, next: SubmitPhase) -> bool {
        use SubmitPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Submitting)
                | (Validating, Idle)
                | (Submitting, Success)
                | (Submitting, Error)
                | (Success, Navigating)
                | (Error, Idle)
                | (Error, Validating)
                | (Error, Submitting)
        )
    }

    /// Move to `next` if the edge exists. Returns whether the phase changed.
    pub fn advance(&mut self, next: SubmitPhase) -> bool {
        if self.can_transition(next) {
            *self = next;
            true
        } else {
            tracing::debug!("Ignored phase change {:?} -> {:?}", self, next);
            false
        }
    }

    /// A request is out or the form is done; inputs and triggers stay disabled.
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            SubmitPhase::Submitting | SubmitPhase::Success | SubmitPhase::Navigating
        )
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }
}
