use tracing::{debug, warn};

use shared_models::error::SchedulingError;

use crate::models::BookingFlowState;

/// Tracks a booking attempt from first slot load through submission.
///
/// A failed submission moves back to `SlotSelected`, so the chosen slot
/// survives and the user can resubmit without reselecting.
#[derive(Debug, Default)]
pub struct BookingFlow {
    state: BookingFlowState,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            state: BookingFlowState::Idle,
        }
    }

    pub fn state(&self) -> BookingFlowState {
        self.state
    }

    /// Move the flow to `next`, rejecting transitions the booking flow does
    /// not define.
    pub fn transition(&mut self, next: BookingFlowState) -> Result<BookingFlowState, SchedulingError> {
        if !Self::valid_transitions(self.state).contains(&next) {
            warn!("Invalid booking flow transition attempted: {:?} -> {:?}", self.state, next);
            return Err(SchedulingError::Validation(format!(
                "Cannot move booking flow from {:?} to {:?}",
                self.state, next
            )));
        }

        debug!("Booking flow {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(self.state)
    }

    /// All states a flow may move to from `current`.
    pub fn valid_transitions(current: BookingFlowState) -> Vec<BookingFlowState> {
        use BookingFlowState::*;

        match current {
            Idle => vec![SlotsLoading],
            SlotsLoading => vec![SlotsLoaded, Idle],
            SlotsLoaded => vec![SlotSelected, SlotsLoading, Idle],
            // Reselecting replaces the choice without leaving the state.
            SlotSelected => vec![Submitting, SlotSelected, SlotsLoading, Idle],
            Submitting => vec![Succeeded, Failed],
            // Failure keeps the selection alive for a resubmit.
            Failed => vec![SlotSelected, Submitting, Idle],
            // Terminal for this attempt; a fresh flow starts over.
            Succeeded => vec![Idle],
        }
    }
}
