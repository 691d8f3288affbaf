use crate::booking::BookingUpdate;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WizardIntent {
    /// Merge a step's partial output into the record, then move forward.
    /// At the voucher step the merge still applies but the step stays put.
    Advance(BookingUpdate),
    /// Move back one step. The record is retained, never rolled back.
    Retreat,
    /// Discard the record and return to search.
    Reset,
}

impl Intent for WizardIntent {}
