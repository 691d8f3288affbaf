//! Booking domain: the accumulating record carried through the wizard
//! and the fare derivation rules.

pub mod fare;
pub mod record;

pub use fare::{quote, FareBreakdown, FareRequest};
pub use record::{AdultTraveler, BookingRecord, BookingUpdate, ChildTraveler, TicketCounts};
