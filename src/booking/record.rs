//! The accumulating booking record.
//!
//! Every field starts unset and is filled in as the wizard advances. The
//! record lives only in wizard state; nothing is persisted.

use chrono::NaiveDate;

use crate::catalog::{Supplier, TicketRestriction, TimeSlot, Tour};

/// Adult traveler contact details collected at the traveler-info step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdultTraveler {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Child traveler details collected at the traveler-info step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildTraveler {
    pub name: String,
    pub dob: String,
}

/// Ticket counts per traveler type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketCounts {
    pub adult: u32,
    pub child: u32,
}

impl TicketCounts {
    pub fn total(self) -> u32 {
        self.adult + self.child
    }

    /// Zero out counts a tour restriction disallows.
    pub fn clamped_to(self, restriction: TicketRestriction) -> Self {
        Self {
            adult: if restriction.allows_adults() {
                self.adult
            } else {
                0
            },
            child: if restriction.allows_children() {
                self.child
            } else {
                0
            },
        }
    }
}

/// The record accumulated across wizard steps.
///
/// Invariant: once the traveler-info step completes,
/// `tickets.adult == adults.len()` and `tickets.child == children.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingRecord {
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub tour: Option<Tour>,
    pub supplier: Option<Supplier>,
    pub time_slot: Option<TimeSlot>,
    pub tickets: Option<TicketCounts>,
    pub adults: Vec<AdultTraveler>,
    pub children: Vec<ChildTraveler>,
    pub promo_code: Option<String>,
    pub use_wallet: bool,
    pub total_price: Option<i64>,
}

/// A partial update produced by one wizard step.
///
/// `Some` fields overwrite the record; `None` fields leave it untouched
/// (shallow merge). Traveler lists replace wholesale when present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingUpdate {
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub tour: Option<Tour>,
    pub supplier: Option<Supplier>,
    pub time_slot: Option<TimeSlot>,
    pub tickets: Option<TicketCounts>,
    pub adults: Option<Vec<AdultTraveler>>,
    pub children: Option<Vec<ChildTraveler>>,
    pub promo_code: Option<String>,
    pub use_wallet: Option<bool>,
    pub total_price: Option<i64>,
}

impl BookingRecord {
    /// Shallow-merge a step's partial output into the record.
    pub fn merge(&mut self, update: BookingUpdate) {
        if let Some(destination) = update.destination {
            self.destination = Some(destination);
        }
        if let Some(date) = update.date {
            self.date = Some(date);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(tour) = update.tour {
            self.tour = Some(tour);
        }
        if let Some(supplier) = update.supplier {
            self.supplier = Some(supplier);
        }
        if let Some(time_slot) = update.time_slot {
            self.time_slot = Some(time_slot);
        }
        if let Some(tickets) = update.tickets {
            self.tickets = Some(tickets);
        }
        if let Some(adults) = update.adults {
            self.adults = adults;
        }
        if let Some(children) = update.children {
            self.children = children;
        }
        if let Some(promo_code) = update.promo_code {
            self.promo_code = Some(promo_code);
        }
        if let Some(use_wallet) = update.use_wallet {
            self.use_wallet = use_wallet;
        }
        if let Some(total_price) = update.total_price {
            self.total_price = Some(total_price);
        }
    }

    /// Whether the selected time slot carries the premium price tier.
    pub fn is_premium(&self) -> bool {
        self.time_slot
            .as_ref()
            .map(TimeSlot::is_premium)
            .unwrap_or(false)
    }

    pub fn ticket_counts(&self) -> TicketCounts {
        self.tickets.unwrap_or_default()
    }
}
