//! In-memory product catalog and agency fixtures.
//!
//! Everything the console shows comes from this module: tours, suppliers,
//! time slots, clients, and past bookings. There is no backing store; the
//! data is constructed once at startup and treated as read-only.

mod fixtures;

pub use fixtures::demo_catalog;

/// Restricts which traveler types a tour admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketRestriction {
    #[default]
    Unrestricted,
    AdultOnly,
    ChildOnly,
}

impl TicketRestriction {
    pub fn allows_adults(self) -> bool {
        !matches!(self, Self::ChildOnly)
    }

    pub fn allows_children(self) -> bool {
        !matches!(self, Self::AdultOnly)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unrestricted => "all travelers",
            Self::AdultOnly => "adult only",
            Self::ChildOnly => "child only",
        }
    }
}

/// A bookable tour product.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Listed "from" price shown on result cards, per person.
    pub price: i64,
    pub location: String,
    pub restriction: TicketRestriction,
}

/// A vendor offering a tour at per-person rates.
///
/// Premium prices apply when the selected time slot is a premium slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub adult_price: i64,
    pub child_price: i64,
    pub adult_premium_price: i64,
    pub child_premium_price: i64,
    /// Agency commission, percent of subtotal.
    pub commission_pct: u8,
    pub cancellation_policy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Normal,
    Premium,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: u32,
    pub label: String,
    pub kind: SlotKind,
}

impl TimeSlot {
    pub fn is_premium(&self) -> bool {
        self.kind == SlotKind::Premium
    }
}

/// An agency client on file.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub wallet_balance: i64,
}

/// A settled booking, used by the dashboard and reports screens.
#[derive(Debug, Clone, PartialEq)]
pub struct PastBooking {
    pub reference: String,
    pub destination: String,
    pub client: String,
    /// Month of travel, 1..=12.
    pub month: u32,
    pub amount: i64,
}

/// The signed-in agency account.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyProfile {
    pub name: String,
    pub wallet_balance: i64,
}

/// Read-only fixture data backing every screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub categories: Vec<String>,
    pub tours: Vec<Tour>,
    pub suppliers: Vec<Supplier>,
    pub time_slots: Vec<TimeSlot>,
    pub clients: Vec<Client>,
    pub history: Vec<PastBooking>,
    pub agency: AgencyProfile,
}

impl Catalog {
    /// Tours matching a search category, or all tours when the category
    /// matches nothing (so the results screen never comes up empty).
    pub fn tours_in_category(&self, category: &str) -> Vec<&Tour> {
        let matched: Vec<&Tour> = self
            .tours
            .iter()
            .filter(|tour| tour.category.eq_ignore_ascii_case(category))
            .collect();
        if matched.is_empty() {
            self.tours.iter().collect()
        } else {
            matched
        }
    }
}
