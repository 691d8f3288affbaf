//! View-local state for each wizard step.
//!
//! The controller never validates; these forms own the in-progress field
//! values, decide when their step may advance, and produce the partial
//! update merged into the record on advance. Forms are seeded from the
//! record so retreating re-shows previously entered data.

use chrono::NaiveDate;

use crate::booking::{AdultTraveler, BookingUpdate, ChildTraveler, TicketCounts};
use crate::catalog::{Catalog, Supplier, TimeSlot, Tour};
use crate::ui::wizard::state::{WizardState, WizardStep};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The active step's local editing state.
#[derive(Debug, Clone, PartialEq)]
pub enum StepForm {
    Search(SearchForm),
    Detail(DetailForm),
    Travelers(TravelerForm),
    Payment(PaymentForm),
    Voucher,
}

impl StepForm {
    /// Build the form for the wizard's current step, seeded from the record.
    pub fn for_state(wizard: &WizardState, catalog: &Catalog) -> Self {
        match wizard.step {
            WizardStep::Search => Self::Search(SearchForm::seed(wizard, catalog)),
            WizardStep::Detail => Self::Detail(DetailForm::seed(wizard, catalog)),
            WizardStep::Travelers => Self::Travelers(TravelerForm::seed(wizard)),
            WizardStep::Payment => Self::Payment(PaymentForm::seed(wizard, catalog)),
            WizardStep::Voucher => Self::Voucher,
        }
    }

    /// Whether the step's required fields are filled, enabling continue.
    pub fn complete(&self) -> bool {
        match self {
            Self::Search(form) => form.complete(),
            Self::Detail(form) => form.complete(),
            Self::Travelers(form) => form.complete(),
            Self::Payment(form) => form.complete(),
            Self::Voucher => false,
        }
    }

    /// The partial update this step contributes on advance.
    pub fn build_update(&self) -> BookingUpdate {
        match self {
            Self::Search(form) => form.build_update(),
            Self::Detail(form) => form.build_update(),
            Self::Travelers(form) => form.build_update(),
            Self::Payment(form) => form.build_update(),
            Self::Voucher => BookingUpdate::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Step 1: Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Destination,
    Date,
    Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub destination: String,
    pub date_input: String,
    pub categories: Vec<String>,
    pub category_index: usize,
    pub focus: SearchField,
}

impl SearchForm {
    fn seed(wizard: &WizardState, catalog: &Catalog) -> Self {
        let record = &wizard.record;
        let categories: Vec<String> = catalog.categories.clone();
        let category_index = record
            .category
            .as_ref()
            .and_then(|wanted| categories.iter().position(|c| c == wanted))
            .unwrap_or(0);
        Self {
            destination: record.destination.clone().unwrap_or_default(),
            date_input: record
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            categories,
            category_index,
            focus: SearchField::Destination,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_input.trim(), DATE_FORMAT).ok()
    }

    pub fn category(&self) -> &str {
        self.categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SearchField::Destination => SearchField::Date,
            SearchField::Date => SearchField::Category,
            SearchField::Category => SearchField::Destination,
        };
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            SearchField::Destination => self.destination.push(c),
            SearchField::Date => self.date_input.push(c),
            SearchField::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            SearchField::Destination => {
                self.destination.pop();
            }
            SearchField::Date => {
                self.date_input.pop();
            }
            SearchField::Category => {}
        }
    }

    pub fn cycle_category(&mut self, direction: i32) {
        if self.categories.is_empty() {
            return;
        }
        let len = self.categories.len();
        self.category_index = if direction.is_negative() {
            (self.category_index + len - 1) % len
        } else {
            (self.category_index + 1) % len
        };
    }

    fn complete(&self) -> bool {
        !self.destination.trim().is_empty() && self.parsed_date().is_some()
    }

    fn build_update(&self) -> BookingUpdate {
        BookingUpdate {
            destination: Some(self.destination.trim().to_string()),
            date: self.parsed_date(),
            category: Some(self.category().to_string()),
            ..BookingUpdate::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Step 2: Results & Detail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPane {
    Tours,
    Suppliers,
    Slots,
    Tickets,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailForm {
    pub tours: Vec<Tour>,
    pub suppliers: Vec<Supplier>,
    pub slots: Vec<TimeSlot>,
    pub tour_index: usize,
    pub supplier_index: Option<usize>,
    pub slot_index: Option<usize>,
    pub tickets: TicketCounts,
    pub pane: DetailPane,
}

impl DetailForm {
    fn seed(wizard: &WizardState, catalog: &Catalog) -> Self {
        let record = &wizard.record;
        let tours: Vec<Tour> = catalog
            .tours_in_category(record.category.as_deref().unwrap_or(""))
            .into_iter()
            .cloned()
            .collect();
        let tour_index = record
            .tour
            .as_ref()
            .and_then(|t| tours.iter().position(|candidate| candidate.id == t.id))
            .unwrap_or(0);
        let supplier_index = record.supplier.as_ref().and_then(|s| {
            catalog
                .suppliers
                .iter()
                .position(|candidate| candidate.id == s.id)
        });
        let slot_index = record.time_slot.as_ref().and_then(|slot| {
            catalog
                .time_slots
                .iter()
                .position(|candidate| candidate.id == slot.id)
        });

        let mut form = Self {
            tours,
            suppliers: catalog.suppliers.clone(),
            slots: catalog.time_slots.clone(),
            tour_index,
            supplier_index,
            slot_index,
            tickets: record.tickets.unwrap_or(TicketCounts { adult: 1, child: 0 }),
            pane: DetailPane::Tours,
        };
        form.clamp_tickets();
        form
    }

    pub fn selected_tour(&self) -> Option<&Tour> {
        self.tours.get(self.tour_index)
    }

    pub fn selected_supplier(&self) -> Option<&Supplier> {
        self.supplier_index.and_then(|i| self.suppliers.get(i))
    }

    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.slot_index.and_then(|i| self.slots.get(i))
    }

    pub fn next_pane(&mut self) {
        self.pane = match self.pane {
            DetailPane::Tours => DetailPane::Suppliers,
            DetailPane::Suppliers => DetailPane::Slots,
            DetailPane::Slots => DetailPane::Tickets,
            DetailPane::Tickets => DetailPane::Tours,
        };
    }

    /// Move the selection in the focused pane. In the tickets pane,
    /// up/down adjusts the adult count instead.
    pub fn move_selection(&mut self, direction: i32) {
        match self.pane {
            DetailPane::Tours => {
                self.tour_index = cycle(self.tour_index, self.tours.len(), direction);
                self.clamp_tickets();
            }
            DetailPane::Suppliers => {
                self.supplier_index = Some(cycle(
                    self.supplier_index.unwrap_or(0),
                    self.suppliers.len(),
                    if self.supplier_index.is_some() {
                        direction
                    } else {
                        0
                    },
                ));
            }
            DetailPane::Slots => {
                self.slot_index = Some(cycle(
                    self.slot_index.unwrap_or(0),
                    self.slots.len(),
                    if self.slot_index.is_some() { direction } else { 0 },
                ));
            }
            DetailPane::Tickets => self.adjust_adults(direction),
        }
    }

    /// Change the adult count. No-op when the tour is child-only.
    pub fn adjust_adults(&mut self, delta: i32) {
        let allowed = self
            .selected_tour()
            .map(|tour| tour.restriction.allows_adults())
            .unwrap_or(true);
        if !allowed {
            return;
        }
        self.tickets.adult = bump(self.tickets.adult, delta);
    }

    /// Change the child count. No-op when the tour is adult-only.
    pub fn adjust_children(&mut self, delta: i32) {
        let allowed = self
            .selected_tour()
            .map(|tour| tour.restriction.allows_children())
            .unwrap_or(true);
        if !allowed {
            return;
        }
        self.tickets.child = bump(self.tickets.child, delta);
    }

    /// Re-apply the selected tour's ticket restriction.
    fn clamp_tickets(&mut self) {
        if let Some(tour) = self.selected_tour() {
            self.tickets = self.tickets.clamped_to(tour.restriction);
        }
    }

    fn complete(&self) -> bool {
        self.selected_tour().is_some() && self.slot_index.is_some() && self.tickets.total() > 0
    }

    fn build_update(&self) -> BookingUpdate {
        BookingUpdate {
            tour: self.selected_tour().cloned(),
            supplier: self.selected_supplier().cloned(),
            time_slot: self.selected_slot().cloned(),
            tickets: Some(self.tickets),
            ..BookingUpdate::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Step 3: Traveler info
// ---------------------------------------------------------------------------

/// Flat-field editor over the adult and child traveler lists.
///
/// Fields are indexed in order: for each adult its name/email/phone, then
/// for each child its name/dob. List lengths come from the ticket counts,
/// which keeps the counts-match-travelers invariant by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerForm {
    pub adults: Vec<AdultTraveler>,
    pub children: Vec<ChildTraveler>,
    pub field: usize,
}

const ADULT_FIELDS: usize = 3;
const CHILD_FIELDS: usize = 2;

impl TravelerForm {
    fn seed(wizard: &WizardState) -> Self {
        let record = &wizard.record;
        let counts = record.ticket_counts();
        let mut adults = record.adults.clone();
        adults.resize(counts.adult as usize, AdultTraveler::default());
        let mut children = record.children.clone();
        children.resize(counts.child as usize, ChildTraveler::default());
        Self {
            adults,
            children,
            field: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        self.adults.len() * ADULT_FIELDS + self.children.len() * CHILD_FIELDS
    }

    /// Label and current value of a field by flat index.
    pub fn field_entry(&self, index: usize) -> Option<(String, &str)> {
        let adult_span = self.adults.len() * ADULT_FIELDS;
        if index < adult_span {
            let adult = &self.adults[index / ADULT_FIELDS];
            let (label, value) = match index % ADULT_FIELDS {
                0 => ("name", adult.name.as_str()),
                1 => ("email", adult.email.as_str()),
                _ => ("phone", adult.phone.as_str()),
            };
            return Some((format!("Adult {} {label}", index / ADULT_FIELDS + 1), value));
        }
        let child_index = index - adult_span;
        if child_index >= self.children.len() * CHILD_FIELDS {
            return None;
        }
        let child = &self.children[child_index / CHILD_FIELDS];
        let (label, value) = match child_index % CHILD_FIELDS {
            0 => ("name", child.name.as_str()),
            _ => ("date of birth", child.dob.as_str()),
        };
        Some((
            format!("Child {} {label}", child_index / CHILD_FIELDS + 1),
            value,
        ))
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        let adult_span = self.adults.len() * ADULT_FIELDS;
        if index < adult_span {
            let adult = &mut self.adults[index / ADULT_FIELDS];
            return Some(match index % ADULT_FIELDS {
                0 => &mut adult.name,
                1 => &mut adult.email,
                _ => &mut adult.phone,
            });
        }
        let child_index = index - adult_span;
        let child = self.children.get_mut(child_index / CHILD_FIELDS)?;
        Some(match child_index % CHILD_FIELDS {
            0 => &mut child.name,
            _ => &mut child.dob,
        })
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.field;
        if let Some(value) = self.field_mut(field) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.field;
        if let Some(value) = self.field_mut(field) {
            value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.field = (self.field + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.field = (self.field + count - 1) % count;
        }
    }

    fn complete(&self) -> bool {
        let adults_filled = self.adults.iter().all(|a| {
            !a.name.trim().is_empty() && !a.email.trim().is_empty() && !a.phone.trim().is_empty()
        });
        let children_filled = self
            .children
            .iter()
            .all(|c| !c.name.trim().is_empty() && !c.dob.trim().is_empty());
        adults_filled && children_filled
    }

    fn build_update(&self) -> BookingUpdate {
        BookingUpdate {
            adults: Some(self.adults.clone()),
            children: Some(self.children.clone()),
            ..BookingUpdate::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Step 4: Payment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub promo_input: String,
    /// Code applied with Enter. Applying again replaces rather than
    /// stacks; the discount is derived from this single slot.
    pub applied_promo: Option<String>,
    pub use_wallet: bool,
    pub wallet_balance: i64,
}

impl PaymentForm {
    fn seed(wizard: &WizardState, catalog: &Catalog) -> Self {
        let record = &wizard.record;
        Self {
            promo_input: String::new(),
            applied_promo: record.promo_code.clone(),
            use_wallet: record.use_wallet,
            wallet_balance: catalog.agency.wallet_balance,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.promo_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.promo_input.pop();
    }

    pub fn apply_promo(&mut self) {
        let entered = self.promo_input.trim();
        if !entered.is_empty() {
            self.applied_promo = Some(entered.to_string());
        }
    }

    pub fn toggle_wallet(&mut self) {
        self.use_wallet = !self.use_wallet;
    }

    fn complete(&self) -> bool {
        true
    }

    /// Promo and wallet choice; the app fills in the computed total.
    fn build_update(&self) -> BookingUpdate {
        BookingUpdate {
            promo_code: self.applied_promo.clone(),
            use_wallet: Some(self.use_wallet),
            ..BookingUpdate::default()
        }
    }
}

fn cycle(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction == 0 {
        current
    } else if direction.is_negative() {
        (current + len - 1) % len
    } else {
        (current + 1) % len
    }
}

fn bump(value: u32, delta: i32) -> u32 {
    if delta.is_negative() {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    fn search_form() -> SearchForm {
        SearchForm::seed(&WizardState::default(), &demo_catalog())
    }

    #[test]
    fn search_incomplete_without_date() {
        let mut form = search_form();
        for c in "Lisbon".chars() {
            form.input_char(c);
        }
        assert!(!form.complete());
    }

    #[test]
    fn search_complete_with_destination_and_valid_date() {
        let mut form = search_form();
        for c in "Lisbon".chars() {
            form.input_char(c);
        }
        form.focus_next();
        for c in "2026-09-14".chars() {
            form.input_char(c);
        }
        assert!(form.complete());
        let update = form.build_update();
        assert_eq!(update.destination.as_deref(), Some("Lisbon"));
        assert!(update.date.is_some());
    }

    #[test]
    fn search_rejects_malformed_date() {
        let mut form = search_form();
        form.focus_next();
        for c in "14/09/2026".chars() {
            form.input_char(c);
        }
        assert!(form.parsed_date().is_none());
    }

    #[test]
    fn detail_requires_slot_and_travelers() {
        let catalog = demo_catalog();
        let mut form = DetailForm::seed(&WizardState::default(), &catalog);
        assert!(!form.complete());
        form.slot_index = Some(0);
        assert!(form.complete());
        form.tickets = TicketCounts::default();
        assert!(!form.complete());
    }

    #[test]
    fn traveler_form_sizes_lists_from_ticket_counts() {
        let mut wizard = WizardState::default();
        wizard.record.tickets = Some(TicketCounts { adult: 2, child: 1 });
        let form = TravelerForm::seed(&wizard);
        assert_eq!(form.adults.len(), 2);
        assert_eq!(form.children.len(), 1);
        assert_eq!(form.field_count(), 8);
    }

    #[test]
    fn traveler_form_complete_only_when_all_fields_filled() {
        let mut wizard = WizardState::default();
        wizard.record.tickets = Some(TicketCounts { adult: 1, child: 0 });
        let mut form = TravelerForm::seed(&wizard);
        assert!(!form.complete());
        for text in ["Ana Costa", "ana@example.com", "+351 912 000 111"] {
            for c in text.chars() {
                form.input_char(c);
            }
            form.focus_next();
        }
        assert!(form.complete());
    }

    #[test]
    fn payment_apply_ignores_blank_entry() {
        let catalog = demo_catalog();
        let mut form = PaymentForm::seed(&WizardState::default(), &catalog);
        form.apply_promo();
        assert!(form.applied_promo.is_none());
        for c in "save20".chars() {
            form.input_char(c);
        }
        form.apply_promo();
        assert_eq!(form.applied_promo.as_deref(), Some("save20"));
    }
}
