use crate::booking::BookingRecord;
use crate::ui::mvi::UiState;

/// One screen in the linear booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Search,
    Detail,
    Travelers,
    Payment,
    Voucher,
}

impl WizardStep {
    /// 1-based position shown in the step indicator.
    pub fn position(self) -> u8 {
        match self {
            Self::Search => 1,
            Self::Detail => 2,
            Self::Travelers => 3,
            Self::Payment => 4,
            Self::Voucher => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Detail => "Results & Detail",
            Self::Travelers => "Traveler Info",
            Self::Payment => "Payment",
            Self::Voucher => "Voucher",
        }
    }

    /// The following step, saturating at the voucher.
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Detail,
            Self::Detail => Self::Travelers,
            Self::Travelers => Self::Payment,
            Self::Payment | Self::Voucher => Self::Voucher,
        }
    }

    /// The preceding step, saturating at search.
    pub fn prev(self) -> Self {
        match self {
            Self::Search | Self::Detail => Self::Search,
            Self::Travelers => Self::Detail,
            Self::Payment => Self::Travelers,
            Self::Voucher => Self::Payment,
        }
    }
}

/// Wizard controller state: the current step plus the accumulating record.
///
/// The controller performs no validation; each step view gates its own
/// continue affordance before dispatching an advance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub record: BookingRecord,
}

impl UiState for WizardState {}
