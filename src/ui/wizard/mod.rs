//! The five-step booking wizard.
//!
//! Controller state lives in [`WizardState`] and only changes through
//! [`WizardReducer`]; per-step editing state lives in [`form::StepForm`].

pub mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WizardIntent;
pub use reducer::WizardReducer;
pub use state::{WizardState, WizardStep};
pub use view::{render_wizard, WizardView};
