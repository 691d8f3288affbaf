use crate::ui::mvi::Reducer;
use crate::ui::wizard::intent::WizardIntent;
use crate::ui::wizard::state::WizardState;

pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WizardIntent::Advance(update) => {
                let mut record = state.record;
                record.merge(update);
                WizardState {
                    step: state.step.next(),
                    record,
                }
            }
            WizardIntent::Retreat => WizardState {
                step: state.step.prev(),
                record: state.record,
            },
            WizardIntent::Reset => WizardState::default(),
        }
    }
}
