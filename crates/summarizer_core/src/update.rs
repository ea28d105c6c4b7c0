use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(file) => {
            state.select_file(file);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // At most one request in flight: the submit control is disabled
            // while Submitting, and the state machine ignores it too.
            if state.in_flight() {
                return (state, Vec::new());
            }
            match state.begin_submit() {
                Some(file) => vec![Effect::UploadPdf { file }],
                None => Vec::new(),
            }
        }
        Msg::UploadDone { result } => {
            state.settle(result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
