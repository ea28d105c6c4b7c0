use std::path::PathBuf;
use std::sync::Once;

use summarizer_core::{update, AppState, Effect, Msg, PdfSelection, NO_FILE_VALIDATION};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn report_pdf() -> PdfSelection {
    PdfSelection {
        path: PathBuf::from("/tmp/report.pdf"),
        file_name: "report.pdf".to_string(),
    }
}

#[test]
fn submit_without_file_issues_no_request() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = update(state, Msg::SubmitClicked);
    let view = next.view();

    assert!(effects.is_empty());
    assert!(!view.in_flight);
    assert_eq!(view.validation.as_deref(), Some(NO_FILE_VALIDATION));
    assert!(next.consume_dirty());
}

#[test]
fn submit_with_file_emits_single_upload_effect() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::FileSelected(report_pdf()));
    assert!(effects.is_empty());

    let (mut next, effects) = update(state, Msg::SubmitClicked);
    let view = next.view();

    assert_eq!(effects, vec![Effect::UploadPdf { file: report_pdf() }]);
    assert!(view.in_flight);
    assert_eq!(view.summary, None);
    assert_eq!(view.error, None);
    assert_eq!(view.validation, None);
    assert!(next.consume_dirty());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::FileSelected(report_pdf()));
    let (state, first) = update(state, Msg::SubmitClicked);
    assert_eq!(first.len(), 1);

    // Rapid double-click: the second click must not start another upload.
    let (state, second) = update(state, Msg::SubmitClicked);
    assert!(second.is_empty());
    assert!(state.view().in_flight);
}

#[test]
fn submit_clears_previous_result() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::FileSelected(report_pdf()));
    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::UploadDone {
            result: Ok("Patient stable.".to_string()),
        },
    );
    assert_eq!(state.view().summary.as_deref(), Some("Patient stable."));

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().summary, None);
    assert_eq!(state.view().error, None);
}

#[test]
fn selecting_new_file_replaces_old_and_keeps_summary() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::FileSelected(report_pdf()));
    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::UploadDone {
            result: Ok("Discharge approved.".to_string()),
        },
    );

    let other = PdfSelection {
        path: PathBuf::from("/tmp/labs.pdf"),
        file_name: "labs.pdf".to_string(),
    };
    let (state, effects) = update(state, Msg::FileSelected(other));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.selected_file_name.as_deref(), Some("labs.pdf"));
    // Selection does not clear a prior summary; only submit does.
    assert_eq!(view.summary.as_deref(), Some("Discharge approved."));
}

#[test]
fn selecting_file_clears_validation() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::SubmitClicked);
    assert!(state.view().validation.is_some());

    let (state, _effects) = update(state, Msg::FileSelected(report_pdf()));
    assert_eq!(state.view().validation, None);
}
