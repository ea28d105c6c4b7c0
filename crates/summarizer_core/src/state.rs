use std::path::PathBuf;

use crate::view_model::{AppViewModel, ERROR_PREFIX};

/// Validation message shown when submit is attempted without a selection.
pub const NO_FILE_VALIDATION: &str = "Please select a PDF file";

/// The file the user picked. Replaced wholesale on each new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSelection {
    pub path: PathBuf,
    pub file_name: String,
}

/// Whether an upload is outstanding. `Submitting` holds from submit until
/// settlement; there is no retained "settled" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// The single result slot: either nothing has settled yet, or the last
/// settlement was a summary, or it was an error. Success and failure are
/// type-distinguished rather than packed into one string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultSlot {
    #[default]
    Empty,
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected: Option<PdfSelection>,
    phase: Phase,
    result: ResultSlot,
    validation: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let (summary, error) = match &self.result {
            ResultSlot::Empty => (None, None),
            ResultSlot::Success(text) => (Some(text.clone()), None),
            ResultSlot::Failure(message) => (None, Some(format!("{ERROR_PREFIX}{message}"))),
        };
        AppViewModel {
            selected_file_name: self.selected.as_ref().map(|f| f.file_name.clone()),
            in_flight: self.in_flight(),
            summary,
            error,
            validation: self.validation.clone(),
            dirty: self.dirty,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Replaces the held selection unconditionally. A prior summary stays
    /// on screen; only the validation message is cleared.
    pub(crate) fn select_file(&mut self, file: PdfSelection) {
        self.selected = Some(file);
        self.validation = None;
        self.dirty = true;
    }

    /// Moves Idle -> Submitting and clears the result slot. Returns the
    /// selection to upload, or `None` after recording the validation
    /// message when nothing is selected.
    pub(crate) fn begin_submit(&mut self) -> Option<PdfSelection> {
        self.dirty = true;
        match &self.selected {
            Some(file) => {
                self.phase = Phase::Submitting;
                self.result = ResultSlot::Empty;
                self.validation = None;
                Some(file.clone())
            }
            None => {
                self.validation = Some(NO_FILE_VALIDATION.to_string());
                None
            }
        }
    }

    /// Settlement: stores the outcome and returns to Idle unconditionally,
    /// whatever the result was.
    pub(crate) fn settle(&mut self, result: Result<String, String>) {
        self.result = match result {
            Ok(text) => ResultSlot::Success(text),
            Err(message) => ResultSlot::Failure(message),
        };
        self.phase = Phase::Idle;
        self.dirty = true;
    }
}
