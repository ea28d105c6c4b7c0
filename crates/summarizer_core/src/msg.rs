#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file from the PDF file dialog.
    FileSelected(crate::PdfSelection),
    /// User clicked Upload & Summarize.
    SubmitClicked,
    /// Settlement of the outstanding upload: summary text or error message.
    UploadDone { result: Result<String, String> },
    /// Fallback for placeholder wiring.
    NoOp,
}
