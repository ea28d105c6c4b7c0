#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    UploadPdf { file: crate::PdfSelection },
}
