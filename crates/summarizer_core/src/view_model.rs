/// Fixed prefix applied to rendered error text.
pub const ERROR_PREFIX: &str = "❌ Error: ";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected_file_name: Option<String>,
    pub in_flight: bool,
    /// Summary text from the last successful settlement, shown under the
    /// "Summary" heading.
    pub summary: Option<String>,
    /// Error line from the last failed settlement, already prefixed.
    pub error: Option<String>,
    /// Inline pre-submission validation message.
    pub validation: Option<String>,
    pub dirty: bool,
}
