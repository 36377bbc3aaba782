//! Sidebar messages

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    /// Open the selected entry.
    Confirm,
    SelectFirst,
    SelectLast,
}
