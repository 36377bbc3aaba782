//! Content area messages
//!
//! Each page interprets the generic actions its own way; a page ignores
//! what it has no use for.

#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== Selection ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter: open, toggle a section or change a setting.
    Confirm,

    // ========== Records ==========
    Add,
    Edit,
    Delete,
    /// Flip the active / resolved / published flag.
    Toggle,
    /// Save a document or publish the app configuration.
    Save,

    // ========== Canvas ==========
    Duplicate,
    MoveUp,
    MoveDown,
    /// Switch between phone preview and screen settings.
    TogglePreview,
    PrevScreen,
    NextScreen,
    NewScreen,
    Upload,

    // ========== Value cycling (settings rows) ==========
    TogglePrev,
    ToggleNext,
}
