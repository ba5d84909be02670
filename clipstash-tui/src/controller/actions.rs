//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum: every user intent the front end can act on.
//! Raw terminal events are mapped to actions by the event loop and applied
//! to the application state by the dispatcher.

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Save and leave.
    Quit,

    MoveSelectionUp,
    MoveSelectionDown,
    SelectNextContext,
    SelectPrevContext,

    /// Copy the value of the selected context.
    CopySelectedContext,

    /// Copy every context of the selected item as `label: value` lines.
    CopyAllSelected,

    DeleteSelected,

    /// Ask for confirmation (or clear right away when confirmation is off).
    RequestClearAll,
    ConfirmClearAll,

    OpenAddForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormAddRow,
    FormRemoveRow,
    SubmitForm,

    ToggleHelp,

    /// Close the currently active overlay.
    CloseOverlay,

    DismissNotification,

    Resize(u16, u16),
}
