//! UI state: selection, overlays, notifications and the add-item form

use clipstash::Context;
use compact_str::CompactString;

/// UI overlays drawn above the item list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIOverlay {
    #[default]
    None = 0,
    Help = 1,
    AddItem = 2,
    ConfirmClear = 3,
}

impl UIOverlay {
    pub fn title(&self) -> &'static str {
        match self {
            UIOverlay::None => "",
            UIOverlay::Help => "Help",
            UIOverlay::AddItem => "Add Clipboard Item with Contexts",
            UIOverlay::ConfirmClear => "Confirm",
        }
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
}

/// Compact notification, shown until dismissed or replaced
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<CompactString>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

/// Which input of the add form has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Label(usize),
    Value(usize),
}

/// One editable label/value row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextRow {
    pub label: String,
    pub value: String,
}

/// The add-item dialog: a title plus a growable list of context rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemForm {
    pub title: String,
    pub rows: Vec<ContextRow>,
    pub focus: FormField,
}

impl AddItemForm {
    pub fn new(initial_rows: usize) -> Self {
        Self {
            title: String::new(),
            rows: vec![ContextRow::default(); initial_rows],
            focus: FormField::Title,
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(ContextRow::default());
        self.focus = FormField::Label(self.rows.len() - 1);
    }

    /// Remove the row holding the cursor; no-op while the title is focused
    pub fn remove_focused_row(&mut self) {
        let index = match self.focus {
            FormField::Title => return,
            FormField::Label(i) | FormField::Value(i) => i,
        };
        if index >= self.rows.len() {
            return;
        }
        self.rows.remove(index);

        self.focus = if self.rows.is_empty() {
            FormField::Title
        } else {
            FormField::Label(index.min(self.rows.len() - 1))
        };
    }

    /// Title, then each row's label and value in order, wrapping around
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title if self.rows.is_empty() => FormField::Title,
            FormField::Title => FormField::Label(0),
            FormField::Label(i) => FormField::Value(i),
            FormField::Value(i) if i + 1 < self.rows.len() => FormField::Label(i + 1),
            FormField::Value(_) => FormField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title if self.rows.is_empty() => FormField::Title,
            FormField::Title => FormField::Value(self.rows.len() - 1),
            FormField::Label(0) => FormField::Title,
            FormField::Label(i) => FormField::Value(i - 1),
            FormField::Value(i) => FormField::Label(i),
        };
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Label(i) => self.rows.get_mut(i).map(|row| &mut row.label),
            FormField::Value(i) => self.rows.get_mut(i).map(|row| &mut row.value),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Rows as store contexts; the store filters incomplete ones
    pub fn contexts(&self) -> Vec<Context> {
        self.rows
            .iter()
            .map(|row| Context::new(row.label.clone(), row.value.clone()))
            .collect()
    }
}

/// Presentation state, independent of the item data
#[derive(Debug, Clone)]
pub struct UIState {
    pub overlay: UIOverlay,

    /// Selected item, counted in display order (newest first)
    pub selected: usize,

    /// Selected context within the selected item
    pub selected_context: usize,

    pub notification: Option<Notification>,

    pub form: Option<AddItemForm>,

    redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            overlay: UIOverlay::None,
            selected: 0,
            selected_context: 0,
            notification: None,
            form: None,
            redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<CompactString>) {
        self.notification = Some(Notification::new(level, message));
        self.request_redraw();
    }

    pub fn notify_info(&mut self, message: impl Into<CompactString>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn notify_success(&mut self, message: impl Into<CompactString>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn notify_warning(&mut self, message: impl Into<CompactString>) {
        self.notify(NotificationLevel::Warning, message);
    }

    pub fn notify_error(&mut self, message: impl Into<CompactString>) {
        self.notify(NotificationLevel::Error, message);
    }

    pub fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.request_redraw();
        }
    }

    pub fn open_form(&mut self, initial_rows: usize) {
        self.form = Some(AddItemForm::new(initial_rows));
        self.overlay = UIOverlay::AddItem;
        self.request_redraw();
    }

    pub fn close_overlay(&mut self) {
        if self.overlay == UIOverlay::AddItem {
            self.form = None;
        }
        self.overlay = UIOverlay::None;
        self.request_redraw();
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            _ => UIOverlay::Help,
        };
        self.request_redraw();
    }

    /// Keep the selection inside a list of `item_count` items
    pub fn clamp_selection(&mut self, item_count: usize, context_count: usize) {
        self.selected = self.selected.min(item_count.saturating_sub(1));
        self.selected_context = self.selected_context.min(context_count.saturating_sub(1));
    }

    /// Whether typed characters go to a text input
    pub fn overlay_accepts_input(&self) -> bool {
        self.overlay == UIOverlay::AddItem
    }
}
