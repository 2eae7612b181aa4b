//! TUI input modes
//!
//! Key events are first mapped to a semantic [`KeyAction`] depending on the
//! current [`InputMode`]; the app then applies the action to the state.
//!
//! - Normal: navigate cards and trigger card actions
//! - Search: edit the search box
//! - Edit: the response editor modal
//! - Confirm: yes/no prompt before deleting

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Edit,
    Confirm,
}

impl InputMode {
    /// Mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
            Self::Edit => "EDIT",
            Self::Confirm => "CONFIRM",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Search => Color::Green,
            Self::Edit => Color::Yellow,
            Self::Confirm => Color::Magenta,
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,

    // -- Application --
    Quit,
    ShowHelp,

    // -- Mode transitions --
    EnterSearch,
    ExitToNormal,

    // -- Text editing (search box and response editor) --
    InsertChar(char),
    InsertNewline,
    DeleteChar,
    ClearInput,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // -- Editor modal --
    Submit,
    ToggleDraftVisibility,
    Cancel,

    // -- Card list --
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    EditSelected,
    ToggleSelected,
    DeleteSelected,

    // -- Feed --
    SwitchFilter,
    Refresh,
    DismissAlert,

    // -- Confirm prompt --
    ConfirmYes,
    ConfirmNo,
}

/// Map a key event to an action for the given mode
pub fn handle_key_event(mode: InputMode, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Search => handle_search(key),
        InputMode::Edit => handle_edit(key),
        InputMode::Confirm => handle_confirm(key),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('?') => KeyAction::ShowHelp,
        KeyCode::Char('/') | KeyCode::Char('i') => KeyAction::EnterSearch,

        KeyCode::Char('j') | KeyCode::Down => KeyAction::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::SelectPrev,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => KeyAction::SelectLast,

        KeyCode::Char('e') | KeyCode::Enter => KeyAction::EditSelected,
        KeyCode::Char('v') => KeyAction::ToggleSelected,
        KeyCode::Char('d') => KeyAction::DeleteSelected,

        KeyCode::Tab => KeyAction::SwitchFilter,
        KeyCode::Char('r') => KeyAction::Refresh,
        KeyCode::Char('x') | KeyCode::Esc => KeyAction::DismissAlert,
        _ => KeyAction::None,
    }
}

fn handle_search(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::Enter => KeyAction::ExitToNormal,
        KeyCode::Char('u') if ctrl => KeyAction::ClearInput,
        KeyCode::Char(c) if !ctrl => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

fn handle_edit(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Enter if alt => KeyAction::InsertNewline,
        KeyCode::Char('j') if ctrl => KeyAction::InsertNewline,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab => KeyAction::ToggleDraftVisibility,
        KeyCode::Char('u') if ctrl => KeyAction::ClearInput,
        KeyCode::Char(c) if !ctrl => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

fn handle_confirm(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::ConfirmNo,
        _ => KeyAction::None,
    }
}
