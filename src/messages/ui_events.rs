//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    SelectPrev,
    SelectNext,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    NewLine,
    Backspace,
    CursorLeft,
    CursorRight,

    // Post actions
    Reload,
    Submit,
    EditSelected,
    CancelEdit,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused panel (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    Title,
    Body,
    Posts,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Title => Panel::Body,
            Panel::Body => Panel::Posts,
            Panel::Posts => Panel::Title,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Title => Panel::Posts,
            Panel::Body => Panel::Title,
            Panel::Posts => Panel::Body,
        }
    }

    pub fn is_form_field(&self) -> bool {
        matches!(self, Panel::Title | Panel::Body)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

/// UI context a key is interpreted in
#[derive(Clone, Copy, Debug)]
pub struct KeyContext {
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub confirming_delete: bool,
    pub editing_post: bool,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups first
    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.confirming_delete {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(UiEvent::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(UiEvent::CancelDelete),
            _ => None,
        };
    }

    match ctx.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('e') | KeyCode::Enter => {
                if ctx.active_panel.is_form_field() {
                    Some(UiEvent::StartEditing)
                } else {
                    Some(UiEvent::EditSelected)
                }
            }
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::Char('r') => Some(UiEvent::Reload),
            KeyCode::Char('d') if ctx.active_panel == Panel::Posts => Some(UiEvent::RequestDelete),
            KeyCode::Esc if ctx.editing_post => Some(UiEvent::CancelEdit),
            KeyCode::Up => Some(UiEvent::SelectPrev),
            KeyCode::Down => Some(UiEvent::SelectNext),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter if ctx.active_panel == Panel::Body => Some(UiEvent::NewLine),
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(active_panel: Panel, input_mode: InputMode) -> KeyContext {
        KeyContext {
            active_panel,
            input_mode,
            show_help: false,
            confirming_delete: false,
            editing_post: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_depends_on_panel() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), ctx(Panel::Title, InputMode::Normal)),
            Some(UiEvent::StartEditing)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), ctx(Panel::Posts, InputMode::Normal)),
            Some(UiEvent::EditSelected)
        );
    }

    #[test]
    fn test_typing_in_editing_mode() {
        let c = ctx(Panel::Body, InputMode::Editing);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), c), Some(UiEvent::CharInput('q')));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), c), Some(UiEvent::StopEditing));
    }

    #[test]
    fn test_enter_adds_newline_only_in_body() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), ctx(Panel::Body, InputMode::Editing)),
            Some(UiEvent::NewLine)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), ctx(Panel::Title, InputMode::Editing)),
            Some(UiEvent::StopEditing)
        );
    }

    #[test]
    fn test_delete_only_from_posts_panel() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), ctx(Panel::Posts, InputMode::Normal)),
            Some(UiEvent::RequestDelete)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), ctx(Panel::Title, InputMode::Normal)),
            None
        );
    }

    #[test]
    fn test_confirmation_prompt_captures_keys() {
        let mut c = ctx(Panel::Posts, InputMode::Normal);
        c.confirming_delete = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('y')), c), Some(UiEvent::ConfirmDelete));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), c), Some(UiEvent::CancelDelete));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), c), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut c = ctx(Panel::Body, InputMode::Editing);
        c.show_help = true;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, c), Some(UiEvent::Quit));
    }

    #[test]
    fn test_esc_cancels_edit_only_when_editing_post() {
        let mut c = ctx(Panel::Posts, InputMode::Normal);
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), c), None);
        c.editing_post = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), c), Some(UiEvent::CancelEdit));
    }
}
