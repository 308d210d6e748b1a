//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::SourcePicker | Focus::TargetPicker => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNextUnit),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrevUnit),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrev),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNext),
            KeyCode::Char('s') => Some(Action::SwapUnits),
            KeyCode::Enter => Some(Action::FocusNext),
            _ => None,
        },
        Focus::Input => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_picker_keys() {
        let focus = Focus::SourcePicker;
        assert_eq!(get_action(focus, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(get_action(focus, key(KeyCode::Down)), Some(Action::SelectNextUnit));
        assert_eq!(get_action(focus, key(KeyCode::Char('k'))), Some(Action::SelectPrevUnit));
        assert_eq!(get_action(focus, key(KeyCode::Char('s'))), Some(Action::SwapUnits));
        assert_eq!(get_action(focus, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_input_keys_are_text() {
        let focus = Focus::Input;
        assert_eq!(get_action(focus, key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(focus, key(KeyCode::Char('5'))), Some(Action::Input('5')));
        assert_eq!(get_action(focus, key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(get_action(focus, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(get_action(focus, key(KeyCode::Backspace)), Some(Action::DeleteChar));
    }

    #[test]
    fn test_global_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(Focus::Input, ctrl_c), Some(Action::Quit));
        assert_eq!(get_action(Focus::Input, key(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(
            get_action(Focus::TargetPicker, key(KeyCode::BackTab)),
            Some(Action::FocusPrev)
        );
    }

    #[test]
    fn test_handle_key_event() {
        let mut app = App::default();
        app.focus = Focus::TargetPicker;
        assert!(!handle_key_event(&mut app, key(KeyCode::Down)).unwrap());
        assert_eq!(app.state.display_value(), "288.15 K");
        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap());
    }
}
