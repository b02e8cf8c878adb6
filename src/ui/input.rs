//! 键盘事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::{Action, Effect};
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    // Windows 上 AltGr 输入的字符带有 CONTROL|ALT，按普通字符处理
    let altgr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !altgr;
    let alt = key.modifiers.contains(KeyModifiers::ALT) && !altgr;

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('s') if ctrl => Some(Action::Submit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(Action::Input(c)),

        KeyCode::Up if ctrl => Some(Action::ScrollUp),
        KeyCode::Down if ctrl => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),

        KeyCode::Enter => Some(Action::Newline),
        KeyCode::Tab => Some(Action::Indent),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::F(5) => Some(Action::Submit),
        KeyCode::F(2) => Some(Action::ToggleStructure),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// 处理终端事件
pub fn handle_event(app: &mut App, event: Event) -> Option<Effect> {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(key)?,
        Event::Paste(text) => Action::Paste(text),
        _ => return None,
    };
    app.dispatch(action)
}
