use crate::events::{Focus, Key, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectNext,
    Approve,
    Reject,
}

/// Maps a key event to a review shortcut.
///
/// Shortcuts need Ctrl held and nothing focusable focused, so typing into a
/// form field never approves or rejects anyone.
pub fn resolve(event: &KeyEvent, focus: Focus) -> Option<ShortcutAction> {
    if !event.ctrl || focus != Focus::Body {
        return None;
    }

    match &event.key {
        Key::ArrowDown => Some(ShortcutAction::SelectNext),
        Key::Char('a') => Some(ShortcutAction::Approve),
        Key::Char('j') => Some(ShortcutAction::Reject),
        _ => None,
    }
}
