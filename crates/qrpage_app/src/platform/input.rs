use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use qrpage_core::Msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Msg(Msg),
    Quit,
}

/// Maps a terminal event to a page action, given the current text field contents.
pub fn translate(event: &Event, current: &str) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => translate_key(key, current),
        Event::Paste(pasted) => {
            // Single-line field: drop line breaks like a browser text input does.
            let pasted: String = pasted.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
            if pasted.is_empty() {
                return None;
            }
            Some(Action::Msg(Msg::InputChanged(format!("{current}{pasted}"))))
        }
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, current: &str) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('s') if ctrl => Some(Action::Msg(Msg::DownloadClicked)),
        KeyCode::Char('u') if ctrl => Some(Action::Msg(Msg::InputChanged(String::new()))),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Action::Msg(Msg::InputChanged(format!("{current}{c}")))),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(Action::Msg(Msg::InputChanged(text)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use qrpage_core::Msg;

    use super::{translate, Action};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn changed(text: &str) -> Option<Action> {
        Some(Action::Msg(Msg::InputChanged(text.to_string())))
    }

    #[test]
    fn typing_appends_characters() {
        let event = key(KeyCode::Char('é'), KeyModifiers::NONE);
        assert_eq!(translate(&event, "caf"), changed("café"));

        let event = key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(translate(&event, ""), changed("A"));
    }

    #[test]
    fn backspace_removes_last_char() {
        let event = key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(translate(&event, "café"), changed("caf"));
        assert_eq!(translate(&event, ""), None);
    }

    #[test]
    fn control_shortcuts() {
        assert_eq!(
            translate(&key(KeyCode::Char('s'), KeyModifiers::CONTROL), "x"),
            Some(Action::Msg(Msg::DownloadClicked))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('u'), KeyModifiers::CONTROL), "abc"),
            changed("")
        );
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), "abc"),
            Some(Action::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Esc, KeyModifiers::NONE), ""),
            Some(Action::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Char('x'), KeyModifiers::ALT), "abc"),
            None
        );
    }

    #[test]
    fn paste_appends_without_line_breaks() {
        let event = Event::Paste("line one\r\nline two\n".to_string());
        assert_eq!(translate(&event, ">"), changed(">line oneline two"));
        assert_eq!(translate(&Event::Paste("\n".to_string()), "a"), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release), ""), None);
    }
}
