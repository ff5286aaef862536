use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: u16 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.request_random_fact();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.random_fact().is_visible() {
                app.dismiss_random_fact();
            } else {
                app.request_quit();
            }
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::tests::test_app;
    use crate::ui::app::UiCommand;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_and_enter_submit() {
        let (mut app, mut rx) = test_app(4);
        for ch in "Cats purr.".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::AddFact {
                text: "Cats purr.".into()
            }
        );
        assert!(app.form().is_pending());
    }

    #[test]
    fn control_chords_are_not_typed() {
        let (mut app, mut rx) = test_app(4);
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.form().input, "");

        handle_key(&mut app, ctrl('r'));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::FetchRandom);
        assert_eq!(app.form().input, "");
    }

    #[test]
    fn escape_dismisses_banner_before_quitting() {
        let (mut app, _rx) = test_app(4);
        handle_key(&mut app, ctrl('r'));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.should_quit());
        assert!(!app.random_fact().is_visible());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut app, _rx) = test_app(1);
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn backspace_edits_input() {
        let (mut app, _rx) = test_app(1);
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('b')));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.form().input, "a");
    }
}
