use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The open menu overlay captures everything else.
    if app.nav().menu_open {
        handle_menu_key(app, key);
        return;
    }

    match app.focus() {
        Focus::Page => handle_page_key(app, key, now),
        Focus::Carousel => handle_carousel_key(app, key),
        Focus::Form => handle_form_key(app, key),
        Focus::Newsletter => handle_newsletter_key(app, key, now),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.close_menu(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter => app.menu_activate(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 {
                app.navigate_to(index - 1);
            }
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('n') => app.focus_newsletter(),
        KeyCode::Tab => app.focus_carousel(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1, now),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1, now),
        KeyCode::PageUp => app.scroll_page(-1, now),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(1, now),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(now),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(now),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 {
                app.navigate_to(index - 1);
            }
        }
        _ => {}
    }
}

fn handle_carousel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus_page(),
        KeyCode::Tab => app.focus_form(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.carousel_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.carousel_next(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Dots are numbered 1..=N, mirroring the item list.
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 && index <= app.carousel().len() {
                app.carousel_select(index - 1);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus_page(),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Tab | KeyCode::Down => app.contact_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact_focus_prev(),
        KeyCode::Backspace => app.contact_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.contact_type(ch);
        }
        _ => {}
    }
}

fn handle_newsletter_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus_page(),
        KeyCode::Enter => app.newsletter_subscribe(now),
        KeyCode::Backspace => app.newsletter_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.newsletter_type(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        let mut app = App::new();
        app.on_resize(40, Instant::now());
        app
    }

    #[test]
    fn q_quits_from_page_focus() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn typing_q_into_the_form_does_not_quit() {
        let mut app = make_app();
        app.focus_form();
        handle_key(&mut app, press(KeyCode::Char('q')), Instant::now());
        assert!(!app.should_quit());
        assert_eq!(app.contact().fields.name, "q");
    }

    #[test]
    fn menu_digit_navigates_and_closes_menu() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('m')), Instant::now());
        assert!(app.nav().menu_open);
        handle_key(&mut app, press(KeyCode::Char('5')), Instant::now());
        assert!(!app.nav().menu_open);
        assert!(app.page().is_animating());
    }

    #[test]
    fn tab_cycles_page_to_carousel_to_form() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab), Instant::now());
        assert_eq!(app.focus(), Focus::Carousel);
        handle_key(&mut app, press(KeyCode::Tab), Instant::now());
        assert_eq!(app.focus(), Focus::Form);
    }

    #[test]
    fn carousel_keys_drive_navigation() {
        let mut app = make_app();
        app.focus_carousel();
        handle_key(&mut app, press(KeyCode::Right), Instant::now());
        assert_eq!(app.carousel().active_index(), 1);
        assert!(!app.carousel().autoplay());
        handle_key(&mut app, press(KeyCode::Char('1')), Instant::now());
        assert_eq!(app.carousel().active_index(), 0);
    }

    #[test]
    fn n_focuses_the_newsletter_input() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('n')), Instant::now());
        assert_eq!(app.focus(), Focus::Newsletter);
        assert!(app.page().is_animating());
        handle_key(&mut app, press(KeyCode::Char('h')), Instant::now());
        handle_key(&mut app, press(KeyCode::Esc), Instant::now());
        assert_eq!(app.focus(), Focus::Page);
        assert_eq!(app.newsletter().email, "h");
    }

    #[test]
    fn out_of_range_dot_key_is_ignored() {
        let mut app = make_app();
        app.focus_carousel();
        handle_key(&mut app, press(KeyCode::Char('9')), Instant::now());
        assert_eq!(app.carousel().active_index(), 0);
        assert!(app.carousel().autoplay());
    }
}
