use crate::application::{App, AppMode, Route};
use crate::infrastructure::ProjectsGateway;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        gateway: &dyn ProjectsGateway,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match app.mode {
            AppMode::List => Self::handle_list_mode(app, key, modifiers),
            AppMode::CreateProject => Self::handle_create_mode(app, gateway, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_list_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('n') = key {
                app.open_create_modal();
                return;
            }
        }

        // Any other keypress settles the transient feedback.
        app.toasts.clear_settled();

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next();
            }
            KeyCode::Enter => {
                if app.route == Route::Projects {
                    if let Some(project) = app.selected_project() {
                        let subdomain = project.subdomain.clone();
                        app.navigate_to_dashboard(subdomain);
                    }
                }
            }
            KeyCode::Char('n') => {
                app.open_create_modal();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Esc => {
                app.navigate_to_projects();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_create_mode(
        app: &mut App,
        gateway: &dyn ProjectsGateway,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('v') = key {
                Self::paste_into_focused(app);
                return;
            }
        }

        match key {
            KeyCode::Enter => {
                if let Some(input) = app.begin_submission() {
                    let result = gateway.create_project(&input);
                    app.complete_submission(result);
                }
            }
            KeyCode::Esc => {
                app.request_dismiss();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.form.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.form.focus_previous();
            }
            KeyCode::Backspace => {
                app.form.errors.clear(app.form.focus);
                app.form.focused_mut().backspace();
            }
            KeyCode::Delete => {
                app.form.errors.clear(app.form.focus);
                app.form.focused_mut().delete();
            }
            KeyCode::Left => {
                app.form.focused_mut().move_left();
            }
            KeyCode::Right => {
                app.form.focused_mut().move_right();
            }
            KeyCode::Home => {
                app.form.focused_mut().move_home();
            }
            KeyCode::End => {
                app.form.focused_mut().move_end();
            }
            KeyCode::Char(ch) => {
                // Typing into a field clears that field's stale error.
                app.form.errors.clear(app.form.focus);
                app.form.focused_mut().insert(ch);
            }
            _ => {}
        }
    }

    fn paste_into_focused(app: &mut App) {
        // Clipboard access is best effort; a headless session simply
        // pastes nothing.
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Ok(text) = clipboard.get_text() {
                app.form.errors.clear(app.form.focus);
                app.form.focused_mut().insert_text(&text);
            }
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
