//! Application state management for the terminal client.
//!
//! This module contains the main application state, the mode machine for
//! the modal surfaces, and the create-project form state.

use crate::application::toast::ToastStore;
use crate::application::workflow::SubmissionPhase;
use crate::domain::{FieldErrors, FormField, Project, ProjectDraft};

/// Represents the current input mode of the application.
///
/// The mode determines how keyboard input is interpreted and which
/// overlay, if any, is drawn above the current screen.
#[derive(Debug)]
pub enum AppMode {
    /// Browsing the current screen - navigation keys and shortcuts
    List,
    /// The create-project modal is open and owns all input
    CreateProject,
    /// Help screen is displayed
    Help,
}

/// The navigation target currently on screen.
///
/// Navigation is an explicit state transition rather than an ambient
/// effect: the submission workflow requests a route change and the
/// presentation layer renders whatever route is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The project list screen
    Projects,
    /// A single project's dashboard, addressed by its subdomain
    Dashboard { subdomain: String },
}

impl Route {
    /// Path form of the route, as the hosted dashboard would address it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tprj::application::Route;
    ///
    /// let route = Route::Dashboard { subdomain: "acme".to_string() };
    /// assert_eq!(route.path(), "/dashboard/acme");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Route::Projects => "/projects".to_string(),
            Route::Dashboard { subdomain } => format!("/dashboard/{}", subdomain),
        }
    }
}

/// A single-line text input with a cursor.
///
/// The cursor is a character index, so editing stays on character
/// boundaries for multi-byte input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }

    pub fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, ch: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text at the cursor, skipping control characters.
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.insert(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let index = self.byte_index(self.cursor - 1);
            self.value.remove(index);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len_chars() {
            let index = self.byte_index(self.cursor);
            self.value.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// State of the create-project form: two text fields, the focused field,
/// and the field-keyed validation messages.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub name: TextField,
    pub subdomain: TextField,
    pub focus: FormField,
    pub errors: FieldErrors,
}

impl ProjectForm {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Subdomain => &mut self.subdomain,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Subdomain,
            FormField::Subdomain => FormField::Name,
        };
    }

    pub fn focus_previous(&mut self) {
        // Two fields, so previous and next coincide.
        self.focus_next();
    }

    /// Snapshot of the form for a submission attempt.
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.value.clone(),
            subdomain: self.subdomain.value.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.subdomain.clear();
        self.focus = FormField::Name;
        self.errors = FieldErrors::default();
    }
}

/// Main application state.
///
/// Holds everything needed to render the terminal UI and run the
/// create-project workflow: the known projects, the current route and
/// mode, the form, the submission phase, and the toast store.
///
/// # Examples
///
/// ```
/// use tprj::application::{App, Route};
///
/// let app = App::default();
/// assert_eq!(app.route, Route::Projects);
/// assert!(app.projects.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Projects known to belong to the caller
    pub projects: Vec<Project>,
    /// Screen currently rendered
    pub route: Route,
    /// Input mode / overlay state
    pub mode: AppMode,
    /// Create-project form state
    pub form: ProjectForm,
    /// Whether a creation request is in flight
    pub submission: SubmissionPhase,
    /// Transient notifications
    pub toasts: ToastStore,
    /// Selected row in the project list (zero-based)
    pub selected: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            route: Route::Projects,
            mode: AppMode::List,
            form: ProjectForm::default(),
            submission: SubmissionPhase::Idle,
            toasts: ToastStore::default(),
            selected: 0,
            help_scroll: 0,
        }
    }
}

impl App {
    /// Creates the application state from a freshly fetched project list.
    ///
    /// A caller with no projects is taken straight into the create
    /// modal; the dismiss guard then keeps it open until a project
    /// exists.
    pub fn new(projects: Vec<Project>) -> Self {
        let mut app = Self {
            projects,
            ..Self::default()
        };
        if app.projects.is_empty() {
            app.open_create_modal();
        }
        app
    }

    /// Opens the create-project modal with a blank form.
    pub fn open_create_modal(&mut self) {
        self.mode = AppMode::CreateProject;
        self.form.reset();
    }

    /// Closes the modal and clears the form. Reached only through the
    /// submission workflow or the dismiss guard.
    pub fn close_create_modal(&mut self) {
        self.mode = AppMode::List;
        self.form.reset();
    }

    /// Handles the modal's dismiss affordance (Esc).
    ///
    /// Callers who already have at least one project may dismiss the
    /// modal; with zero projects the request is ignored and the modal
    /// stays open. No message is shown either way.
    pub fn request_dismiss(&mut self) {
        if !self.projects.is_empty() {
            self.close_create_modal();
        }
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::List;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.projects.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    /// Navigates to a project dashboard.
    pub fn navigate_to_dashboard(&mut self, subdomain: impl Into<String>) {
        self.route = Route::Dashboard {
            subdomain: subdomain.into(),
        };
    }

    /// Returns to the project list screen.
    pub fn navigate_to_projects(&mut self) {
        self.route = Route::Projects;
    }

    /// Looks up a known project by its subdomain.
    pub fn project_by_subdomain(&self, subdomain: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.subdomain == subdomain)
    }
}
