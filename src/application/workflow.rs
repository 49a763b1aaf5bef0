//! Create-project submission workflow.
//!
//! The workflow is an explicit state machine: `Idle -> Submitting`, then
//! back to `Idle` on every completion path. Because the event loop
//! performs effectful work synchronously between draws, submission is
//! split into two operations that bracket the gateway call:
//!
//! 1. [`App::begin_submission`] validates the form and, when valid,
//!    enters `Submitting` and hands back the input to send.
//! 2. The input layer invokes the gateway.
//! 3. [`App::complete_submission`] applies the outcome - toasts, route
//!    change, field errors, modal close - and returns to `Idle`.
//!
//! The policy split between outcomes is deliberate: a failure the user
//! can correct (a taken subdomain, a service-supplied message) keeps the
//! modal open with an inline field error, while an unrecognizable
//! failure closes the modal behind a generic toast.

use crate::application::state::App;
use crate::application::toast::{CREATE_PROJECT_TOAST, ToastKind};
use crate::domain::{
    conflict_message, validate, CreateProjectOutcome, FormField, MutationError, Project,
    ProjectCreationInput,
};

/// Whether a creation request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

pub const CREATING_MESSAGE: &str = "Creating project...";
pub const CREATED_MESSAGE: &str = "Project created";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create project";

impl App {
    /// Starts a submission attempt from the current form state.
    ///
    /// Returns the validated input to send to the service, or `None`
    /// when nothing should be sent: a request is already in flight, or
    /// validation failed (the field errors are stored on the form and
    /// the network is never touched).
    ///
    /// On a valid draft the phase moves to `Submitting` and a persistent
    /// loading toast is shown under the `create-project` key.
    pub fn begin_submission(&mut self) -> Option<ProjectCreationInput> {
        if self.submission == SubmissionPhase::Submitting {
            return None;
        }
        match validate(&self.form.draft()) {
            Ok(input) => {
                self.form.errors = Default::default();
                self.submission = SubmissionPhase::Submitting;
                self.toasts
                    .show(CREATE_PROJECT_TOAST, ToastKind::Loading, CREATING_MESSAGE);
                Some(input)
            }
            Err(errors) => {
                self.form.errors = errors;
                None
            }
        }
    }

    /// Applies the outcome of the gateway call and returns to `Idle`.
    ///
    /// Success with a usable identifier replaces the loading toast with
    /// a success toast, records the project, navigates to its dashboard
    /// using the server-echoed subdomain, and closes the modal. A
    /// nominal success without a usable identifier is treated as an
    /// unexpected failure rather than closing the modal silently.
    pub fn complete_submission(&mut self, result: Result<CreateProjectOutcome, MutationError>) {
        match result {
            Ok(outcome) => match outcome.project {
                Some(created) if !created.id.is_empty() => {
                    self.toasts
                        .show(CREATE_PROJECT_TOAST, ToastKind::Success, CREATED_MESSAGE);
                    self.projects.push(Project {
                        id: created.id,
                        name: self.form.name.value.clone(),
                        subdomain: created.subdomain.clone(),
                    });
                    self.selected = self.projects.len() - 1;
                    self.navigate_to_dashboard(created.subdomain);
                    self.close_create_modal();
                }
                _ => {
                    self.toasts.show(
                        CREATE_PROJECT_TOAST,
                        ToastKind::Error,
                        CREATE_FAILED_MESSAGE,
                    );
                    self.close_create_modal();
                }
            },
            Err(MutationError::Conflict { field }) => {
                // Correctable: drop the loading toast, keep the modal
                // open with the inline message.
                self.toasts.dismiss(CREATE_PROJECT_TOAST);
                self.form.errors.set(field, conflict_message(field));
            }
            Err(MutationError::Message(message)) => {
                self.toasts.dismiss(CREATE_PROJECT_TOAST);
                self.form.errors.set(FormField::Subdomain, message);
            }
            Err(MutationError::Unexpected(_)) => {
                self.toasts.show(
                    CREATE_PROJECT_TOAST,
                    ToastKind::Error,
                    CREATE_FAILED_MESSAGE,
                );
                self.close_create_modal();
            }
        }
        self.submission = SubmissionPhase::Idle;
    }

    /// True while the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::{AppMode, Route};
    use crate::domain::{
        CreatedProject, NAME_TOO_SHORT, SUBDOMAIN_INVALID, SUBDOMAIN_TAKEN,
    };

    fn app_with_valid_form() -> App {
        let mut app = App::new(Vec::new());
        app.form.name.insert_text("Acme Website");
        app.form.focus_next();
        app.form.focused_mut().insert_text("acme");
        app
    }

    fn success(id: &str, subdomain: &str) -> Result<CreateProjectOutcome, MutationError> {
        Ok(CreateProjectOutcome {
            project: Some(CreatedProject {
                id: id.to_string(),
                subdomain: subdomain.to_string(),
            }),
        })
    }

    #[test]
    fn test_begin_submission_valid_draft() {
        let mut app = app_with_valid_form();
        let input = app.begin_submission().unwrap();

        assert_eq!(input.name.as_ref(), "Acme Website");
        assert_eq!(input.subdomain.as_ref(), "acme");
        assert_eq!(app.submission, SubmissionPhase::Submitting);

        let toast = app.toasts.get(CREATE_PROJECT_TOAST).unwrap();
        assert_eq!(toast.kind, ToastKind::Loading);
        assert_eq!(toast.message, CREATING_MESSAGE);
    }

    #[test]
    fn test_begin_submission_invalid_draft_never_submits() {
        let mut app = App::new(Vec::new());
        app.form.name.insert_text("ab");
        app.form.subdomain.insert_text("my-app");

        assert!(app.begin_submission().is_none());
        assert_eq!(app.submission, SubmissionPhase::Idle);
        assert!(app.toasts.is_empty());
        assert_eq!(app.form.errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(
            app.form.errors.subdomain.as_deref(),
            Some(SUBDOMAIN_INVALID)
        );
    }

    #[test]
    fn test_begin_submission_refuses_while_submitting() {
        let mut app = app_with_valid_form();
        assert!(app.begin_submission().is_some());
        assert!(app.begin_submission().is_none());
    }

    #[test]
    fn test_success_navigates_with_server_echoed_subdomain() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        // The server may normalize the subdomain; its echo wins.
        app.complete_submission(success("p1", "acme2"));

        assert_eq!(
            app.route,
            Route::Dashboard {
                subdomain: "acme2".to_string()
            }
        );
        assert!(matches!(app.mode, AppMode::List));
        assert_eq!(app.submission, SubmissionPhase::Idle);

        let toast = app.toasts.get(CREATE_PROJECT_TOAST).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_success_records_created_project() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(success("p1", "acme"));

        assert_eq!(app.projects.len(), 1);
        let project = &app.projects[0];
        assert_eq!(project.id, "p1");
        assert_eq!(project.name, "Acme Website");
        assert_eq!(project.subdomain, "acme");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_success_without_payload_is_a_failure() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(Ok(CreateProjectOutcome { project: None }));

        assert!(matches!(app.mode, AppMode::List));
        assert_eq!(app.route, Route::Projects);
        assert!(app.projects.is_empty());

        let toast = app.toasts.get(CREATE_PROJECT_TOAST).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, CREATE_FAILED_MESSAGE);
    }

    #[test]
    fn test_success_with_empty_id_is_a_failure() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(success("", "acme"));

        assert!(matches!(app.mode, AppMode::List));
        assert!(app.projects.is_empty());
        let toast = app.toasts.get(CREATE_PROJECT_TOAST).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_conflict_keeps_modal_open_with_fixed_message() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(Err(MutationError::Conflict {
            field: FormField::Subdomain,
        }));

        assert!(matches!(app.mode, AppMode::CreateProject));
        assert_eq!(app.submission, SubmissionPhase::Idle);
        assert_eq!(app.form.errors.subdomain.as_deref(), Some(SUBDOMAIN_TAKEN));
        // Removed, not replaced: no toast remains in this branch.
        assert!(app.toasts.get(CREATE_PROJECT_TOAST).is_none());
    }

    #[test]
    fn test_service_message_forwarded_verbatim() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(Err(MutationError::Message(
            "Network unreachable".to_string(),
        )));

        assert!(matches!(app.mode, AppMode::CreateProject));
        assert_eq!(
            app.form.errors.subdomain.as_deref(),
            Some("Network unreachable")
        );
        assert!(app.toasts.get(CREATE_PROJECT_TOAST).is_none());
    }

    #[test]
    fn test_unexpected_failure_closes_modal_with_generic_toast() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(Err(MutationError::Unexpected(
            "connection reset".to_string(),
        )));

        assert!(matches!(app.mode, AppMode::List));
        assert_eq!(app.submission, SubmissionPhase::Idle);
        let toast = app.toasts.get(CREATE_PROJECT_TOAST).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, CREATE_FAILED_MESSAGE);
    }

    #[test]
    fn test_resubmission_allowed_after_completion() {
        let mut app = app_with_valid_form();
        app.begin_submission().unwrap();
        app.complete_submission(Err(MutationError::Message("busy".to_string())));
        assert!(app.begin_submission().is_some());
    }
}
