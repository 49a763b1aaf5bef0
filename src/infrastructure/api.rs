//! HTTP gateway to the project service.
//!
//! [`ProjectsGateway`] is the seam the rest of the app depends on; the
//! blocking [`HttpProjectsGateway`] is the production implementation.
//! Classification of the service's error wording into structured
//! [`MutationError`] variants happens here, next to the code that owns
//! the wire contract, so nothing downstream matches on message text.

use crate::domain::{
    CreateProjectOutcome, CreatedProject, FormField, MutationError, MutationResult, Project,
    ProjectCreationInput,
};
use crate::infrastructure::config::Config;
use serde::{Deserialize, Serialize};

/// Substring the service's database layer emits for uniqueness
/// violations, e.g. "Unique constraint failed on the fields: (`subdomain`)".
const UNIQUE_CONSTRAINT_MARKER: &str = "Unique constraint failed";

/// Remote collaborator owning project records.
pub trait ProjectsGateway {
    /// Fetches the caller's projects.
    fn list_projects(&self) -> MutationResult<Vec<Project>>;

    /// Creates a project. A nominal success may still lack a project
    /// payload; the workflow decides what that means.
    fn create_project(&self, input: &ProjectCreationInput)
        -> MutationResult<CreateProjectOutcome>;
}

#[derive(Serialize)]
struct CreateProjectRequest<'a> {
    name: &'a str,
    subdomain: &'a str,
}

#[derive(Deserialize)]
struct CreateProjectResponse {
    #[serde(default)]
    project: Option<CreatedProject>,
}

#[derive(Deserialize)]
struct ListProjectsResponse {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Blocking HTTP implementation of [`ProjectsGateway`].
///
/// No retries and no explicit timeout: every failure is terminal for
/// the attempt, and a request that never resolves leaves the caller
/// waiting.
pub struct HttpProjectsGateway {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpProjectsGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn authorize(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ProjectsGateway for HttpProjectsGateway {
    fn list_projects(&self) -> MutationResult<Vec<Project>> {
        let request = self.client.get(format!("{}/projects", self.base_url));
        let response = self
            .authorize(request)
            .send()
            .map_err(|e| MutationError::Message(e.to_string()))?;

        if response.status().is_success() {
            let body: ListProjectsResponse = response
                .json()
                .map_err(|e| MutationError::Unexpected(e.to_string()))?;
            Ok(body.projects)
        } else {
            Err(error_from_response(response))
        }
    }

    fn create_project(
        &self,
        input: &ProjectCreationInput,
    ) -> MutationResult<CreateProjectOutcome> {
        let payload = CreateProjectRequest {
            name: input.name.as_ref(),
            subdomain: input.subdomain.as_ref(),
        };
        let request = self
            .client
            .post(format!("{}/projects", self.base_url))
            .json(&payload);
        let response = self
            .authorize(request)
            .send()
            .map_err(|e| MutationError::Message(e.to_string()))?;

        if response.status().is_success() {
            let body: CreateProjectResponse = response
                .json()
                .map_err(|e| MutationError::Unexpected(e.to_string()))?;
            Ok(CreateProjectOutcome {
                project: body.project,
            })
        } else {
            Err(error_from_response(response))
        }
    }
}

/// Maps a non-success response to a structured error. Bodies of the
/// shape `{"error": "..."}` are classified by wording; anything else is
/// unexpected.
fn error_from_response(response: reqwest::blocking::Response) -> MutationError {
    let status = response.status();
    match response.json::<ErrorResponse>() {
        Ok(body) => classify_backend_message(&body.error),
        Err(_) => MutationError::Unexpected(format!("service returned {}", status)),
    }
}

/// Classifies the service's error wording into a structured variant.
///
/// The uniqueness-constraint wording naming the subdomain field becomes
/// a [`MutationError::Conflict`]; every other message is forwarded as
/// [`MutationError::Message`] for the form to display verbatim.
pub fn classify_backend_message(message: &str) -> MutationError {
    if message.contains(UNIQUE_CONSTRAINT_MARKER) && message.contains("subdomain") {
        MutationError::Conflict {
            field: FormField::Subdomain,
        }
    } else {
        MutationError::Message(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uniqueness_wording_as_conflict() {
        let error =
            classify_backend_message("Unique constraint failed on the fields: (`subdomain`)");
        assert_eq!(
            error,
            MutationError::Conflict {
                field: FormField::Subdomain
            }
        );
    }

    #[test]
    fn test_classify_other_messages_verbatim() {
        let error = classify_backend_message("Network unreachable");
        assert_eq!(error, MutationError::Message("Network unreachable".to_string()));

        // Uniqueness wording about some other field is not a subdomain
        // conflict.
        let error = classify_backend_message("Unique constraint failed on the fields: (`name`)");
        assert_eq!(
            error,
            MutationError::Message(
                "Unique constraint failed on the fields: (`name`)".to_string()
            )
        );
    }

    #[test]
    fn test_create_response_with_project() {
        let body: CreateProjectResponse =
            serde_json::from_str(r#"{"project":{"id":"p1","subdomain":"acme"}}"#).unwrap();
        let project = body.project.unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.subdomain, "acme");
    }

    #[test]
    fn test_create_response_without_project() {
        let body: CreateProjectResponse = serde_json::from_str("{}").unwrap();
        assert!(body.project.is_none());
    }

    #[test]
    fn test_list_response_decoding() {
        let body: ListProjectsResponse = serde_json::from_str(
            r#"{"projects":[{"id":"p1","name":"Acme","subdomain":"acme"}]}"#,
        )
        .unwrap();
        assert_eq!(body.projects.len(), 1);
        assert_eq!(body.projects[0].name, "Acme");
    }

    #[test]
    fn test_request_payload_shape() {
        let request = CreateProjectRequest {
            name: "Acme Website",
            subdomain: "acme",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Acme Website", "subdomain": "acme"})
        );
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = Config {
            api_url: "http://localhost:3000/api/".to_string(),
            api_token: None,
        };
        let gateway = HttpProjectsGateway::new(&config);
        assert_eq!(gateway.base_url, "http://localhost:3000/api");
    }
}
