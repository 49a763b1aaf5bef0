use crate::domain::validation::{ProjectName, Subdomain};
use serde::{Deserialize, Serialize};

/// A project known to the service, as listed on the projects screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub subdomain: String,
}

/// The record echoed back by the service after a successful creation.
///
/// The subdomain here is the server's source of truth; navigation uses it
/// rather than the submitted value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedProject {
    pub id: String,
    pub subdomain: String,
}

/// Result of the create-project mutation.
///
/// The service may answer a nominal success without a project payload;
/// callers decide what an absent record means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectOutcome {
    pub project: Option<CreatedProject>,
}

/// Raw snapshot of the create-project form, taken fresh per submission
/// attempt. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub subdomain: String,
}

/// Inputs that have passed client-side validation and are ready to be
/// sent to the service.
#[derive(Debug, Clone)]
pub struct ProjectCreationInput {
    pub name: ProjectName,
    pub subdomain: Subdomain,
}
