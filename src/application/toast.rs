//! Keyed transient notifications.
//!
//! Toasts are identified by a fixed key so a later notification can
//! replace an earlier one in place: the create flow shows a loading
//! toast and then swaps it for the success or failure outcome under the
//! same key.

/// Key shared by every notification of the create-project workflow.
pub const CREATE_PROJECT_TOAST: &str = "create-project";
/// Key used by the startup project fetch.
pub const LOAD_PROJECTS_TOAST: &str = "load-projects";

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// An operation is in progress; persists until replaced or dismissed.
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub key: &'static str,
    pub kind: ToastKind,
    pub message: String,
}

/// In-memory store of the toasts currently on screen.
#[derive(Debug, Default)]
pub struct ToastStore {
    toasts: Vec<Toast>,
}

impl ToastStore {
    /// Shows a toast, replacing any existing toast with the same key in
    /// place so it keeps its position on screen.
    pub fn show(&mut self, key: &'static str, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            key,
            kind,
            message: message.into(),
        };
        match self.toasts.iter_mut().find(|t| t.key == key) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }
    }

    /// Removes the toast with the given key, if present.
    pub fn dismiss(&mut self, key: &str) {
        self.toasts.retain(|t| t.key != key);
    }

    pub fn get(&self, key: &str) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drops every settled (non-loading) toast. Called on the next
    /// keypress outside the modal, mirroring how status lines are
    /// cleared elsewhere in the app.
    pub fn clear_settled(&mut self) {
        self.toasts.retain(|t| t.kind == ToastKind::Loading);
    }
}
