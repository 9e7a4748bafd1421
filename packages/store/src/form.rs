//! # Form modals
//!
//! [`FormModal`] is the state of one create/edit dialog: whether it is open,
//! the draft being edited, whether a submit is in flight, and the last error.
//! Validation runs locally before any request is issued; a failing draft never
//! reaches the API.
//!
//! ```text
//! closed --open_create/open_edit--> open --begin_submit--> submitting
//!   ^                                 ^                        |
//!   |                                 +------ failure ---------+
//!   +------------------ success ------------------------------+
//! ```

use api::{ApiError, ApiResult};
use thiserror::Error;

/// Client-side validation failure. The message is shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("End time must be after start time")]
    EndBeforeStart,

    #[error("Please select at least one user")]
    NoRecipients,
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing, or acting on, the record with this id.
    Edit(String),
}

impl FormMode {
    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// A validated draft ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<D> {
    pub mode: FormMode,
    pub draft: D,
}

impl<D> Submission<D> {
    pub fn id(&self) -> Option<&str> {
        self.mode.id()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormModal<D> {
    mode: Option<FormMode>,
    draft: D,
    submitting: bool,
    error: Option<String>,
}

impl<D: Default> Default for FormModal<D> {
    fn default() -> Self {
        Self {
            mode: None,
            draft: D::default(),
            submitting: false,
            error: None,
        }
    }
}

impl<D: Clone + Default + Validate> FormModal<D> {
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&FormMode> {
        self.mode.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, Some(FormMode::Edit(_)))
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_create(&mut self, draft: D) {
        self.open(FormMode::Create, draft);
    }

    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        self.open(FormMode::Edit(id.into()), draft);
    }

    fn open(&mut self, mode: FormMode, draft: D) {
        self.mode = Some(mode);
        self.draft = draft;
        self.submitting = false;
        self.error = None;
    }

    /// Close and discard the draft.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Validate the draft and mark the form as submitting. Returns `None` if
    /// the form is closed, already submitting, or invalid; in the last case
    /// the validation message is stored in [`error`](Self::error).
    pub fn begin_submit(&mut self) -> Option<Submission<D>> {
        let mode = self.mode.clone()?;
        if self.submitting {
            return None;
        }
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(Submission {
            mode,
            draft: self.draft.clone(),
        })
    }

    /// Apply the API result. On success the modal closes and `true` is
    /// returned; on failure it stays open with the draft intact.
    pub fn finish_submit<R>(&mut self, result: ApiResult<R>, fallback: &str) -> bool {
        if !self.submitting {
            return false;
        }
        self.submitting = false;
        match result {
            Ok(_) => {
                self.close();
                true
            }
            Err(ApiError::Unauthorized) => false,
            Err(e) => {
                tracing::warn!("{}: {}", fallback, e);
                self.error = Some(e.user_message(fallback));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, AssetDraft, MemoryTransport, Method, ProjectDraft};
    use serde_json::json;

    fn asset_draft() -> AssetDraft {
        AssetDraft {
            name: "ThinkPad".into(),
            asset_type: "laptop".into(),
            serial_number: "SN-42".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_draft_never_submits() {
        let mut form = FormModal::<AssetDraft>::default();
        form.open_create(AssetDraft::default());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some("Name is required"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut form = FormModal::default();
        form.open_create(asset_draft());
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_closed_form_does_not_submit() {
        let mut form = FormModal::<AssetDraft>::default();
        assert!(form.begin_submit().is_none());
        assert!(!form.finish_submit::<()>(Ok(()), "Failed"));
    }

    #[test]
    fn test_edit_mode_carries_id() {
        let mut form = FormModal::default();
        form.open_edit("a7", asset_draft());
        assert!(form.is_edit());
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.id(), Some("a7"));
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_modal_open() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/assets",
            400,
            json!({"message": "Serial number already exists"}),
        );
        let client = ApiClient::new(transport.clone());

        let mut form = FormModal::default();
        form.open_create(asset_draft());
        let submission = form.begin_submit().unwrap();
        let result = client.create_asset(&submission.draft).await;

        assert!(!form.finish_submit(result, "Failed to create asset"));
        assert!(form.is_open());
        assert_eq!(form.error(), Some("Serial number already exists"));
        assert_eq!(form.draft().serial_number, "SN-42");
        assert!(!form.is_submitting());

        form.draft_mut().serial_number = "SN-43".into();
        let retry = form.begin_submit().unwrap();
        assert_eq!(retry.draft.serial_number, "SN-43");
        assert!(form.is_submitting());
    }

    #[tokio::test]
    async fn test_success_closes_and_resets() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Put, "/projects/p1", 200, json!({"_id": "p1"}));
        let client = ApiClient::new(transport.clone());

        let mut form = FormModal::default();
        form.open_edit(
            "p1",
            ProjectDraft {
                name: "Atlas".into(),
                budget: 1200.0,
                ..Default::default()
            },
        );
        let submission = form.begin_submit().unwrap();
        let id = submission.id().unwrap().to_string();
        let result = client.update_project(&id, &submission.draft).await;

        assert!(form.finish_submit(result, "Failed to update project"));
        assert!(!form.is_open());
        assert_eq!(form.draft(), &ProjectDraft::default());
        assert_eq!(transport.count(Method::Put, "/projects/p1"), 1);
    }
}
