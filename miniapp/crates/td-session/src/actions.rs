use crate::{SessionApi, SessionOrchestrator};

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use td_client::{ApiClient, ClientResult, MutationReceipt, PhotoFile};
use td_core::{
    FormField, PreferencesDraft, PreferencesValidator, ProfileDraft, ProfileUpdate,
    ProfileValidator, UploadedPhoto, ValidationReport, check_upload,
};

/// Result of an account mutation as the UI needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The server accepted the change and the user was re-fetched
    Saved { receipt: MutationReceipt },
    /// Photos stored by the server
    Uploaded { photos: Vec<UploadedPhoto> },
    /// Nothing to send
    Unchanged,
    /// Local validation failed; nothing was sent
    Invalid { report: ValidationReport },
    /// The server or the network refused the change
    Failed { message: String },
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Saved { .. } | Self::Uploaded { .. } | Self::Unchanged
        )
    }
}

/// Profile, preferences and photo mutations followed by a user re-fetch
pub struct AccountActions<A: SessionApi> {
    client: Arc<ApiClient>,
    session: Arc<SessionOrchestrator<A>>,
}

impl<A: SessionApi> AccountActions<A> {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionOrchestrator<A>>) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Arc<SessionOrchestrator<A>> {
        &self.session
    }

    /// Validate every wizard step and create the profile
    pub async fn submit_profile(&self, draft: &ProfileDraft, today: NaiveDate) -> ActionOutcome {
        let report = ProfileValidator::validate(draft, today);
        if !report.is_valid() {
            return Self::invalid("profile", report);
        }
        let result = self.client.create_profile(draft).await;
        self.saved("create profile", result).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ActionOutcome {
        if update.is_empty() {
            return ActionOutcome::Unchanged;
        }
        let report = ProfileValidator::validate_update(update);
        if !report.is_valid() {
            return Self::invalid("profile update", report);
        }
        let result = self.client.update_profile(update).await;
        self.saved("update profile", result).await
    }

    pub async fn submit_preferences(&self, draft: &PreferencesDraft) -> ActionOutcome {
        let report = PreferencesValidator::validate(draft);
        if !report.is_valid() {
            return Self::invalid("preferences", report);
        }
        let result = self.client.create_preferences(draft).await;
        self.saved("create preferences", result).await
    }

    /// Upload a batch; a single bad file stops the whole batch before any request
    pub async fn upload_photos(&self, files: Vec<PhotoFile>) -> ActionOutcome {
        if files.is_empty() {
            let mut report = ValidationReport::new();
            report.insert(FormField::Photos, "photoUpload.noneSelected");
            return Self::invalid("photo upload", report);
        }
        for file in &files {
            if let Err(rejection) = check_upload(&file.content_type, file.size()) {
                log::warn!("Refusing {}: {rejection}", file.file_name);
                let mut report = ValidationReport::new();
                report.insert(FormField::Photos, rejection.message_key());
                return Self::invalid("photo upload", report);
            }
        }

        match self.client.upload_photos(files).await {
            Ok(photos) => {
                log::info!("Uploaded {} photo(s)", photos.len());
                self.session.refetch().await;
                ActionOutcome::Uploaded { photos }
            }
            Err(e) => {
                log::warn!("Failed to upload photos: {e}");
                ActionOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    pub async fn delete_photo(&self, photo_id: &str) -> ActionOutcome {
        if let Some(report) = Self::check_photo_id(photo_id) {
            return Self::invalid("photo delete", report);
        }
        let result = self.client.delete_photo(photo_id).await;
        self.saved("delete photo", result).await
    }

    pub async fn set_main_photo(&self, photo_id: &str) -> ActionOutcome {
        if let Some(report) = Self::check_photo_id(photo_id) {
            return Self::invalid("main photo", report);
        }
        let result = self.client.set_main_photo(photo_id).await;
        self.saved("set main photo", result).await
    }

    async fn saved(&self, action: &str, result: ClientResult<MutationReceipt>) -> ActionOutcome {
        match result {
            Ok(receipt) => {
                log::info!("{action} succeeded");
                self.session.refetch().await;
                ActionOutcome::Saved { receipt }
            }
            Err(e) => {
                log::warn!("Failed to {action}: {e}");
                ActionOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    fn invalid(form: &str, report: ValidationReport) -> ActionOutcome {
        log::debug!("{form} form has {} invalid field(s)", report.len());
        ActionOutcome::Invalid { report }
    }

    fn check_photo_id(photo_id: &str) -> Option<ValidationReport> {
        if !photo_id.trim().is_empty() {
            return None;
        }
        let mut report = ValidationReport::new();
        report.insert(FormField::Photos, "photoUpload.photoIdRequired");
        Some(report)
    }
}
