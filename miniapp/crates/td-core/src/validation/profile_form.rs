use crate::ProfileDraft;
use crate::validation::{FormField, ProfileStep, ProfileValidator, ValidationReport};

use chrono::NaiveDate;

/// Result of pressing "next" in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormProgress {
    /// The page validated and the wizard moved on
    Advanced(ProfileStep),
    /// The page has errors; the wizard stays where it is
    Blocked,
    /// The last page validated; the draft is ready to submit
    ReadyToSubmit,
}

/// Multi-step profile wizard state
#[derive(Debug, Clone)]
pub struct ProfileForm {
    step: ProfileStep,
    draft: ProfileDraft,
    errors: ValidationReport,
}

impl ProfileForm {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::from_draft(ProfileDraft::new(user_id))
    }

    pub fn from_draft(draft: ProfileDraft) -> Self {
        Self {
            step: ProfileStep::FIRST,
            draft,
            errors: ValidationReport::new(),
        }
    }

    pub fn step(&self) -> ProfileStep {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Change one field; its pending error message is cleared
    pub fn edit<F>(&mut self, field: FormField, change: F)
    where
        F: FnOnce(&mut ProfileDraft),
    {
        change(&mut self.draft);
        self.errors.clear(field);
    }

    /// Validate the current page and advance when it is clean
    pub fn next(&mut self, today: NaiveDate) -> FormProgress {
        self.errors = ProfileValidator::validate_step(&self.draft, self.step, today);
        if !self.errors.is_valid() {
            return FormProgress::Blocked;
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                FormProgress::Advanced(next)
            }
            None => FormProgress::ReadyToSubmit,
        }
    }

    /// Go back one page; stays on the first page
    pub fn back(&mut self) -> ProfileStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Keep a server-side failure visible on the form
    pub fn reject(&mut self, report: ValidationReport) {
        self.errors.merge(report);
    }

    pub fn into_draft(self) -> ProfileDraft {
        self.draft
    }
}
