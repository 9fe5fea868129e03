use crate::PreferencesDraft;
use crate::validation::{
    FormField, MAX_DISTANCE_KM, MAX_PREFERRED_AGE, MIN_DISTANCE_KM, MIN_PREFERRED_AGE,
    ValidationReport, is_blank,
};

pub struct PreferencesValidator;

impl PreferencesValidator {
    pub fn validate(draft: &PreferencesDraft) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&draft.user_id) {
            report.insert(FormField::UserId, "form.validation.userIdRequired");
        }
        if draft.gender_preference.is_none() {
            report.insert(
                FormField::GenderPreference,
                "form.validation.genderPreferenceRequired",
            );
        }

        let age_range = MIN_PREFERRED_AGE..=MAX_PREFERRED_AGE;
        if !draft.min_age.is_some_and(|age| age_range.contains(&age)) {
            report.insert(FormField::MinAge, "form.validation.minAgeRequired");
        }
        if !draft.max_age.is_some_and(|age| age_range.contains(&age)) {
            report.insert(FormField::MaxAge, "form.validation.maxAgeRequired");
        }
        if let (Some(min), Some(max)) = (draft.min_age, draft.max_age)
            && min > max
        {
            report.insert(FormField::MaxAge, "form.validation.ageRangeInvalid");
        }

        if draft.location_preference.is_none() {
            report.insert(
                FormField::LocationPreference,
                "form.validation.locationPreferenceRequired",
            );
        }
        if !(MIN_DISTANCE_KM..=MAX_DISTANCE_KM).contains(&draft.max_distance) {
            report.insert(FormField::MaxDistance, "form.validation.maxDistanceRange");
        }
        if draft.dating_goal_preference.is_empty() {
            report.insert(
                FormField::DatingGoalPreference,
                "form.validation.datingGoalPreferenceRequired",
            );
        }

        report
    }
}
