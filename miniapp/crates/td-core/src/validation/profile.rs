use crate::validation::{
    FormField, MAX_BIO_CHARS, MAX_HEIGHT_CM, MIN_BIO_CHARS, MIN_HEIGHT_CM, MIN_MEMBER_AGE,
    ValidationReport, is_blank,
};
use crate::{ProfileDraft, ProfileUpdate};

use chrono::NaiveDate;
use serde::Serialize;

/// Pages of the profile wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStep {
    /// Name, birth date, gender, height
    Basics,
    /// Home and desired location
    Location,
    /// Who the member is looking for
    Seeking,
    /// Bio and lifestyle
    About,
}

impl ProfileStep {
    pub const FIRST: ProfileStep = ProfileStep::Basics;
    pub const LAST: ProfileStep = ProfileStep::About;

    /// One-based position, as shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Location => 2,
            Self::Seeking => 3,
            Self::About => 4,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Location),
            Self::Location => Some(Self::Seeking),
            Self::Seeking => Some(Self::About),
            Self::About => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::Location => Some(Self::Basics),
            Self::Seeking => Some(Self::Location),
            Self::About => Some(Self::Seeking),
        }
    }
}

/// Per-step and whole-draft checks for the profile wizard
pub struct ProfileValidator;

impl ProfileValidator {
    /// Validate the fields shown on one wizard page.
    /// `today` anchors the minimum-age check.
    pub fn validate_step(draft: &ProfileDraft, step: ProfileStep, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::new();

        if is_blank(&draft.user_id) {
            report.insert(FormField::UserId, "form.validation.userIdRequired");
        }

        match step {
            ProfileStep::Basics => Self::check_basics(draft, today, &mut report),
            ProfileStep::Location => Self::check_location(draft, &mut report),
            ProfileStep::Seeking => Self::check_seeking(draft, &mut report),
            ProfileStep::About => Self::check_about(&draft.bio, &mut report),
        }

        report
    }

    /// Validate every page at once (used before a direct submit)
    pub fn validate(draft: &ProfileDraft, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut step = Some(ProfileStep::FIRST);
        while let Some(current) = step {
            report.merge(Self::validate_step(draft, current, today));
            step = current.next();
        }
        report
    }

    /// Validate only the fields an edit actually touches
    pub fn validate_update(update: &ProfileUpdate) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Some(first_name) = &update.first_name
            && is_blank(first_name)
        {
            report.insert(FormField::FirstName, "form.validation.firstNameRequired");
        }
        if let Some(last_name) = &update.last_name
            && is_blank(last_name)
        {
            report.insert(FormField::LastName, "form.validation.lastNameRequired");
        }
        if let Some(height) = update.height {
            Self::check_height(height, &mut report);
        }
        if let Some(country) = &update.country
            && is_blank(country)
        {
            report.insert(FormField::Country, "form.validation.countryRequired");
        }
        if let Some(city) = &update.city
            && is_blank(city)
        {
            report.insert(FormField::City, "form.validation.cityRequired");
        }
        if let Some(interests) = &update.interests
            && interests.is_empty()
        {
            report.insert(FormField::Interests, "form.validation.interestsRequired");
        }
        if let Some(languages) = &update.languages
            && languages.is_empty()
        {
            report.insert(FormField::Languages, "form.validation.languagesRequired");
        }
        if let Some(bio) = &update.bio {
            Self::check_about(bio, &mut report);
        }

        report
    }

    fn check_basics(draft: &ProfileDraft, today: NaiveDate, report: &mut ValidationReport) {
        if is_blank(&draft.first_name) {
            report.insert(FormField::FirstName, "form.validation.firstNameRequired");
        }
        if is_blank(&draft.last_name) {
            report.insert(FormField::LastName, "form.validation.lastNameRequired");
        }

        match draft.birth_date {
            None => report.insert(FormField::BirthDate, "form.validation.birthDateRequired"),
            Some(born) => {
                // A birth date in the future yields no age at all
                let adult = today
                    .years_since(born)
                    .is_some_and(|age| age >= MIN_MEMBER_AGE);
                if !adult {
                    report.insert(FormField::BirthDate, "form.validation.ageRequired");
                }
            }
        }

        if draft.gender.is_none() {
            report.insert(FormField::Gender, "form.validation.genderRequired");
        }
        Self::check_height(draft.height, report);
    }

    fn check_height(height: u16, report: &mut ValidationReport) {
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height) {
            report.insert(FormField::Height, "form.validation.heightRequired");
        }
    }

    fn check_location(draft: &ProfileDraft, report: &mut ValidationReport) {
        if is_blank(&draft.country) {
            report.insert(FormField::Country, "form.validation.countryRequired");
        }
        if is_blank(&draft.city) {
            report.insert(FormField::City, "form.validation.cityRequired");
        }
        if is_blank(&draft.desired_location.country) {
            report.insert(
                FormField::DesiredLocationCountry,
                "form.validation.desiredLocationCountryRequired",
            );
        }
        if is_blank(&draft.desired_location.city) {
            report.insert(
                FormField::DesiredLocationCity,
                "form.validation.desiredLocationCityRequired",
            );
        }
    }

    fn check_seeking(draft: &ProfileDraft, report: &mut ValidationReport) {
        if draft.seeking_gender.is_none() {
            report.insert(FormField::SeekingGender, "form.validation.seekingGenderRequired");
        }
        if draft.dating_goal.is_none() {
            report.insert(FormField::DatingGoal, "form.validation.datingGoalRequired");
        }
        if draft.interests.is_empty() {
            report.insert(FormField::Interests, "form.validation.interestsRequired");
        }
        if draft.languages.is_empty() {
            report.insert(FormField::Languages, "form.validation.languagesRequired");
        }
    }

    fn check_about(bio: &str, report: &mut ValidationReport) {
        let length = bio.trim().chars().count();
        if length == 0 {
            report.insert(FormField::Bio, "form.validation.bioRequired");
        } else if length < MIN_BIO_CHARS {
            report.insert(FormField::Bio, "form.validation.bioMinLength");
        } else if length > MAX_BIO_CHARS {
            report.insert(FormField::Bio, "form.validation.bioMaxLength");
        }
    }
}
