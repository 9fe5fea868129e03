use crate::tests::{complete_draft, day};
use crate::validation::MAX_PHOTO_BYTES;
use crate::{
    Catalog, DatingGoal, FormField, GenderPreference, Locale, PreferencesDraft,
    PreferencesValidator, PreferredLocation, ProfileDraft, ProfileStep, ProfileUpdate,
    ProfileValidator, UploadRejection, check_upload,
};

use googletest::prelude::*;

// =========================================================================
// Profile wizard pages
// =========================================================================

#[test]
fn given_complete_draft_when_validate_then_no_errors() {
    let report = ProfileValidator::validate(&complete_draft(), day(2025, 6, 1));
    assert_that!(report.is_valid(), eq(true));
}

#[test]
fn given_empty_basics_when_validate_step_then_each_field_flagged() {
    // Given
    let draft = ProfileDraft {
        height: 90,
        ..ProfileDraft::new("user-1")
    };

    // When
    let report = ProfileValidator::validate_step(&draft, ProfileStep::Basics, day(2025, 6, 1));

    // Then
    assert_that!(report.get(FormField::FirstName), some(eq("form.validation.firstNameRequired")));
    assert_that!(report.get(FormField::LastName), some(eq("form.validation.lastNameRequired")));
    assert_that!(report.get(FormField::BirthDate), some(eq("form.validation.birthDateRequired")));
    assert_that!(report.get(FormField::Gender), some(eq("form.validation.genderRequired")));
    assert_that!(report.get(FormField::Height), some(eq("form.validation.heightRequired")));
    assert_that!(report.len(), eq(5));
}

#[test]
fn given_seventeen_year_old_when_validate_basics_then_age_required() {
    // Given: turns 18 the day after the check
    let draft = ProfileDraft {
        birth_date: Some(day(2007, 6, 2)),
        ..complete_draft()
    };

    // When
    let report = ProfileValidator::validate_step(&draft, ProfileStep::Basics, day(2025, 6, 1));

    // Then
    assert_that!(report.get(FormField::BirthDate), some(eq("form.validation.ageRequired")));
}

#[test]
fn given_eighteenth_birthday_when_validate_basics_then_ok() {
    let draft = ProfileDraft {
        birth_date: Some(day(2007, 6, 1)),
        ..complete_draft()
    };
    let report = ProfileValidator::validate_step(&draft, ProfileStep::Basics, day(2025, 6, 1));
    assert_that!(report.is_valid(), eq(true));
}

#[test]
fn given_height_bounds_when_validate_basics_then_inclusive() {
    for (height, valid) in [(119, false), (120, true), (210, true), (211, false)] {
        let draft = ProfileDraft {
            height,
            ..complete_draft()
        };
        let report = ProfileValidator::validate_step(&draft, ProfileStep::Basics, day(2025, 6, 1));
        assert_that!(report.contains(FormField::Height), eq(!valid));
    }
}

#[test]
fn given_blank_desired_location_when_validate_location_then_both_flagged() {
    let mut draft = complete_draft();
    draft.desired_location.city = "  ".into();
    draft.desired_location.country.clear();

    let report = ProfileValidator::validate_step(&draft, ProfileStep::Location, day(2025, 6, 1));

    assert_that!(
        report.fields().collect::<Vec<_>>(),
        elements_are![
            eq(&FormField::DesiredLocationCountry),
            eq(&FormField::DesiredLocationCity)
        ]
    );
}

#[test]
fn given_nothing_selected_when_validate_seeking_then_lists_required() {
    let draft = ProfileDraft {
        seeking_gender: None,
        dating_goal: None,
        interests: vec![],
        languages: vec![],
        ..complete_draft()
    };

    let report = ProfileValidator::validate_step(&draft, ProfileStep::Seeking, day(2025, 6, 1));

    assert_that!(report.len(), eq(4));
    assert_that!(report.get(FormField::Interests), some(eq("form.validation.interestsRequired")));
}

#[test]
fn given_bio_lengths_when_validate_about_then_bounds_enforced() {
    let cases = [
        ("", Some("form.validation.bioRequired")),
        ("too short", Some("form.validation.bioMinLength")),
        ("just right", None),
    ];
    for (bio, expected) in cases {
        let draft = ProfileDraft {
            bio: bio.into(),
            ..complete_draft()
        };
        let report = ProfileValidator::validate_step(&draft, ProfileStep::About, day(2025, 6, 1));
        assert_that!(report.get(FormField::Bio), eq(expected));
    }

    let draft = ProfileDraft {
        bio: "x".repeat(501),
        ..complete_draft()
    };
    let report = ProfileValidator::validate_step(&draft, ProfileStep::About, day(2025, 6, 1));
    assert_that!(report.get(FormField::Bio), some(eq("form.validation.bioMaxLength")));
}

#[test]
fn given_padded_bio_when_validate_about_then_both_bounds_use_trimmed_length() {
    let at_limit = ProfileDraft {
        bio: format!("   {}   ", "x".repeat(500)),
        ..complete_draft()
    };
    let report = ProfileValidator::validate_step(&at_limit, ProfileStep::About, day(2025, 6, 1));
    assert_that!(report.get(FormField::Bio), none());

    let over_limit = ProfileDraft {
        bio: format!(" {} ", "x".repeat(501)),
        ..complete_draft()
    };
    let report = ProfileValidator::validate_step(&over_limit, ProfileStep::About, day(2025, 6, 1));
    assert_that!(report.get(FormField::Bio), some(eq("form.validation.bioMaxLength")));
}

#[test]
fn given_missing_user_id_when_validate_any_step_then_flagged() {
    let draft = ProfileDraft {
        user_id: String::new(),
        ..complete_draft()
    };
    let report = ProfileValidator::validate_step(&draft, ProfileStep::About, day(2025, 6, 1));
    assert_that!(report.get(FormField::UserId), some(eq("form.validation.userIdRequired")));
}

#[test]
fn given_partial_update_when_validate_update_then_only_touched_fields_checked() {
    assert_that!(ProfileValidator::validate_update(&ProfileUpdate::default()).is_valid(), eq(true));

    let update = ProfileUpdate {
        city: Some(" ".into()),
        height: Some(250),
        ..ProfileUpdate::default()
    };
    let report = ProfileValidator::validate_update(&update);

    assert_that!(report.len(), eq(2));
    assert_that!(report.contains(FormField::City), eq(true));
    assert_that!(report.contains(FormField::Height), eq(true));
}

// =========================================================================
// Preferences
// =========================================================================

fn complete_preferences() -> PreferencesDraft {
    PreferencesDraft {
        gender_preference: Some(GenderPreference::Female),
        location_preference: Some(PreferredLocation::SameCountry),
        dating_goal_preference: vec![DatingGoal::Relationship],
        ..PreferencesDraft::new("user-1")
    }
}

#[test]
fn given_defaults_filled_when_validate_preferences_then_ok() {
    assert_that!(PreferencesValidator::validate(&complete_preferences()).is_valid(), eq(true));
}

#[test]
fn given_fresh_draft_when_validate_preferences_then_selections_required() {
    let report = PreferencesValidator::validate(&PreferencesDraft::new("user-1"));

    assert_that!(report.contains(FormField::GenderPreference), eq(true));
    assert_that!(report.contains(FormField::LocationPreference), eq(true));
    assert_that!(report.contains(FormField::DatingGoalPreference), eq(true));
    assert_that!(report.contains(FormField::MinAge), eq(false));
}

#[test]
fn given_min_above_max_when_validate_preferences_then_range_invalid() {
    let draft = PreferencesDraft {
        min_age: Some(40),
        max_age: Some(30),
        ..complete_preferences()
    };
    let report = PreferencesValidator::validate(&draft);
    assert_that!(report.get(FormField::MaxAge), some(eq("form.validation.ageRangeInvalid")));
}

#[test]
fn given_out_of_range_values_when_validate_preferences_then_flagged() {
    let draft = PreferencesDraft {
        min_age: Some(17),
        max_age: None,
        max_distance: 0,
        ..complete_preferences()
    };
    let report = PreferencesValidator::validate(&draft);

    assert_that!(report.get(FormField::MinAge), some(eq("form.validation.minAgeRequired")));
    assert_that!(report.get(FormField::MaxAge), some(eq("form.validation.maxAgeRequired")));
    assert_that!(report.get(FormField::MaxDistance), some(eq("form.validation.maxDistanceRange")));
}

#[test]
fn given_goal_toggled_twice_when_validate_preferences_then_goal_required_again() {
    let mut draft = complete_preferences();
    draft.toggle_goal(DatingGoal::Marriage);
    assert_that!(draft.dating_goal_preference, len(eq(2)));

    draft.toggle_goal(DatingGoal::Marriage);
    draft.toggle_goal(DatingGoal::Relationship);
    let report = PreferencesValidator::validate(&draft);
    assert_that!(report.contains(FormField::DatingGoalPreference), eq(true));
}

// =========================================================================
// Reports and uploads
// =========================================================================

#[test]
fn given_report_when_localized_then_messages_follow_catalog_language() {
    let report = PreferencesValidator::validate(&PreferencesDraft::new(""));

    let english = report.localized(&Catalog::new(Locale::En));
    let russian = report.localized(&Catalog::new(Locale::Ru));

    assert_that!(english.get("userId"), some(eq("User id is missing")));
    assert_that!(russian.get("genderPreference"), some(eq("Выберите предпочтительный пол")));
}

#[test]
fn given_upload_candidates_when_check_upload_then_type_and_size_enforced() {
    assert_that!(check_upload("image/jpeg", 1024), ok(anything()));
    assert_that!(check_upload("IMAGE/PNG", MAX_PHOTO_BYTES), ok(anything()));
    assert_that!(
        check_upload("application/pdf", 10),
        err(eq(UploadRejection::InvalidFileType))
    );
    assert_that!(
        check_upload("image/webp", MAX_PHOTO_BYTES + 1),
        err(eq(UploadRejection::FileTooLarge))
    );
}

#[test]
fn given_rejection_when_message_key_then_namespaced_under_photo_upload() {
    assert_that!(UploadRejection::FileTooLarge.message_key(), eq("photoUpload.fileTooLarge"));
}

// =========================================================================
// Properties
// =========================================================================

mod properties {
    use crate::tests::{complete_draft, day};
    use crate::{
        DatingGoal, FormField, GenderPreference, PreferencesDraft, PreferencesValidator,
        PreferredLocation, ProfileDraft, ProfileValidator,
    };

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn height_is_flagged_exactly_outside_bounds(height in 0u16..400) {
            let draft = ProfileDraft { height, ..complete_draft() };

            let report = ProfileValidator::validate(&draft, day(2025, 6, 1));

            prop_assert_eq!(report.contains(FormField::Height), !(120..=210).contains(&height));
        }

        #[test]
        fn age_range_passes_only_when_ordered_and_in_bounds(min in 0u8..=120, max in 0u8..=120) {
            let mut draft = PreferencesDraft::new("u1");
            draft.gender_preference = Some(GenderPreference::Any);
            draft.location_preference = Some(PreferredLocation::Anywhere);
            draft.toggle_goal(DatingGoal::Friendship);
            draft.min_age = Some(min);
            draft.max_age = Some(max);

            let report = PreferencesValidator::validate(&draft);

            let acceptable = (18..=100).contains(&min) && (18..=100).contains(&max) && min <= max;
            let flagged = report.contains(FormField::MinAge) || report.contains(FormField::MaxAge);
            prop_assert_eq!(flagged, !acceptable);
        }
    }
}
