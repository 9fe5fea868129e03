mod models;
mod theme;
mod validation;

use crate::{DatingGoal, DesiredLocation, Gender, GenderPreference, ProfileDraft};

use chrono::NaiveDate;

pub(crate) fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

/// A draft that passes every wizard page when checked on 2025-06-01
pub(crate) fn complete_draft() -> ProfileDraft {
    ProfileDraft {
        first_name: "Anna".into(),
        last_name: "Petrova".into(),
        birth_date: Some(day(1995, 3, 14)),
        gender: Some(Gender::Female),
        height: 168,
        country: "Russia".into(),
        city: "Moscow".into(),
        desired_location: DesiredLocation {
            country: "Russia".into(),
            city: "Moscow".into(),
        },
        seeking_gender: Some(GenderPreference::Male),
        dating_goal: Some(DatingGoal::Relationship),
        interests: vec!["music".into(), "travel".into()],
        languages: vec!["ru".into(), "en".into()],
        bio: "Love long walks and jazz".into(),
        ..ProfileDraft::new("user-1")
    }
}
