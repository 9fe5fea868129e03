use crate::{
    DatingGoal, Education, Gender, GenderPreference, HabitFrequency, HabitTolerance, Occupation,
    PreferredLocation,
};

use std::str::FromStr;

#[test]
fn test_gender_as_str() {
    assert_eq!(Gender::Male.as_str(), "male");
    assert_eq!(Gender::Female.as_str(), "female");
    assert_eq!(Gender::Other.as_str(), "other");
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
    assert!(Gender::from_str("FEMALE_").is_err());
}

#[test]
fn test_gender_preference_accepts() {
    assert!(GenderPreference::Any.accepts(Gender::Other));
    assert!(GenderPreference::Male.accepts(Gender::Male));
    assert!(!GenderPreference::Male.accepts(Gender::Female));
}

#[test]
fn test_dating_goal_wire_format() {
    assert_eq!(
        serde_json::to_string(&DatingGoal::Relationship).unwrap(),
        "\"RELATIONSHIP\""
    );
    assert_eq!(
        DatingGoal::from_str("NETWORKING").unwrap(),
        DatingGoal::Networking
    );
    assert!(DatingGoal::from_str("relationship").is_err());
}

#[test]
fn test_dating_goal_label_keys_are_namespaced() {
    for goal in DatingGoal::ALL {
        assert!(goal.label_key().starts_with("datingGoal."));
    }
}

#[test]
fn test_preferred_location_from_str() {
    assert_eq!(
        PreferredLocation::from_str("SAME_CITY").unwrap(),
        PreferredLocation::SameCity
    );
    assert!(PreferredLocation::from_str("somewhere").is_err());
}

#[test]
fn test_habit_tolerance_accepts() {
    let strict = HabitTolerance::Unacceptable;
    assert!(!strict.accepts(Some(HabitFrequency::Regularly)));
    assert!(!strict.accepts(Some(HabitFrequency::Occasionally)));
    assert!(strict.accepts(Some(HabitFrequency::Quit)));
    assert!(strict.accepts(None));
    assert!(HabitTolerance::Acceptable.accepts(Some(HabitFrequency::Regularly)));
}

#[test]
fn test_background_wire_format() {
    assert_eq!(Education::SelfTaught.as_str(), "SELF_TAUGHT");
    assert_eq!(Occupation::from_str("FREELANCER").unwrap(), Occupation::Freelancer);
    assert_eq!(
        serde_json::from_str::<Education>("\"PHD\"").unwrap(),
        Education::Phd
    );
}
