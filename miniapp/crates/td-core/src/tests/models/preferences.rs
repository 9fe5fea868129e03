use crate::{DatingGoal, Preferences};

use googletest::prelude::*;
use serde_json::{Value, json};

fn payload(goal: Value) -> Value {
    json!({
        "id": "pr1",
        "userId": "u1",
        "genderPreference": "any",
        "minAge": 20,
        "maxAge": 30,
        "locationPreference": "ANYWHERE",
        "datingGoalPreference": goal
    })
}

#[test]
fn given_single_goal_when_deserialize_then_wrapped_in_list() {
    let prefs: Preferences = serde_json::from_value(payload(json!("FRIENDSHIP"))).unwrap();
    assert_that!(prefs.dating_goal_preference, elements_are![eq(&DatingGoal::Friendship)]);
}

#[test]
fn given_null_goal_when_deserialize_then_empty_list() {
    let prefs: Preferences = serde_json::from_value(payload(Value::Null)).unwrap();
    assert_that!(prefs.dating_goal_preference, is_empty());
}

#[test]
fn given_age_bounds_when_accepts_age_then_range_is_inclusive() {
    let prefs: Preferences = serde_json::from_value(payload(json!([]))).unwrap();
    assert_that!(prefs.accepts_age(20), eq(true));
    assert_that!(prefs.accepts_age(30), eq(true));
    assert_that!(prefs.accepts_age(31), eq(false));
}
