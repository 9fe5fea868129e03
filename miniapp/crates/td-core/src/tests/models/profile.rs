use crate::Profile;
use crate::tests::day;

use googletest::prelude::*;
use serde_json::json;

fn profile(birth_date: &str) -> Profile {
    serde_json::from_value(json!({
        "id": "p1",
        "userId": "u1",
        "gender": "male",
        "birthDate": birth_date,
        "height": 180,
        "country": "Russia",
        "city": "Kazan"
    }))
    .unwrap()
}

#[test]
fn given_timestamp_birth_date_when_birth_date_then_date_prefix_is_used() {
    let profile = profile("1990-07-20T00:00:00.000Z");
    assert_that!(profile.birth_date(), some(eq(day(1990, 7, 20))));
}

#[test]
fn given_birthday_not_reached_when_age_on_then_year_not_counted() {
    let profile = profile("1990-07-20");
    assert_that!(profile.age_on(day(2025, 7, 19)), some(eq(34)));
    assert_that!(profile.age_on(day(2025, 7, 20)), some(eq(35)));
}

#[test]
fn given_garbage_birth_date_when_age_on_then_none() {
    assert_that!(profile("soon").age_on(day(2025, 1, 1)), none());
}
