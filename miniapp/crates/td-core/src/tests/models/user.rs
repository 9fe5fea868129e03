use crate::{Photo, User};

use googletest::prelude::*;
use serde_json::json;

fn photo(id: &str, is_main: bool) -> Photo {
    Photo {
        id: id.into(),
        user_id: "u1".into(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        is_main,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn given_bare_id_when_deserialize_user_then_everything_else_defaults() {
    // When
    let user: User = serde_json::from_value(json!({ "id": "u1" })).unwrap();

    // Then
    assert_that!(user.id, eq("u1"));
    assert_that!(user.profile, none());
    assert_that!(user.preferences, none());
    assert_that!(user.photos, is_empty());
    assert_that!(user.needs_profile(), eq(true));
}

#[test]
fn given_full_payload_when_deserialize_user_then_nested_records_parse() {
    // Given
    let payload = json!({
        "id": "u1",
        "telegramId": 42,
        "firstName": "Anna",
        "isNew": false,
        "isPreferences": true,
        "profile": {
            "id": "p1",
            "userId": "u1",
            "gender": "female",
            "birthDate": "1995-03-14T00:00:00.000Z",
            "height": 168,
            "country": "Russia",
            "city": "Moscow"
        },
        "preferences": {
            "id": "pr1",
            "userId": "u1",
            "genderPreference": "male",
            "minAge": 25,
            "maxAge": 40,
            "locationPreference": "SAME_CITY",
            "maxDistance": 30,
            "datingGoalPreference": ["RELATIONSHIP", "MARRIAGE"]
        },
        "photos": [{ "id": "ph1", "url": "https://cdn.example.com/ph1.jpg", "isMain": true }]
    });

    // When
    let user: User = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(user.telegram_id, eq(42));
    assert_that!(user.needs_profile(), eq(false));
    assert_that!(user.needs_preferences(), eq(false));
    assert_that!(user.needs_photos(), eq(false));
    assert_that!(user.preferences.unwrap().dating_goal_preference, len(eq(2)));
}

#[test]
fn given_names_when_display_name_then_prefers_full_name() {
    let mut user: User = serde_json::from_value(json!({ "id": "u1", "firstName": "Anna" })).unwrap();
    assert_that!(user.display_name(), eq("Anna"));

    user.last_name = Some("Petrova".into());
    assert_that!(user.display_name(), eq("Anna Petrova"));

    user.first_name.clear();
    user.last_name = None;
    user.username = Some("anna_p".into());
    assert_that!(user.display_name(), eq("@anna_p"));

    user.username = None;
    assert_that!(user.display_name(), eq("u1"));
}

#[test]
fn given_no_flagged_photo_when_main_photo_then_first_is_used() {
    let mut user: User = serde_json::from_value(json!({ "id": "u1" })).unwrap();
    user.photos = vec![photo("a", false), photo("b", false)];
    assert_that!(user.main_photo().map(|p| p.id.as_str()), some(eq("a")));

    user.photos[1].is_main = true;
    assert_that!(user.main_photo().map(|p| p.id.as_str()), some(eq("b")));
}
