use crate::{DiscoveryCard, MatchCard, count_new};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_numeric_id_and_img_alias_when_deserialize_card_then_normalized() {
    let card: DiscoveryCard = serde_json::from_value(json!({
        "id": 17,
        "name": "Oleg",
        "img": "https://cdn.example.com/17.jpg",
        "age": 29
    }))
    .unwrap();

    assert_that!(card.id, eq("17"));
    assert_that!(card.photo, some(eq("https://cdn.example.com/17.jpg")));
    assert_that!(card.interests, is_empty());
}

#[test]
fn given_matches_when_count_new_then_only_unseen_counted() {
    let matches: Vec<MatchCard> = serde_json::from_value(json!([
        { "id": "m1", "name": "Ira", "image": "a.jpg", "isNew": true },
        { "id": 2, "name": "Lena" },
        { "id": "m3", "name": "Olga", "isNew": true }
    ]))
    .unwrap();

    assert_that!(count_new(&matches), eq(2));
    assert_that!(matches[0].photo, some(eq("a.jpg")));
    assert_that!(matches[1].id, eq("2"));
}
