use crate::CliError;
use crate::input::{content_type_for, photo_from_path, read_json};

use std::path::Path;

use googletest::prelude::*;
use td_core::ProfileDraft;

#[test]
fn given_image_extensions_when_guessing_then_image_types() {
    assert_that!(content_type_for(Path::new("a.JPG")), eq("image/jpeg"));
    assert_that!(content_type_for(Path::new("b.jpeg")), eq("image/jpeg"));
    assert_that!(content_type_for(Path::new("c.png")), eq("image/png"));
    assert_that!(content_type_for(Path::new("d.webp")), eq("image/webp"));
}

#[test]
fn given_unknown_extension_when_guessing_then_octet_stream() {
    assert_that!(content_type_for(Path::new("notes.txt")), eq("application/octet-stream"));
    assert_that!(content_type_for(Path::new("README")), eq("application/octet-stream"));
}

#[test]
fn given_image_file_when_loading_then_name_type_and_bytes_kept() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("me.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let photo = photo_from_path(&path).unwrap();

    assert_that!(photo.file_name.as_str(), eq("me.png"));
    assert_that!(photo.content_type.as_str(), eq("image/png"));
    assert_that!(photo.size(), eq(4));
}

#[test]
fn given_missing_file_when_loading_photo_then_input_error() {
    let result = photo_from_path(Path::new("/definitely/not/here.jpg"));

    assert!(matches!(result, Err(CliError::Input { .. })));
}

#[test]
fn given_partial_json_when_reading_draft_then_defaults_fill_gaps() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("profile.json");
    std::fs::write(&path, r#"{ "firstName": "Anna", "height": 168 }"#).unwrap();

    let draft: ProfileDraft = read_json(&path).unwrap();

    assert_that!(draft.first_name.as_str(), eq("Anna"));
    assert_that!(draft.height, eq(168));
    assert_that!(draft.user_id.as_str(), eq(""));
}

#[test]
fn given_malformed_json_when_reading_then_input_error_names_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = read_json::<ProfileDraft>(&path).unwrap_err();

    assert_that!(err.to_string(), contains_substring("broken.json"));
    assert_that!(err.to_string(), contains_substring("invalid JSON"));
}
