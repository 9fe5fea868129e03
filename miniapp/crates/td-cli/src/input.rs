use crate::{CliError, CliResult};

use std::path::Path;

use serde::de::DeserializeOwned;
use td_client::PhotoFile;

/// Read and decode a JSON form file
#[track_caller]
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::input(path, e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| CliError::input(path, format!("invalid JSON: {e}")))
}

/// Load an image for upload; the content type comes from the extension
#[track_caller]
pub fn photo_from_path(path: &Path) -> CliResult<PhotoFile> {
    let bytes = std::fs::read(path).map_err(|e| CliError::input(path, e.to_string()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::input(path, "not a file"))?;

    Ok(PhotoFile::new(file_name, content_type_for(path), bytes))
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
