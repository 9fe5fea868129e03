/// Largest photo the upload endpoint accepts (5 MiB)
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Why a file was refused before upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    InvalidFileType,
    FileTooLarge,
}

impl UploadRejection {
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidFileType => "photoUpload.invalidFileType",
            Self::FileTooLarge => "photoUpload.fileTooLarge",
        }
    }
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFileType => write!(f, "file is not an image"),
            Self::FileTooLarge => write!(f, "file exceeds {MAX_PHOTO_BYTES} bytes"),
        }
    }
}

/// Check a file against the upload rules: an `image/*` type of at most 5 MiB
pub fn check_upload(content_type: &str, size_bytes: u64) -> Result<(), UploadRejection> {
    if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(UploadRejection::InvalidFileType);
    }
    if size_bytes > MAX_PHOTO_BYTES {
        return Err(UploadRejection::FileTooLarge);
    }
    Ok(())
}
