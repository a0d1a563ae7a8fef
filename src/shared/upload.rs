// src/shared/upload.rs
//
// Multipart image intake shared by the car and gallery endpoints. Files are
// streamed to local disk under `UPLOAD_PATH` and referenced by their public
// `/uploads/<name>` path.
use std::env;
use std::path::{Path, PathBuf};

use actix_multipart::Field;
use actix_web::HttpResponse;
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;

/// Per-request cap on uploaded image files.
pub const MAX_IMAGES_PER_REQUEST: usize = 10;

const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("Only image files are allowed")]
    InvalidFileType,

    #[error("File too large. Maximum size is {0} bytes")]
    FileTooLarge(usize),

    #[error("Too many files. Maximum is {0} images")]
    TooManyFiles(usize),

    #[error("Malformed multipart payload: {0}")]
    Malformed(String),

    #[error("Upload failed: {0}")]
    Io(String),
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: usize,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let dir = env::var("UPLOAD_PATH").unwrap_or_else(|_| "./uploads".to_string());
        let max_file_size = env::var("MAX_FILE_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);

        Self {
            dir: PathBuf::from(dir),
            max_file_size,
        }
    }
}

/// Stream one multipart file part to disk and return its public path.
///
/// Rejects non-image content types up front and aborts (removing the partial
/// file) as soon as the size cap is crossed.
pub async fn save_image_field(
    config: &UploadConfig,
    field: &mut Field,
) -> Result<String, UploadError> {
    let is_image = field
        .content_type()
        .map(|ct| ct.type_() == mime::IMAGE)
        .unwrap_or(false);
    if !is_image {
        return Err(UploadError::InvalidFileType);
    }

    let extension = field
        .content_disposition()
        .get_filename()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    let file_name = format!("{}-{}{}", field.name(), Uuid::new_v4(), extension);
    let target = config.dir.join(&file_name);

    tokio::fs::create_dir_all(&config.dir)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let mut file = tokio::fs::File::create(&target)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let mut written: usize = 0;
    loop {
        let chunk = field
            .try_next()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?;

        let Some(chunk) = chunk else { break };

        written += chunk.len();
        if written > config.max_file_size {
            drop(file);
            let _ = tokio::fs::remove_file(&target).await;
            return Err(UploadError::FileTooLarge(config.max_file_size));
        }

        file.write_all(&chunk)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))?;
    }

    file.flush()
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    Ok(format!("/uploads/{}", file_name))
}

/// Collect a text part into a trimmed String.
pub async fn read_text_field(field: &mut Field) -> Result<String, UploadError> {
    let mut bytes: Vec<u8> = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        if bytes.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
            return Err(UploadError::Malformed("Text field too large".to_string()));
        }
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes)
        .map(|s| s.trim().to_string())
        .map_err(|_| UploadError::Malformed("Text field is not valid UTF-8".to_string()))
}

/// Map an upload failure to the standard envelope. Disk faults are the only
/// 500 here; everything else is a client error.
pub fn upload_error_response(err: &UploadError) -> HttpResponse {
    match err {
        UploadError::Io(detail) => {
            error!("Upload failed: {}", detail);
            ApiResponse::internal_error()
        }
        other => ApiResponse::bad_request(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_without_env() {
        // Not using from_env here; the defaults are what the constructor falls
        // back to when the variables are absent.
        let config = UploadConfig {
            dir: PathBuf::from("./uploads"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        };
        assert_eq!(config.max_file_size, 5 * 1024 * 1024);
    }

    #[test]
    fn upload_errors_render_client_messages() {
        assert_eq!(
            UploadError::InvalidFileType.to_string(),
            "Only image files are allowed"
        );
        assert!(UploadError::FileTooLarge(5242880)
            .to_string()
            .contains("5242880"));
        assert!(UploadError::TooManyFiles(10).to_string().contains("10"));
    }
}
