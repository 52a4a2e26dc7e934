//! Image upload preparation
//!
//! Every upload is sent as a single multipart field `file` named
//! `document.<ext>`. The extension is checked before any network traffic.

use crate::error::ClientError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions accepted from callers (before `jpg` is normalized)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp"];

/// Multipart field name expected by the backend
pub const UPLOAD_FIELD: &str = "file";

/// Image formats the backend accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG (`jpg` and `jpeg`)
    Jpeg,
    /// Tagged Image File Format (`tiff` only, not `tif`)
    Tiff,
    /// Windows bitmap
    Bmp,
}

impl ImageFormat {
    /// Canonical extension used in the upload file name
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// MIME type sent with the upload
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Parse a bare extension, case-insensitively
    pub fn from_extension(ext: &str) -> Result<Self, ClientError> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "tiff" => Ok(ImageFormat::Tiff),
            "bmp" => Ok(ImageFormat::Bmp),
            other => Err(ClientError::Validation(format!(
                "Unsupported file format: {}. Allowed: {}",
                if other.is_empty() { "(none)" } else { other },
                ALLOWED_EXTENSIONS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Image format for a file name or path, from the text after the last `.`
pub fn normalize_extension(name: &str) -> Result<ImageFormat, ClientError> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.contains('/') => ImageFormat::from_extension(ext),
        _ => Err(ClientError::Validation(format!(
            "No file extension in '{}'. Allowed: {}",
            name,
            ALLOWED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Where the image to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// File on disk
    Path(PathBuf),
    /// `data:image/...;base64,...` URI
    DataUri(String),
    /// Bytes already in memory, with the original file name
    Bytes {
        /// Original file name, used only for its extension
        name: String,
        /// Raw image bytes
        bytes: Vec<u8>,
    },
}

impl ImageSource {
    /// Interpret a user-supplied reference: `data:` URIs stay URIs, anything
    /// else is a path
    pub fn from_reference(reference: &str) -> Self {
        if reference.starts_with("data:") {
            ImageSource::DataUri(reference.to_string())
        } else {
            ImageSource::Path(PathBuf::from(reference))
        }
    }

    /// Load and validate the image
    pub fn into_upload(self) -> Result<ImageUpload, ClientError> {
        match self {
            ImageSource::Path(path) => ImageUpload::from_path(path),
            ImageSource::DataUri(uri) => ImageUpload::from_data_uri(&uri),
            ImageSource::Bytes { name, bytes } => ImageUpload::from_bytes(&name, bytes),
        }
    }
}

/// A validated image ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read an image file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let format = normalize_extension(&path.to_string_lossy())?;
        let bytes = std::fs::read(path).map_err(|e| {
            ClientError::Validation(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::new(format, bytes)
    }

    /// Wrap in-memory bytes, taking the format from `name`
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<Self, ClientError> {
        Self::new(normalize_extension(name)?, bytes)
    }

    /// Decode a `data:` URI
    ///
    /// The format comes from the `image/<subtype>` MIME type; URIs without
    /// one are treated as JPEG.
    pub fn from_data_uri(uri: &str) -> Result<Self, ClientError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ClientError::Validation("Not a data: URI".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ClientError::Validation("Data URI has no payload".to_string()))?;

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default();
        let format = match mime.strip_prefix("image/") {
            Some(subtype) if !subtype.is_empty() => ImageFormat::from_extension(subtype)?,
            _ => ImageFormat::Jpeg,
        };

        let bytes = if params.any(|p| p.eq_ignore_ascii_case("base64")) {
            STANDARD
                .decode(payload.trim())
                .map_err(|e| ClientError::Validation(format!("Invalid base64 payload: {}", e)))?
        } else {
            payload.as_bytes().to_vec()
        };

        Self::new(format, bytes)
    }

    fn new(format: ImageFormat, bytes: Vec<u8>) -> Result<Self, ClientError> {
        if bytes.is_empty() {
            return Err(ClientError::Validation(
                "Image file is empty or corrupted".to_string(),
            ));
        }
        Ok(Self { format, bytes })
    }

    /// Image format
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Raw bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Name the file is uploaded under
    pub fn file_name(&self) -> String {
        format!("document.{}", self.format.extension())
    }

    /// Build the multipart payload
    pub fn to_form(&self) -> Result<Form, ClientError> {
        let part = Part::bytes(self.bytes.clone())
            .file_name(self.file_name())
            .mime_str(self.format.mime_type())
            .map_err(|e| ClientError::Validation(format!("Invalid MIME type: {}", e)))?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_jpg_normalizes_to_jpeg() {
        assert_eq!(normalize_extension("photo.jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(normalize_extension("photo.jpeg").unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_extension_case_is_folded() {
        assert_eq!(normalize_extension("scan.PNG").unwrap(), ImageFormat::Png);
        assert_eq!(normalize_extension("scan.Jpg").unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["scan.tif", "contract.pdf", "notes.txt", "noextension", "dir.v2/file"] {
            assert!(
                matches!(normalize_extension(name), Err(ClientError::Validation(_))),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Tiff.mime_type(), "image/tiff");
        assert_eq!(ImageFormat::Bmp.mime_type(), "image/bmp");
    }

    #[test]
    fn test_upload_file_name() {
        let upload = ImageUpload::from_bytes("IMG_0042.JPG", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.file_name(), "document.jpeg");
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(
            ImageUpload::from_bytes("a.png", Vec::new()),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_data_uri_base64() {
        let upload = ImageUpload::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(upload.format(), ImageFormat::Png);
        assert_eq!(upload.bytes(), &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_data_uri_without_image_mime_is_jpeg() {
        let upload = ImageUpload::from_data_uri("data:;base64,AAEC").unwrap();
        assert_eq!(upload.format(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_data_uri_with_unsupported_subtype() {
        assert!(matches!(
            ImageUpload::from_data_uri("data:image/gif;base64,R0lG"),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".bmp").tempfile().unwrap();
        file.write_all(b"BM fake bitmap").unwrap();

        let upload = ImageUpload::from_path(file.path()).unwrap();
        assert_eq!(upload.format(), ImageFormat::Bmp);
        assert_eq!(upload.bytes(), b"BM fake bitmap");
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let result = ImageUpload::from_path("/nonexistent/lexdoc/scan.png");
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_source_from_reference() {
        assert!(matches!(
            ImageSource::from_reference("data:image/png;base64,AA=="),
            ImageSource::DataUri(_)
        ));
        assert!(matches!(
            ImageSource::from_reference("scans/lease.png"),
            ImageSource::Path(_)
        ));
    }
}
