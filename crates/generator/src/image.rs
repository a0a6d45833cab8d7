//! Screenshot input checks.

use shotcraft_core::{Error, Result};
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// MIME type of an image file, inferred from its extension.
///
/// Returns `None` for extensions that are not raster images.
#[must_use]
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Check that `image` is a non-empty image of at most `max_bytes`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the media type is not an image type,
/// the image is empty or it exceeds the size limit.
pub fn validate_image(image: &[u8], media_type: &str, max_bytes: u64) -> Result<()> {
    if !media_type.starts_with("image/") {
        return Err(Error::invalid_input(format!(
            "File must be an image, got {media_type}"
        )));
    }
    if image.is_empty() {
        return Err(Error::invalid_input("Image is empty"));
    }
    let size = image.len() as u64;
    if size > max_bytes {
        #[allow(clippy::cast_precision_loss)]
        let (size_mb, max_mb) = (size as f64 / BYTES_PER_MB, max_bytes as f64 / BYTES_PER_MB);
        return Err(Error::invalid_input(format!(
            "Image size ({size_mb:.2} MB) exceeds the maximum allowed size ({max_mb} MB)"
        )));
    }
    Ok(())
}
