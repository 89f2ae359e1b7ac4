use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("No image data received")]
    Empty,
    #[error("Image size should be less than 5MB")]
    TooLarge { size: usize },
    #[error("Only image files are allowed")]
    NotAnImage,
}

/// Turns an uploaded image into an inline `data:` URI for `profileImage`.
pub fn image_data_uri(bytes: &[u8]) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size: bytes.len() });
    }

    let mime_type = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .filter(|mime| mime.starts_with("image/"))
        .ok_or(ImageError::NotAnImage)?;

    Ok(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_becomes_data_uri() {
        let uri = image_data_uri(&PNG_HEADER).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(uri, format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER)));
    }

    #[test]
    fn text_is_not_an_image() {
        assert_eq!(image_data_uri(b"hello there"), Err(ImageError::NotAnImage));
    }

    #[test]
    fn oversized_payload_is_rejected_before_sniffing() {
        let mut bytes = vec![0u8; MAX_IMAGE_BYTES + 1];
        bytes[..PNG_HEADER.len()].copy_from_slice(&PNG_HEADER);
        assert_eq!(
            image_data_uri(&bytes),
            Err(ImageError::TooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
    }

    #[test]
    fn exactly_five_megabytes_is_allowed() {
        let mut bytes = vec![0u8; MAX_IMAGE_BYTES];
        bytes[..PNG_HEADER.len()].copy_from_slice(&PNG_HEADER);
        assert!(image_data_uri(&bytes).is_ok());
    }

    #[test]
    fn empty_upload_is_rejected() {
        assert_eq!(image_data_uri(&[]), Err(ImageError::Empty));
    }
}
