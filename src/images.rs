//! Attachment image handling: EXIF orientation, downscaling and base64 data
//! URIs for embedding into rendered reports.

use std::io::Cursor;
use std::path::Path;

use base64::prelude::*;
use futures::stream::{self, StreamExt};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::{debug, warn};

use crate::arcgis::ArcGisClient;
use crate::error::AuthenticationError;
use crate::report::AttachmentRef;

pub const MAX_IMAGE_WIDTH: u32 = 800;
pub const JPEG_QUALITY: u8 = 85;

/// Concurrent attachment downloads per report.
const IMAGE_FANOUT: usize = 5;

/// A photo ready to embed, paired with its attachment name.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPhoto {
    pub data_uri: String,
    pub name: String,
}

/// Re-encode an image upright according to its EXIF orientation tag.
///
/// Output is always JPEG. Bytes that cannot be decoded come back unchanged.
pub fn fix_exif_orientation(bytes: &[u8]) -> Vec<u8> {
    let Ok(img) = image::load_from_memory(bytes) else {
        debug!("could not decode image, keeping original bytes");
        return bytes.to_vec();
    };

    let oriented = match exif_orientation(bytes) {
        Some(2) => img.fliph(),
        Some(3) => img.rotate180(),
        Some(4) => img.flipv(),
        Some(5) => img.rotate90().fliph(),
        Some(6) => img.rotate90(),
        Some(7) => img.rotate270().fliph(),
        Some(8) => img.rotate270(),
        _ => img,
    };

    match encode_jpeg(&oriented) {
        Ok(out) => out,
        Err(err) => {
            debug!(%err, "could not re-encode image, keeping original bytes");
            bytes.to_vec()
        }
    }
}

fn exif_orientation(bytes: &[u8]) -> Option<u32> {
    let reader = exif::Reader::new();
    let parsed = reader.read_from_container(&mut Cursor::new(bytes)).ok()?;
    parsed
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Downscale to a maximum width, keeping aspect ratio. Images already narrow
/// enough pass through untouched.
pub fn resize_to_max_width(bytes: &[u8], max_width: u32) -> Vec<u8> {
    let Ok(img) = image::load_from_memory(bytes) else {
        debug!("could not decode image, keeping original bytes");
        return bytes.to_vec();
    };

    let (width, height) = img.dimensions();
    if width <= max_width {
        return bytes.to_vec();
    }

    let ratio = max_width as f64 / width as f64;
    let new_height = (height as f64 * ratio) as u32;
    let resized = img.resize_exact(max_width, new_height.max(1), FilterType::Lanczos3);

    match encode_jpeg(&resized) {
        Ok(out) => out,
        Err(err) => {
            debug!(%err, "could not re-encode resized image, keeping original bytes");
            bytes.to_vec()
        }
    }
}

fn encode_jpeg(img: &DynamicImage) -> image::ImageResult<Vec<u8>> {
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(&rgb)?;
    Ok(buffer)
}

pub fn to_data_uri(bytes: &[u8], content_type: &str) -> String {
    format!("data:{content_type};base64,{}", BASE64_STANDARD.encode(bytes))
}

/// Download one attachment and prepare it for embedding. A failed download
/// yields `None`; auth failures propagate.
pub async fn fetch_attachment_as_data_uri(
    client: &ArcGisClient,
    layer: u32,
    object_id: i64,
    attachment_id: i64,
    fix_orientation: bool,
) -> Result<Option<String>, AuthenticationError> {
    let Some((content, _content_type)) = client
        .get_attachment_content(layer, object_id, attachment_id)
        .await?
    else {
        return Ok(None);
    };

    let content = if fix_orientation {
        fix_exif_orientation(&content)
    } else {
        content
    };
    let content = resize_to_max_width(&content, MAX_IMAGE_WIDTH);

    Ok(Some(to_data_uri(&content, "image/jpeg")))
}

/// Download a report's photos a few at a time, preserving their order.
/// Photos that fail to download are skipped.
pub async fn fetch_photos_as_data_uris(
    client: &ArcGisClient,
    photos: &[AttachmentRef],
) -> Result<Vec<EncodedPhoto>, AuthenticationError> {
    let results: Vec<_> = stream::iter(photos)
        .map(|photo| async move {
            let uri = fetch_attachment_as_data_uri(
                client,
                photo.layer,
                photo.object_id,
                photo.attachment_id,
                true,
            )
            .await?;
            Ok::<_, AuthenticationError>((photo, uri))
        })
        .buffered(IMAGE_FANOUT)
        .collect()
        .await;

    let mut encoded = Vec::new();
    for result in results {
        let (photo, uri) = result?;
        match uri {
            Some(data_uri) => encoded.push(EncodedPhoto {
                data_uri,
                name: photo.name.clone(),
            }),
            None => {
                warn!(
                    attachment_id = photo.attachment_id,
                    object_id = photo.object_id,
                    "photo download failed, skipping"
                );
            }
        }
    }
    Ok(encoded)
}

/// Serve an attachment as-is: raw bytes plus the upstream content type.
/// `None` means the attachment could not be retrieved.
pub async fn proxy_attachment(
    client: &ArcGisClient,
    layer: u32,
    object_id: i64,
    attachment_id: i64,
) -> Result<Option<(Vec<u8>, String)>, AuthenticationError> {
    client
        .get_attachment_content(layer, object_id, attachment_id)
        .await
}

/// Read a local image file as a data URI, guessing the content type from the
/// extension.
pub fn local_image_to_data_uri(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "local image not readable");
            return None;
        }
    };

    let content_type = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    };

    Some(to_data_uri(&bytes, content_type))
}
