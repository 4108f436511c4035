//! Reader for the IDX binary format used by MNIST.
//!
//! Image file (IDX3):
//! ```text
//! bytes  0-1:   0x00 0x00   reserved
//! byte   2:     0x08        dtype = uint8
//! byte   3:     0x03        three dimensions
//! bytes  4-7:   N           item count, big-endian u32
//! bytes  8-11:  rows
//! bytes 12-15:  cols
//! bytes 16..:   N * rows * cols pixels, row-major
//! ```
//!
//! Label file (IDX1) has the same first four bytes with dimension count `0x01`,
//! then `N` and `N` class bytes.

use std::path::Path;

use tracing::debug;

use crate::data::example::TrainingExample;
use crate::error::{NetworkError, Result};

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

fn be_u32(bytes: &[u8], offset: usize) -> usize {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]) as usize
}

fn check_magic(bytes: &[u8], dims: u8, what: &str) -> Result<()> {
    if bytes[0] != 0x00 || bytes[1] != 0x00 {
        return Err(NetworkError::Format(format!(
            "{what} file: reserved bytes must be 0x00 0x00, got 0x{:02X} 0x{:02X}",
            bytes[0], bytes[1]
        )));
    }
    if bytes[2] != 0x08 {
        return Err(NetworkError::Format(format!(
            "{what} file: dtype byte must be 0x08 (uint8), got 0x{:02X}",
            bytes[2]
        )));
    }
    if bytes[3] != dims {
        return Err(NetworkError::Format(format!(
            "{what} file: expected {dims} dimensions, got {}",
            bytes[3]
        )));
    }
    Ok(())
}

/// Parses an IDX3 image buffer and an IDX1 label buffer into training examples.
///
/// Pixels are scaled from `0..=255` to `[0.0, 1.0]`; labels become one-hot
/// targets of length `n_classes`.
pub fn parse_idx_pair(
    image_bytes: &[u8],
    label_bytes: &[u8],
    n_classes: usize,
) -> Result<Vec<TrainingExample>> {
    if n_classes < 2 {
        return Err(NetworkError::Format(format!(
            "n_classes must be at least 2, got {n_classes}"
        )));
    }

    if image_bytes.len() < IMAGE_HEADER_LEN {
        return Err(NetworkError::Format(format!(
            "image file too short: need {IMAGE_HEADER_LEN} header bytes, got {}",
            image_bytes.len()
        )));
    }
    check_magic(image_bytes, 0x03, "image")?;

    let n_items = be_u32(image_bytes, 4);
    let rows = be_u32(image_bytes, 8);
    let cols = be_u32(image_bytes, 12);

    let n_pixels = rows.checked_mul(cols).ok_or_else(|| {
        NetworkError::Format(format!("image size overflows: {rows} x {cols}"))
    })?;
    if n_pixels == 0 {
        return Err(NetworkError::Format(format!("image size is zero: {rows} x {cols}")));
    }
    let data_len = n_items.checked_mul(n_pixels).ok_or_else(|| {
        NetworkError::Format(format!("image data overflows: {n_items} items of {n_pixels} pixels"))
    })?;
    if image_bytes.len() - IMAGE_HEADER_LEN < data_len {
        return Err(NetworkError::Format(format!(
            "image file truncated: header declares {n_items} images of {rows}x{cols}, \
             but only {} data bytes follow",
            image_bytes.len() - IMAGE_HEADER_LEN
        )));
    }

    if label_bytes.len() < LABEL_HEADER_LEN {
        return Err(NetworkError::Format(format!(
            "label file too short: need {LABEL_HEADER_LEN} header bytes, got {}",
            label_bytes.len()
        )));
    }
    check_magic(label_bytes, 0x01, "label")?;

    let n_labels = be_u32(label_bytes, 4);
    if n_labels != n_items {
        return Err(NetworkError::Format(format!(
            "image file has {n_items} items but label file has {n_labels}"
        )));
    }
    if label_bytes.len() - LABEL_HEADER_LEN < n_items {
        return Err(NetworkError::Format(format!(
            "label file truncated: header declares {n_items} labels, only {} follow",
            label_bytes.len() - LABEL_HEADER_LEN
        )));
    }

    let pixels = &image_bytes[IMAGE_HEADER_LEN..IMAGE_HEADER_LEN + data_len];
    let labels = &label_bytes[LABEL_HEADER_LEN..LABEL_HEADER_LEN + n_items];

    let mut examples = Vec::with_capacity(n_items);
    for (i, (&label, chunk)) in labels.iter().zip(pixels.chunks_exact(n_pixels)).enumerate() {
        let input = chunk.iter().map(|&px| px as f64 / 255.0).collect();
        let example = TrainingExample::one_hot(input, label as usize, n_classes).ok_or_else(|| {
            NetworkError::Format(format!(
                "label {i}: class {label} out of range for {n_classes} classes"
            ))
        })?;
        examples.push(example);
    }

    debug!(items = n_items, rows, cols, "parsed IDX pair");
    Ok(examples)
}

/// Reads and parses an IDX image/label file pair from disk.
pub fn load_idx_pair(
    image_path: impl AsRef<Path>,
    label_path: impl AsRef<Path>,
    n_classes: usize,
) -> Result<Vec<TrainingExample>> {
    let image_bytes = std::fs::read(image_path)?;
    let label_bytes = std::fs::read(label_path)?;
    parse_idx_pair(&image_bytes, &label_bytes, n_classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_file(n: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x00, 0x08, 0x03];
        bytes.extend_from_slice(&n.to_be_bytes());
        bytes.extend_from_slice(&rows.to_be_bytes());
        bytes.extend_from_slice(&cols.to_be_bytes());
        bytes.extend_from_slice(pixels);
        bytes
    }

    fn label_file(labels: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x00, 0x08, 0x01];
        bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
        bytes.extend_from_slice(labels);
        bytes
    }

    #[test]
    fn parses_two_tiny_images() {
        let images = image_file(2, 1, 2, &[0, 255, 51, 102]);
        let labels = label_file(&[1, 0]);
        let examples = parse_idx_pair(&images, &labels, 3).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].input, vec![0.0, 1.0]);
        assert_eq!(examples[0].target, vec![0.0, 1.0, 0.0]);
        assert_eq!(examples[1].input, vec![0.2, 0.4]);
        assert_eq!(examples[1].target, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn rejects_wrong_dimension_byte() {
        let mut images = image_file(1, 1, 1, &[0]);
        images[3] = 0x01;
        let err = parse_idx_pair(&images, &label_file(&[0]), 2).unwrap_err();
        assert!(matches!(err, NetworkError::Format(_)));
    }

    #[test]
    fn rejects_truncated_pixels() {
        let images = image_file(2, 2, 2, &[0; 5]);
        assert!(parse_idx_pair(&images, &label_file(&[0, 1]), 2).is_err());
    }

    #[test]
    fn rejects_count_mismatch() {
        let images = image_file(2, 1, 1, &[0, 0]);
        assert!(parse_idx_pair(&images, &label_file(&[0]), 2).is_err());
    }

    #[test]
    fn rejects_out_of_range_label() {
        let images = image_file(1, 1, 1, &[0]);
        let err = parse_idx_pair(&images, &label_file(&[9]), 2).unwrap_err();
        assert!(err.to_string().contains("class 9"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_idx_pair("/nonexistent/images", "/nonexistent/labels", 10).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
