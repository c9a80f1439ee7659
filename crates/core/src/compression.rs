//! JPEG recompression to fit a byte budget.
//!
//! The search is greedy: it starts from a quality estimated from the size
//! ratio and walks down in fixed steps until an encoding fits or the quality
//! floor is reached. It does not look for the highest quality that fits.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, RgbImage};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Highest JPEG quality ever selected.
pub const QUALITY_CEILING: u8 = 95;

/// Lowest JPEG quality ever selected.
pub const QUALITY_FLOOR: u8 = 10;

/// Quality decrement between probes.
pub const QUALITY_STEP: u8 = 5;

/// Default post-compression budget in MiB.
pub const DEFAULT_MAX_SIZE_MB: u64 = 5;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

// ---------------------------------------------------------------------------
// Quality search
// ---------------------------------------------------------------------------

/// Starting quality: the budget/size ratio scaled against the ceiling,
/// clamped to `[QUALITY_FLOOR, QUALITY_CEILING]`.
pub fn initial_quality(max_bytes: u64, original_bytes: u64) -> u8 {
    if original_bytes == 0 {
        return QUALITY_CEILING;
    }
    let estimate = (max_bytes as f64 / original_bytes as f64) * f64::from(QUALITY_CEILING);
    // Float-to-int casts saturate, so huge ratios land on the ceiling.
    (estimate as u64).clamp(u64::from(QUALITY_FLOOR), u64::from(QUALITY_CEILING)) as u8
}

/// Qualities to try, in order: `start`, `start - 5`, ... and finally the
/// floor itself if the steps skipped over it.
pub fn quality_probes(start: u8) -> Vec<u8> {
    let start = start.clamp(QUALITY_FLOOR, QUALITY_CEILING);
    let mut probes: Vec<u8> = (QUALITY_FLOOR..=start)
        .rev()
        .step_by(usize::from(QUALITY_STEP))
        .collect();
    if probes.last() != Some(&QUALITY_FLOOR) {
        probes.push(QUALITY_FLOOR);
    }
    probes
}

/// Whether a source of `size_bytes` must be recompressed for `max_bytes`.
pub fn needs_compression(size_bytes: u64, max_bytes: u64) -> bool {
    size_bytes > max_bytes
}

/// Result of [`compress_to_budget`].
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// JPEG-encoded output.
    pub bytes: Vec<u8>,
    /// Quality used for `bytes`.
    pub quality: u8,
}

impl CompressedImage {
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn fits(&self, max_bytes: u64) -> bool {
        self.len() <= max_bytes
    }
}

/// Decode `source`, flatten it to RGB and re-encode it as JPEG so that it
/// fits in `max_bytes`, or at the quality floor if it never does.
///
/// A source already within budget is re-encoded once at the ceiling.
pub fn compress_to_budget(source: &[u8], max_bytes: u64) -> Result<CompressedImage, CoreError> {
    let decoded = image::load_from_memory(source)
        .map_err(|e| CoreError::Compression(format!("Failed to decode image: {e}")))?;
    // Alpha and palette modes cannot be written as JPEG.
    let rgb = decoded.to_rgb8();

    let original = source.len() as u64;
    let probes = if needs_compression(original, max_bytes) {
        quality_probes(initial_quality(max_bytes, original))
    } else {
        vec![QUALITY_CEILING]
    };

    let mut last = None;
    for quality in probes {
        let bytes = encode_jpeg(&rgb, quality)?;
        let candidate = CompressedImage { bytes, quality };
        if candidate.fits(max_bytes) {
            return Ok(candidate);
        }
        last = Some(candidate);
    }

    last.ok_or_else(|| CoreError::Internal("No quality levels were probed".into()))
}

fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>, CoreError> {
    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8.into())
        .map_err(|e| CoreError::Compression(format!("Failed to encode JPEG at quality {quality}: {e}")))?;
    Ok(out.into_inner())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
