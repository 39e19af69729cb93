use core::fmt;

use super::*;
use crate::PngError;

/// A PNG rule violation that doesn't stop parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PngWarning {
  /// A non-empty `PLTE` chunk in a greyscale image (color type 0 or 4), which
  /// isn't allowed to have one.
  UnexpectedPalette {
    /// the header's color type
    colour_type: u8,
    /// length of the `PLTE` data
    length: u32,
  },
}
impl fmt::Display for PngWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnexpectedPalette { colour_type, length } => write!(
        f,
        "PLTE chunk of {length} bytes should not appear with color type {colour_type}"
      ),
    }
  }
}

/// Checks a `PLTE` chunk's length against the header seen before it.
///
/// * [`PngError::InvalidPalette`] if `length` isn't a multiple of 3.
/// * [`PngError::MissingPalette`] if the header is for an indexed color image
///   and `length` is 0.
/// * A [`PngWarning::UnexpectedPalette`] goes to `on_warning` (and parsing
///   continues) if the header is greyscale and `length` isn't 0.
///
/// With no header seen yet, only the length rule applies.
pub fn check_palette<F>(
  length: u32, header: Option<&HeaderInfo>, on_warning: &mut F,
) -> Result<(), PngError>
where
  F: FnMut(PngWarning),
{
  if length % 3 != 0 {
    return Err(PngError::InvalidPalette);
  }
  let colour_type = match header {
    Some(header) => header.colour_type,
    None => return Ok(()),
  };
  match colour_type {
    3 if length == 0 => Err(PngError::MissingPalette),
    0 | 4 if length != 0 => {
      on_warning(PngWarning::UnexpectedPalette { colour_type, length });
      Ok(())
    }
    _ => Ok(()),
  }
}

/// Views `PLTE` data as RGB entries.
///
/// Any trailing partial entry is dropped, though [`parse_chunks`] never
/// accepts palette data like that anyway.
#[inline]
#[must_use]
pub fn palette_entries(data: &[u8]) -> &[[u8; 3]] {
  let whole = data.len() - (data.len() % 3);
  bytemuck::cast_slice(&data[..whole])
}

/// Sends a warning to the `log` facade (if the `log` feature is on).
#[inline]
pub fn log_warning(warning: PngWarning) {
  #[cfg(feature = "log")]
  log::warn!("png: {warning}");
  #[cfg(not(feature = "log"))]
  let _ = warning;
}
