//! From the PNG spec:
//!
//! > Filters are applied to **bytes**, not to pixels, regardless of the bit
//! > depth or color type of the image.
//!
//! With 8-bit RGBA that means each channel is unfiltered against the same
//! channel of the neighboring pixels.

use alloc::vec::Vec;

use crate::{r8g8b8a8_Srgb, PngError};

/// Bytes per pixel. The defilterer only handles 8-bit RGBA.
pub const BYTES_PER_PIXEL: usize = 4;

/// The five per-scanline filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FilterType {
  /// The bytes are stored as-is.
  None = 0,
  /// Stored as the difference from the pixel to the left.
  Sub = 1,
  /// Stored as the difference from the pixel above.
  Up = 2,
  /// Stored as the difference from the average of left and above.
  Average = 3,
  /// Stored as the difference from the [Paeth predictor](paeth_predict).
  Paeth = 4,
}
impl TryFrom<u8> for FilterType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => FilterType::None,
      1 => FilterType::Sub,
      2 => FilterType::Up,
      3 => FilterType::Average,
      4 => FilterType::Paeth,
      other => return Err(PngError::UnsupportedFilterByte(other)),
    })
  }
}
impl FilterType {
  /// Reconstructs one byte.
  ///
  /// * `x` is the filtered byte.
  /// * `a`, `b`, and `c` are the already reconstructed bytes to the left,
  ///   above, and above-left. Any of them outside the image are 0.
  #[inline]
  #[must_use]
  pub const fn reconstruct(self, x: u8, a: u8, b: u8, c: u8) -> u8 {
    match self {
      FilterType::None => x,
      FilterType::Sub => x.wrapping_add(a),
      FilterType::Up => x.wrapping_add(b),
      FilterType::Average => x.wrapping_add(((a as u16 + b as u16) / 2) as u8),
      FilterType::Paeth => x.wrapping_add(paeth_predict(a, b, c)),
    }
  }
}

/// Picks whichever of left (`a`), above (`b`), or above-left (`c`) is closest
/// to `a + b - c`.
///
/// Ties go to `a`, then to `b`.
#[inline]
#[must_use]
pub const fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p: i32 = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // The order of these tests is fixed by the PNG spec, don't reorder them.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

/// Unfilters a single scanline of 8-bit RGBA pixels.
///
/// `above` is the previous scanline, already unfiltered. Pass an empty slice
/// for the first scanline of an image, which makes every "above" pixel 0.
pub fn unfilter_scanline(
  filter: FilterType, filtered: &[[u8; BYTES_PER_PIXEL]], above: &[[u8; BYTES_PER_PIXEL]],
) -> Result<Vec<[u8; BYTES_PER_PIXEL]>, PngError> {
  const ZERO: [u8; BYTES_PER_PIXEL] = [0; BYTES_PER_PIXEL];
  let mut line: Vec<[u8; BYTES_PER_PIXEL]> = Vec::new();
  line.try_reserve(filtered.len())?;
  for (x, raw) in filtered.iter().enumerate() {
    let a = line.last().copied().unwrap_or(ZERO);
    let b = above.get(x).copied().unwrap_or(ZERO);
    let c = match x.checked_sub(1) {
      Some(left) => above.get(left).copied().unwrap_or(ZERO),
      None => ZERO,
    };
    line.push(core::array::from_fn(|i| filter.reconstruct(raw[i], a[i], b[i], c[i])));
  }
  Ok(line)
}

/// One unfiltered scanline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
  /// The filter type byte the scanline was stored with.
  ///
  /// The filter has already been undone on `pixels`, this is just kept for
  /// bookkeeping.
  pub filter: u8,
  /// The pixels, left to right.
  pub pixels: Vec<r8g8b8a8_Srgb>,
}

/// Unfiltered pixels, as a list of rows top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
  rows: Vec<Row>,
}
impl PixelGrid {
  /// Wraps some rows up as a grid.
  ///
  /// Nothing is checked here, but [`extract`](super::extract) will reject a
  /// grid with rows of differing widths.
  #[inline]
  #[must_use]
  pub const fn from_rows(rows: Vec<Row>) -> Self {
    Self { rows }
  }
  /// The rows, top to bottom.
  #[inline]
  #[must_use]
  pub fn rows(&self) -> &[Row] {
    &self.rows
  }
  /// Unwraps the grid into its rows.
  #[inline]
  #[must_use]
  pub fn into_rows(self) -> Vec<Row> {
    self.rows
  }
  /// Number of rows.
  #[inline]
  #[must_use]
  pub fn height(&self) -> usize {
    self.rows.len()
  }
  /// Number of pixels in the first row (0 if there's no rows).
  #[inline]
  #[must_use]
  pub fn width(&self) -> usize {
    self.rows.first().map(|row| row.pixels.len()).unwrap_or(0)
  }
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: usize, y: usize) -> Option<r8g8b8a8_Srgb> {
    self.rows.get(y)?.pixels.get(x).copied()
  }
}

/// Reverses the scanline filtering of decompressed 8-bit RGBA image data.
///
/// The `payload` must be exactly a series of scanlines, each being one filter
/// type byte followed by `width` pixels of 4 bytes each. Every row of the
/// output keeps its original filter type byte.
///
/// ## Failure
/// Nothing is returned on failure, even if some rows were fine.
/// * [`PngError::WidthOrHeightZero`] if `width` is 0.
/// * [`PngError::UnfilterWasNotGivenEnoughData`] if the payload isn't a whole
///   number of scanlines. This is checked before any unfiltering happens.
/// * [`PngError::UnsupportedFilterByte`] if any scanline's filter type byte
///   isn't `0..=4`.
pub fn defilter(payload: &[u8], width: u32) -> Result<PixelGrid, PngError> {
  if width == 0 {
    return Err(PngError::WidthOrHeightZero);
  }
  let bytes_per_filterline = (width as usize)
    .checked_mul(BYTES_PER_PIXEL)
    .and_then(|b| b.checked_add(1))
    .ok_or(PngError::UnfilterWasNotGivenEnoughData)?;
  if payload.len() % bytes_per_filterline != 0 {
    return Err(PngError::UnfilterWasNotGivenEnoughData);
  }

  let mut rows: Vec<Row> = Vec::new();
  rows.try_reserve(payload.len() / bytes_per_filterline)?;
  // the first line has an implied line of zeroes above it
  let mut above: Vec<[u8; BYTES_PER_PIXEL]> = Vec::new();
  for filterline in payload.chunks_exact(bytes_per_filterline) {
    let (f, filtered) = filterline.split_at(1);
    let filter = FilterType::try_from(f[0])?;
    let line = unfilter_scanline(filter, bytemuck::cast_slice(filtered), &above)?;
    let mut pixels: Vec<r8g8b8a8_Srgb> = Vec::new();
    pixels.try_reserve(line.len())?;
    pixels.extend(line.iter().map(|&[r, g, b, a]| r8g8b8a8_Srgb { r, g, b, a }));
    rows.push(Row { filter: f[0], pixels });
    above = line;
  }
  Ok(PixelGrid { rows })
}
