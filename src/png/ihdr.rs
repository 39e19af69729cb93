use crate::{u32_be_at, u8_at, PngError};

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl TryFrom<u8> for PngColorType {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(()),
    })
  }
}

/// Image Header
///
/// The values are kept exactly as declared. Only the width and height are
/// checked (they must not be 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeaderInfo {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type, see [`PngColorType`]
  pub colour_type: u8,
  /// always 0 in a valid PNG
  pub compression_method: i8,
  /// always 0 in a valid PNG
  pub filter_method: u8,
  /// 0 for none, 1 for Adam7
  pub interlace_method: u8,
}
impl HeaderInfo {
  /// Decodes the header from the whole PNG stream.
  ///
  /// The fields are read from fixed stream offsets (width at 16 through
  /// interlace method at 28), which is where they sit when `IHDR` is the first
  /// chunk.
  ///
  /// ## Failure
  /// * [`PngError::MalformedStream`] if the stream ends before offset 28.
  /// * [`PngError::WidthOrHeightZero`] if either dimension is 0.
  pub fn from_stream(bytes: &[u8]) -> Result<Self, PngError> {
    let width = u32_be_at(bytes, 16).ok_or(PngError::MalformedStream)?;
    let height = u32_be_at(bytes, 20).ok_or(PngError::MalformedStream)?;
    let byte = |offset| u8_at(bytes, offset).ok_or(PngError::MalformedStream);
    let header = Self {
      width,
      height,
      bit_depth: byte(24)?,
      colour_type: byte(25)?,
      compression_method: byte(26)? as i8,
      filter_method: byte(27)?,
      interlace_method: byte(28)?,
    };
    if header.width == 0 || header.height == 0 {
      return Err(PngError::WidthOrHeightZero);
    }
    Ok(header)
  }

  /// The color type, if it's one that PNG defines.
  #[inline]
  #[must_use]
  pub fn color_type(&self) -> Option<PngColorType> {
    PngColorType::try_from(self.colour_type).ok()
  }

  /// If this is the one pixel format the defilterer understands: 8-bit RGBA,
  /// not interlaced.
  #[inline]
  #[must_use]
  pub fn is_rgba8_non_interlaced(&self) -> bool {
    self.bit_depth == 8
      && self.color_type() == Some(PngColorType::RGBA)
      && self.interlace_method == 0
  }
}
