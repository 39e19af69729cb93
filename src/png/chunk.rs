use alloc::vec::Vec;
use core::fmt::Debug;

use super::*;
use crate::{byte_array_at, u32_be_at, AsciiArray, PngError};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// The four letter tag that says what kind of chunk a chunk is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub AsciiArray<4>);
#[allow(missing_docs)]
impl ChunkTy {
  pub const IHDR: Self = Self(AsciiArray(*b"IHDR"));
  pub const PLTE: Self = Self(AsciiArray(*b"PLTE"));
  pub const IDAT: Self = Self(AsciiArray(*b"IDAT"));
  pub const IEND: Self = Self(AsciiArray(*b"IEND"));
}
impl core::fmt::Display for ChunkTy {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.0, f)
  }
}

/// A chunk from a PNG, borrowing its data from the PNG bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk<'b> {
  ty: ChunkTy,
  length: u32,
  data: &'b [u8],
  declared_crc: u32,
  byte_offset: usize,
  header: Option<HeaderInfo>,
}
impl<'b> Chunk<'b> {
  /// The chunk's tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }
  /// Length of the data, as declared in the stream.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.length
  }
  /// The chunk's data bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC stored after the data. Nothing checks it.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// Position of the first data byte within the whole PNG stream.
  #[inline]
  #[must_use]
  pub const fn byte_offset(&self) -> usize {
    self.byte_offset
  }
  /// The decoded header, only present on `IHDR` chunks.
  #[inline]
  #[must_use]
  pub const fn header(&self) -> Option<HeaderInfo> {
    self.header
  }
  /// Computes the CRC32 of the tag and data, for comparing against
  /// [`declared_crc`](Self::declared_crc).
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    let mut c = u32::MAX;
    self.ty.0.as_bytes().iter().copied().chain(self.data.iter().copied()).for_each(|b| {
      c = CRC_TABLE[((c ^ (b as u32)) & 0xFF) as usize] ^ (c >> 8);
    });
    c ^ u32::MAX
  }
}
impl Debug for Chunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // data is cut down to the first 12 bytes
    f.debug_struct("Chunk")
      .field("ty", &self.ty)
      .field("length", &self.length)
      .field("data", &&self.data[..self.data.len().min(12)])
      .field("declared_crc", &self.declared_crc)
      .field("byte_offset", &self.byte_offset)
      .field("header", &self.header)
      .finish()
  }
}

/// Splits PNG bytes into chunks, logging any warnings.
///
/// See [`parse_chunks_with`].
#[inline]
pub fn parse_chunks(bytes: &[u8]) -> Result<Vec<Chunk<'_>>, PngError> {
  parse_chunks_with(bytes, log_warning)
}

/// Splits PNG bytes into chunks, passing any warnings to `on_warning`.
///
/// The chunks are returned in stream order. Along the way:
/// * `IHDR` chunks get their [`HeaderInfo`] decoded.
/// * `PLTE` chunks are checked against the most recent header's color type.
///   See [`check_palette`].
///
/// Declared CRC values are kept, but not verified.
///
/// ## Failure
/// * [`PngError::InvalidInputType`] if the bytes don't start with
///   [`PNG_SIGNATURE`].
/// * [`PngError::MalformedStream`] if a chunk runs past the end of the bytes.
/// * Any of the errors from [`HeaderInfo::from_stream`] or [`check_palette`].
pub fn parse_chunks_with<F>(bytes: &[u8], mut on_warning: F) -> Result<Vec<Chunk<'_>>, PngError>
where
  F: FnMut(PngWarning),
{
  if !is_png_signature_correct(bytes) {
    return Err(PngError::InvalidInputType);
  }
  let mut chunks: Vec<Chunk<'_>> = Vec::new();
  let mut last_header: Option<HeaderInfo> = None;
  let mut cursor = PNG_SIGNATURE.len();
  while cursor < bytes.len() {
    let length = u32_be_at(bytes, cursor).ok_or(PngError::MalformedStream)?;
    let tag: [u8; 4] = byte_array_at(bytes, cursor + 4).ok_or(PngError::MalformedStream)?;
    let ty = ChunkTy(AsciiArray(tag));
    let byte_offset = cursor + 8;
    let data_end = byte_offset.checked_add(length as usize).ok_or(PngError::MalformedStream)?;
    let data = bytes.get(byte_offset..data_end).ok_or(PngError::MalformedStream)?;
    let declared_crc = u32_be_at(bytes, data_end).ok_or(PngError::MalformedStream)?;
    cursor = data_end + 4;

    let header = if ty == ChunkTy::IHDR {
      let header = HeaderInfo::from_stream(bytes)?;
      last_header = Some(header);
      Some(header)
    } else {
      None
    };
    if ty == ChunkTy::PLTE {
      check_palette(length, last_header.as_ref(), &mut on_warning)?;
    }

    chunks.try_reserve(1)?;
    chunks.push(Chunk { ty, length, data, declared_crc, byte_offset, header });
  }
  Ok(chunks)
}

const CRC_TABLE: [u32; 256] = {
  let mut table = [0_u32; 256];
  let mut n = 0;
  while n < 256 {
    let mut c: u32 = n as _;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xedb88320 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      k += 1;
    }
    table[n] = c;
    n += 1;
  }
  table
};
