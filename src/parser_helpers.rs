#![forbid(unsafe_code)]

//! Just has shorthands for reading big-endian values at an offset.

/// Reads `N` bytes starting at `offset`, if they're all in bounds.
#[inline]
#[must_use]
pub fn byte_array_at<const N: usize>(bytes: &[u8], offset: usize) -> Option<[u8; N]> {
  let end = offset.checked_add(N)?;
  bytes.get(offset..end)?.try_into().ok()
}

#[inline]
#[must_use]
pub fn u32_be_at(bytes: &[u8], offset: usize) -> Option<u32> {
  byte_array_at(bytes, offset).map(u32::from_be_bytes)
}

#[inline]
#[must_use]
pub fn u8_at(bytes: &[u8], offset: usize) -> Option<u8> {
  bytes.get(offset).copied()
}
