use alloc::vec::Vec;

use crate::PngError;

/// A zlib (DEFLATE) implementation.
///
/// The crate only ever works with whole buffers: callers finish any reading or
/// awaiting of their own before handing data over, and the result has to be
/// complete before unfiltering starts.
pub trait Deflate {
  /// Compresses the bytes into a zlib stream.
  fn compress(&self, bytes: &[u8]) -> Vec<u8>;

  /// Decompresses a full zlib stream.
  ///
  /// A short or corrupt stream must be an error, never a partial output.
  fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, PngError>;
}

/// [`Deflate`] using the `miniz_oxide` crate.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinizDeflate {
  /// compression level, `0..=10`
  pub level: u8,
}
#[cfg(feature = "miniz_oxide")]
impl Default for MinizDeflate {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { level: 6 }
  }
}
#[cfg(feature = "miniz_oxide")]
impl Deflate for MinizDeflate {
  #[inline]
  fn compress(&self, bytes: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(bytes, self.level)
  }

  #[inline]
  fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, PngError> {
    miniz_oxide::inflate::decompress_to_vec_zlib(bytes).map_err(|_| PngError::Decompression)
  }
}
