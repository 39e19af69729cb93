use alloc::vec::Vec;

use super::*;
use crate::PngError;

/// A parsed PNG: its chunks in stream order, with the header up front.
///
/// The chunks borrow from the PNG bytes, and nothing about the image changes
/// after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngImage<'b> {
  chunks: Vec<Chunk<'b>>,
  header: HeaderInfo,
  warnings: Vec<PngWarning>,
}
impl<'b> PngImage<'b> {
  /// The first eight bytes of a PNG datastream.
  pub const SIGNATURE: [u8; 8] = PNG_SIGNATURE;

  /// Parses the PNG bytes.
  ///
  /// Any warnings are logged, and also kept for [`warnings`](Self::warnings).
  ///
  /// ## Failure
  /// * Everything that [`parse_chunks_with`] can fail with.
  /// * [`PngError::MissingHeader`] if the first chunk isn't `IHDR`.
  pub fn try_from_bytes(bytes: &'b [u8]) -> Result<Self, PngError> {
    let mut warnings: Vec<PngWarning> = Vec::new();
    let chunks = parse_chunks_with(bytes, |warning| {
      log_warning(warning);
      warnings.push(warning);
    })?;
    let header = match chunks.first() {
      Some(first) if first.ty() == ChunkTy::IHDR => first.header(),
      _ => None,
    }
    .ok_or(PngError::MissingHeader)?;
    #[cfg(feature = "log")]
    log::debug!("png: {} chunks, {}x{}", chunks.len(), header.width, header.height);
    Ok(Self { chunks, header, warnings })
  }

  /// All of the chunks, in stream order.
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[Chunk<'b>] {
    &self.chunks
  }

  /// The header from the first chunk.
  #[inline]
  #[must_use]
  pub const fn header(&self) -> HeaderInfo {
    self.header
  }

  /// Any non-fatal problems found while parsing.
  #[inline]
  #[must_use]
  pub fn warnings(&self) -> &[PngWarning] {
    &self.warnings
  }

  /// The entries of the first `PLTE` chunk, if there is one.
  #[inline]
  #[must_use]
  pub fn palette(&self) -> Option<&'b [[u8; 3]]> {
    self
      .chunks
      .iter()
      .find(|chunk| chunk.ty() == ChunkTy::PLTE)
      .map(|chunk| palette_entries(chunk.data()))
  }

  /// The data of every `IDAT` chunk, joined in stream order.
  ///
  /// This is the single zlib stream holding the filtered image data.
  pub fn idat_payload(&self) -> Result<Vec<u8>, PngError> {
    let idats = || self.chunks.iter().filter(|chunk| chunk.ty() == ChunkTy::IDAT);
    let mut payload: Vec<u8> = Vec::new();
    payload.try_reserve(idats().map(|chunk| chunk.data().len()).sum())?;
    idats().for_each(|chunk| payload.extend_from_slice(chunk.data()));
    Ok(payload)
  }

  /// Decompresses and unfilters the image data.
  ///
  /// ## Failure
  /// * [`PngError::UnsupportedPixelFormat`] unless the header is 8-bit RGBA
  ///   without interlacing.
  /// * Whatever the `codec` fails with. A failed decompression never reaches
  ///   the unfiltering step.
  /// * Everything [`defilter`] can fail with.
  /// * [`PngError::UnfilterWasNotGivenEnoughData`] if the row count doesn't
  ///   match the header's height.
  pub fn decode_pixel_grid<D>(&self, codec: &D) -> Result<PixelGrid, PngError>
  where
    D: Deflate + ?Sized,
  {
    let header = self.header;
    if !header.is_rgba8_non_interlaced() {
      return Err(PngError::UnsupportedPixelFormat {
        bit_depth: header.bit_depth,
        colour_type: header.colour_type,
        interlace_method: header.interlace_method,
      });
    }
    let decompressed = codec.decompress(&self.idat_payload()?)?;
    #[cfg(feature = "log")]
    log::debug!("png: decompressed {} bytes of image data", decompressed.len());
    let grid = defilter(&decompressed, header.width)?;
    if grid.height() != header.height as usize {
      return Err(PngError::UnfilterWasNotGivenEnoughData);
    }
    Ok(grid)
  }

  /// Decodes the pixels and crops a tile out of them.
  ///
  /// See [`decode_pixel_grid`](Self::decode_pixel_grid) and [`extract`].
  #[inline]
  pub fn decode_tile<D>(
    &self, codec: &D, tile: TileSize, margins: Margins,
  ) -> Result<SubGrid, PngError>
  where
    D: Deflate + ?Sized,
  {
    extract(&self.decode_pixel_grid(codec)?, tile, margins)
  }
}
