use core::fmt;

/// An out-of-range index, as seen while cropping a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexFault {
  /// The index that was asked for.
  pub index: usize,
  /// The length of the sequence that was indexed.
  pub len: usize,
}

/// An error from the `pngtile` crate.
///
/// Every error aborts the call that returned it. No stage hands back partial
/// output alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PngError {
  /// The input is not PNG data: it's shorter than the signature, or the
  /// signature bytes are wrong.
  InvalidInputType,

  /// Chunk framing runs past the end of the buffer.
  MalformedStream,

  /// A `PLTE` chunk's length is not a multiple of 3.
  InvalidPalette,

  /// The header says the image is indexed color but the `PLTE` chunk is
  /// empty.
  MissingPalette,

  /// The first chunk of the stream is not `IHDR`.
  MissingHeader,

  /// The declared width and/or height of this image is 0.
  WidthOrHeightZero,

  /// A scanline's filter type byte is outside of `0..=4`.
  UnsupportedFilterByte(u8),

  /// The decompressed data isn't a whole number of scanlines, or doesn't have
  /// as many scanlines as the header says.
  UnfilterWasNotGivenEnoughData,

  /// The pixel stages only handle 8-bit RGBA without interlacing.
  UnsupportedPixelFormat {
    /// declared bit depth
    bit_depth: u8,
    /// declared color type
    colour_type: u8,
    /// declared interlace method
    interlace_method: u8,
  },

  /// The zlib data stream could not be decompressed.
  Decompression,

  /// The allocator couldn't give us enough space.
  Alloc,

  /// A tile must be at least 1x1.
  InvalidTileSize,

  /// The tile's margins push it past the largest addressable position.
  InvalidMargins,

  /// The grid given isn't rectangular (its rows differ in width).
  InvalidGridType,

  /// The tile reaches outside of the grid.
  SubImageExtraction {
    /// grid row being read
    row: usize,
    /// pixel column being read, not counting the filter byte
    column: usize,
    /// the index that was out of range
    fault: IndexFault,
  },
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInputType => f.write_str("input is not PNG data"),
      Self::MalformedStream => f.write_str("chunk runs past the end of the data"),
      Self::InvalidPalette => f.write_str("palette length is not a multiple of 3"),
      Self::MissingPalette => f.write_str("indexed color image has an empty palette"),
      Self::MissingHeader => f.write_str("first chunk is not IHDR"),
      Self::WidthOrHeightZero => f.write_str("image width or height is zero"),
      Self::UnsupportedFilterByte(b) => write!(f, "unsupported filter type byte: {b}"),
      Self::UnfilterWasNotGivenEnoughData => {
        f.write_str("decompressed data does not match the scanline layout")
      }
      Self::UnsupportedPixelFormat { bit_depth, colour_type, interlace_method } => write!(
        f,
        "unsupported pixel format: bit depth {bit_depth}, color type {colour_type}, \
         interlace {interlace_method}"
      ),
      Self::Decompression => f.write_str("zlib decompression failed"),
      Self::Alloc => f.write_str("allocation failed"),
      Self::InvalidTileSize => f.write_str("tile width and height must be non-zero"),
      Self::InvalidMargins => f.write_str("tile margins overflow"),
      Self::InvalidGridType => f.write_str("grid rows are not all the same width"),
      Self::SubImageExtraction { row, column, fault } => write!(
        f,
        "tile out of bounds at row {row}, column {column}: index {} of length {}",
        fault.index, fault.len
      ),
    }
  }
}

impl From<alloc::collections::TryReserveError> for PngError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
