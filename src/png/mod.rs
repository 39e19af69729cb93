//! Holds all the tools for decoding PNG data into pixel tiles.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Decoding Step By Step
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! Each chunk is a big-endian length, a four letter tag, the data, and a CRC.
//! There's four "critical" chunk types:
//! * **Header** (`IHDR`) - Always the first chunk. It has the image's
//!   dimensions, pixel format, and if the image is interlaced or not.
//! * **Palette** (`PLTE`) - If an image uses indexed color it will have a
//!   palette of what index values map to what RGB values.
//! * **Image Data** (`IDAT`) - One or more chunks of compressed data. All of
//!   the compressed data forms a single zlib data stream, so the chunks are
//!   joined in stream order before decompressing.
//! * **End** (`IEND`) - The last chunk.
//!
//! First parse the chunks, either as a plain list with [`parse_chunks`] or
//! wrapped up with [`PngImage::try_from_bytes`] which also checks that the
//! header comes first.
//!
//! ```no_run
//! use pngtile::png::*;
//! # fn f(png: &[u8]) -> Result<(), pngtile::PngError> {
//! let image = PngImage::try_from_bytes(png)?;
//! let header: HeaderInfo = image.header();
//! # Ok(())
//! # }
//! ```
//!
//! When storing the PNG, the raw pixel values are first "filtered" (to try and
//! make them more compression-friendly), and then compressed into a zlib data
//! stream. To get the pixels back you reverse the operations: decompress the
//! joined `IDAT` data (this crate doesn't care which zlib implementation does
//! that, see [`Deflate`]), then [`defilter`] the scanlines.
//!
//! ```no_run
//! # use pngtile::png::*;
//! # fn f(image: PngImage<'_>, decompressed: &[u8]) -> Result<(), pngtile::PngError> {
//! let grid: PixelGrid = defilter(decompressed, image.header().width)?;
//! let tile: SubGrid = extract(&grid, TileSize { width: 16, height: 16 }, Margins::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## What's Not Handled
//!
//! * Checksums. The CRC of each chunk is kept as declared but never checked
//!   during parsing. [`Chunk::compute_actual_crc`] is there if you care.
//! * Bit depths other than 8, color types other than RGBA, and interlaced
//!   images. The parser reads any header, but the pixel stages assume each
//!   scanline is one filter byte followed by 4 bytes per pixel.
//! * Filtering. Only the unfiltering direction exists.

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod image;
pub use image::*;

mod unfilter;
pub use unfilter::*;

mod tile;
pub use tile::*;

mod codec;
pub use codec::*;
