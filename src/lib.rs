#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for pulling pixel tiles out of PNG data.
//!
//! The work happens in three stages, each a plain function over buffers you
//! already hold:
//!
//! 1) [`parse_chunks`](png::parse_chunks) splits the PNG bytes into chunks and
//!    decodes the header.
//! 2) The image data is decompressed (by any zlib implementation, see
//!    [`Deflate`](png::Deflate)) and [`defilter`](png::defilter) turns the
//!    decompressed scanlines back into pixels.
//! 3) [`extract`](png::extract) crops a rectangular tile out of the pixels.
//!
//! Only 8-bit RGBA, non-interlaced images are handled by the pixel stages.

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;

pub use pixel_formats::r8g8b8a8_Srgb;
