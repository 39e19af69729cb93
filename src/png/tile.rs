use alloc::vec::Vec;

use super::*;
use crate::{r8g8b8a8_Srgb, IndexFault, PngError};

/// Width and height of a tile, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct TileSize {
  pub width: u32,
  pub height: u32,
}

/// Where the tile's top left corner sits within the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Margins {
  /// pixel columns skipped on the left
  pub x_margin: u32,
  /// rows skipped on the top
  pub y_margin: u32,
}

/// A tile cropped out of a [`PixelGrid`].
///
/// The rows are an owned copy, the source grid can be dropped afterwards.
///
/// ## Quirk
/// `marker` is a lone `0` in front of the data rows, standing where a filter
/// byte would go. It's always `0`, and the data rows don't carry filter bytes
/// of their own. Existing consumers read tiles in this shape, so it stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubGrid {
  /// always `0`
  pub marker: u8,
  /// `height` rows of `width` pixels each
  pub rows: Vec<Vec<r8g8b8a8_Srgb>>,
}

/// Copies a `tile` sized block of pixels out of the `grid`, starting
/// `margins.x_margin` pixels in from the left and `margins.y_margin` rows down
/// from the top.
///
/// ## Failure
/// The checks happen in this order:
/// * [`PngError::InvalidTileSize`] if the tile is 0 wide or 0 high.
/// * [`PngError::InvalidMargins`] if a margin plus the tile size overflows a
///   `u32`.
/// * [`PngError::InvalidGridType`] if the grid's rows aren't all the same
///   width.
/// * [`PngError::SubImageExtraction`] if the tile reaches past the bottom or
///   right side of the grid. The error says which row and column were being
///   read, and which index was out of range.
pub fn extract(grid: &PixelGrid, tile: TileSize, margins: Margins) -> Result<SubGrid, PngError> {
  if tile.width == 0 || tile.height == 0 {
    return Err(PngError::InvalidTileSize);
  }
  let x_end = margins.x_margin.checked_add(tile.width).ok_or(PngError::InvalidMargins)?;
  let y_end = margins.y_margin.checked_add(tile.height).ok_or(PngError::InvalidMargins)?;
  if grid.rows().windows(2).any(|pair| pair[0].pixels.len() != pair[1].pixels.len()) {
    return Err(PngError::InvalidGridType);
  }

  let x_start = margins.x_margin as usize;
  let x_end = x_end as usize;
  let mut rows: Vec<Vec<r8g8b8a8_Srgb>> = Vec::new();
  rows.try_reserve((tile.height as usize).min(grid.height()))?;
  for y in (margins.y_margin as usize)..(y_end as usize) {
    let row = grid.rows().get(y).ok_or(PngError::SubImageExtraction {
      row: y,
      column: x_start,
      fault: IndexFault { index: y, len: grid.height() },
    })?;
    let pixels = row.pixels.get(x_start..x_end).ok_or_else(|| {
      // first column of the tile that isn't in the row
      let column = row.pixels.len().max(x_start);
      PngError::SubImageExtraction {
        row: y,
        column,
        fault: IndexFault { index: column, len: row.pixels.len() },
      }
    })?;
    let mut copy: Vec<r8g8b8a8_Srgb> = Vec::new();
    copy.try_reserve(pixels.len())?;
    copy.extend_from_slice(pixels);
    rows.push(copy);
  }
  Ok(SubGrid { marker: 0, rows })
}
