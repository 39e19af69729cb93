use pngtile::{
  png::{
    defilter, extract, paeth_predict, parse_chunks, FilterType, Margins, PngImage, TileSize,
    PNG_SIGNATURE,
  },
  r8g8b8a8_Srgb, PngError,
};
use walkdir::WalkDir;

#[test]
fn test_parse_chunks_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = parse_chunks(&v);
  }
  // even totally random data should never panic the parser!
  for _ in 0..50 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(256));
    let _ = parse_chunks(&v);
    let _ = PngImage::try_from_bytes(&v);
  }
}

fn filter_line(filter: u8, line: &[[u8; 4]], above: &[[u8; 4]]) -> Vec<u8> {
  let f = FilterType::try_from(filter).unwrap();
  let mut out = vec![filter];
  for (x, raw) in line.iter().enumerate() {
    let zero = [0; 4];
    let a = if x > 0 { line[x - 1] } else { zero };
    let b = above.get(x).copied().unwrap_or(zero);
    let c = if x > 0 { above.get(x - 1).copied().unwrap_or(zero) } else { zero };
    for i in 0..4 {
      let predicted = match f {
        FilterType::None => 0,
        FilterType::Sub => a[i],
        FilterType::Up => b[i],
        FilterType::Average => ((a[i] as u16 + b[i] as u16) / 2) as u8,
        FilterType::Paeth => paeth_predict(a[i], b[i], c[i]),
      };
      out.push(raw[i].wrapping_sub(predicted));
    }
  }
  out
}

/// Random pixels, plus the same pixels filtered with a random filter per line.
fn random_image(width: usize, height: usize) -> (Vec<Vec<[u8; 4]>>, Vec<u8>) {
  let noise = super::rand_bytes(width * height * 4 + height);
  let (pixel_bytes, filter_bytes) = noise.split_at(width * height * 4);
  let image: Vec<Vec<[u8; 4]>> = pixel_bytes
    .chunks_exact(width * 4)
    .map(|line| line.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]]).collect())
    .collect();
  let mut payload = Vec::new();
  let mut above: &[[u8; 4]] = &[];
  for (line, f) in image.iter().zip(filter_bytes) {
    payload.extend(filter_line(f % 5, line, above));
    above = line;
  }
  (image, payload)
}

#[test]
fn test_defilter_random_images() {
  for (width, height) in [(1, 1), (1, 9), (9, 1), (16, 16), (33, 7)] {
    let (image, payload) = random_image(width, height);
    let grid = defilter(&payload, width as u32).unwrap();
    assert_eq!(grid.height(), height);
    for (y, line) in image.iter().enumerate() {
      assert_eq!(grid.rows()[y].filter, payload[y * (1 + width * 4)]);
      for (x, &[r, g, b, a]) in line.iter().enumerate() {
        assert_eq!(grid.get(x, y), Some(r8g8b8a8_Srgb { r, g, b, a }));
      }
    }
  }
}

#[test]
fn test_defilter_random_bad_filter_byte() {
  let (_, mut payload) = random_image(4, 4);
  let line_len = 1 + 4 * 4;
  payload[2 * line_len] = 5 + (super::rand_bytes(1)[0] % 251);
  let bad = payload[2 * line_len];
  assert_eq!(defilter(&payload, 4), Err(PngError::UnsupportedFilterByte(bad)));
}

#[test]
fn test_extract_random_tiles() {
  let (width, height) = (12, 10);
  let (_, payload) = random_image(width, height);
  let grid = defilter(&payload, width as u32).unwrap();
  for r in super::rand_bytes(40).chunks_exact(4) {
    let tile = TileSize { width: 1 + (r[0] as u32 % 6), height: 1 + (r[1] as u32 % 6) };
    let margins = Margins { x_margin: r[2] as u32 % 7, y_margin: r[3] as u32 % 5 };
    let sub = extract(&grid, tile, margins).unwrap();
    assert_eq!(sub.marker, 0);
    assert_eq!(sub.rows.len(), tile.height as usize);
    for (ty, row) in sub.rows.iter().enumerate() {
      assert_eq!(row.len(), tile.width as usize);
      for (tx, p) in row.iter().enumerate() {
        let x = margins.x_margin as usize + tx;
        let y = margins.y_margin as usize + ty;
        assert_eq!(Some(*p), grid.get(x, y));
      }
    }
  }
}

#[cfg(feature = "miniz_oxide")]
#[test]
fn test_decode_tile_from_png_bytes() {
  use pngtile::png::{Deflate, MinizDeflate};

  fn chunk(v: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
    v.extend_from_slice(&(data.len() as u32).to_be_bytes());
    v.extend_from_slice(ty);
    v.extend_from_slice(data);
    v.extend_from_slice(&[0; 4]);
  }

  let (width, height) = (8_usize, 6_usize);
  let (image, payload) = random_image(width, height);
  let codec = MinizDeflate::default();
  let zlib = codec.compress(&payload);

  let mut ihdr = Vec::new();
  ihdr.extend_from_slice(&(width as u32).to_be_bytes());
  ihdr.extend_from_slice(&(height as u32).to_be_bytes());
  ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
  let mut png = PNG_SIGNATURE.to_vec();
  chunk(&mut png, b"IHDR", &ihdr);
  for idat in zlib.chunks(7) {
    chunk(&mut png, b"IDAT", idat);
  }
  chunk(&mut png, b"IEND", &[]);

  let parsed = PngImage::try_from_bytes(&png).unwrap();
  assert_eq!(parsed.header().width, width as u32);
  let tile = parsed
    .decode_tile(&codec, TileSize { width: 3, height: 2 }, Margins { x_margin: 4, y_margin: 3 })
    .unwrap();
  for (ty, row) in tile.rows.iter().enumerate() {
    for (tx, p) in row.iter().enumerate() {
      let [r, g, b, a] = image[3 + ty][4 + tx];
      assert_eq!(*p, r8g8b8a8_Srgb { r, g, b, a });
    }
  }
}
