use pngtile::png::{parse_chunks, PngImage};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    let chunks = match parse_chunks(&bytes) {
      Ok(chunks) => chunks,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    for (n, chunk) in chunks.iter().enumerate() {
      let crc_ok = chunk.compute_actual_crc() == chunk.declared_crc();
      println!("{n}: {chunk:?} (crc ok: {crc_ok})");
    }
    if let Ok(png) = PngImage::try_from_bytes(&bytes) {
      println!("header: {:?}", png.header());
      for warning in png.warnings() {
        println!("warning: {warning}");
      }
    }
  }
}
