use crate::models::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a whole manifest into memory, gunzipping it first when `gzip` is set.
pub fn read_manifest<R: Read>(reader: R, gzip: bool) -> Result<String, Error> {
    let mut manifest = String::new();

    if gzip {
        GzDecoder::new(reader).read_to_string(&mut manifest)?;
    } else {
        BufReader::new(reader).read_to_string(&mut manifest)?;
    }

    Ok(manifest)
}

/// Reads a manifest file. A `.gz` extension selects gzip decompression.
pub fn read_manifest_from_path(path: &Path) -> Result<String, Error> {
    let file = File::open(path)?;
    let gzip = path.extension().is_some_and(|ext| ext == "gz");

    if gzip {
        debug!("Decompressing {}", path.display());
    }

    read_manifest(file, gzip)
}
