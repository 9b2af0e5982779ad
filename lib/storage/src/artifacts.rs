use laprec_core::{EncoderTable, Error, NeighborIndex, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::load(&source, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::load(&source, e))
}

/// Load the per-field label encoders exported by the training process
pub fn load_encoders<P: AsRef<Path>>(path: P) -> Result<EncoderTable> {
    load_json(path.as_ref())
}

/// Load the fitted nearest-neighbor index exported by the training process
pub fn load_neighbor_index<P: AsRef<Path>>(path: P) -> Result<NeighborIndex> {
    load_json(path.as_ref())
}
