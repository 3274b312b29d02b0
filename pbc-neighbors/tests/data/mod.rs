#![allow(dead_code)]

use flate2::read::GzDecoder;
use ndarray_npy::ReadNpyExt;

use pbc_neighbors::AtomicConfiguration;

#[derive(serde::Deserialize)]
pub struct NeighborListInput {
    pub cutoff: f64,
    pub configuration: AtomicConfiguration,
}

pub fn load_input(path: &str) -> NeighborListInput {
    let json = std::fs::read_to_string(format!("tests/data/generated/{}", path))
        .expect("failed to read input file");

    serde_json::from_str(&json).expect("failed to parse JSON")
}

pub fn load_expected_values<T: ReadNpyExt>(path: &str) -> T {
    let file = std::fs::File::open(format!("tests/data/generated/{}", path))
        .expect("failed to open file");

    T::read_npy(GzDecoder::new(file)).expect("failed to convert data to ndarray")
}
