mod persistence;

pub use persistence::{ProfileFile, load_profile};
