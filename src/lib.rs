pub mod cluster;
pub mod error;
pub mod vector;

pub use cluster::{spkmeans, top_terms, ClusterData, SpkMeansConfig, SpkMeansResult};
pub use error::{Error, Result};
