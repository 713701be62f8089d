mod data;
mod spkmeans;
mod top_terms;

// Re-export public types and functions
pub use data::ClusterData;
pub use spkmeans::{spkmeans, SpkMeansConfig, SpkMeansResult};
pub use top_terms::top_terms;
