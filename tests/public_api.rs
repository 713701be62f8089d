//! Exercises the crate surface exactly as downstream code imports it.

use spkmeans::{spkmeans, top_terms, ClusterData, SpkMeansConfig, SpkMeansResult};

#[test]
fn test_documented_import_path_clusters_end_to_end() {
    let mut docs = vec![
        vec![1.0, 0.0],
        vec![0.9, 0.1],
        vec![0.0, 1.0],
        vec![0.1, 0.9],
    ];

    let result: SpkMeansResult = spkmeans(&mut docs, &SpkMeansConfig::new(2)).unwrap();
    assert!(result.converged);

    let data: &ClusterData = &result.data;
    assert_eq!(data.partition_sizes().iter().sum::<usize>(), 4);

    let top = top_terms(data, &docs, 1);
    assert_eq!(top.len(), 2);
}

#[test]
fn test_error_type_is_reexported() {
    let mut docs: Vec<Vec<f32>> = vec![];
    let err = spkmeans(&mut docs, &SpkMeansConfig::new(1)).unwrap_err();
    assert_eq!(err, spkmeans::Error::EmptyInput);
}
