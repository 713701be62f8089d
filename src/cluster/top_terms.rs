//! Per-partition top-term summaries.

use crate::cluster::ClusterData;
use crate::vector;

/// Returns, for each partition, the indices of the `n` heaviest terms.
///
/// A partition's term weights are the elementwise sum of its members'
/// vectors; the returned indices are in descending weight order, with ties
/// resolved toward the lower index. `n` is capped at the word count. The
/// caller maps indices back to vocabulary entries for display.
///
/// # Examples
///
/// ```
/// use spkmeans::{spkmeans, top_terms, SpkMeansConfig};
///
/// let mut docs = vec![vec![1.0, 0.0, 0.2], vec![0.0, 1.0, 0.2]];
/// let result = spkmeans(&mut docs, &SpkMeansConfig::new(2)).unwrap();
///
/// let top = top_terms(&result.data, &docs, 1);
/// assert_eq!(top.len(), 2);
/// ```
#[must_use]
pub fn top_terms(data: &ClusterData, docs: &[Vec<f32>], n: usize) -> Vec<Vec<usize>> {
    let n = n.min(data.wc);
    data.partitions()
        .iter()
        .map(|p| {
            let weights = vector::sum(p.iter().map(|&i| docs[i].as_slice()), data.wc);
            let mut order: Vec<usize> = (0..data.wc).collect();
            order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
            order.truncate(n);
            order
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{spkmeans, SpkMeansConfig};

    #[test]
    fn test_top_terms_orders_by_summed_weight() {
        let mut data = ClusterData::new(2, 4, 3);
        data.replace_partitions(vec![vec![0, 1], vec![2, 3]]);
        let docs = vec![
            vec![1.0, 3.0, 0.0],
            vec![1.0, 2.0, 0.5],
            vec![0.0, 0.0, 4.0],
            vec![2.0, 0.0, 3.0],
        ];

        let top = top_terms(&data, &docs, 2);
        assert_eq!(top[0], vec![1, 0]);
        assert_eq!(top[1], vec![2, 0]);
    }

    #[test]
    fn test_top_terms_caps_at_word_count() {
        let mut data = ClusterData::new(1, 1, 2);
        data.replace_partitions(vec![vec![0]]);
        let docs = vec![vec![0.5, 1.5]];

        let top = top_terms(&data, &docs, 10);
        assert_eq!(top[0], vec![1, 0]);
    }

    #[test]
    fn test_top_terms_after_clustering() {
        let mut docs = vec![
            vec![5.0, 0.1, 0.1],
            vec![4.0, 0.2, 0.1],
            vec![0.1, 0.1, 6.0],
            vec![0.2, 0.1, 5.0],
        ];
        let result = spkmeans(&mut docs, &SpkMeansConfig::new(2)).unwrap();

        let top = top_terms(&result.data, &docs, 1);
        let mut heaviest: Vec<usize> = top.iter().map(|t| t[0]).collect();
        heaviest.sort_unstable();
        assert_eq!(heaviest, vec![0, 2]);
    }
}
