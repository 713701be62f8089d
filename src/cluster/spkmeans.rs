//! Spherical k-means clustering.
//!
//! Partitions a collection of document vectors into k groups by cosine
//! similarity. Every document vector is first normalized to unit Euclidean
//! norm (the TXN scheme), after which cosine similarity against the
//! unit-norm concept vectors reduces to a plain dot product.
//!
//! The algorithm iterates three steps to a fixed point:
//!
//! 1. **Assign**: each document moves to the partition whose concept vector
//!    it is most similar to.
//! 2. **Recompute**: each partition's concept vector is rebuilt from its new
//!    membership as the normalized member sum.
//! 3. **Evaluate**: the total quality, the sum over partitions of
//!    `dot(sum(members), concept)`, is recomputed; the loop stops once its
//!    improvement `dQ` falls to the convergence threshold.
//!
//! Quality is non-decreasing across iterations, since each assignment step
//! only moves a document to a strictly more similar partition, so `dQ`
//! shrinks toward zero as assignments stabilize. A configurable iteration
//! cap bounds the loop on pathological inputs.

use log::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cluster::ClusterData;
use crate::error::{Error, Result};
use crate::vector;

/// Configuration for a spherical k-means run.
#[derive(Debug, Clone)]
pub struct SpkMeansConfig {
    /// Number of partitions to produce. Must satisfy `1 <= k <= dc`.
    pub k: usize,
    /// Convergence threshold: the loop stops once the quality improvement
    /// per iteration drops to this value or below.
    pub threshold: f32,
    /// Maximum number of iterations before giving up on convergence.
    pub max_iterations: usize,
}

impl SpkMeansConfig {
    /// Creates a config with default threshold (0.001) and iteration cap
    /// (100).
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            threshold: 0.001,
            max_iterations: 100,
        }
    }

    /// Customize the convergence threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Customize the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// The outcome of a spherical k-means run.
#[derive(Debug, Clone)]
pub struct SpkMeansResult {
    /// The final partitioning and concept vectors. When `converged` is
    /// false this is the best state reached before the iteration cap.
    pub data: ClusterData,
    /// Number of assign/recompute/evaluate iterations performed.
    pub iterations: usize,
    /// Whether the quality delta reached the threshold before the cap.
    pub converged: bool,
    /// The final total quality.
    pub quality: f32,
}

/// Runs spherical k-means over a document-term matrix.
///
/// Each row of `docs` is one document's word-weight vector; all rows must
/// have equal length and non-negative entries. The rows are normalized to
/// unit norm in place before clustering, and are otherwise only read.
///
/// If an assignment step leaves a partition empty, the partition is
/// reseeded with the farthest outlier: the document least similar to the
/// concept it was assigned to, taken from a partition with at least two
/// members.
///
/// # Arguments
///
/// * `docs` - The document-term matrix, one weight vector per document
/// * `config` - Cluster count, convergence threshold, and iteration cap
///
/// # Errors
///
/// * [`Error::EmptyInput`] if `docs` is empty
/// * [`Error::InvalidClusterCount`] if `k == 0` or `k > docs.len()`
/// * [`Error::DimensionMismatch`] if rows differ in length
/// * [`Error::ZeroVector`] if a document vector is all zeros
/// * [`Error::EmptyPartition`] if an emptied partition cannot be reseeded
///
/// # Examples
///
/// ```
/// use spkmeans::{spkmeans, SpkMeansConfig};
///
/// let mut docs = vec![
///     vec![1.0, 0.0],
///     vec![0.9, 0.1],
///     vec![0.0, 1.0],
///     vec![0.1, 0.9],
/// ];
///
/// let result = spkmeans(&mut docs, &SpkMeansConfig::new(2)).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.data.partition_sizes().iter().sum::<usize>(), 4);
/// ```
pub fn spkmeans(docs: &mut [Vec<f32>], config: &SpkMeansConfig) -> Result<SpkMeansResult> {
    validate(docs, config.k)?;
    let dc = docs.len();
    let wc = docs[0].len();

    // TXN scheme: normalize every document vector to unit norm.
    for (i, doc) in docs.iter_mut().enumerate() {
        let n = vector::norm(doc);
        if n == 0.0 {
            return Err(Error::ZeroVector { index: i });
        }
        vector::divide_in_place(doc, n);
    }

    let mut data = ClusterData::new(config.k, dc, wc);
    data.replace_partitions(initial_partitions(dc, config.k));
    data.replace_concepts(compute_concepts(docs, data.partitions(), wc));

    let mut quality = compute_quality(docs, &data);
    debug!("initial quality: {quality}");

    // dQ starts above the threshold to force at least one iteration.
    let mut dq = config.threshold * 10.0;
    let mut iterations = 0;
    while dq > config.threshold && iterations < config.max_iterations {
        iterations += 1;

        let mut assignments = assign(docs, data.concepts());
        let new_partitions = build_partitions(config.k, &mut assignments)?;
        data.replace_partitions(new_partitions);

        data.replace_concepts(compute_concepts(docs, data.partitions(), wc));

        let new_quality = compute_quality(docs, &data);
        dq = new_quality - quality;
        quality = new_quality;
        debug!("iteration {iterations}: quality {quality} (dQ {dq})");
    }

    Ok(SpkMeansResult {
        data,
        iterations,
        converged: dq <= config.threshold,
        quality,
    })
}

fn validate(docs: &[Vec<f32>], k: usize) -> Result<()> {
    if docs.is_empty() {
        return Err(Error::EmptyInput);
    }
    let wc = docs[0].len();
    for (i, doc) in docs.iter().enumerate() {
        if doc.len() != wc {
            return Err(Error::DimensionMismatch {
                index: i,
                expected: wc,
                found: doc.len(),
            });
        }
    }
    if k == 0 || k > docs.len() {
        return Err(Error::InvalidClusterCount { k, dc: docs.len() });
    }
    Ok(())
}

/// Splits `0..dc` into k contiguous blocks of `floor(dc / k)` documents,
/// with the final block absorbing the remainder. Deterministic; the seed
/// partitioning only affects convergence speed, not correctness.
fn initial_partitions(dc: usize, k: usize) -> Vec<Vec<usize>> {
    let split = dc / k;
    (0..k)
        .map(|i| {
            let base = i * split;
            let top = if i == k - 1 { dc } else { base + split };
            (base..top).collect()
        })
        .collect()
}

/// Computes a partition's concept vector: the member sum, pre-scaled by
/// `1/wc`, normalized to unit norm. The pre-scale keeps intermediate values
/// in a tame floating-point range; normalization makes it mathematically
/// inert, but the order is kept for reproducibility.
fn compute_concept(docs: &[Vec<f32>], partition: &[usize], wc: usize) -> Vec<f32> {
    let mut concept = vector::sum(partition.iter().map(|&i| docs[i].as_slice()), wc);
    vector::scale_in_place(&mut concept, 1.0 / wc as f32);
    vector::normalize_in_place(&mut concept);
    concept
}

fn compute_concepts(docs: &[Vec<f32>], partitions: &[Vec<usize>], wc: usize) -> Vec<Vec<f32>> {
    partitions
        .iter()
        .map(|p| compute_concept(docs, p, wc))
        .collect()
}

/// Total quality: the sum over partitions of `dot(sum(members), concept)`.
fn compute_quality(docs: &[Vec<f32>], data: &ClusterData) -> f32 {
    data.partitions()
        .iter()
        .zip(data.concepts())
        .map(|(p, concept)| {
            let sum_p = vector::sum(p.iter().map(|&i| docs[i].as_slice()), data.wc);
            vector::dot(&sum_p, concept)
        })
        .sum()
}

/// Finds the concept most similar to `doc`. Ties resolve to the
/// lowest-indexed concept (strict `>` comparison, first seen wins).
fn nearest_concept(doc: &[f32], concepts: &[Vec<f32>]) -> (usize, f32) {
    let mut best = 0;
    let mut best_sim = vector::dot(doc, &concepts[0]);
    for (j, concept) in concepts.iter().enumerate().skip(1) {
        let sim = vector::dot(doc, concept);
        if sim > best_sim {
            best_sim = sim;
            best = j;
        }
    }
    (best, best_sim)
}

/// Computes each document's nearest concept and the similarity to it.
/// Documents are independent, so with the `parallel` feature this fans out
/// across a rayon pool; partition groups are built sequentially afterward
/// so the output is identical either way.
#[cfg(feature = "parallel")]
fn assign(docs: &[Vec<f32>], concepts: &[Vec<f32>]) -> Vec<(usize, f32)> {
    docs.par_iter()
        .map(|doc| nearest_concept(doc, concepts))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn assign(docs: &[Vec<f32>], concepts: &[Vec<f32>]) -> Vec<(usize, f32)> {
    docs.iter()
        .map(|doc| nearest_concept(doc, concepts))
        .collect()
}

/// Groups documents by assigned partition, then reseeds any partition the
/// assignment step left empty. The reseed donor is the farthest outlier:
/// the document with the lowest similarity to its assigned concept, drawn
/// from a partition that still has at least two members.
fn build_partitions(k: usize, assignments: &mut [(usize, f32)]) -> Result<Vec<Vec<usize>>> {
    let mut partitions: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &(label, _)) in assignments.iter().enumerate() {
        partitions[label].push(i);
    }

    for p in 0..k {
        if !partitions[p].is_empty() {
            continue;
        }
        let mut outlier: Option<(usize, f32)> = None;
        for (i, &(label, sim)) in assignments.iter().enumerate() {
            if partitions[label].len() < 2 {
                continue;
            }
            match outlier {
                Some((_, best)) if sim >= best => {}
                _ => outlier = Some((i, sim)),
            }
        }
        match outlier {
            Some((i, _)) => {
                warn!("partition {p} is empty, reseeding with document {i}");
                let old = assignments[i].0;
                partitions[old].retain(|&d| d != i);
                partitions[p].push(i);
                assignments[i].0 = p;
            }
            None => return Err(Error::EmptyPartition { index: p }),
        }
    }
    Ok(partitions)
}
