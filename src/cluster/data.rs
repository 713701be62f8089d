//! The mutable clustering state: k partitions of document indices and their
//! concept vectors.

/// The result state of a spherical k-means run.
///
/// Partitions hold indices into the caller's document-term matrix, never
/// copies of the vector data. Partitions and concepts are replaced wholesale
/// between iterations by the engine; outside the engine the state is
/// read-only.
#[derive(Debug, Clone)]
pub struct ClusterData {
    /// Number of partitions.
    pub k: usize,
    /// Number of documents in the collection.
    pub dc: usize,
    /// Number of word weights per document vector.
    pub wc: usize,
    partitions: Vec<Vec<usize>>,
    concepts: Vec<Vec<f32>>,
}

impl ClusterData {
    /// Creates an empty state with `k` partition slots and `k` concept slots,
    /// with no documents assigned.
    #[must_use]
    pub fn new(k: usize, dc: usize, wc: usize) -> Self {
        Self {
            k,
            dc,
            wc,
            partitions: vec![Vec::new(); k],
            concepts: vec![Vec::new(); k],
        }
    }

    /// The current partitions, each a group of document indices.
    #[must_use]
    pub fn partitions(&self) -> &[Vec<usize>] {
        &self.partitions
    }

    /// The size of each partition.
    #[must_use]
    pub fn partition_sizes(&self) -> Vec<usize> {
        self.partitions.iter().map(Vec::len).collect()
    }

    /// The current concept vectors, one per partition, each of length `wc`.
    #[must_use]
    pub fn concepts(&self) -> &[Vec<f32>] {
        &self.concepts
    }

    /// Swaps in a fresh set of partitions, discarding the previous one.
    ///
    /// The new groups must partition all `dc` documents exactly once;
    /// violating that is a programming error in the engine.
    pub(crate) fn replace_partitions(&mut self, new_partitions: Vec<Vec<usize>>) {
        debug_assert_eq!(new_partitions.len(), self.k);
        debug_assert_eq!(
            new_partitions.iter().map(Vec::len).sum::<usize>(),
            self.dc
        );
        self.partitions = new_partitions;
    }

    /// Swaps in freshly computed concept vectors, discarding the previous set.
    pub(crate) fn replace_concepts(&mut self, new_concepts: Vec<Vec<f32>>) {
        debug_assert_eq!(new_concepts.len(), self.k);
        self.concepts = new_concepts;
    }
}
