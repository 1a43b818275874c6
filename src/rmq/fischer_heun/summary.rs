//! A sparse table over the per-block minima of the block decomposition. It answers argmin queries
//! over ranges of whole blocks in constant time by combining two overlapping power-of-two windows;
//! minimum queries are idempotent, so the overlap does not change the result.

use std::mem::size_of;

/// The summary table stores, for every layer `k` and block index `i` with `i + 2^k <= m`, the
/// global index of the leftmost minimum among the blocks `[i, i + 2^k)`. Layer 0 holds the
/// per-block minima.
///
/// The layers are stored in a single flattened vector with one row of `m` entries per layer.
/// Entries past a layer's valid bound are never read; the uniform row length avoids a jagged
/// two-dimensional table.
#[derive(Clone, Debug)]
pub(super) struct BlockSummary {
    block_size: usize,
    num_blocks: usize,
    layers: Vec<usize>,
}

impl BlockSummary {
    /// Builds the summary for the given data and block size. Layer 0 is filled by scanning each
    /// (possibly partial) block; every further layer combines two windows of the layer below it.
    pub(super) fn new<T: Ord>(data: &[T], block_size: usize) -> Self {
        let num_blocks = data.len().div_ceil(block_size);
        if num_blocks == 0 {
            return Self {
                block_size,
                num_blocks,
                layers: Vec::new(),
            };
        }

        let num_layers = num_blocks.ilog2() as usize + 1;
        let mut layers = vec![0usize; num_layers * num_blocks];

        for (block, chunk) in data.chunks(block_size).enumerate() {
            let offset = block * block_size;
            let mut minimum = offset;
            for (i, value) in chunk.iter().enumerate().skip(1) {
                if *value < data[minimum] {
                    minimum = offset + i;
                }
            }
            layers[block] = minimum;
        }

        for layer in 1..num_layers {
            let half = 1 << (layer - 1);
            for block in 0..=num_blocks - (1 << layer) {
                let first = layers[(layer - 1) * num_blocks + block];
                let second = layers[(layer - 1) * num_blocks + block + half];
                layers[layer * num_blocks + block] = if data[second] < data[first] {
                    second
                } else {
                    first
                };
            }
        }

        Self {
            block_size,
            num_blocks,
            layers,
        }
    }

    /// Returns the global index of the leftmost minimum over the whole blocks
    /// `[block_lo, block_hi)`. An invalid block range is answered with the sentinel
    /// `block_hi * block_size`, which is out of range for the caller's query by construction.
    ///
    /// Ranges of one or two blocks are answered directly from the stored layers. Larger ranges
    /// either hit a stored power-of-two window exactly or are covered by two overlapping windows
    /// of the next smaller layer, where the left window wins ties to preserve the leftmost index.
    pub(super) fn range_min<T: Ord>(&self, data: &[T], block_lo: usize, block_hi: usize) -> usize {
        if block_lo >= block_hi || block_hi > self.num_blocks {
            return block_hi * self.block_size;
        }

        let span = block_hi - block_lo;
        if span == 1 {
            return self.layers[block_lo];
        }
        if span == 2 {
            return self.layers[self.num_blocks + block_lo];
        }

        let log_span = span.next_power_of_two().trailing_zeros() as usize;
        let half = 1 << (log_span - 1);
        if span == 2 * half {
            return self.layers[log_span * self.num_blocks + block_lo];
        }

        let first = self.layers[(log_span - 1) * self.num_blocks + block_lo];
        let second = self.layers[(log_span - 1) * self.num_blocks + block_hi - half];
        if data[second] < data[first] {
            second
        } else {
            first
        }
    }

    /// Returns the number of bytes on the heap occupied by the summary layers.
    pub(super) fn heap_size(&self) -> usize {
        self.layers.len() * size_of::<usize>()
    }
}
