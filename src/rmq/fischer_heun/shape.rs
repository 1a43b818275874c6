//! Block-local machinery for the Fischer-Heun structure: the Cartesian-tree shape code of a block
//! and the dense in-block argmin tables that are shared between all blocks with the same shape.

use std::collections::HashMap;
use std::mem::size_of;

/// Encodes the shape of a block's Cartesian min-tree as an integer by replaying a monotonic
/// increasing stack over the block. Every element first pops all stack entries holding larger
/// values (shifting in a `0` bit per pop) and is then pushed itself (shifting in a `1` bit); the
/// remaining stack entries are popped once the block ends. Two blocks receive the same code
/// exactly if their elements have the same relative order, independent of the absolute values.
///
/// The stack holds block-local indices so no bound beyond `Ord` is required. The caller provides
/// the stack so it can be reused across blocks during construction.
pub(super) fn shape_code<T: Ord>(block: &[T], stack: &mut Vec<usize>) -> u64 {
    debug_assert!(!block.is_empty() && block.len() <= 32);

    stack.clear();
    stack.push(0);
    let mut code = 1u64;

    for i in 1..block.len() {
        while let Some(&top) = stack.last() {
            if block[i] < block[top] {
                stack.pop();
                code <<= 1;
            } else {
                break;
            }
        }
        stack.push(i);
        code = (code << 1) | 1;
    }

    code << stack.len()
}

/// A dense argmin table for a single block shape. For every combination of start index and range
/// length within the block, the table stores the block-local index of the leftmost minimum of that
/// range. Blocks are never longer than a quarter of the logarithm of the input length, so local
/// indices fit into a `u8` and a whole table stays within a few cache lines.
#[derive(Clone, Debug)]
pub(super) struct BlockTable {
    block_len: usize,
    /// row-major cells, where row `len - 1` holds the answers for all ranges of length `len`
    cells: Vec<u8>,
}

impl BlockTable {
    /// Builds the table for the given block by extending each range of length `len - 1` with one
    /// element on the right. The strict comparison keeps the earlier index on ties.
    #[allow(clippy::cast_possible_truncation)] // block lengths are bounded by 32
    pub(super) fn new<T: Ord>(block: &[T]) -> Self {
        let block_len = block.len();
        let mut cells = vec![0u8; block_len * block_len];

        for start in 0..block_len {
            cells[start] = start as u8;
        }

        for len in 2..=block_len {
            for start in 0..=block_len - len {
                let extension = start + len - 1;
                let shorter = cells[(len - 2) * block_len + start];
                cells[(len - 1) * block_len + start] = if block[extension] < block[shorter as usize]
                {
                    extension as u8
                } else {
                    shorter
                };
            }
        }

        Self { block_len, cells }
    }

    /// Returns the block-local index of the leftmost minimum in the local range
    /// `[start, start + len)`.
    pub(super) fn range_min(&self, start: usize, len: usize) -> usize {
        debug_assert!(len >= 1 && start + len <= self.block_len);
        self.cells[(len - 1) * self.block_len + start] as usize
    }

    /// Returns the number of elements the table was built over.
    pub(super) fn block_len(&self) -> usize {
        self.block_len
    }
}

/// The per-shape table cache. Tables live in an arena and each block stores the arena index of its
/// table, so a table shared by many blocks exists (and is dropped) exactly once. The cache is
/// keyed by the pair of shape code and block length, which keeps the column count of a cached
/// table explicit in its key: the trailing block may be shorter than all others.
#[derive(Clone, Debug)]
pub(super) struct ShapeCache {
    tables: Vec<BlockTable>,
    block_tables: Vec<u32>,
}

impl ShapeCache {
    /// Scans the input block by block, encoding each block's shape and building a dense table for
    /// every shape that has not been seen before.
    #[allow(clippy::cast_possible_truncation)] // distinct shapes are bounded by the block count
    pub(super) fn new<T: Ord>(data: &[T], block_size: usize) -> Self {
        let mut known_shapes: HashMap<(u64, usize), u32> = HashMap::new();
        let mut tables = Vec::new();
        let mut block_tables = Vec::with_capacity(data.len().div_ceil(block_size));
        let mut stack = Vec::with_capacity(block_size);

        for block in data.chunks(block_size) {
            let code = shape_code(block, &mut stack);
            let table = *known_shapes
                .entry((code, block.len()))
                .or_insert_with(|| {
                    tables.push(BlockTable::new(block));
                    (tables.len() - 1) as u32
                });
            block_tables.push(table);
        }

        Self {
            tables,
            block_tables,
        }
    }

    /// Returns the argmin table for the given block index.
    pub(super) fn block_table(&self, block: usize) -> &BlockTable {
        &self.tables[self.block_tables[block] as usize]
    }

    /// Returns the number of bytes on the heap occupied by the cached tables and the per-block
    /// table references.
    pub(super) fn heap_size(&self) -> usize {
        self.tables
            .iter()
            .map(|table| table.cells.len() + size_of::<BlockTable>())
            .sum::<usize>()
            + self.block_tables.len() * size_of::<u32>()
    }
}
