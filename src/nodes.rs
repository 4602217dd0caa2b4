//! Node index assignment.
//!
//! Each category in the active order owns a contiguous block of global node
//! indices. Blocks are concatenated left to right, so the flat label sequence
//! is each category's sorted distinct values in order and a category's nodes
//! live in `[offset, offset + len)`.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::error::{Result, SankeyError};

/// One category's slice of the global node index space.
pub struct CategoryBlock {
    name: String,
    values: Vec<String>,
    offset: usize,
    positions: HashMap<String, usize>,
}

impl CategoryBlock {
    fn new(name: String, values: Vec<String>, offset: usize) -> Self {
        let positions = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self {
            name,
            values,
            offset,
            positions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Global node index of `value` within this block.
    pub fn node_index(&self, value: &str) -> Result<usize> {
        self.positions
            .get(value)
            .map(|position| self.offset + position)
            .ok_or_else(|| SankeyError::ValueNotFound {
                category: self.name.clone(),
                value: value.to_owned(),
            })
    }
}

/// The full node index space for one category order.
pub struct NodeIndex {
    blocks: Vec<CategoryBlock>,
    labels: Vec<String>,
}

impl NodeIndex {
    /// Assign node indices for `order`, one block per category.
    ///
    /// Fails with [`SankeyError::UnknownCategory`] when an order entry names
    /// a category the dataset does not track.
    pub fn build(dataset: &Dataset, order: &[String]) -> Result<Self> {
        let mut blocks = Vec::with_capacity(order.len());
        let mut labels = Vec::new();
        let mut offset = 0;

        for name in order {
            let values = dataset
                .distinct_values(name)
                .ok_or_else(|| SankeyError::UnknownCategory(name.clone()))?;
            labels.extend(values.iter().cloned());
            blocks.push(CategoryBlock::new(name.clone(), values.to_vec(), offset));
            offset += values.len();
        }

        Ok(Self { blocks, labels })
    }

    /// Flat label sequence, all category blocks concatenated in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn blocks(&self) -> &[CategoryBlock] {
        &self.blocks
    }

    /// Total number of nodes across all blocks.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }
}
