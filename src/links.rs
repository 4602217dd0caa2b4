//! Link construction between adjacent category columns.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Result, SankeyError};
use crate::nodes::{CategoryBlock, NodeIndex};

/// A highlight target: rows whose value in `category` equals `value` get the
/// highlight link color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub category: String,
    pub value: String,
}

impl Highlight {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

/// One directed edge between two nodes, weight 1 per originating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
    pub highlighted: bool,
}

/// Build one link per row per adjacent category pair, in row order.
///
/// The highlight category does not have to appear in the index order, but it
/// must be tracked by the dataset. A row with an empty cell in the highlight
/// category is not highlighted; a row with an empty cell in an order category
/// fails with [`SankeyError::ValueNotFound`].
pub fn build_links(
    dataset: &Dataset,
    index: &NodeIndex,
    highlight: Option<&Highlight>,
) -> Result<Vec<Link>> {
    let columns: Vec<Vec<Option<String>>> = index
        .blocks()
        .iter()
        .map(|block| dataset.column_values(block.name()))
        .collect::<Result<_>>()?;

    let highlight_column = match highlight {
        Some(h) => Some((dataset.column_values(&h.category)?, h.value.as_str())),
        None => None,
    };

    let pairs = index.blocks().len().saturating_sub(1);
    let mut links = Vec::with_capacity(dataset.height() * pairs);

    for row in 0..dataset.height() {
        let highlighted = match &highlight_column {
            Some((values, target)) => values[row].as_deref() == Some(*target),
            None => false,
        };

        for i in 0..pairs {
            let source = node_index_at(&index.blocks()[i], &columns[i], row)?;
            let target = node_index_at(&index.blocks()[i + 1], &columns[i + 1], row)?;
            links.push(Link {
                source,
                target,
                weight: 1,
                highlighted,
            });
        }
    }

    Ok(links)
}

fn node_index_at(block: &CategoryBlock, column: &[Option<String>], row: usize) -> Result<usize> {
    let value = column[row]
        .as_deref()
        .ok_or_else(|| SankeyError::ValueNotFound {
            category: block.name().to_owned(),
            value: "(empty)".to_owned(),
        })?;
    block.node_index(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    fn sample_dataset() -> Dataset {
        let df = df!(
            "Model" => &["M1", "M2"],
            "Country" => &["USA", "UK"],
            "Institute" => &["NASA", "MetOffice"],
            "Portal" => &["P1", "P1"]
        )
        .expect("valid frame");
        Dataset::from_frame(df, &owned(&["Model", "Country", "Institute", "Portal"]))
            .expect("known columns")
    }

    #[test]
    fn test_one_link_per_row_per_adjacent_pair() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Country", "Institute", "Portal"]);
        let index = NodeIndex::build(&dataset, &order)?;
        let links = build_links(&dataset, &index, None)?;

        // 2 rows x 3 adjacent pairs
        assert_eq!(links.len(), 6);
        assert!(links.iter().all(|l| l.weight == 1));
        assert!(links.iter().all(|l| !l.highlighted));

        // labels: [M1, M2, UK, USA, MetOffice, NASA, P1]
        let endpoints: Vec<(usize, usize)> = links.iter().map(|l| (l.source, l.target)).collect();
        assert_eq!(
            endpoints,
            vec![(0, 3), (3, 5), (5, 6), (1, 2), (2, 4), (4, 6)]
        );
        Ok(())
    }

    #[test]
    fn test_endpoints_stay_in_label_range() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Portal", "Model", "Country"]);
        let index = NodeIndex::build(&dataset, &order)?;
        let links = build_links(&dataset, &index, None)?;

        assert_eq!(links.len(), 4);
        for link in &links {
            assert!(link.source < index.node_count());
            assert!(link.target < index.node_count());
        }
        Ok(())
    }

    #[test]
    fn test_highlight_marks_every_link_of_matching_rows() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Country", "Institute", "Portal"]);
        let index = NodeIndex::build(&dataset, &order)?;

        let highlight = Highlight::new("Country", "USA");
        let links = build_links(&dataset, &index, Some(&highlight))?;

        // Row 0 is the USA row; its three links are highlighted, row 1's are not.
        let flags: Vec<bool> = links.iter().map(|l| l.highlighted).collect();
        assert_eq!(flags, vec![true, true, true, false, false, false]);
        Ok(())
    }

    #[test]
    fn test_highlight_category_outside_order() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Portal"]);
        let index = NodeIndex::build(&dataset, &order)?;

        let highlight = Highlight::new("Country", "UK");
        let links = build_links(&dataset, &index, Some(&highlight))?;

        let flags: Vec<bool> = links.iter().map(|l| l.highlighted).collect();
        assert_eq!(flags, vec![false, true]);
        Ok(())
    }

    #[test]
    fn test_no_match_leaves_all_links_default() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Country"]);
        let index = NodeIndex::build(&dataset, &order)?;

        let highlight = Highlight::new("Country", "Atlantis");
        let links = build_links(&dataset, &index, Some(&highlight))?;
        assert!(links.iter().all(|l| !l.highlighted));
        Ok(())
    }

    #[test]
    fn test_unknown_highlight_category_rejected() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Country"]);
        let index = NodeIndex::build(&dataset, &order)?;

        let highlight = Highlight::new("Planet", "Earth");
        let result = build_links(&dataset, &index, Some(&highlight));
        assert!(matches!(result, Err(SankeyError::UnknownCategory(name)) if name == "Planet"));
        Ok(())
    }

    #[test]
    fn test_empty_cell_in_order_category_rejected() -> Result<()> {
        let df = df!(
            "Model" => &[Some("M1"), Some("M2")],
            "Country" => &[Some("USA"), None::<&str>]
        )?;
        let dataset = Dataset::from_frame(df, &owned(&["Model", "Country"]))?;
        let index = NodeIndex::build(&dataset, &owned(&["Model", "Country"]))?;

        let result = build_links(&dataset, &index, None);
        assert!(matches!(
            result,
            Err(SankeyError::ValueNotFound { category, .. }) if category == "Country"
        ));
        Ok(())
    }

    #[test]
    fn test_reordering_preserves_link_count() -> Result<()> {
        let dataset = sample_dataset();

        let forward = NodeIndex::build(&dataset, &owned(&["Model", "Country", "Institute"]))?;
        let swapped = NodeIndex::build(&dataset, &owned(&["Country", "Model", "Institute"]))?;

        let forward_links = build_links(&dataset, &forward, None)?;
        let swapped_links = build_links(&dataset, &swapped, None)?;
        assert_eq!(forward_links.len(), swapped_links.len());
        Ok(())
    }

    #[test]
    fn test_identical_inputs_build_identical_links() -> Result<()> {
        let dataset = sample_dataset();
        let order = owned(&["Model", "Country", "Institute", "Portal"]);

        let first = build_links(&dataset, &NodeIndex::build(&dataset, &order)?, None)?;
        let second = build_links(&dataset, &NodeIndex::build(&dataset, &order)?, None)?;
        assert_eq!(first, second);
        Ok(())
    }
}
