//! End-to-end rendering pipeline: load, map, build, render, export.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::config::DiagramSpec;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::figure::{self, FigureStyle};
use crate::links;
use crate::nodes::NodeIndex;
use crate::palette;

/// One rendering run.
pub struct RenderOptions {
    /// CSV input path.
    pub input: PathBuf,

    /// Diagram configuration.
    pub spec: DiagramSpec,

    /// Seed for node color generation; unseeded when `None`.
    pub seed: Option<u64>,

    /// Open the interactive figure after export.
    pub open: bool,
}

/// Report generated after a rendering run.
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Number of rows in the input
    pub rows: usize,

    /// Number of nodes across all category blocks
    pub nodes: usize,

    /// Number of links drawn
    pub links: usize,

    /// Number of links carrying the highlight color
    pub highlighted_links: usize,

    /// Path of the exported HTML file
    pub output: PathBuf,

    /// Time taken for the run
    pub duration: Duration,
}

impl RenderReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Rendered {} rows as {} nodes and {} links ({} highlighted) in {:.2}s",
            self.rows,
            self.nodes,
            self.links,
            self.highlighted_links,
            self.duration.as_secs_f64()
        )
    }
}

/// Execute one rendering run.
pub fn run(options: &RenderOptions) -> Result<RenderReport> {
    let start = Instant::now();
    let spec = &options.spec;

    // The highlight category must be loaded even when it is not drawn.
    let mut categories = spec.category_order.clone();
    if let Some(highlight) = &spec.highlight
        && !categories.contains(&highlight.category)
    {
        categories.push(highlight.category.clone());
    }

    tracing::info!("Loading {}", options.input.display());
    let dataset = Dataset::from_csv(&options.input, &categories)?;
    tracing::debug!(rows = dataset.height(), "Dataset loaded");

    let index = NodeIndex::build(&dataset, &spec.category_order)?;
    let links = links::build_links(&dataset, &index, spec.highlight.as_ref())?;
    tracing::debug!(
        nodes = index.node_count(),
        links = links.len(),
        "Diagram structure built"
    );

    let node_colors = match options.seed {
        Some(seed) => palette::node_colors(&mut StdRng::seed_from_u64(seed), index.node_count())?,
        None => palette::node_colors(&mut rand::rng(), index.node_count())?,
    };

    let title = figure::diagram_title(&spec.category_order, spec.highlight.as_ref());
    let style = FigureStyle {
        width: spec.width,
        height: spec.height,
        font_size: spec.font_size,
    };
    let plot = figure::build_plot(&index, node_colors, &links, &title, &style);

    figure::write_html(&plot, &spec.output_file)?;
    tracing::info!("Exported {}", spec.output_file.display());

    if options.open {
        plot.show();
    }

    Ok(RenderReport {
        rows: dataset.height(),
        nodes: index.node_count(),
        links: links.len(),
        highlighted_links: links.iter().filter(|l| l.highlighted).count(),
        output: spec.output_file.clone(),
        duration: start.elapsed(),
    })
}
