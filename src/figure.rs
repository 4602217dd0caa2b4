//! Plotly figure assembly and HTML export.
//!
//! The pipeline core hands this module plain data: the flat label sequence,
//! one color per node, the link records, and a title. Everything about layout
//! and interactivity belongs to plotly.

use std::path::Path;

use plotly::common::{Font, Title};
use plotly::sankey::{Line, Link as TraceLink, Node as TraceNode};
use plotly::{Layout, Plot, Sankey};

use crate::error::Result;
use crate::links::{Highlight, Link};
use crate::nodes::NodeIndex;
use crate::palette;

const NODE_PAD: usize = 20;
const NODE_THICKNESS: usize = 20;
const NODE_LINE_WIDTH: f64 = 0.5;

/// Figure-level styling knobs.
#[derive(Debug, Clone)]
pub struct FigureStyle {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub font_size: usize,
}

/// Diagram title: the category order joined with " - ", plus the highlight
/// target when one is set.
pub fn diagram_title(order: &[String], highlight: Option<&Highlight>) -> String {
    let mut title = format!("{} Relationships", order.join(" - "));
    if let Some(h) = highlight {
        title.push_str(&format!(" (Highlighting {}: {})", h.category, h.value));
    }
    title
}

/// Stable drawing order: unhighlighted links first, highlighted links last so
/// they stay visible on top of the gray bulk.
pub fn draw_order(links: &[Link]) -> Vec<Link> {
    let mut ordered: Vec<Link> = links.iter().filter(|l| !l.highlighted).copied().collect();
    ordered.extend(links.iter().filter(|l| l.highlighted).copied());
    ordered
}

/// Assemble the Sankey trace and layout into a plot.
pub fn build_plot(
    index: &NodeIndex,
    node_colors: Vec<String>,
    links: &[Link],
    title: &str,
    style: &FigureStyle,
) -> Plot {
    let ordered = draw_order(links);

    let sources: Vec<usize> = ordered.iter().map(|l| l.source).collect();
    let targets: Vec<usize> = ordered.iter().map(|l| l.target).collect();
    let weights: Vec<u64> = ordered.iter().map(|l| l.weight).collect();
    let link_colors: Vec<String> = ordered
        .iter()
        .map(|l| palette::link_color(l.highlighted).to_owned())
        .collect();

    let node = TraceNode::new()
        .pad(NODE_PAD)
        .thickness(NODE_THICKNESS)
        .line(Line::new().color("black").width(NODE_LINE_WIDTH))
        .label(index.labels().iter().map(|s| s.as_str()).collect())
        .color_array(node_colors);

    let link = TraceLink::new()
        .source(sources)
        .target(targets)
        .value(weights)
        .color_array(link_colors);

    let trace = Sankey::new().node(node).link(link);

    let mut layout = Layout::new()
        .title(Title::with_text(title))
        .font(Font::new().size(style.font_size));
    if let Some(width) = style.width {
        layout = layout.width(width);
    }
    if let Some(height) = style.height {
        layout = layout.height(height);
    }

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Render the plot to standalone HTML and write it to `path`, creating
/// parent directories as needed.
pub fn write_html(plot: &Plot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, plot.to_html())?;
    Ok(())
}
