use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use csv2sankey::config::{DEFAULT_CATEGORY_ORDER, DiagramSpec};
use csv2sankey::dataset::Dataset;
use csv2sankey::links::Highlight;
use csv2sankey::pipeline::{self, RenderOptions};

#[derive(Parser)]
#[command(
    name = "csv2sankey",
    about = "Render category-flow Sankey diagrams from CSV association tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Sankey diagram and export it as HTML
    Render {
        /// Path to the CSV file to render
        file: PathBuf,

        /// Category order as a comma-separated list of column names
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<String>>,

        /// Category to highlight; all links of matching rows are emphasized
        #[arg(long, requires = "highlight_value")]
        highlight_category: Option<String>,

        /// Value to highlight within the highlight category
        #[arg(long, requires = "highlight_category")]
        highlight_value: Option<String>,

        /// Output path for the exported HTML
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a JSON diagram spec file; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for the node color generator (reproducible tints)
        #[arg(long)]
        seed: Option<u64>,

        /// Open the interactive figure in a browser after export
        #[arg(long)]
        open: bool,
    },

    /// List each category's distinct values without rendering
    Inspect {
        /// Path to the CSV file to inspect
        file: PathBuf,

        /// Categories to inspect as a comma-separated list of column names
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<String>>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Render {
            file,
            order,
            highlight_category,
            highlight_value,
            output,
            config,
            seed,
            open,
        } => handle_render(
            file,
            order,
            highlight_category,
            highlight_value,
            output,
            config,
            seed,
            open,
        ),
        Commands::Inspect { file, order } => handle_inspect(file, order),
    }
}

#[expect(clippy::too_many_arguments)]
fn handle_render(
    file: PathBuf,
    order: Option<Vec<String>>,
    highlight_category: Option<String>,
    highlight_value: Option<String>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    open: bool,
) -> Result<()> {
    let mut spec = match config {
        Some(path) => DiagramSpec::from_file(&path)?,
        None => DiagramSpec::default(),
    };

    if let Some(order) = order {
        spec.category_order = order;
    }
    if let (Some(category), Some(value)) = (highlight_category, highlight_value) {
        spec.highlight = Some(Highlight::new(category, value));
    }
    if let Some(output) = output {
        spec.output_file = output;
    }

    println!(
        "Rendering {} ({})...",
        file.display(),
        spec.category_order.join(" - ")
    );

    let report = pipeline::run(&RenderOptions {
        input: file,
        spec,
        seed,
        open,
    })?;

    println!("{}", report.summary());
    println!("Sankey diagram saved as {}", report.output.display());
    Ok(())
}

fn handle_inspect(file: PathBuf, order: Option<Vec<String>>) -> Result<()> {
    let categories = order.unwrap_or_else(|| {
        DEFAULT_CATEGORY_ORDER
            .iter()
            .map(|name| (*name).to_owned())
            .collect()
    });

    let dataset = Dataset::from_csv(&file, &categories)?;
    println!("{}: {} rows", file.display(), dataset.height());

    for category in &categories {
        if let Some(values) = dataset.distinct_values(category) {
            println!("  {category} ({} distinct): {}", values.len(), values.join(", "));
        }
    }
    Ok(())
}
