//! # csv2sankey - Category-Flow Sankey Diagrams from CSV
//!
//! csv2sankey reads a CSV association table (climate models, the countries
//! and institutes behind them, the portals that serve them, and their
//! downscaling methods) and renders the relationships as a Sankey diagram:
//! one column of nodes per category, one weight-1 link per row per adjacent
//! category pair, exported as a standalone interactive HTML file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csv2sankey::config::DiagramSpec;
//! use csv2sankey::pipeline::{self, RenderOptions};
//!
//! # fn example() -> csv2sankey::error::Result<()> {
//! let options = RenderOptions {
//!     input: "associations.csv".into(),
//!     spec: DiagramSpec::default(),
//!     seed: None,
//!     open: false,
//! };
//!
//! let report = pipeline::run(&options)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline Stages
//!
//! - [`dataset`]: CSV loading and per-category distinct value derivation
//! - [`nodes`]: node index assignment (per-category offset blocks)
//! - [`links`]: link construction and the highlight predicate
//! - [`palette`]: node tinting and the two link colors
//! - [`figure`]: plotly trace assembly and HTML export
//! - [`pipeline`]: end-to-end orchestration
//! - [`config`]: JSON diagram specs
//! - [`error`]: error types and handling utilities
//!
//! Node indices are deterministic: category values are sorted
//! lexicographically and blocks are concatenated in the configured order, so
//! identical input and order always produce identical labels and links. Only
//! the node tints are randomized, and those can be pinned with a seed.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod links;
pub mod logging;
pub mod nodes;
pub mod palette;
pub mod pipeline;
