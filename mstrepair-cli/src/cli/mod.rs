//! Command-line interface orchestration for `mstrepair`.
//!
//! `demo` repairs the built-in sample graph; `run` loads an edge-list file.
//! Both build a minimum spanning tree, remove one of its edges, and report
//! the replacement edge that restores it.

mod commands;
mod graph_file;
mod sample;

pub use commands::{
    Algorithm, Cli, CliError, Command, ExecutionSummary, RepairOptions, RepairReport, RunCommand,
    render_summary, run_cli,
};
pub use graph_file::{GraphFileError, MAX_VERTEX_COUNT, parse_graph};
pub use sample::{SAMPLE_EDGES, SAMPLE_VERTEX_COUNT, sample_graph};

#[cfg(test)]
mod test_helpers;
