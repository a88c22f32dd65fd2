//! Command implementations and argument parsing for the `mstrepair` CLI.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use mstrepair_core::{
    Edge, Graph, GraphError, GraphErrorCode, Repair, SelfLoopPolicy, SpanningForest,
    is_spanning_tree,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::graph_file::{GraphFileError, parse_graph};
use super::sample::sample_graph;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstrepair",
    about = "Build a minimum spanning tree, remove one of its edges, and repair it."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Repair the built-in six-vertex sample graph.
    Demo(RepairOptions),
    /// Repair a graph loaded from an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: a vertex count line followed by `source target weight` lines.
    pub path: PathBuf,

    /// Tree construction and removal options.
    #[command(flatten)]
    pub options: RepairOptions,
}

/// Options shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct RepairOptions {
    /// Algorithm used to build the initial spanning tree.
    #[arg(long, value_enum, default_value_t = Algorithm::Kruskal)]
    pub algorithm: Algorithm,

    /// Position of the tree edge to remove.
    #[arg(long = "remove-index", conflicts_with = "seed")]
    pub remove_index: Option<usize>,

    /// Seed for choosing the removed edge at random.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reject self-loops instead of storing them.
    #[arg(long = "reject-self-loops")]
    pub reject_self_loops: bool,
}

impl RepairOptions {
    /// Returns the graph policy selected by `--reject-self-loops`.
    #[must_use]
    pub const fn self_loop_policy(&self) -> SelfLoopPolicy {
        if self.reject_self_loops {
            SelfLoopPolicy::Reject
        } else {
            SelfLoopPolicy::Accept
        }
    }
}

/// Spanning tree construction algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Sort edges by weight and join components with a union-find.
    #[default]
    Kruskal,
    /// Grow the tree from vertex 0 using a priority queue.
    Prim,
}

impl Algorithm {
    /// Stable lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// The algorithm used to cross-check this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Kruskal => Self::Prim,
            Self::Prim => Self::Kruskal,
        }
    }

    fn build(self, graph: &Graph) -> SpanningForest {
        match self {
            Self::Kruskal => graph.kruskal_mst(),
            Self::Prim => graph.prim_mst(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an edge list.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error("failed to load `{path}`: {source}")]
    GraphFile {
        /// Path of the edge list.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: GraphFileError,
    },
    /// A graph operation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// `--remove-index` pointed past the end of the spanning tree.
    #[error("cannot remove tree edge {index}: the spanning tree has {len} edges")]
    RemovalIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of edges in the tree.
        len: usize,
    },
}

impl CliError {
    /// Returns the stable graph error code behind this failure, if any.
    #[must_use]
    pub fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Core(err) => Some(err.code()),
            Self::GraphFile { source, .. } => source.graph_error().map(GraphError::code),
            Self::Io { .. } | Self::RemovalIndexOutOfRange { .. } => None,
        }
    }
}

/// Outcome of removing one tree edge and searching for its replacement.
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// Position of the removed edge in the original tree.
    pub index: usize,
    /// Cut and repaired tree.
    pub repair: Repair,
    /// Whether the repaired edge set spans the graph.
    pub valid: bool,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph: `sample` or the input file stem.
    pub graph_name: String,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of stored edges.
    pub edge_count: usize,
    /// Algorithm that produced [`Self::mst`].
    pub algorithm: Algorithm,
    /// Initial spanning tree or forest.
    pub mst: SpanningForest,
    /// Total weight reported by the other algorithm.
    pub cross_check_weight: i64,
    /// `None` when the tree had no edge to remove.
    pub repair: Option<RepairReport>,
    /// Repair of tree edge 0, run after a randomly chosen removal.
    pub first_edge_repair: Option<RepairReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or repairing the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstrepair_cli::cli::{Algorithm, Cli, Command, RepairOptions, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Demo(RepairOptions {
///         algorithm: Algorithm::Kruskal,
///         remove_index: Some(0),
///         seed: None,
///         reject_self_loops: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.mst.total_weight(), 11);
/// let report = summary.repair.expect("tree has edges");
/// assert_eq!(report.repair.forest().total_weight(), 14);
/// assert!(report.valid);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Demo(options) => {
            Span::current().record("command", field::display("demo"));
            let graph = sample_graph(options.self_loop_policy())?;
            execute("sample".to_owned(), &graph, &options)
        }
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.run_file",
    err,
    skip(command),
    fields(path = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, options } = command;
    Span::current().record("path", field::display(path.display()));
    let reader = open_graph_reader(&path)?;
    let graph = parse_graph(reader, options.self_loop_policy()).map_err(|source| {
        CliError::GraphFile {
            path: path.clone(),
            source,
        }
    })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    execute(derive_graph_name(&path), &graph, &options)
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = field::Empty))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

#[instrument(
    name = "cli.execute",
    err,
    skip(graph, options),
    fields(
        algorithm = %options.algorithm,
        removed_index = field::Empty,
        reconnected = field::Empty,
    ),
)]
pub(super) fn execute(
    graph_name: String,
    graph: &Graph,
    options: &RepairOptions,
) -> Result<ExecutionSummary, CliError> {
    let mst = options.algorithm.build(graph);
    let cross_check = options.algorithm.other().build(graph);
    if mst.is_spanning_tree()
        && cross_check.is_spanning_tree()
        && mst.total_weight() != cross_check.total_weight()
    {
        warn!(
            selected = mst.total_weight(),
            cross_check = cross_check.total_weight(),
            "spanning tree weights disagree"
        );
    }

    let span = Span::current();
    let repair = match choose_removal(mst.len(), options)? {
        Some(index) => {
            span.record("removed_index", index);
            let report = repair_at(graph, &mst, index)?;
            span.record("reconnected", report.repair.is_reconnected());
            Some(report)
        }
        None => {
            info!("spanning tree has no edges; nothing to remove");
            None
        }
    };
    let first_edge_repair = if repair.is_some() && options.remove_index.is_none() {
        Some(repair_at(graph, &mst, 0)?)
    } else {
        None
    };

    info!(
        graph = graph_name.as_str(),
        total_weight = mst.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph_name,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        algorithm: options.algorithm,
        cross_check_weight: cross_check.total_weight(),
        mst,
        repair,
        first_edge_repair,
    })
}

/// Picks the tree position to remove: explicit index, then seed, then entropy.
pub(super) fn choose_removal(
    tree_len: usize,
    options: &RepairOptions,
) -> Result<Option<usize>, CliError> {
    if let Some(index) = options.remove_index {
        return if index < tree_len {
            Ok(Some(index))
        } else {
            Err(CliError::RemovalIndexOutOfRange {
                index,
                len: tree_len,
            })
        };
    }
    if tree_len == 0 {
        return Ok(None);
    }
    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    Ok(Some(rng.gen_range(0..tree_len)))
}

fn repair_at(
    graph: &Graph,
    mst: &SpanningForest,
    index: usize,
) -> Result<RepairReport, CliError> {
    let removed = mst
        .edges()
        .get(index)
        .copied()
        .ok_or(CliError::RemovalIndexOutOfRange {
            index,
            len: mst.len(),
        })?;
    let repair = graph.repair_mst(mst.edges(), &removed)?;
    let valid = is_spanning_tree(graph.vertex_count(), repair.forest().edges())?;
    Ok(RepairReport {
        index,
        repair,
        valid,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstrepair_cli::cli::{Algorithm, Cli, Command, RepairOptions, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Demo(RepairOptions {
///         remove_index: Some(0),
///         ..RepairOptions::default()
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("replacement edge: 0 - 1 (weight: 4)"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        summary.graph_name, summary.vertex_count, summary.edge_count
    )?;
    write_tree(
        &mut writer,
        &format!("{} spanning tree", summary.algorithm),
        summary.mst.edges(),
        summary.mst.total_weight(),
    )?;
    if !summary.mst.is_spanning_tree() {
        writeln!(
            writer,
            "graph is not connected; the {} forest leaves {} components",
            summary.algorithm,
            summary.mst.component_count()
        )?;
    }
    writeln!(
        writer,
        "{} total weight: {}",
        summary.algorithm.other(),
        summary.cross_check_weight
    )?;

    let Some(report) = &summary.repair else {
        writeln!(writer, "no edge removed: the spanning tree is empty")?;
        return Ok(());
    };
    write_report(&mut writer, report)?;
    if let Some(first) = &summary.first_edge_repair {
        writeln!(writer)?;
        writeln!(writer, "repeating with the first tree edge:")?;
        write_report(&mut writer, first)?;
    }
    Ok(())
}

fn write_report(writer: &mut impl Write, report: &RepairReport) -> io::Result<()> {
    let repair = &report.repair;
    let removed = repair.removed();
    writeln!(writer, "removed edge #{}: {removed}", report.index)?;
    write_side(writer, removed.source(), repair.source_side())?;
    write_side(writer, removed.target(), repair.target_side())?;
    match repair.replacement() {
        Some(edge) => writeln!(writer, "replacement edge: {edge}")?,
        None => writeln!(writer, "replacement edge: none, the removed edge was a bridge")?,
    }
    write_tree(
        writer,
        "repaired tree",
        repair.forest().edges(),
        repair.forest().total_weight(),
    )?;
    writeln!(
        writer,
        "valid spanning tree: {}",
        if report.valid { "yes" } else { "no" }
    )?;
    Ok(())
}

fn write_tree(
    writer: &mut impl Write,
    title: &str,
    edges: &[Edge],
    total_weight: i64,
) -> io::Result<()> {
    writeln!(writer, "{title} (total weight {total_weight}):")?;
    for edge in edges {
        writeln!(writer, "  {edge}")?;
    }
    Ok(())
}

fn write_side(writer: &mut impl Write, vertex: usize, side: &BTreeSet<usize>) -> io::Result<()> {
    let members: Vec<String> = side.iter().map(ToString::to_string).collect();
    writeln!(
        writer,
        "component containing {vertex}: [{}]",
        members.join(", ")
    )
}
