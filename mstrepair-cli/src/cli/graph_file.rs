//! Edge-list loader for the `run` command.
//!
//! The format is line based: the first significant line holds the vertex
//! count and every following line holds `source target weight`. Blank lines
//! and lines starting with `#` are skipped.

use std::io::{self, BufRead};

use mstrepair_core::{Graph, GraphError, SelfLoopPolicy};
use thiserror::Error;

/// Largest vertex count an edge list may declare.
pub const MAX_VERTEX_COUNT: usize = 1 << 24;

/// Errors raised while parsing an edge-list file.
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// Reading a line from the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input held no vertex count.
    #[error("edge list is empty; expected a vertex count on the first line")]
    MissingVertexCount,
    /// The vertex count line did not hold a single non-negative integer.
    #[error("line {line}: invalid vertex count `{raw}`")]
    InvalidVertexCount {
        /// One-based line number.
        line: usize,
        /// Offending line contents.
        raw: String,
    },
    /// The declared vertex count exceeds [`MAX_VERTEX_COUNT`].
    #[error("line {line}: vertex count {count} exceeds the limit of {limit}")]
    VertexCountTooLarge {
        /// One-based line number.
        line: usize,
        /// Declared vertex count.
        count: usize,
        /// Largest accepted vertex count.
        limit: usize,
    },
    /// An edge line did not contain exactly three fields.
    #[error("line {line}: expected `source target weight` but found `{raw}`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// Offending line contents.
        raw: String,
    },
    /// An edge field failed to parse as an integer.
    #[error("line {line}: invalid {field} `{raw}`")]
    InvalidField {
        /// One-based line number.
        line: usize,
        /// Name of the field: `source`, `target` or `weight`.
        field: &'static str,
        /// Offending token.
        raw: String,
    },
    /// The graph rejected an edge.
    #[error("line {line}: {source}")]
    Graph {
        /// One-based line number.
        line: usize,
        /// Error raised by the graph.
        #[source]
        source: GraphError,
    },
}

impl GraphFileError {
    /// Returns the wrapped [`GraphError`], if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Graph { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses an edge list from `reader` into a [`Graph`].
///
/// Edges keep the order in which they appear in the input.
///
/// # Errors
/// Returns [`GraphFileError`] when a line cannot be read or parsed, or when
/// the graph rejects an edge under `policy`.
///
/// # Examples
/// ```
/// use mstrepair_cli::cli::parse_graph;
/// use mstrepair_core::SelfLoopPolicy;
///
/// let input = "# triangle\n3\n0 1 4\n1 2 1\n0 2 3\n";
/// let graph = parse_graph(input.as_bytes(), SelfLoopPolicy::Accept)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), mstrepair_cli::cli::GraphFileError>(())
/// ```
pub fn parse_graph(reader: impl BufRead, policy: SelfLoopPolicy) -> Result<Graph, GraphFileError> {
    let mut lines = significant_lines(reader);

    let (header_line, header) = lines.next().ok_or(GraphFileError::MissingVertexCount)??;
    let vertex_count = parse_vertex_count(header_line, &header)?;

    let mut graph = Graph::builder(vertex_count)
        .with_self_loop_policy(policy)
        .build()
        .map_err(|source| GraphFileError::Graph {
            line: header_line,
            source,
        })?;

    for entry in lines {
        let (line, raw) = entry?;
        let (source, target, weight) = parse_edge(line, &raw)?;
        graph
            .add_edge(source, target, weight)
            .map_err(|source| GraphFileError::Graph { line, source })?;
    }
    Ok(graph)
}

/// Yields trimmed, non-comment lines paired with their one-based number.
fn significant_lines(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), GraphFileError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let number = index + 1;
            match line {
                Ok(text) => {
                    let trimmed = text.trim();
                    (!trimmed.is_empty() && !trimmed.starts_with('#'))
                        .then(|| Ok((number, trimmed.to_owned())))
                }
                Err(source) => Some(Err(GraphFileError::Read {
                    line: number,
                    source,
                })),
            }
        })
}

fn parse_vertex_count(line: usize, raw: &str) -> Result<usize, GraphFileError> {
    let count = raw
        .parse::<usize>()
        .map_err(|_| GraphFileError::InvalidVertexCount {
            line,
            raw: raw.to_owned(),
        })?;
    if count > MAX_VERTEX_COUNT {
        return Err(GraphFileError::VertexCountTooLarge {
            line,
            count,
            limit: MAX_VERTEX_COUNT,
        });
    }
    Ok(count)
}

fn parse_edge(line: usize, raw: &str) -> Result<(usize, usize, i64), GraphFileError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(GraphFileError::MalformedEdge {
            line,
            raw: raw.to_owned(),
        });
    };
    Ok((
        parse_field(line, "source", source)?,
        parse_field(line, "target", target)?,
        parse_field(line, "weight", weight)?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    raw: &str,
) -> Result<T, GraphFileError> {
    raw.parse().map_err(|_| GraphFileError::InvalidField {
        line,
        field,
        raw: raw.to_owned(),
    })
}
