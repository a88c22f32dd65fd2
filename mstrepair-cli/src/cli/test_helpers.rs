//! Small helpers shared across CLI tests.
//!
//! Builds temporary edge-list files and captures closed spans so tests can
//! assert instrumentation without a global subscriber.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing::field::{Field, Visit};
use tracing::{Subscriber, span};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

use super::commands::run_command;
use super::{Cli, CliError, RepairOptions, RunCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn remove_at(index: usize) -> RepairOptions {
    RepairOptions {
        remove_index: Some(index),
        ..RepairOptions::default()
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// Closed span snapshot: name plus fields rendered as strings.
#[derive(Debug, Clone)]
pub(super) struct SpanRecord {
    pub(super) name: String,
    pub(super) fields: HashMap<String, String>,
}

/// Layer that stores every span once it closes.
#[derive(Clone, Default)]
pub(super) struct SpanRecorder {
    closed: Arc<Mutex<Vec<SpanRecord>>>,
}

impl SpanRecorder {
    pub(super) fn span(&self, name: &str) -> SpanRecord {
        let closed = self.closed.lock().expect("lock poisoned");
        match closed.iter().find(|span| span.name == name) {
            Some(span) => span.clone(),
            None => panic!("span `{name}` was not recorded"),
        }
    }
}

impl<S> Layer<S> for SpanRecorder
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldVisitor(&mut record.fields));
            span.extensions_mut().insert(record);
        }
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        if let Some(record) = extensions.get_mut::<SpanRecord>() {
            values.record(&mut FieldVisitor(&mut record.fields));
        }
    }

    fn on_close(&self, id: span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(record) = span.extensions_mut().remove::<SpanRecord>() {
            self.closed.lock().expect("lock poisoned").push(record);
        }
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}
