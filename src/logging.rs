//! Log output
//!
//! A single `tracing` layer that writes one timestamped line per event, either to stderr or
//! to a file. The TUI always uses a file so log lines never land on the screen.

use anyhow::{Context as _, Result};
use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Message plus the structured fields of one event
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl EventVisitor {
    fn render(&self) -> String {
        let mut line = self.message.clone();
        for (name, value) in &self.fields {
            let _ = write!(line, " {name}={value}");
        }
        line
    }
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

struct LineLayer {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl<S: Subscriber> Layer<S> for LineLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = format_line(
            &timestamp.to_string(),
            *metadata.level(),
            metadata.target(),
            &visitor.render(),
        );

        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{line}");
        }
    }
}

fn format_line(timestamp: &str, level: Level, target: &str, text: &str) -> String {
    let level = level.as_str();
    format!("[{timestamp}] {level:>5} {target}: {text}")
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level {directive:?}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

fn open_sink(target: &LogTarget) -> Result<Box<dyn Write + Send>> {
    match target {
        LogTarget::Stderr => Ok(Box::new(io::stderr())),
        LogTarget::File(path) => Ok(Box::new(open_log_file(path)?)),
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the level directive does not parse, the log file cannot be opened,
/// or a subscriber is already installed.
pub fn setup(level: Option<&str>, target: &LogTarget) -> Result<()> {
    let subscriber = Registry::default().with(build_filter(level)?).with(LineLayer {
        sink: Mutex::new(open_sink(target)?),
    });

    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")
}
