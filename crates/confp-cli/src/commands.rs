//! Subcommand implementations
//!
//! Each command returns the text to print so the binary stays a thin shell
//! around argument parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use confp_capability::{Configurator, Interface};
use confp_engine::{convert_with, equal, Difference, ForkSchedule};
use confp_schemas::{SchemaDocument, SchemaKind};
use tracing::{info, warn};

use crate::config::{OutputFormat, ReconcileConfig};
use crate::error::CliError;

/// Read and parse a document; `.yaml` / `.yml` files are YAML, anything else JSON
///
/// # Errors
/// Fails when the file cannot be read or does not parse as `kind`.
pub fn load(kind: SchemaKind, path: &Path) -> Result<Box<dyn SchemaDocument>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    let doc = if yaml {
        kind.from_yaml(&text)
    } else {
        kind.from_json(&text)
    };
    doc.with_context(|| format!("parsing {} as {kind}", path.display()))
}

/// Print a document in the configured format
///
/// # Errors
/// Fails if the document cannot be serialized.
pub fn render(doc: &dyn SchemaDocument, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => doc.to_json()?,
        OutputFormat::Yaml => doc.to_yaml()?,
    };
    Ok(text)
}

/// Differences on capabilities both objects can read
pub fn shared_differences(
    interface: &Interface,
    a: &dyn Configurator,
    b: &dyn Configurator,
) -> Vec<Difference> {
    equal(interface, a, b)
        .into_iter()
        .filter(|d| a.reader_kind(d.field).is_some() && b.reader_kind(d.field).is_some())
        .collect()
}

/// One line per difference
pub fn report(diffs: &[Difference]) -> String {
    if diffs.is_empty() {
        return "no differences\n".to_string();
    }
    diffs.iter().map(|d| format!("{d}\n")).collect()
}

/// Convert `src` into a fresh document of kind `to`
///
/// # Errors
/// Fails on a conversion error, or in strict mode when a capability both
/// schemas hold did not survive.
pub fn convert_document(
    config: &ReconcileConfig,
    src: &dyn SchemaDocument,
    to: SchemaKind,
) -> Result<Box<dyn SchemaDocument>> {
    let mut dst = to.empty();
    convert_with(config.interface, src.as_configurator(), dst.as_configurator_mut())
        .with_context(|| format!("converting {} to {to}", src.kind()))?;

    let diffs =
        shared_differences(config.interface, src.as_configurator(), dst.as_configurator());
    if !diffs.is_empty() {
        if config.strict {
            return Err(CliError::Mismatch {
                count: diffs.len(),
                report: report(&diffs),
            }
            .into());
        }
        for d in &diffs {
            warn!(difference = %d, "not preserved");
        }
    }
    info!(from = %src.kind(), to = %to, lost = diffs.len(), "converted");
    Ok(dst)
}

/// `confp convert`
///
/// # Errors
/// See [`load`] and [`convert_document`].
pub fn run_convert(
    config: &ReconcileConfig,
    from: SchemaKind,
    to: SchemaKind,
    input: &Path,
) -> Result<String> {
    let src = load(from, input)?;
    let dst = convert_document(config, src.as_ref(), to)?;
    render(dst.as_ref(), config.output)
}

/// `confp diff`
///
/// # Errors
/// Fails when either input cannot be loaded.
pub fn run_diff(
    config: &ReconcileConfig,
    (a_kind, a_path): (SchemaKind, &Path),
    (b_kind, b_path): (SchemaKind, &Path),
) -> Result<String> {
    let a = load(a_kind, a_path)?;
    let b = load(b_kind, b_path)?;
    let diffs = equal(config.interface, a.as_configurator(), b.as_configurator());
    info!(interface = config.interface.name(), count = diffs.len(), "compared");
    Ok(report(&diffs))
}

/// `confp forks`
///
/// # Errors
/// Fails when the input cannot be loaded.
pub fn run_forks(kind: SchemaKind, input: &Path) -> Result<String> {
    let doc = load(kind, input)?;
    Ok(ForkSchedule::of(doc.as_configurator()).to_string())
}
