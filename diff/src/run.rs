//! End-to-end diff run: read both snapshots, diff, group, render.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::differ::{diff, Diff};
use crate::error::DiffError;
use crate::model::Statement;
use crate::prefix::PrefixMap;
use crate::reader::{FileReader, GraphReader};
use crate::render::render;
use crate::report::group;

/// Diffs the graph files `old` and `new` and writes the report to `out`.
///
/// Uses [`FileReader`] and the built-in prefix table. See [`run_with`].
///
/// # Errors
///
/// Returns [`DiffError`] if either graph cannot be read or the report
/// cannot be written.
pub async fn run<W: Write>(old: &Path, new: &Path, out: &mut W) -> Result<Diff, DiffError> {
    run_with(Arc::new(FileReader), &PrefixMap::builtin(), old, new, out).await
}

/// Diffs `old` against `new` using `reader`, rendering IRIs with `prefixes`.
///
/// Both graphs are read on blocking tasks and must load completely before
/// anything is compared. A read failure aborts the run with nothing written.
/// When the graphs hold the same statements nothing is written at all.
///
/// # Errors
///
/// Returns [`DiffError`] if either graph cannot be read or the report
/// cannot be written.
pub async fn run_with<W: Write>(
    reader: Arc<dyn GraphReader>,
    prefixes: &PrefixMap,
    old: &Path,
    new: &Path,
    out: &mut W,
) -> Result<Diff, DiffError> {
    let (old_graph, new_graph) = tokio::try_join!(
        read_graph(Arc::clone(&reader), old.to_path_buf()),
        read_graph(reader, new.to_path_buf()),
    )?;

    let result = diff(&old_graph, &new_graph);
    if result.is_empty() {
        tracing::debug!(statements = old_graph.len(), "graphs are equal, no report");
        return Ok(result);
    }
    tracing::info!(
        added = result.added.len(),
        deleted = result.deleted.len(),
        "graphs differ"
    );

    let report = group(&result.added, &result.deleted, prefixes);
    out.write_all(render(&report, prefixes).as_bytes())?;
    out.flush()?;
    Ok(result)
}

async fn read_graph(
    reader: Arc<dyn GraphReader>,
    path: PathBuf,
) -> Result<Vec<Statement>, DiffError> {
    let statements = tokio::task::spawn_blocking(move || reader.read(&path)).await??;
    Ok(statements)
}
