//! Watch command handler.
//!
//! Keeps a live product table on screen. Every change to the store redraws
//! it, and every line typed on stdin replaces the search text.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use stockroom_core::{LiveView, SnapshotStream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::TableRenderer;

/// Execute the watch command until Ctrl+C or the store goes away.
///
/// # Errors
///
/// This function will return an error if:
/// - The live query cannot be started
/// - Reading stdin fails
pub async fn execute(ctx: &CliContext, search: Option<String>) -> Result<()> {
    let watcher = ctx.watch_external_changes().await?;

    let mut view = ctx
        .app()
        .live_view(Arc::new(TableRenderer::live()))
        .with_query(search.unwrap_or_default());
    let stream = ctx.app().inventory().subscribe().await?;
    let input = BufReader::new(tokio::io::stdin());

    let result = run(&mut view, stream, input, tokio::signal::ctrl_c()).await;
    watcher.abort();
    result
}

/// Drive `view` from the snapshot stream and search lines read from `input`.
///
/// Closing `input` keeps the view live; only the stream ending or
/// `shutdown` completing stops it.
pub async fn run<R, S>(
    view: &mut LiveView,
    mut stream: SnapshotStream,
    input: R,
    shutdown: S,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: Future,
{
    let mut lines = input.lines();
    let mut input_open = true;
    tokio::pin!(shutdown);
    loop {
        // Typed search text is handled before queued snapshots
        tokio::select! {
            biased;
            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    debug!(query = %line.trim(), "Search text changed");
                    view.set_query(line.trim());
                }
                None => input_open = false,
            },
            snapshot = stream.next() => match snapshot {
                Some(snapshot) => view.apply_snapshot(snapshot),
                None => break,
            },
            _ = &mut shutdown => break,
        }
    }
    Ok(())
}
