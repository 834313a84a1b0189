//! The background mirror writer.
//!
//! All disk effects flow through a single task consuming a FIFO command
//! queue. Commands are enqueued while the store's write lock is held, so
//! queue order equals mutation order and the mirror always reflects the
//! last completed mutation.

use std::path::{Path, PathBuf};

use tokio::sync::{mpsc, oneshot};

use trail_record::Record;

/// Placeholder written in place of a record that cannot be represented as
/// JSON. The substitution is persistence-time only; the in-memory record
/// is left untouched.
const INVALID_PLACEHOLDER: &str = "<INVALID>";

/// A unit of work for the mirror writer.
pub(crate) enum MirrorCommand {
    /// Rewrite the mirror file from a snapshot of the sequence.
    Write(Vec<Record>),
    /// Remove the mirror file. A missing file is already-satisfied.
    Remove,
    /// Acknowledge once every previously enqueued command has completed.
    Flush(oneshot::Sender<()>),
}

/// Consumes commands until the store drops its sender.
pub(crate) async fn run(
    mut commands: mpsc::UnboundedReceiver<MirrorCommand>,
    path: PathBuf,
    prefix: String,
) {
    while let Some(command) = commands.recv().await {
        match command {
            MirrorCommand::Write(snapshot) => {
                if let Err(error) = write_mirror(&path, &snapshot, &prefix).await {
                    tracing::warn!(
                        target: "trail_store",
                        path = %path.display(),
                        %error,
                        "[{prefix}] mirror write failed; in-memory log remains authoritative"
                    );
                }
            }
            MirrorCommand::Remove => match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(
                        target: "trail_store",
                        path = %path.display(),
                        "[{prefix}] mirror file already absent"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        target: "trail_store",
                        path = %path.display(),
                        %error,
                        "[{prefix}] mirror file removal failed"
                    );
                }
            },
            MirrorCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

/// Serializes the sanitized snapshot and atomically replaces the mirror
/// file, so no concurrent existence check or read ever observes a
/// half-written mirror.
async fn write_mirror(path: &Path, snapshot: &[Record], prefix: &str) -> crate::Result<()> {
    let sanitized = sanitize(snapshot, prefix);
    let mut bytes = serde_json::to_vec_pretty(&sanitized)?;
    bytes.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Converts each record to JSON independently, substituting the
/// placeholder for records that are not representable. Per-entry by
/// design: one malformed record must not abort the whole write.
fn sanitize(snapshot: &[Record], prefix: &str) -> Vec<serde_json::Value> {
    snapshot
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record.to_json().unwrap_or_else(|| {
                tracing::warn!(
                    target: "trail_store",
                    index,
                    "[{prefix}] record is not valid JSON; writing placeholder"
                );
                serde_json::json!({ "error": INVALID_PLACEHOLDER })
            })
        })
        .collect()
}
