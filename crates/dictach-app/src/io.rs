use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::types::AppEvent;

/// Read commands from stdin, one per line. EOF shuts the app down.
pub async fn stdin_loop(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::debug!("stdin closed");
            event_tx.send(AppEvent::Shutdown).await?;
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        match AppEvent::parse(&line) {
            Ok(AppEvent::Shutdown) => {
                event_tx.send(AppEvent::Shutdown).await?;
                break;
            }
            Ok(event) => event_tx.send(event).await?,
            Err(e) => tracing::warn!("{e}"),
        }
    }

    Ok(())
}
