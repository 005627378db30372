use std::sync::Arc;
use std::time::Duration;

use dash_logging::dash_debug;
use tokio::sync::mpsc;

use crate::{EngineEvent, ProbeSettings, ProbeTarget, Prober};

enum EngineCommand {
    ProbeBatch {
        generation: u64,
        batch: usize,
        targets: Vec<ProbeTarget>,
        delay: Duration,
    },
}

/// Handle to the probe engine. Commands go in, per-entry results come out of
/// the receiver returned by [`EngineHandle::new`].
///
/// Each batch runs as its own task: batches are unordered relative to each
/// other, while entries within a batch are probed strictly sequentially with
/// a fixed gap. That gap is the throttle that keeps the checker from firing
/// a whole view's worth of requests at once.
pub struct EngineHandle {
    cmd_tx: mpsc::UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine loop on the ambient tokio runtime.
    pub fn new(
        settings: ProbeSettings,
        prober: Arc<dyn Prober>,
    ) -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(command) = cmd_rx.recv().await {
                let prober = prober.clone();
                let event_tx = event_tx.clone();
                let probe_gap = settings.probe_gap;
                tokio::spawn(async move {
                    run_batch(prober, command, probe_gap, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn probe_batch(
        &self,
        generation: u64,
        batch: usize,
        targets: Vec<ProbeTarget>,
        delay: Duration,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::ProbeBatch {
            generation,
            batch,
            targets,
            delay,
        });
    }
}

async fn run_batch(
    prober: Arc<dyn Prober>,
    command: EngineCommand,
    probe_gap: Duration,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
) {
    let EngineCommand::ProbeBatch {
        generation,
        batch,
        targets,
        delay,
    } = command;

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    dash_debug!(
        "probing batch {} ({} targets, generation {})",
        batch,
        targets.len(),
        generation
    );

    let last = targets.len().saturating_sub(1);
    for (index, target) in targets.into_iter().enumerate() {
        let alive = match prober.probe(&target.url).await {
            Ok(()) => true,
            Err(err) => {
                dash_debug!("probe failed for {}: {}", target.url, err);
                false
            }
        };
        // Receiver gone means the dashboard went away; stop quietly.
        if event_tx
            .send(EngineEvent::ProbeResolved {
                generation,
                id: target.id,
                alive,
            })
            .is_err()
        {
            return;
        }
        if index < last && !probe_gap.is_zero() {
            tokio::time::sleep(probe_gap).await;
        }
    }
}
