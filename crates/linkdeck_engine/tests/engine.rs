use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use linkdeck_engine::{
    EngineEvent, EngineHandle, ProbeError, ProbeFailure, ProbeSettings, ProbeTarget, Prober,
};

/// Deterministic probe double: URLs listed in `dead` fail, everything else
/// succeeds immediately. Calls are recorded in order.
struct ScriptedProber {
    dead: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProber {
    fn new(dead: &[&str]) -> Self {
        Self {
            dead: dead.iter().map(|url| url.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, url: &str) -> Result<(), ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.dead.contains(url) {
            return Err(ProbeError {
                kind: ProbeFailure::Network,
                message: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

fn targets(ids: &[&str]) -> Vec<ProbeTarget> {
    ids.iter()
        .map(|id| ProbeTarget {
            id: id.to_string(),
            url: format!("https://{id}.example.com"),
        })
        .collect()
}

fn fast_settings() -> ProbeSettings {
    ProbeSettings {
        probe_gap: Duration::ZERO,
        first_batch_delay: Duration::ZERO,
        ..ProbeSettings::default()
    }
}

async fn collect(
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<EngineEvent>,
    count: usize,
) -> Vec<EngineEvent> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("engine event in time")
            .expect("engine alive");
        events.push(event);
    }
    events
}

#[tokio::test]
async fn batch_emits_one_result_per_entry_in_order() {
    let prober = Arc::new(ScriptedProber::new(&[]));
    let (engine, mut rx) = EngineHandle::new(fast_settings(), prober.clone());

    engine.probe_batch(3, 0, targets(&["a", "b", "c"]), Duration::ZERO);

    let events = collect(&mut rx, 3).await;
    let ids: Vec<_> = events
        .iter()
        .map(|event| {
            let EngineEvent::ProbeResolved {
                generation,
                id,
                alive,
            } = event;
            assert_eq!(*generation, 3);
            assert!(*alive);
            id.clone()
        })
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let calls = prober.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].contains("a.example.com"));
}

#[tokio::test]
async fn failure_mid_batch_does_not_abort_the_rest() {
    let prober = Arc::new(ScriptedProber::new(&["https://b.example.com"]));
    let (engine, mut rx) = EngineHandle::new(fast_settings(), prober);

    engine.probe_batch(1, 0, targets(&["a", "b", "c"]), Duration::ZERO);

    let events = collect(&mut rx, 3).await;
    let results: Vec<_> = events
        .iter()
        .map(|event| {
            let EngineEvent::ProbeResolved { id, alive, .. } = event;
            (id.as_str(), *alive)
        })
        .collect();
    assert_eq!(results, vec![("a", true), ("b", false), ("c", true)]);
}

#[tokio::test]
async fn batches_run_independently() {
    let prober = Arc::new(ScriptedProber::new(&[]));
    let (engine, mut rx) = EngineHandle::new(fast_settings(), prober);

    engine.probe_batch(1, 0, targets(&["a", "b"]), Duration::ZERO);
    engine.probe_batch(1, 1, targets(&["c", "d"]), Duration::ZERO);

    // No cross-batch ordering guarantee; both batches must still complete.
    let events = collect(&mut rx, 4).await;
    let mut ids: Vec<_> = events
        .iter()
        .map(|event| {
            let EngineEvent::ProbeResolved { id, .. } = event;
            id.clone()
        })
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn probe_gap_throttles_entries_within_a_batch() {
    let prober = Arc::new(ScriptedProber::new(&[]));
    let settings = ProbeSettings {
        probe_gap: Duration::from_millis(60),
        ..fast_settings()
    };
    let (engine, mut rx) = EngineHandle::new(settings, prober);

    let started = Instant::now();
    engine.probe_batch(1, 0, targets(&["a", "b"]), Duration::ZERO);
    let _ = collect(&mut rx, 2).await;

    assert!(started.elapsed() >= Duration::from_millis(55));
}
