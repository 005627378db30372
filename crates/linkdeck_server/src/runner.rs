use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use linkdeck_core::{update, DashState, DashViewModel, Effect, LinkStatus, Msg, ProbeSchedule};
use linkdeck_engine::{EngineEvent, EngineHandle, ProbeSettings, ProbeTarget, Prober};

/// Owns the dashboard state machine and wires it to the probe engine.
///
/// Messages are applied under one lock so the checked-batch guard stays
/// race-proof; the resulting effects are handed to the engine outside the
/// lock. A pump task feeds per-entry probe results back in as messages.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<DashState>,
    engine: EngineHandle,
    first_batch_delay: Duration,
}

impl Dashboard {
    pub fn new(settings: ProbeSettings, prober: Arc<dyn Prober>) -> Self {
        let first_batch_delay = settings.first_batch_delay;
        let (engine, mut event_rx) = EngineHandle::new(settings, prober);
        let inner = Arc::new(Inner {
            state: Mutex::new(DashState::new()),
            engine,
            first_batch_delay,
        });

        let pump = inner.clone();
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                let EngineEvent::ProbeResolved {
                    generation,
                    id,
                    alive,
                } = event;
                dispatch_msg(
                    &pump,
                    Msg::ProbeResolved {
                        generation,
                        id,
                        alive,
                    },
                );
            }
        });

        Self { inner }
    }

    pub fn dispatch(&self, msg: Msg) {
        dispatch_msg(&self.inner, msg);
    }

    pub fn view(&self) -> DashViewModel {
        self.inner.state.lock().expect("lock dashboard state").view()
    }

    /// Status-map snapshot for the status endpoint.
    pub fn snapshot(&self) -> (u64, BTreeMap<String, LinkStatus>) {
        let guard = self.inner.state.lock().expect("lock dashboard state");
        (guard.generation(), guard.statuses().clone())
    }
}

fn dispatch_msg(inner: &Arc<Inner>, msg: Msg) {
    let effects = {
        let mut guard = inner.state.lock().expect("lock dashboard state");
        let state = std::mem::take(&mut *guard);
        let (state, effects) = update(state, msg);
        *guard = state;
        effects
    };

    for effect in effects {
        let Effect::ProbeBatch {
            generation,
            batch,
            targets,
            schedule,
        } = effect;
        let delay = match schedule {
            ProbeSchedule::AfterReload => inner.first_batch_delay,
            ProbeSchedule::Immediate => Duration::ZERO,
        };
        let targets = targets
            .into_iter()
            .map(|target| ProbeTarget {
                id: target.id,
                url: target.url,
            })
            .collect();
        inner.engine.probe_batch(generation, batch, targets, delay);
    }
}
