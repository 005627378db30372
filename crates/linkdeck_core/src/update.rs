use crate::{batch_of, DashState, Effect, Msg, ProbeSchedule, ProbeTarget};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashState, msg: Msg) -> (DashState, Vec<Effect>) {
    let effects = match msg {
        Msg::EntriesLoaded(entries) => {
            state.load_entries(entries);
            // Visibility events may never fire for rows that are already on
            // screen, so the first batch of a fresh load is requested here.
            trigger_batch(&mut state, 0, ProbeSchedule::AfterReload)
        }
        Msg::SearchChanged(term) => {
            state.set_search(term);
            Vec::new()
        }
        Msg::RowVisible { position } => {
            trigger_batch(&mut state, batch_of(position), ProbeSchedule::Immediate)
        }
        Msg::ProbeResolved {
            generation,
            id,
            alive,
        } => {
            state.apply_probe(generation, &id, alive);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Trigger contract for one batch of the current filtered view.
///
/// The batch index is claimed before anything else so that duplicate
/// visibility events for the same batch collapse into a single probe run.
/// An empty range, a fully resolved batch, and a re-trigger are all silent
/// no-ops.
fn trigger_batch(state: &mut DashState, batch: usize, schedule: ProbeSchedule) -> Vec<Effect> {
    if !state.claim_batch(batch) {
        return Vec::new();
    }

    let pending = state.pending_in_batch(batch);
    if pending.is_empty() {
        return Vec::new();
    }

    state.mark_checking(pending.iter().map(|(id, _)| id.as_str()));

    let targets = pending
        .into_iter()
        .map(|(id, url)| ProbeTarget { id, url })
        .collect();
    vec![Effect::ProbeBatch {
        generation: state.generation(),
        batch,
        targets,
        schedule,
    }]
}
