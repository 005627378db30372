#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ProbeBatch {
        generation: u64,
        batch: usize,
        targets: Vec<ProbeTarget>,
        schedule: ProbeSchedule,
    },
}

/// One entry to probe: stable id plus the absolute target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSchedule {
    /// Visibility-triggered batch: probe right away.
    Immediate,
    /// First batch after a reload: probe after a short fixed delay so the
    /// initially visible rows get feedback without a visibility event.
    AfterReload,
}
