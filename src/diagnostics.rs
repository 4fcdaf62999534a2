use serde::Serialize;
use std::time::Instant;

/// Wall-clock cost of one named reduction stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings of a trial, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `stage`, records its elapsed time under `label` and passes its
    /// result through.
    pub fn time<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

/// Node counts after each stage of a trial reduction.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialReport {
    pub trial: usize,
    pub raw: usize,
    /// Always equal to `raw`: one node per observation.
    pub snapped: usize,
    pub deduped: usize,
    pub chained: usize,
    /// Path long enough to aggregate.
    pub usable: bool,
    pub timing: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_records_stages_in_order_and_returns_result() {
        let mut timing = TimingBreakdown::default();
        let a = timing.time("first", || 2 + 2);
        let b: Result<u8, &str> = timing.time("second", || Err("boom"));
        assert_eq!(a, 4);
        assert!(b.is_err());
        assert_eq!(timing.stages.len(), 2);
        assert_eq!(timing.stages[1].label, "second");
        assert!(timing.stage_ms("first").is_some_and(|ms| ms >= 0.0));
        assert!(timing.stage_ms("missing").is_none());
    }
}
