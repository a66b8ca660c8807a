//! One engine run replayed through [`Playback`] and packed for export.

use serde::Serialize;

use crate::catalog::Run;
use crate::config::VisConfig;
use crate::error::Result;
use crate::playback::{Playback, PlaybackStatus};

/// Everything a frontend needs to animate one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub config: VisConfig,
    pub frames: usize,
    /// Whole animation at the configured speed, `None` when paused.
    pub duration_ms: Option<u64>,
    /// Playback status after replaying every frame.
    pub playback: PlaybackStatus,
    pub run: Run,
}

impl Report {
    /// Run the configured engine and replay its trace to the end.
    pub fn build(config: VisConfig) -> Result<Self> {
        let run = config.algorithm.run(config.start)?;
        let mut playback = Playback::new(run.erased_trace()?);
        playback.set_speed(config.speed);
        playback.play();

        while let Some(snapshot) = playback.step_forward() {
            tracing::trace!(event = ?snapshot.event, status = %snapshot.status, "frame");
        }

        let frames = run.frames();
        Ok(Self {
            duration_ms: config.duration_ms(frames),
            playback: PlaybackStatus::from(&playback),
            frames,
            config,
            run,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Algorithm;
    use crate::playback::{PlaybackSpeed, PlaybackState};
    use algotrace_model::NodeId;

    #[test]
    fn replay_ends_on_complete_frame() {
        let report = Report::build(VisConfig {
            algorithm: Algorithm::Bfs,
            ..VisConfig::default()
        })
        .unwrap();

        assert_eq!(report.playback.state, PlaybackState::Finished);
        assert_eq!(report.playback.current_frame, report.frames - 1);
        assert_eq!(report.playback.progress, 1.0);
        assert_eq!(report.duration_ms, Some(500 * report.frames as u64));
        assert!(report.playback.status.is_some());
    }

    #[test]
    fn json_names_algorithm_and_engine() {
        let report = Report::build(VisConfig {
            algorithm: Algorithm::Knapsack,
            speed: PlaybackSpeed::Maximum,
            ..VisConfig::default()
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["config"]["algorithm"], "knapsack");
        assert_eq!(json["run"]["engine"], "knapsack");
        assert_eq!(json["duration_ms"], 0);
        assert_eq!(json["run"]["outcome"]["result"]["total_value"], 7);
    }

    #[test]
    fn bad_start_fails_before_playback() {
        let config = VisConfig {
            algorithm: Algorithm::Prim,
            start: NodeId(42),
            ..VisConfig::default()
        };
        assert!(Report::build(config).is_err());
    }
}
