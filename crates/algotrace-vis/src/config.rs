//! Runtime configuration for the `algotrace` binary.

use algotrace_model::NodeId;
use serde::Serialize;

use crate::catalog::Algorithm;
use crate::error::{Error, Result};
use crate::playback::PlaybackSpeed;

/// What to run and how to pace its playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisConfig {
    pub algorithm: Algorithm,
    /// Start node for the graph engines that take one.
    pub start: NodeId,
    pub speed: PlaybackSpeed,
    /// Frame duration at normal speed.
    pub frame_ms: u64,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            start: NodeId(0),
            speed: PlaybackSpeed::Normal,
            frame_ms: 500,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with defaults.
    ///
    /// `ALGOTRACE_ALGORITHM`, `ALGOTRACE_START`, `ALGOTRACE_SPEED` and
    /// `ALGOTRACE_FRAME_MS`; unset variables keep their default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("ALGOTRACE_ALGORITHM") {
            config.algorithm = name.parse()?;
        }
        if let Some(start) = lookup("ALGOTRACE_START") {
            config.start = parse_start(&start)?;
        }
        if let Some(speed) = lookup("ALGOTRACE_SPEED") {
            config.speed = speed.parse()?;
        }
        if let Some(ms) = lookup("ALGOTRACE_FRAME_MS") {
            config.frame_ms = ms
                .trim()
                .parse()
                .map_err(|_| Error::InvalidConfig(format!("invalid ALGOTRACE_FRAME_MS {:?}", ms)))?;
        }

        Ok(config)
    }

    /// Apply positional overrides: `[algorithm] [start]`.
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut args = args.into_iter();
        if let Some(name) = args.next() {
            self.algorithm = name.as_ref().parse()?;
        }
        if let Some(start) = args.next() {
            self.start = parse_start(start.as_ref())?;
        }
        if let Some(extra) = args.next() {
            return Err(Error::InvalidConfig(format!(
                "unexpected argument {:?}",
                extra.as_ref()
            )));
        }
        Ok(self)
    }

    /// Length of the whole animation, `None` when paused.
    pub fn duration_ms(&self, frames: usize) -> Option<u64> {
        self.speed
            .ms_per_frame(self.frame_ms)
            .map(|ms| ms.saturating_mul(frames as u64))
    }
}

fn parse_start(raw: &str) -> Result<NodeId> {
    raw.trim()
        .parse()
        .map(NodeId)
        .map_err(|_| Error::InvalidConfig(format!("invalid start node {:?}", raw)))
}
