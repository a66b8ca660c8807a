//! Playback controls over a finished trace.
//!
//! The cursor always points at an existing frame (or frame 0 of an empty
//! trace). Seeking is plain indexing; nothing is re-executed.

use std::str::FromStr;
use std::time::Duration;

use algotrace_engines::{Event, Snapshot, Trace};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How fast the cursor advances relative to the configured frame time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// Cursor does not advance
    Paused,
    /// Four frame times per frame
    QuarterSpeed,
    /// Two frame times per frame
    HalfSpeed,
    /// One frame time per frame
    Normal,
    /// Two frames per frame time
    Double,
    /// Four frames per frame time
    Quadruple,
    /// Ten frames per frame time
    TenX,
    /// No delay between frames
    Maximum,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 8] = [
        PlaybackSpeed::Paused,
        PlaybackSpeed::QuarterSpeed,
        PlaybackSpeed::HalfSpeed,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Double,
        PlaybackSpeed::Quadruple,
        PlaybackSpeed::TenX,
        PlaybackSpeed::Maximum,
    ];

    /// Frames per frame time; infinite for [`PlaybackSpeed::Maximum`].
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Paused => 0.0,
            PlaybackSpeed::QuarterSpeed => 0.25,
            PlaybackSpeed::HalfSpeed => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
            PlaybackSpeed::Quadruple => 4.0,
            PlaybackSpeed::TenX => 10.0,
            PlaybackSpeed::Maximum => f64::INFINITY,
        }
    }

    /// Milliseconds each frame stays on screen when one frame normally
    /// takes `base_ms`; `None` when paused.
    pub fn ms_per_frame(&self, base_ms: u64) -> Option<u64> {
        match self {
            PlaybackSpeed::Paused => None,
            PlaybackSpeed::QuarterSpeed => Some(base_ms.saturating_mul(4)),
            PlaybackSpeed::HalfSpeed => Some(base_ms.saturating_mul(2)),
            PlaybackSpeed::Normal => Some(base_ms),
            PlaybackSpeed::Double => Some(base_ms / 2),
            PlaybackSpeed::Quadruple => Some(base_ms / 4),
            PlaybackSpeed::TenX => Some(base_ms / 10),
            PlaybackSpeed::Maximum => Some(0),
        }
    }

    /// Name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackSpeed::Paused => "paused",
            PlaybackSpeed::QuarterSpeed => "quarter",
            PlaybackSpeed::HalfSpeed => "half",
            PlaybackSpeed::Normal => "normal",
            PlaybackSpeed::Double => "double",
            PlaybackSpeed::Quadruple => "quadruple",
            PlaybackSpeed::TenX => "ten",
            PlaybackSpeed::Maximum => "max",
        }
    }
}

impl FromStr for PlaybackSpeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|speed| speed.name() == wanted)
            .ok_or_else(|| Error::InvalidConfig(format!("unknown playback speed {:?}", s)))
    }
}

/// Where the cursor is in its play/pause/stop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Rewound to frame 0, not advancing
    Stopped,
    /// Advancing one frame per delay
    Playing,
    /// Holding the current frame
    Paused,
    /// Resting on the last frame without looping
    Finished,
}

/// Seekable cursor over a [`Trace`].
#[derive(Debug)]
pub struct Playback<S> {
    trace: Trace<S>,
    current_frame: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
    loop_enabled: bool,
}

impl<S> Playback<S> {
    pub fn new(trace: Trace<S>) -> Self {
        Self {
            trace,
            current_frame: 0,
            state: PlaybackState::Stopped,
            speed: PlaybackSpeed::Normal,
            loop_enabled: false,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn total_frames(&self) -> usize {
        self.trace.len()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    fn last_frame(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Jump to `frame`, clamped to the last frame.
    pub fn seek(&mut self, frame: usize) {
        self.current_frame = frame.min(self.last_frame());
        if self.current_frame == self.last_frame() && !self.loop_enabled {
            self.state = PlaybackState::Finished;
        } else if self.state == PlaybackState::Finished {
            self.state = PlaybackState::Paused;
        }
    }

    /// Start playback, rewinding first if already at the end.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Finished || self.current_frame >= self.last_frame() {
            self.current_frame = 0;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Stop and return to the first frame.
    pub fn stop(&mut self) {
        self.current_frame = 0;
        self.state = PlaybackState::Stopped;
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        if matches!(speed, PlaybackSpeed::Paused) {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    /// Advance one frame and return it. At the last frame, wraps when
    /// looping and otherwise finishes.
    pub fn step_forward(&mut self) -> Option<&Snapshot<S>> {
        if self.current_frame < self.last_frame() {
            self.current_frame += 1;
            if self.current_frame == self.last_frame() && !self.loop_enabled {
                self.state = PlaybackState::Finished;
            }
        } else if self.loop_enabled && !self.trace.is_empty() {
            self.current_frame = 0;
        } else {
            self.state = PlaybackState::Finished;
            return None;
        }
        self.trace.get(self.current_frame)
    }

    /// Go back one frame and pause there.
    pub fn step_backward(&mut self) -> Option<&Snapshot<S>> {
        if self.current_frame == 0 {
            return None;
        }
        self.current_frame -= 1;
        self.state = PlaybackState::Paused;
        self.trace.get(self.current_frame)
    }

    /// The frame under the cursor.
    pub fn current(&self) -> Option<&Snapshot<S>> {
        self.trace.get(self.current_frame)
    }

    /// Frames `start..end`, clamped to the trace.
    pub fn frames_in_range(&self, start: usize, end: usize) -> &[Snapshot<S>] {
        let frames = self.trace.as_slice();
        let end = end.min(frames.len());
        let start = start.min(end);
        &frames[start..end]
    }

    /// Every frame up to and including the cursor.
    pub fn frames_to_current(&self) -> &[Snapshot<S>] {
        let frames = self.trace.as_slice();
        &frames[..(self.current_frame + 1).min(frames.len())]
    }

    /// Position as a fraction of the trace (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        match self.trace.len() {
            0 => 0.0,
            1 => 1.0,
            len => self.current_frame as f64 / (len - 1) as f64,
        }
    }

    /// Delay before the next frame at the current speed.
    pub fn frame_delay(&self, base_ms: u64) -> Option<Duration> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        self.speed.ms_per_frame(base_ms).map(Duration::from_millis)
    }

    pub fn into_trace(self) -> Trace<S> {
        self.trace
    }
}

/// Playback status for a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_frame: usize,
    pub total_frames: usize,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub progress: f64,
    pub loop_enabled: bool,
    /// Event and status line under the cursor.
    pub event: Option<Event>,
    pub status: Option<String>,
}

impl<S> From<&Playback<S>> for PlaybackStatus {
    fn from(playback: &Playback<S>) -> Self {
        let current = playback.current();
        Self {
            current_frame: playback.current_frame,
            total_frames: playback.total_frames(),
            state: playback.state,
            speed: playback.speed,
            progress: playback.progress(),
            loop_enabled: playback.loop_enabled,
            event: current.map(|snapshot| snapshot.event),
            status: current.map(|snapshot| snapshot.status.clone()),
        }
    }
}
