//! Algotrace playback and export
//!
//! Replays engine traces frame by frame and packs them for a frontend.
//!
//! # Architecture
//!
//! - **Catalog**: Every engine by name, run on built-in sample inputs
//! - **Playback**: Seek, step and scrub through a finished trace at any speed
//! - **Report**: One run replayed to the end and serialized as JSON
//! - **Config**: Environment variables and positional overrides
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env()?.with_args(["kruskal"])?;
//! let report = Report::build(config)?;
//! println!("{}", report.to_json()?);
//! ```

mod catalog;
mod config;
mod error;
mod playback;
mod report;
pub mod samples;

pub use catalog::{Algorithm, Run};
pub use config::VisConfig;
pub use error::{Error, Result};
pub use playback::{Playback, PlaybackSpeed, PlaybackState, PlaybackStatus};
pub use report::Report;
