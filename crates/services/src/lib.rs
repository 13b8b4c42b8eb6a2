#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod snapshot;

pub use config::EngineConfig;
pub use engine::SessionEngine;
pub use snapshot::SessionSnapshot;

pub use crunch_core::{AnswerPolicy, SubmitOutcome};
