//! barrace-rs: animated ranked-bar ("bar chart race") engine.
//!
//! This crate owns the headless side of a year-stepped trade ranking view:
//! dataset contract, top-N selection, label layout, playback, and keyed
//! scene reconciliation with timed transitions. Drawing is delegated to
//! backends implementing [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RaceEngine, RaceEngineConfig};
pub use error::{RaceError, RaceResult};
