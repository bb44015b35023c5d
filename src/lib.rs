//! activity-chart: layout engine and tooltip controller for repository
//! activity line charts.
//!
//! `core` maps a validated series onto a fixed canvas, `interaction` holds
//! the single tooltip selection, `render` turns both into a backend-agnostic
//! scene, and `api` wraps them in one engine facade.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
