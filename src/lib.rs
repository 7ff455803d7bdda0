#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;
pub mod constants;
pub mod time;
pub mod geometry;
pub mod models;
pub mod diagram;
pub mod client;
pub mod config;
pub mod stats;

pub use client::{ClientPhase, RequestOutcome, SimulationClient, SimulationParams};
pub use diagram::{GraphView, SpaceTimeGraph};
pub use geometry::StationTable;
pub use models::SimulationSnapshot;
