//! Transform engine and its building blocks

pub mod size;
pub mod rotor;
pub mod direct;
pub mod config;
pub mod engine;

pub use rotor::RotorTable;
pub use direct::direct_transform;
pub use config::{EngineConfig, Scaling};
pub use engine::TransformEngine;
