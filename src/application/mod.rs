mod command;
mod config;
mod shared;
mod simulation;

pub use command::Command;
pub use config::SimulationConfig;
pub use shared::SharedEngine;
pub use simulation::{MAX_STEPS_PER_TICK, Simulation};
