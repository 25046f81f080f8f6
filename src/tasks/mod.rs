//! Background Tasks Module
//!
//! Contains background tasks that run alongside the command loop.
//!
//! # Tasks
//! - Cache Sweep: Removes stale response-cache entries once per interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle};
