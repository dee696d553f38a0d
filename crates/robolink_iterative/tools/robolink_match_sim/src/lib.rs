//! robolink_match_sim
//!
//! Library side of the match simulator: configuration and the pure match
//! timeline. The binary in `main.rs` wires these to a `RobotAdapter` and a
//! tokio interval.

pub mod config;
pub mod schedule;
