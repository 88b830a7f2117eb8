//! Utility helpers shared across client modules.

pub mod persisted;
pub mod period;
