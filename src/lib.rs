//! Core simulation for the boss-battle arcade shooter: entity data,
//! compile-time tuning constants, and the pure per-frame update logic.
//! All terminal I/O lives in the binary.

pub mod compute;
pub mod constants;
pub mod entities;
