//! # coffer
//!
//! A generic ordered value container with an explicit copy/move lifecycle.
//!
//! The core type is [`coffer::container::Coffer`]: an exclusively-owning,
//! ordered sequence of values supporting deep copies, ownership-transferring
//! moves, swap-based assignment, and a deterministic string rendering.

pub mod coffer;
