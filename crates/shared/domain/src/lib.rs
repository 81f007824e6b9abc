//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.

pub mod client;
pub mod config;
pub mod constants;
pub mod package;
pub mod plan;
pub mod steps;
