//! # Configuration Schema
//!
//! This crate contains the pure configuration schema with minimal dependencies (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.

pub mod config;
pub mod constants;
