//! Search module for the heuristic bot
//!
//! Contains:
//! - Threat scanning: cells that complete or extend runs, line shapes

pub mod threat;

pub use threat::{LineShape, Threat, ThreatScanner};
