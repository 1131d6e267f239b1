//! Core domain types and the metrics engine.
//!
//! Everything here is a pure function of its inputs; I/O lives in
//! [`crate::adapters`].

pub mod record;
pub mod table;
pub mod aggregate;
pub mod win_loss;
pub mod risk_curve;
pub mod ranking;
pub mod insight;
pub mod ticker;
pub mod audit;
pub mod analysis;
pub mod format;
pub mod settings;
pub mod error;
