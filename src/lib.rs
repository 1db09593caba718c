//! Essay length metrics and score-versus-cutoff classification.
//!
//! The engines in [`core::metrics`] and [`core::cutoff`] are pure functions
//! over their inputs. Everything else in the crate loads inputs, applies
//! configuration, and renders reports around them.

pub mod config;
pub mod core;
pub mod logging;
pub mod scoring;
pub mod themes;
pub mod utils;

pub use crate::core::cutoff::{
    Classification, Cutoff, CutoffComparison, CutoffError, classify_against_cutoff,
    classify_against_cutoff_table,
};
pub use crate::core::metrics::{
    ProgressStatus, TextMetrics, classify_progress, compute_metrics, length_progress_percent,
};
