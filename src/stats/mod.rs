//! Repository statistics for folio.
//!
//! Lists an account's recently updated repositories from the hosting
//! provider and maps them into display-ready summaries with totals.

pub mod client;
pub mod types;

pub use client::{RepoStats, RepoStatsClient};
pub use types::{HostedRepo, RepoSummary, RepoTotals, NO_DESCRIPTION, NO_LANGUAGE};
