//! Data transfer objects for Web API.

pub mod response;

pub use response::{ArticlesResponse, RepoStatsResponse};
