//! repostats - repository statistics and release tooling
//!
//! Two independent utilities share this crate:
//! - the statistics scanner (`repostats` binary): [`pipeline`], [`scanner`],
//!   [`scoring`], [`reporters`]
//! - the release patcher (`update-release` binary): [`release`]

pub mod cli;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod release;
pub mod reporters;
pub mod scanner;
pub mod scoring;
