//! CLI commands for scalecalc

pub mod dispatch;
pub mod list;
pub mod prune;
pub mod show;
pub mod status;
pub mod toggle;
