
mod config;
mod errors;
mod list;
mod show;
mod toggle;
