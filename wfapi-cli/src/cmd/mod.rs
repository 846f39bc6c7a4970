pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;
pub mod update;
