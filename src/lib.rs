pub mod bridge;
pub mod classifier;
pub mod config;
pub mod consts;
pub mod notify;
pub mod record;
pub mod report;
pub mod task;
pub mod worker;
