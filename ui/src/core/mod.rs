//! Framework-free building blocks: site facts, persistence, platform glue,
//! contact submission and timers.

pub mod config;
pub mod contact;
pub mod platform;
pub mod storage;
pub mod timing;
