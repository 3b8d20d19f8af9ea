//! Pomotask library - task lists by priority, JSON persistence and Pomodoro sessions

pub mod cli;
pub mod config;
pub mod error;
pub mod pomodoro;
pub mod storage;
pub mod task;
