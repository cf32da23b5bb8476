//! A personal snippet store: save short texts under keys, then copy them to the
//! clipboard by key.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod prompt;
pub mod sanitize;
pub mod storage;
