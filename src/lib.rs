//! Johnek Architects サイトのコンテンツ管理CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod content_dir;
pub mod browse;
pub mod preview;
pub mod inquiry;
