pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod viewer;
