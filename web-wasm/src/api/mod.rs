//! データ取得

pub mod dataset;
