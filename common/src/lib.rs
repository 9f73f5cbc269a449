//! Lookalike Common Library
//!
//! CLIとWeb(WASM)で共有される型・ビューモデル・表示モード切替

pub mod types;
pub mod error;
pub mod profile;
pub mod view;
pub mod search;
pub mod switcher;
pub mod validate;

pub use types::{Dataset, Entry};
pub use error::{Error, Result};
pub use profile::{profile_card, format_similarity, Card, Click};
pub use view::{show_all, show_one, show_two, combined_similarity, Section, View, ViewMode};
pub use search::{normalize_query, search};
pub use switcher::{Switcher, Transition, HIDDEN_CLASS};
pub use validate::{validate, Issue};
