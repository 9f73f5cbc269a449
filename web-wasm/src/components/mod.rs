//! UIコンポーネント

pub mod header;
pub mod profile_card;
pub mod view_container;
