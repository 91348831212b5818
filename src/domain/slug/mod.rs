// src/domain/slug/mod.rs
pub mod config;
pub mod lookup;
pub mod manager;
pub mod rule;

pub use config::SlugConfig;
pub use lookup::{LookupKey, parse_canonical_key};
pub use manager::SlugManager;
pub use rule::UniqueRule;
