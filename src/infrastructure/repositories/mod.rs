// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod sqlite_article;

pub use memory::InMemoryRecordStore;
pub use sqlite_article::SqliteArticleStore;
