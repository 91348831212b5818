// src/domain/record/mod.rs
pub mod model;
pub mod repository;
pub mod store;

pub use model::{Model, Record, RecordId};
pub use repository::{Repository, SavingHook};
pub use store::{FieldFilter, RecordStore};
