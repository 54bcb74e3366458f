//! Storage backends implementing the domain repository traits.

mod memory;
mod pg_click_repository;
mod pg_tag_repository;
mod pg_url_repository;
mod rows;

pub use memory::{MemoryClickRepository, MemoryStore, MemoryTagRepository, MemoryUrlRepository};
pub use pg_click_repository::PgClickRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_url_repository::PgUrlRepository;
