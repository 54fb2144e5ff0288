pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use quill_core::repository::{ReadRepository, Repository};
pub use quill_core::StorageError;
