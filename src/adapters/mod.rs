// Adapters layer: concrete implementations of the domain ports (catalog, backend, storage).

pub mod backend;
pub mod catalog;
pub mod http;
pub mod storage;

pub use backend::HttpArenaBackend;
pub use catalog::PokeApiClient;
pub use storage::{LocalStorage, MemoryStorage, StorageBackend};
