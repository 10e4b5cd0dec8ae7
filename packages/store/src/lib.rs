pub mod models;
mod prefs;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use models::{SortConfig, SortDirection, SortKey, UiState, PAGE_SIZES};
pub use prefs::{PrefStore, Prefs};
