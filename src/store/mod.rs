pub mod backend;
pub mod debounce;
pub mod error;
pub mod menu_state;

pub use backend::{MemoryBackend, SqliteBackend, StorageBackend};
pub use debounce::{ScrollDebounce, MIN_QUIET_PERIOD};
pub use error::{StoreError, StoreResult};
pub use menu_state::{MenuState, MenuStateStore, MENU_STATE_KEY};
