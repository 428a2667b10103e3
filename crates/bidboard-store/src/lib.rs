//! Persistence port: a narrow key-value interface for the state the tracker
//! keeps between sessions (last-applied criteria, saved preset, view mode).
//!
//! The core engine never touches storage; orchestrators read these keys once
//! at startup and write them on explicit user actions.

mod error;
mod file;
mod memory;
mod view;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use view::{ParseViewModeError, ViewMode};

/// Well-known storage keys. Values are opaque strings owned by the codec
/// (criteria) or [`ViewMode`].
pub mod keys {
    /// Last-applied criteria, written on every successful apply.
    pub const LAST_FILTERS: &str = "bidboard:lastFilters";
    /// Saved criteria preset.
    pub const PRESET: &str = "bidboard:preset";
    /// Preferred results view.
    pub const VIEW_MODE: &str = "bidboard:viewMode";
}

/// Key-value persistence for session state.
pub trait StateStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
