//! Draft/applied criteria session over a persistence port.
//!
//! The draft is the in-progress edit state; the applied value is what the
//! visible result set was last filtered with. Only a successful apply
//! persists criteria and refreshes the share link.

use bidboard_core::{CeilingError, Criteria, CriteriaPatch, codec, validate_ceiling};
use bidboard_store::{StateStore, StoreError, ViewMode, keys};
use thiserror::Error;
use tracing::info;

use crate::share;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Validation failure surfaced as user-visible text; the draft stays
    /// editable and unapplied.
    #[error(transparent)]
    Ceiling(#[from] CeilingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no saved preset")]
    NoPreset,

    #[error("saved preset is unreadable")]
    BadPreset,
}

pub struct FilterSession<S: StateStore> {
    store: S,
    draft: Criteria,
    applied: Criteria,
}

impl<S: StateStore> FilterSession<S> {
    /// Rehydrate a session. A usable share query wins, then the persisted
    /// last-applied criteria, then the empty default.
    pub fn start(store: S, query: Option<&str>) -> Self {
        let initial = query
            .and_then(share::criteria_from_query)
            .or_else(|| {
                store
                    .get(keys::LAST_FILTERS)
                    .and_then(|raw| codec::decode(&raw).ok())
            })
            .unwrap_or_default();
        Self {
            store,
            draft: initial.clone(),
            applied: initial,
        }
    }

    pub fn draft(&self) -> &Criteria {
        &self.draft
    }

    pub fn applied(&self) -> &Criteria {
        &self.applied
    }

    /// Replace draft fields wholesale from a partial override.
    pub fn edit(&mut self, patch: &CriteriaPatch) {
        self.draft = self.draft.merge(patch);
    }

    /// Replace the entire draft.
    pub fn set_draft(&mut self, criteria: Criteria) {
        self.draft = criteria;
    }

    /// True when the draft differs from the applied criteria. Compared on
    /// encoded form, so logically equal values are never "dirty".
    pub fn is_dirty(&self) -> bool {
        codec::encode(&self.draft) != codec::encode(&self.applied)
    }

    /// Validate and apply the draft.
    ///
    /// Returns the share query string for the newly applied criteria, or
    /// `None` when the criteria are empty and the share link should be
    /// cleared. A validation error blocks the apply; nothing is persisted.
    pub fn apply(&mut self) -> Result<Option<String>, SessionError> {
        if let Some(err) = validate_ceiling(&self.draft.ceiling) {
            return Err(err.into());
        }
        self.applied = self.draft.clone();
        let encoded = codec::encode(&self.applied);
        self.store.set(keys::LAST_FILTERS, &encoded)?;
        info!(criteria = %encoded, "applied criteria");

        if self.applied.has_active_constraints() {
            Ok(Some(share::build_share_query(&self.applied)))
        } else {
            Ok(None)
        }
    }

    /// Reset the draft to the empty criteria and apply it.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.draft = Criteria::default();
        self.apply()?;
        Ok(())
    }

    /// Save the current draft as the preset.
    pub fn save_preset(&mut self) -> Result<(), SessionError> {
        self.store.set(keys::PRESET, &codec::encode(&self.draft))?;
        info!("saved criteria preset");
        Ok(())
    }

    pub fn has_preset(&self) -> bool {
        self.store.get(keys::PRESET).is_some()
    }

    /// Load the preset into the draft and apply it.
    pub fn load_preset(&mut self) -> Result<Option<String>, SessionError> {
        let raw = self.store.get(keys::PRESET).ok_or(SessionError::NoPreset)?;
        self.draft = codec::decode(&raw).map_err(|_| SessionError::BadPreset)?;
        self.apply()
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_stored(self.store.get(keys::VIEW_MODE).as_deref())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<(), SessionError> {
        self.store.set(keys::VIEW_MODE, mode.as_str())?;
        Ok(())
    }
}
