//! Pure filter/sort/codec engine for procurement application tracking.
//!
//! Every function here is a synchronous, total computation over its inputs:
//! no I/O, no clocks, no shared mutable state. Persistence and URL handling
//! live with the callers.

pub mod codec;
pub mod criteria;
pub mod facets;
pub mod predicate;
pub mod rank;
pub mod record;
pub mod validate;

pub use codec::{DecodeError, decode, encode};
pub use criteria::{CeilingRange, Criteria, CriteriaPatch, DateRange, Period, PresetWindow};
pub use facets::{Facets, facets};
pub use predicate::{filter_applications, matches};
pub use rank::{SortKey, quick_search, sort_applications};
pub use record::{Application, ApplicationStatus};
pub use validate::{CeilingError, validate_ceiling};
