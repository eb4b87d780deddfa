//! Editing State
//!
//! The mutable document of the app: the in-progress drawing session and the
//! registry of saved work areas, plus the presentational size-tier table.

pub mod registry;
pub mod session;
pub mod tier;

// Re-export commonly used items
pub use registry::{RegistryError, WorkArea, WorkAreaId, WorkAreaRegistry};
pub use session::{CommitError, DrawingSession};
pub use tier::{SizeTier, TierInfo, TIER_TABLE};
