//! Rendering and Visualization
//!
//! - Overlay reconciliation and the entity-backed overlay surface
//! - Camera management for the map viewport
//! - Background graticule

pub mod cameras;
pub mod graticule;
pub mod overlay;
pub mod surface;

// Re-export commonly used items
pub use overlay::{OverlayOp, OverlayReconciler};
pub use surface::OverlayPlugin;
