// ============================================================================
// DOM MODULE - Helpers for DOM access, events and templates
// ============================================================================

pub mod element;
pub mod events;
pub mod template;

pub use element::*;
pub use events::*;
pub use template::*;
