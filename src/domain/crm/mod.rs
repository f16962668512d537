// CRM record types the dashboard aggregates over.
// Explicit schemas carrying the fields the aggregation reads plus
// minimal identity/display fields; anything else stays in the backend.

pub mod deal;
pub mod lead;
pub mod task;

// Re-export main types for convenience
pub use deal::{Deal, Stage};
pub use lead::Lead;
pub use task::Task;
