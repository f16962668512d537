// Dashboard aggregation: snapshot state, derived statistics, and the
// store that ties them to the repositories.

pub mod snapshot;
pub mod stats;
pub mod store;

// Re-export main types
pub use snapshot::DashboardSnapshot;
pub use stats::DashboardStats;
pub use store::DashboardStore;
