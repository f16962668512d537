// Request extractors applied across handlers.

pub mod auth;

pub use auth::AuthUser;
