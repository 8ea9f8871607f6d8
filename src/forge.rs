//! Access to the hosting service (GitHub) that holds the repository.
//!
//! Provides token-based authentication, commit comparison, pull request
//! lookups, and release creation through a common trait.

/// Configuration and authentication for the forge connection.
pub mod config;

/// Construction of the forge manager from configuration.
pub mod factory;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper that logs forge calls and gates writes behind dry-run.
pub mod manager;

/// Request and response types shared by forge implementations.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
