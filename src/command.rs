//! Command execution for scribe.
//!
//! The release command follows a fixed sequence:
//! 1. Resolve and validate settings from flags and environment
//! 2. Create the forge client
//! 3. Compare the refs and turn merged pull requests into release lines
//! 4. Publish the release, or log it in dry-run mode
//!
//! All errors propagate as [`crate::error::ScribeError`] to `main`, which logs
//! them once and exits with a failure status.

/// Release generation and publication.
pub mod release;
