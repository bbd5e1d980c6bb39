//! Test helpers shared across the workspace.
//!
//! [`env`] serialises mutations of process environment variables, and
//! [`figment`] wraps [`::figment::Jail`] for tests that need a scratch
//! working directory.

pub mod env;
pub mod figment;
