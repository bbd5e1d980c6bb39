//! Resolver tests covering precedence, fallback, and persistence.

mod fixtures;
mod settings;
