//! Shared helpers for working with `figment::Jail` in tests.
//!
//! A jail gives the closure a fresh temporary working directory and
//! serialises it against every other jail in the process, which is what
//! tests of working-directory candidates need.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure returns a
/// [`figment::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so `?` works
/// inside jail closures.
pub fn jail_error<E: ToString>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
