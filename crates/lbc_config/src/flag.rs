use crate::error::{Error, Result};
use std::fmt::Display;

/// A flag value that is built up from one or more raw occurrences instead of being parsed once.
/// The [Display] implementation renders the current value for help and debug output.
pub trait FlagValue: Display {
    type Err: std::error::Error + Send + Sync + 'static;

    /// Updates the value from a single raw occurrence of the flag.
    fn set(&mut self, raw: &str) -> std::result::Result<(), Self::Err>;
}

/// Feeds every raw occurrence of `flag` into `value`, in order. Stops at the first rejected
/// occurrence.
pub fn apply_occurrences<V, I>(flag: &str, value: &mut V, occurrences: I) -> Result<()>
where
    V: FlagValue,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for raw in occurrences {
        let raw = raw.as_ref();
        value
            .set(raw)
            .map_err(|error| Error::InvalidFlagValue {
                flag: flag.to_string(),
                value: raw.to_string(),
                source: Box::new(error),
            })?;
    }
    Ok(())
}
