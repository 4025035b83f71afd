//! Shared utility functions.

/// Error returned when a Riot nametag is not of the form `name#tag`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NametagError {
    /// The nametag did not contain exactly one `#`.
    #[error("Nametag must have exactly one #")]
    Separator,
    /// The name or tag half was empty.
    #[error("Nametag must have a non-empty name and tag")]
    Empty,
}

/// Splits a `name#tag` nametag into its two halves.
pub fn split_nametag(nametag: &str) -> Result<(&str, &str), NametagError> {
    if nametag.matches('#').count() != 1 {
        return Err(NametagError::Separator);
    }
    let (name, tag) = nametag.split_once('#').ok_or(NametagError::Separator)?;
    if name.is_empty() || tag.is_empty() {
        return Err(NametagError::Empty);
    }
    Ok((name, tag))
}

/// Joins a name and tag into a `name#tag` nametag.
#[must_use]
pub fn join_nametag(name: &str, tag: &str) -> String {
    format!("{name}#{tag}")
}
