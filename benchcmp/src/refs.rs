//!
//! The revision reference resolution.
//!

use crate::error::Error;
use crate::vcs::RevisionControl;

///
/// Resolves the old and new references into validated canonical short forms.
///
/// The new reference defaults to the current checkout, and the old one to the parent of the
/// resolved new reference. Empty strings are treated as absent.
///
pub fn resolve(
    revision_control: &dyn RevisionControl,
    old_ref: Option<&str>,
    new_ref: Option<&str>,
) -> Result<(String, String), Error> {
    let new_ref = match new_ref.filter(|reference| !reference.is_empty()) {
        Some(reference) => reference.to_owned(),
        None => revision_control
            .current_revision()
            .map_err(Error::RevisionControl)?,
    };
    let new_ref = shorten_and_validate(revision_control, new_ref.as_str())?;

    let old_ref = match old_ref.filter(|reference| !reference.is_empty()) {
        Some(reference) => reference.to_owned(),
        None => revision_control
            .parent_revision(new_ref.as_str())
            .map_err(Error::RevisionControl)?,
    };
    let old_ref = shorten_and_validate(revision_control, old_ref.as_str())?;

    Ok((old_ref, new_ref))
}

///
/// Shortens `reference` and checks that the short form resolves to a commit.
///
fn shorten_and_validate(
    revision_control: &dyn RevisionControl,
    reference: &str,
) -> Result<String, Error> {
    let short = revision_control
        .shorten(reference)
        .map_err(Error::RevisionControl)?;
    if !revision_control
        .is_valid(short.as_str())
        .map_err(Error::RevisionControl)?
    {
        return Err(Error::InvalidRef { reference: short });
    }
    Ok(short)
}
