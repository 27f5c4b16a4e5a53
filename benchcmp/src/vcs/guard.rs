//!
//! The checkout restoration guard.
//!

use super::RevisionControl;

///
/// Restores the branch that was checked out when the guard was created.
///
/// The restoration happens exactly once, when the guard is dropped, on every exit path of the
/// scope holding it. A detached checkout has no branch to return to and is left as is.
///
pub struct CheckoutGuard<'a> {
    /// The revision control used for the restoration.
    revision_control: &'a dyn RevisionControl,
    /// The branch to restore.
    original: Option<String>,
}

impl<'a> CheckoutGuard<'a> {
    ///
    /// Captures the current symbolic reference.
    ///
    pub fn capture(revision_control: &'a dyn RevisionControl) -> anyhow::Result<Self> {
        let original = revision_control.current_symbolic_ref()?;
        Ok(Self {
            revision_control,
            original,
        })
    }

    ///
    /// The branch that will be restored.
    ///
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        let Some(reference) = self.original.take() else {
            return;
        };
        crate::progress::status("Restoring", format!("checkout of `{reference}`"));
        if let Err(error) = self.revision_control.checkout(reference.as_str(), None) {
            crate::progress::warning("Failed", format!("to restore `{reference}`: {error}"));
        }
    }
}
