//!
//! The revision control collaborator.
//!

pub mod git;
pub mod guard;

///
/// Revision queries and checkouts needed to build two revisions in one working tree.
///
pub trait RevisionControl {
    ///
    /// Returns the revision currently checked out.
    ///
    fn current_revision(&self) -> anyhow::Result<String>;

    ///
    /// Returns the immediate ancestor of `reference`.
    ///
    fn parent_revision(&self, reference: &str) -> anyhow::Result<String>;

    ///
    /// Returns the canonical short form of `reference`.
    ///
    fn shorten(&self, reference: &str) -> anyhow::Result<String>;

    ///
    /// Whether `reference` resolves to a commit.
    ///
    fn is_valid(&self, reference: &str) -> anyhow::Result<bool>;

    ///
    /// Returns the checked out branch name, or `None` for a detached checkout.
    ///
    fn current_symbolic_ref(&self) -> anyhow::Result<Option<String>>;

    ///
    /// Checks out `reference` and runs the `post_checkout` shell command, if any.
    ///
    fn checkout(&self, reference: &str, post_checkout: Option<&str>) -> anyhow::Result<()>;
}
