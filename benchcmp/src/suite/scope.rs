//!
//! The requested package scope.
//!

///
/// The package patterns whose benchmarks are compared.
///
/// The patterns are kept sorted, so that the same set of patterns given in any order maps to
/// the same binary cache key.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageScope {
    /// The sorted patterns.
    patterns: Vec<String>,
}

impl PackageScope {
    /// The separator used when hashing patterns, which cannot occur in a pattern.
    const HASH_SEPARATOR: &'static str = "\0";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(mut patterns: Vec<String>) -> Self {
        patterns.sort();
        Self { patterns }
    }

    ///
    /// The sorted patterns.
    ///
    pub fn patterns(&self) -> &[String] {
        self.patterns.as_slice()
    }

    ///
    /// Whether no pattern was requested.
    ///
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    ///
    /// Returns the binary cache key of the scope.
    ///
    pub fn hash(&self) -> String {
        let serialized = self.patterns.join(Self::HASH_SEPARATOR);
        format!("{:x}", md5::compute(serialized.as_bytes()))
    }
}

impl std::fmt::Display for PackageScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.patterns.join(" "))
    }
}
