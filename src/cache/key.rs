use std::fmt;

/// Hierarchical cache key, e.g. `["admin", "workers", "0", "20"]`.
///
/// Invalidation and removal match by prefix, so invalidating
/// `["admin", "workers"]` also reaches every page and every single-worker
/// entry beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(Vec<String>);

impl CacheKey {
    /// Builds a key from its segments.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_disbursement::cache::CacheKey;
    ///
    /// let list = CacheKey::new(["admin", "positions"]);
    /// let item = list.child("6f1c2d3e-4b5a-4c6d-8e7f-90a1b2c3d4e5");
    /// assert!(item.starts_with(&list));
    /// assert!(!list.starts_with(&item));
    /// ```
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns a key one level below this one.
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    /// Returns the segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns true if `prefix` is this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &CacheKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
