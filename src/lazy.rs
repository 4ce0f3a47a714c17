//! Deferred image sources.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// How deferred images get their real source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Swap each source in when the image intersects the viewport.
    Observe,
    /// Swap every source in right away.
    Eager,
}

impl LoadStrategy {
    pub fn for_support(intersection_observer: bool) -> Self {
        if intersection_observer { Self::Observe } else { Self::Eager }
    }
}

/// Source to assign from a deferred attribute value. Blank values would point
/// `src` at the page itself, so they are skipped.
pub fn deferred_source(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|src| !src.is_empty())
}
