#![forbid(unsafe_code)]

//! Sections: the page's identifiable content regions.
//!
//! A [`Section`] is a *measurement*, taken fresh from layout each time it is
//! needed. Offsets shift whenever content above reflows (responsive
//! breakpoints, late-loading images), so nothing here caches positions across
//! events. [`SectionRegistry`] only remembers which ids the page declares.

/// A measured content region, in CSS pixels from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    /// Create a measurement.
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `y` falls inside the half-open band `[top, bottom)`.
    ///
    /// Zero- or negative-height sections contain nothing.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.height > 0.0 && self.top <= y && y < self.bottom()
    }
}

/// Whether `id` is usable as a section id and URL fragment.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(|c| c.is_whitespace() || c == '#')
}

/// The ordered list of section ids a page declares.
///
/// Order is informational only; matching in the tracker is purely
/// offset-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    /// Build a registry, dropping invalid and duplicate ids.
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if is_valid_id(&id) && !out.contains(&id) {
                out.push(id);
            }
        }
        Self { ids: out }
    }

    /// Section ids of the portfolio page, in document order.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new([
            "home",
            "service",
            "education",
            "hire-me",
            "skills",
            "projects",
            "contact",
        ])
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn band_is_half_open() {
        let s = Section::new("service", 800.0, 800.0);
        assert!(!s.contains(799.9));
        assert!(s.contains(800.0));
        assert!(s.contains(1599.9));
        assert!(!s.contains(1600.0));
        assert_eq!(s.bottom(), 1600.0);
    }

    #[test]
    fn empty_section_contains_nothing() {
        let s = Section::new("hire-me", 100.0, 0.0);
        assert!(!s.contains(100.0));
        let negative = Section::new("hire-me", 100.0, -5.0);
        assert!(!negative.contains(97.0));
    }

    #[test]
    fn id_validation() {
        assert!(is_valid_id("hire-me"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("hire me"));
        assert!(!is_valid_id("#skills"));
    }

    #[test]
    fn registry_dedups_and_filters() {
        let reg = SectionRegistry::new(["home", "home", "", "skills", "a b"]);
        assert_eq!(reg.ids(), &["home".to_string(), "skills".to_string()]);
        assert!(reg.contains("skills"));
        assert!(!reg.contains("contact"));
    }

    #[test]
    fn portfolio_registry_includes_unlinked_section() {
        let reg = SectionRegistry::portfolio();
        assert_eq!(reg.len(), 7);
        assert!(reg.contains("hire-me"));
    }
}
