#![forbid(unsafe_code)]

//! Navigation items and the per-link view model.

/// Id that is active whenever no section holds the probe point.
pub const HOME_ID: &str = "home";

/// One navigation link: a display label and the id of the section it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub id: &'static str,
}

impl NavItem {
    #[must_use]
    pub const fn new(name: &'static str, id: &'static str) -> Self {
        Self { name, id }
    }
}

/// The portfolio page's navigation bar, left to right.
pub const PORTFOLIO_NAV: [NavItem; 6] = [
    NavItem::new("Home", "home"),
    NavItem::new("Service", "service"),
    NavItem::new("Education", "education"),
    NavItem::new("Skills", "skills"),
    NavItem::new("Projects", "projects"),
    NavItem::new("Contact", "contact"),
];

/// Split items around the centered logo. The left half gets the extra item
/// when the count is odd.
#[must_use]
pub fn split_halves(items: &[NavItem]) -> (&[NavItem], &[NavItem]) {
    items.split_at(items.len().div_ceil(2))
}

/// Render state for one navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub name: &'static str,
    pub id: &'static str,
    pub href: String,
    /// Marked with `aria-current="page"` and the highlight class.
    pub current: bool,
}

impl NavLinkView {
    /// Value for the `aria-current` attribute, if any.
    #[must_use]
    pub fn aria_current(&self) -> Option<&'static str> {
        self.current.then_some("page")
    }
}

/// Build link views for `items`, marking the one matching `active_id`.
#[must_use]
pub fn link_views(items: &[NavItem], active_id: &str) -> Vec<NavLinkView> {
    items
        .iter()
        .map(|item| NavLinkView {
            name: item.name,
            id: item.id,
            href: format!("#{}", item.id),
            current: item.id == active_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn halves_favor_left() {
        let (left, right) = split_halves(&PORTFOLIO_NAV);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        assert_eq!(right[0].id, "skills");

        let odd = &PORTFOLIO_NAV[..5];
        let (left, right) = split_halves(odd);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);

        let (left, right) = split_halves(&[]);
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn exactly_one_link_is_current() {
        let views = link_views(&PORTFOLIO_NAV, "skills");
        let current: Vec<_> = views.iter().filter(|v| v.current).map(|v| v.id).collect();
        assert_eq!(current, vec!["skills"]);
        assert_eq!(views[3].href, "#skills");
        assert_eq!(views[3].aria_current(), Some("page"));
        assert_eq!(views[0].aria_current(), None);
    }

    #[test]
    fn unknown_active_id_marks_nothing() {
        let views = link_views(&PORTFOLIO_NAV, "hire-me");
        assert!(views.iter().all(|v| !v.current));
    }
}
