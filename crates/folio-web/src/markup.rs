//! Navigation bar markup.
//!
//! Renders the bar as two link groups around a centered brand mark. Links
//! carry `data-nav-id` so the binding can restyle them without re-rendering.

use std::fmt::Write as _;

use folio_core::nav::{NavItem, NavLinkView, link_views, split_halves};
use v_htmlescape::escape;

use crate::{ACTIVE_CLASS, LINK_CLASS, NAV_ID_ATTR};

/// Brand mark shown between the two link groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand<'a> {
    pub initials: &'a str,
    pub name: &'a str,
}

/// Class list for a link in the given state.
#[must_use]
pub fn link_class(current: bool) -> String {
    if current {
        format!("{LINK_CLASS} {ACTIVE_CLASS}")
    } else {
        LINK_CLASS.to_owned()
    }
}

fn push_link(out: &mut String, view: &NavLinkView) {
    let _ = write!(
        out,
        r#"<a href="{href}" {attr}="{id}" class="{class}""#,
        href = escape(&view.href),
        attr = NAV_ID_ATTR,
        id = escape(view.id),
        class = link_class(view.current),
    );
    if let Some(value) = view.aria_current() {
        let _ = write!(out, r#" aria-current="{value}""#);
    }
    let _ = write!(out, ">{}</a>", escape(view.name));
}

fn push_group(out: &mut String, views: &[NavLinkView]) {
    out.push_str(r#"<div class="nav-group">"#);
    for view in views {
        push_link(out, view);
    }
    out.push_str("</div>");
}

/// Inner HTML for the navigation element.
#[must_use]
pub fn render_nav(items: &[NavItem], active_id: &str, brand: Brand<'_>) -> String {
    let (left, right) = split_halves(items);
    let mut out = String::with_capacity(256 + items.len() * 96);
    push_group(&mut out, &link_views(left, active_id));
    let _ = write!(
        out,
        r#"<div class="nav-brand"><span class="nav-brand-mark">{}</span><p class="nav-brand-name">{}</p></div>"#,
        escape(brand.initials),
        escape(brand.name),
    );
    push_group(&mut out, &link_views(right, active_id));
    out
}
