#![forbid(unsafe_code)]

//! `folio-web` binds `folio-core` to the browser.
//!
//! Design goals:
//! - **Fresh measurements**: every scroll, resize, and click reads offsets
//!   from the live DOM through [`folio_core::LayoutSource`].
//! - **Scoped listeners**: scroll/resize/click listeners are registered on
//!   mount and removed when the handle drops.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The DOM pieces only compile for `wasm32`. Markup rendering and the change
//! journal are platform-agnostic and tested natively.

pub mod journal;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::FolioNav;

/// Class carried by every navigation link.
pub const LINK_CLASS: &str = "nav-link";
/// Class added to the current navigation link.
pub const ACTIVE_CLASS: &str = "is-active";
/// Attribute tying a link to its section id.
pub const NAV_ID_ATTR: &str = "data-nav-id";
