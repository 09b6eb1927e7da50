#![forbid(unsafe_code)]

//! Core: section measurement, active-section tracking, and click-to-scroll
//! routing for the folio navigation bar.
//!
//! # Role in folio
//! `folio-core` is the behavioral heart of an otherwise static page. It decides
//! which content section sits beneath the fixed navigation bar and routes
//! navigation clicks to animated scrolls, without touching the DOM itself.
//!
//! # Primary responsibilities
//! - **Section / NavItem**: the page's identifiable regions and the links that
//!   point at them.
//! - **ActiveSectionTracker**: probe-point matching over live measurements.
//! - **ScrollRouter**: click handling that keeps the active id and URL
//!   fragment consistent before the scroll animation finishes.
//! - **LayoutSource**: the narrow trait through which the environment is read
//!   and driven.
//!
//! # How it fits in the system
//! `folio-web` implements [`layout::LayoutSource`] over `web-sys` and forwards
//! scroll, resize, and click events here. Everything in this crate is
//! single-threaded and event-driven; each call does O(sections) work.

pub mod coalesce;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod nav;
pub mod router;
pub mod section;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{ConfigError, NavError};
pub use layout::{LayoutSource, ScrollBehavior, ScrollRequest};
pub use nav::{HOME_ID, NavItem, NavLinkView, PORTFOLIO_NAV};
pub use router::{NavOutcome, ScrollRouter};
pub use section::{Section, SectionRegistry};
pub use tracker::{ActiveChange, ActiveSectionTracker, TrackerState, Trigger};

#[cfg(any(test, feature = "test-helpers"))]
pub use layout::StaticLayout;
