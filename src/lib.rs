//! Portfolio page behaviours: a content slider, theme persistence, a mobile
//! navigation menu, a preloader, reveal-on-scroll and a cursor follower.
//!
//! [`core`] holds the platform-neutral behaviour.  Two front ends drive it:
//! a terminal preview (`app` + `ui`, the `folio` binary) and, with the `web`
//! feature on `wasm32`, a browser binding in `web`.

pub mod core;

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
