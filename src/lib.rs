//! # journal-client
//!
//! Leptos + WASM single-page client for the journal REST backend.
//! Pages and components render the views; `state` owns the session
//! and entry-list models; `net` holds the typed API client and the
//! persistent token store; `util` carries validation and formatting
//! helpers.
//!
//! The app builds client-side-rendered with the `csr` feature.
//! Without it the crate compiles natively with all browser calls
//! stubbed out, so the pure logic stays unit-testable with a plain
//! `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
