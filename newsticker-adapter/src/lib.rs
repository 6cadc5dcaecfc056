//! Adapter utilities for the `newsticker` crate.
//!
//! The `newsticker` crate is UI-agnostic and focuses on the core state
//! machine and timing math. This crate provides small, framework-neutral
//! helpers commonly needed by adapters:
//!
//! - A linear [`Motion`] sampler for constant-velocity translations
//! - A retained [`Scene`] host that tracks element positions against a
//!   manual clock
//! - A tick-driven [`Controller`] that wires a scene to the engine
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod motion;
mod scene;


pub use controller::{Controller, MeasureText};
pub use motion::Motion;
pub use scene::{Scene, SceneElement};
