//! Visibility-triggered counter that eases from zero up to its target.
//!
//! `state` holds the pure run-state machine, `animator` drives it from host
//! callbacks, `web` adapts those callbacks to the browser and `component`
//! wraps everything in a Yew function component.

pub mod animator;
pub mod component;
pub mod easing;
pub mod host;
pub mod state;
pub mod web;

#[cfg(test)]
pub mod testing;

pub use component::AnimatedCounter;
