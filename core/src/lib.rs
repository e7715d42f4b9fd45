//! Core simulation for the Tsumitate savings game.
//!
//! One engine instance owns one run: the player's settings are frozen
//! into a `SimConfig`, the run advances one year per call, and a final
//! `RunResult` is copied out for the results screen. Presentation is a
//! separate layer entirely; this crate has no UI, no persistence and
//! no wall clock.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod result;
pub mod risk;
pub mod rng;
pub mod state;
pub mod types;
