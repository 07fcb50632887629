//! Drivers around the Lifeclaim grid engine.
//!
//! The grid itself only knows how to advance one generation. This crate
//! decides *who* advances it and *when*, and tells interested parties
//! what happened.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `lifeclaim-config.yaml` into
//!   strongly-typed structs.
//! - [`event`] -- [`AdvanceGenerationEvent`] registry and the
//!   [`GenerationListener`] trait.
//! - [`roster`] -- Named owners and round-robin turn order.
//! - [`runner`] -- Bounded async run loop with end conditions.
//! - [`simulation`] -- [`Simulation`]: grid + roster + event + counter.
//!
//! [`AdvanceGenerationEvent`]: event::AdvanceGenerationEvent
//! [`GenerationListener`]: event::GenerationListener
//! [`Simulation`]: simulation::Simulation

pub mod config;
pub mod event;
pub mod roster;
pub mod runner;
pub mod simulation;
