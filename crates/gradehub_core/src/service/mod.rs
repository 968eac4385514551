//! Core use-case services.
//!
//! # Responsibility
//! - Compose boundary validation with store operations into the entry
//!   points a presentation layer calls.
//! - Keep UI layers decoupled from store internals.

pub mod hub_service;
