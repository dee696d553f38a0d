//! robolink_core: host-agnostic lifecycle semantics for iterative robot runtimes.
//!
//! Design goals:
//! - Pure, testable logic (no host runtime deps).
//! - Explicit types; no macro wizardry.
//! - Small, stable public API surface.

pub mod error;

/// Lifecycle modes, hooks, and transition tables (host-agnostic).
pub mod lifecycle;
