// src/specs/mod.rs
//! # Field "specs" module
//!
//! This module hosts the **field-group extraction specifications** for an
//! exported team page. Each spec owns one group of fields and encodes *where
//! the ground truth lives in the markup* and *how to find it despite drift*.
//!
//! ## What lives here
//! - **Selector chains & precedence** per field (exact generated class first,
//!   substring class fallback, semantic attribute last), as declarative
//!   tables consumed by `core::locate`.
//! - **Raw extraction** into small bundle structs of `Option<String>` values
//!   and raw lists. "Not found" stays `None` here.
//! - **Container-scoped list extraction** for repeated entities (players,
//!   matches): sub-fields are resolved inside each entity's own scope, never
//!   from a global list misaligned by index (the legacy index-aligned mode
//!   survives behind an option in `roster`).
//!
//! ## What does **not** live here
//! - **Defaulting, caps, filters, ids** (that's `normalize`).
//! - **Persistence, batching, report generation** (higher layers).
//!
//! ## Conventions & invariants
//! - Chains are per field and independent; one empty chain never aborts the
//!   others.
//! - Text is the node's concatenated text content, untrimmed; `src` is the
//!   raw attribute, unresolved.
//! - Specs are testable **offline** against inline fixtures.

pub mod matches;
pub mod roster;
pub mod team;
