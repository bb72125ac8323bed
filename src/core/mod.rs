//! Core types: entity identification and allocation.
//!
//! Cards carry an explicit `EntityId` assigned at construction. Allocation
//! is threaded through an `IdAllocator` value rather than hidden in a
//! global, so callers control where the sequence lives.

pub mod entity;

pub use entity::{EntityId, IdAllocator};
