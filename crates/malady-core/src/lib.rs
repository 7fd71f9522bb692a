//! Core types for malady: actors, body regions, traits, and the conditions
//! they carry.
//!
//! Nothing here ticks. The data model is plain and serde-friendly so an
//! [`Actor`] can be built in code or loaded from JSON; `malady-sim` drives it.

/// The actor model and its hit-point, pain and effect helpers.
pub mod actor;
/// Body regions, hit-point pools and temperature bands.
pub mod body;
/// Condition kinds, keys and instances.
pub mod condition;
/// The per-actor collection of active conditions.
pub mod conditions;
/// Short-lived effects owned outside the condition engine.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Attributes and the per-tick stat bonus accumulator.
pub mod stats;
/// Traits and capabilities.
pub mod traits;

/// Re-export actor types.
pub use actor::{Actor, Position};
/// Re-export body types.
pub use body::{BodyRegion, HpPart};
/// Re-export condition types.
pub use condition::{ConditionInstance, ConditionKey, ConditionKind, Decay, Scope};
/// Re-export the condition collection.
pub use conditions::{ConditionSet, InflictMode, Inflicted, SnapshotEntry};
/// Re-export effects.
pub use effect::Effect;
/// Re-export error types.
pub use error::{MaladyError, MaladyResult};
/// Re-export stat types.
pub use stats::{Attributes, MissReason, StatBonusSet};
/// Re-export traits and capabilities.
pub use traits::{Capability, Trait};
