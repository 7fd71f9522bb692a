//! Tick engine for malady.
//!
//! Every tick the dispatcher walks an actor's conditions, hands each to the
//! handler the [`Catalog`] registers for its kind, sums the stat bonuses
//! they report and recomputes the actor's effective attributes. Randomness,
//! the surroundings and the message sink come in through a [`TickContext`],
//! so the same handlers run against a seeded game or a pinned test double.

/// Condition names, messages and handlers per kind.
pub mod catalog;
/// Simulation clock: ticks elapsed and the absolute game turn.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Everything a handler may touch besides the actor.
pub mod context;
/// The per-tick condition dispatcher.
pub mod engine;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// The trait every condition handler implements.
pub mod handler;
/// Built-in handlers for illnesses, substances and afflictions.
pub mod handlers;
/// Inflict, cure, query and the side effects handlers share.
pub mod ops;
/// The random source contract and its implementations.
pub mod rng;
/// JSON scenario files.
pub mod scenario;
/// Top-level simulation orchestrator.
pub mod simulation;
/// Lying down, sleeping and the alarm clock.
pub mod sleep;
/// The trait that all simulation systems implement.
pub mod system;
/// The surroundings a condition can observe and change.
pub mod world;
/// The bite, infection and recovery chain.
pub mod wound;

/// Re-exports of [`catalog::Catalog`] and [`catalog::Descriptor`].
pub use catalog::{Catalog, Descriptor};
/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::TickContext`].
pub use context::TickContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], [`event::SimEventKind`], and [`event::Tone`].
pub use event::{EventLog, SimEvent, SimEventKind, Tone};
/// Re-exports of [`handler::ConditionHandler`] and [`handler::Lifecycle`].
pub use handler::{ConditionHandler, Lifecycle};
/// Re-export of [`ops::Infliction`].
pub use ops::Infliction;
/// Re-exports of [`rng::Roller`], [`rng::SeededRoller`], and [`rng::FixedRoller`].
pub use rng::{FixedRoller, Roller, SeededRoller};
/// Re-exports of [`scenario::Scenario`] and [`scenario::ScenarioCondition`].
pub use scenario::{Scenario, ScenarioCondition};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of [`system::System`], [`system::ConditionSystem`], and [`system::EffectSystem`].
pub use system::{ConditionSystem, EffectSystem, System};
/// Re-exports of [`world::World`], [`world::StaticWorld`], and [`world::MonsterGroup`].
pub use world::{MonsterGroup, StaticWorld, World};
