use malady_core::{Actor, BodyRegion, ConditionInstance, ConditionKind, Inflicted, StatBonusSet};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::TickContext;
use crate::error::SimResult;
use crate::event::EventLog;
use crate::ops::{self, Infliction};
use crate::rng::{Roller, SeededRoller};
use crate::system::{ConditionSystem, EffectSystem, System};
use crate::world::{StaticWorld, World};

/// The top-level simulation orchestrator.
///
/// Owns one actor, its surroundings, the clock, RNG, event log and the
/// registered systems. Drives the tick loop.
pub struct Simulation<W: World = StaticWorld> {
    actor: Actor,
    world: W,
    clock: SimClock,
    rng: Box<dyn Roller>,
    events: EventLog,
    catalog: &'static Catalog,
    systems: Vec<Box<dyn System>>,
}

impl<W: World> std::fmt::Debug for Simulation<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("actor", &self.actor.name)
            .field("tick", &self.clock.tick())
            .field("turn", &self.clock.turn())
            .field("conditions", &self.actor.conditions.len())
            .field("systems", &self.systems.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl<W: World> Simulation<W> {
    /// Create a simulation with the condition and effect systems registered.
    pub fn new(actor: Actor, world: W, config: SimConfig) -> Self {
        let mut sim = Self {
            actor,
            world,
            clock: SimClock::new(config.start_turn),
            rng: Box::new(SeededRoller::new(config.seed)),
            events: EventLog::new(config.max_events),
            catalog: Catalog::global(),
            systems: Vec::new(),
        };
        sim.add_system(ConditionSystem::new());
        sim.add_system(EffectSystem);
        sim
    }

    /// Replace the random source.
    pub fn with_roller(mut self, roller: impl Roller + 'static) -> Self {
        self.rng = Box::new(roller);
        self
    }

    /// Use a different catalog.
    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Register a system. Systems are ticked in registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Run `f` with the actor and a context over the current state.
    fn with_context<R>(&mut self, f: impl FnOnce(&mut Actor, &mut TickContext<'_>) -> R) -> R {
        let Self {
            actor,
            world,
            clock,
            rng,
            events,
            catalog,
            ..
        } = self;
        let mut ctx = TickContext {
            rng: &mut **rng,
            world,
            events,
            clock,
            catalog: *catalog,
        };
        f(actor, &mut ctx)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> SimResult<()> {
        self.clock.advance();

        let Self {
            actor,
            world,
            clock,
            rng,
            events,
            catalog,
            systems,
        } = self;
        let mut ctx = TickContext {
            rng: &mut **rng,
            world,
            events,
            clock,
            catalog: *catalog,
        };
        for system in systems.iter_mut() {
            system.tick(actor, &mut ctx)?;
        }
        Ok(())
    }

    /// Advance the simulation by up to `n` ticks, stopping early once the
    /// actor is dead. Returns the number of ticks actually run.
    pub fn run(&mut self, n: u64) -> SimResult<u64> {
        for done in 0..n {
            if self.actor.is_dead() {
                info!(tick = self.clock.tick(), "actor is dead, stopping");
                return Ok(done);
            }
            self.tick()?;
        }
        Ok(n)
    }

    /// Add a condition to the actor.
    pub fn inflict(&mut self, req: Infliction) -> Inflicted {
        debug!(kind = req.kind.key(), duration = req.duration, "inflict");
        self.with_context(|actor, ctx| ops::inflict(actor, ctx, req))
    }

    /// Remove a condition from the actor. Returns `false` if it was not
    /// active.
    pub fn cure(&mut self, kind: ConditionKind, region: Option<BodyRegion>) -> bool {
        self.with_context(|actor, ctx| ops::cure(actor, ctx, kind, region))
    }

    /// Look up an active condition.
    pub fn query(&self, kind: ConditionKind, region: Option<BodyRegion>) -> Option<&ConditionInstance> {
        ops::query(&self.actor, kind, region)
    }

    /// The status label of an active condition, as the actor would see it.
    pub fn label(&self, kind: ConditionKind, region: Option<BodyRegion>) -> Option<String> {
        self.query(kind, region)
            .map(|inst| self.catalog.label(inst, &self.actor))
    }

    /// The simulated actor.
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Mutable access to the actor, for setting up or poking at a run.
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    /// The surroundings.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the surroundings.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Everything that has happened so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The catalog this simulation reads names and handlers from.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// The bonus total from the most recent tick.
    pub fn last_bonus(&self) -> StatBonusSet {
        self.get_system::<ConditionSystem>()
            .map(|s| s.last_bonus().clone())
            .unwrap_or_default()
    }

    /// Access a system by downcasting to a concrete type.
    pub fn get_system<T: System + 'static>(&self) -> Option<&T> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
    }

    /// Access a system mutably by downcasting to a concrete type.
    pub fn get_system_mut<T: System + 'static>(&mut self) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// Extract the actor, consuming the simulation.
    pub fn into_actor(self) -> Actor {
        self.actor
    }

    /// Ticks run since the simulation was created.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}
