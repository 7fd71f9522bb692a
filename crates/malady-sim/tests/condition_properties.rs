//! Property tests for condition behavior.
use malady_core::{Actor, BodyRegion, ConditionKind, Trait};
use malady_sim::{FixedRoller, Infliction, SimConfig, Simulation, StaticWorld};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn sim_at(actor: Actor, start_turn: u64) -> Simulation {
    Simulation::new(
        actor,
        StaticWorld::new(),
        SimConfig::default().with_start_turn(start_turn),
    )
}

fn kind_at(index: usize) -> ConditionKind {
    let kinds: Vec<_> = ConditionKind::all().collect();
    kinds[index % kinds.len()]
}

proptest! {
    #[test]
    fn duration_never_grows_on_the_same_instance(
        kind_indices in proptest::collection::vec(0usize..64, 1..4),
        duration in 1i32..20_000,
        intensity in 1i32..5,
        seed in any::<u64>(),
        pinned in proptest::option::of(any::<bool>()),
        ticks in 1u64..25,
    ) {
        let kinds: Vec<_> = kind_indices.into_iter().map(kind_at).collect();
        let sim = Simulation::new(
            Actor::new("Test"),
            StaticWorld::new(),
            SimConfig::default().with_seed(seed),
        );
        let mut sim = match pinned {
            Some(true) => sim.with_roller(FixedRoller::Low),
            Some(false) => sim.with_roller(FixedRoller::High),
            None => sim,
        };
        for kind in &kinds {
            sim.inflict(Infliction::new(*kind, duration).intensity(intensity));
        }

        for _ in 0..ticks {
            let before: Vec<_> = sim.actor().conditions.iter().cloned().collect();
            sim.tick().expect("tick");
            for old in &before {
                if let Some(after) = sim.query(old.kind, old.region)
                    && after.serial() == old.serial()
                {
                    prop_assert!(
                        after.duration <= old.duration,
                        "{} went from {} to {}",
                        old.kind.key(),
                        old.duration,
                        after.duration
                    );
                }
            }
        }
    }

    #[test]
    fn teleglow_never_stretches_a_running_sleep(
        sleep in 1i32..6000,
        glow in 6001i32..9000,
        low_rolls in any::<bool>(),
    ) {
        let roller = if low_rolls { FixedRoller::Low } else { FixedRoller::High };
        let mut sim = sim_at(Actor::new("Test"), 0).with_roller(roller);
        sim.inflict(Infliction::new(ConditionKind::Sleep, sleep));
        sim.inflict(Infliction::new(ConditionKind::Teleglow, glow));
        let before = sim.query(ConditionKind::Sleep, None).cloned().expect("asleep");

        sim.tick().expect("tick");

        if let Some(after) = sim.query(ConditionKind::Sleep, None)
            && after.serial() == before.serial()
        {
            prop_assert!(after.duration < before.duration);
        }
    }

    #[test]
    fn bonuses_never_leak_between_ticks(
        first in proptest::collection::vec(0usize..4, 0..4),
        second in proptest::collection::vec(0usize..4, 0..4),
        duration in 300i32..3000,
    ) {
        const PURE: [ConditionKind; 4] = [
            ConditionKind::High,
            ConditionKind::LackSleep,
            ConditionKind::Grack,
            ConditionKind::Drunk,
        ];

        let mut sim = sim_at(Actor::new("Test"), 0).with_roller(FixedRoller::High);
        for i in &first {
            sim.inflict(Infliction::new(PURE[*i], duration));
        }
        sim.tick().expect("tick");
        sim.actor_mut().conditions = Default::default();
        for i in &second {
            sim.inflict(Infliction::new(PURE[*i], duration));
        }
        sim.tick().expect("tick");

        let mut fresh = sim_at(Actor::new("Test"), 1).with_roller(FixedRoller::High);
        for i in &second {
            fresh.inflict(Infliction::new(PURE[*i], duration));
        }
        fresh.tick().expect("tick");

        prop_assert_eq!(sim.actor().effective, fresh.actor().effective);
        prop_assert_eq!(sim.actor().speed, fresh.actor().speed);
    }

    #[test]
    fn no_region_is_both_infected_and_recovering(
        steps in proptest::collection::vec((0usize..3, 0usize..12, 1i32..20_000), 1..30),
        seed in any::<u64>(),
    ) {
        const CHAIN: [ConditionKind; 3] = [
            ConditionKind::Bite,
            ConditionKind::Infected,
            ConditionKind::Recover,
        ];
        let regions: Vec<_> = BodyRegion::iter().collect();
        let mut sim = Simulation::new(
            Actor::new("Test"),
            StaticWorld::new(),
            SimConfig::default().with_seed(seed),
        );

        for (kind, region, duration) in steps {
            sim.inflict(Infliction::new(CHAIN[kind], duration).on(Some(regions[region])));
            sim.tick().expect("tick");
            for region in &regions {
                let here = Some(*region);
                prop_assert!(
                    !(sim.query(ConditionKind::Infected, here).is_some()
                        && sim.query(ConditionKind::Recover, here).is_some()),
                    "{region:?} is both infected and recovering"
                );
            }
        }
    }

    #[test]
    fn intensity_is_clamped_on_inflict(intensity in -50i32..50) {
        let mut sim = sim_at(Actor::new("Test"), 0);
        sim.inflict(Infliction::new(ConditionKind::Formication, 100).intensity(intensity));
        let inst = sim.query(ConditionKind::Formication, None).expect("present");
        prop_assert!((1..=3).contains(&inst.intensity));
    }
}

#[test]
fn unchecked_bite_turns_into_an_infection_on_schedule() {
    let region = Some(BodyRegion::ArmL);
    let mut sim = sim_at(Actor::new("Test"), 0).with_roller(FixedRoller::High);
    sim.inflict(Infliction::new(ConditionKind::Bite, malady_sim::wound::BITE_DURATION).on(region));

    sim.run(3600).expect("run");
    assert_eq!(sim.query(ConditionKind::Bite, region).map(|i| i.duration), Some(1));
    assert!(sim.query(ConditionKind::Infected, region).is_none());

    sim.tick().expect("tick");
    assert!(sim.query(ConditionKind::Bite, region).is_none());
    assert_eq!(
        sim.query(ConditionKind::Infected, region).map(|i| i.duration),
        Some(malady_sim::wound::INFECTED_DURATION)
    );
}

#[test]
fn immune_actor_shakes_off_bite_and_infection_regardless_of_seed() {
    for seed in [0, 1, 42, 9_999, u64::MAX] {
        for kind in [ConditionKind::Bite, ConditionKind::Infected] {
            let actor = Actor::new("Test").with_trait(Trait::InfImmune);
            let mut sim = Simulation::new(
                actor,
                StaticWorld::new(),
                SimConfig::default().with_seed(seed),
            );
            sim.inflict(Infliction::new(kind, 5000).on(Some(BodyRegion::LegR)));
            sim.tick().expect("tick");
            assert_eq!(sim.clock().turn(), 1);
            assert!(sim.actor().conditions.is_empty(), "{} survived seed {seed}", kind.key());
        }
    }
}

#[test]
fn sleep_is_a_singleton() {
    let mut sim = sim_at(Actor::new("Test"), 0);
    sim.inflict(Infliction::new(ConditionKind::Sleep, 100));
    sim.inflict(Infliction::new(ConditionKind::Sleep, 50).on(Some(BodyRegion::Head)));
    let sleeps: Vec<_> = sim
        .actor()
        .conditions
        .iter()
        .filter(|i| i.kind == ConditionKind::Sleep)
        .collect();
    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].duration, 150);
    assert_eq!(sleeps[0].region, None);
}

#[test]
fn clearing_conditions_restores_base_attributes() {
    let mut sim = sim_at(Actor::new("Test"), 0).with_roller(FixedRoller::High);
    sim.inflict(Infliction::new(ConditionKind::Grack, 10));
    sim.tick().expect("tick");
    assert_eq!(sim.actor().speed, sim.actor().base_speed + 20_000);
    sim.cure(ConditionKind::Grack, None);
    sim.tick().expect("tick");
    assert_eq!(sim.actor().effective, sim.actor().base);
    assert_eq!(sim.actor().speed, sim.actor().base_speed);
}
