//! Drugs, drink and other things the actor put in their body.

use std::fmt::Write as _;

use malady_core::{Actor, BodyRegion, ConditionInstance, ConditionKind, Effect, StatBonusSet, Trait};

use crate::context::TickContext;
use crate::event::Tone;
use crate::handler::{ConditionHandler, Lifecycle};
use crate::ops::{self, Infliction};

/// Penalties that scale with how much alcohol is in the blood.
pub struct Drunk;

impl Drunk {
    fn penalties(duration: i32) -> (i32, i32, i32, i32) {
        (duration / 1500, duration / 1000, duration / 700, duration / 1000)
    }
}

impl ConditionHandler for Drunk {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let d = inst.duration;
        let (str_pen, dex_pen, int_pen, per_pen) = Self::penalties(d);
        bonus.add_all(-str_pen, 0, -int_pen, -per_pen);
        if dex_pen > 0 {
            bonus.hinder_dexterity(ConditionKind::Drunk, dex_pen);
        }
        if d <= 600 {
            bonus.strength += 1;
        }
        if d > 2000 + 100 * ctx.rng.dice(2, 100)
            && (ops::will_vomit(actor, ctx.rng, 1) || ctx.rng.one_in(20))
        {
            ops::vomit(actor, ctx);
        }
        let ready_for_nap = ctx.rng.one_in(500 - d / 80);
        if !actor.is_asleep() && d >= 4500 && ready_for_nap {
            ctx.message(Tone::Bad, "You pass out.");
            ops::fall_asleep(actor, ctx, d / 2);
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        let label = match inst.duration {
            d if d > 2200 => "Wasted",
            d if d > 1400 => "Trashed",
            d if d > 800 => "Drunk",
            _ => "Tipsy",
        };
        Some(label.to_string())
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let (str_pen, dex_pen, int_pen, per_pen) = Self::penalties(inst.duration);
        let mut out = String::new();
        if str_pen > 0 {
            let _ = write!(out, "Strength - {str_pen};   ");
        } else if inst.duration <= 600 {
            out.push_str("Strength + 1;    ");
        }
        for (name, pen) in [
            ("Dexterity", dex_pen),
            ("Intelligence", int_pen),
            ("Perception", per_pen),
        ] {
            if pen > 0 {
                let _ = write!(out, "{name} - {pen};   ");
            }
        }
        Some(out)
    }
}

/// Nicotine: sharper when moderate, winded when overdone.
pub struct Cig;

impl ConditionHandler for Cig {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if inst.duration >= 600 {
            bonus.strength -= 1;
            bonus.hinder_dexterity(ConditionKind::Cig, 1);
            if inst.duration >= 1200
                && (ctx.rng.one_in(50) || ops::will_vomit(actor, ctx.rng, 10))
            {
                ops::vomit(actor, ctx);
            }
        } else {
            bonus.add_all(0, 0, 1, 1);
        }
        Lifecycle::Active
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let text = if inst.duration >= 600 {
            "Strength - 1;   Dexterity - 1\nYou smoked too much."
        } else {
            "Intelligence + 1;   Perception + 1"
        };
        Some(text.to_string())
    }
}

/// A generic high.
pub struct High;

impl ConditionHandler for High {
    fn tick(
        &self,
        _actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        bonus.add_all(0, 0, -1, -1);
        Lifecycle::Active
    }
}

/// Mellow and slow, with the occasional profound thought.
pub struct WeedHigh;

impl WeedHigh {
    fn muse(actor: &mut Actor, inst: &ConditionInstance, ctx: &mut TickContext<'_>) {
        let how_high = inst.duration;
        let lines = if how_high > 125 && ctx.rng.one_in(7) {
            Self::profound(actor, ctx)
        } else if how_high > 100 && ctx.rng.one_in(5) {
            Self::mellow(actor, ctx)
        } else if how_high > 50 && ctx.rng.one_in(3) {
            match Self::hungry(actor, ctx) {
                Some(lines) => lines,
                None => return Self::muse(actor, inst, ctx),
            }
        } else {
            return;
        };
        for line in lines {
            ctx.message(Tone::Neutral, line);
        }
    }

    fn profound(actor: &mut Actor, ctx: &mut TickContext<'_>) -> Vec<&'static str> {
        let smarts = actor.effective.intelligence;
        match ctx.rng.range(0, 5) {
            0 => vec!["What if all the air in the world turned to wood? That would be the scariest thing."],
            1 => {
                actor.hunger += 2;
                vec!["Could anyone microwave a burrito so hot they couldn't eat it?"]
            }
            2 => vec![match smarts {
                s if s > 8 => "Science is all metaphor.",
                s if s < 3 => "Science lies sometimes.",
                _ => "Science is... wait, what was the point again?",
            }],
            3 => {
                let mut lines = vec!["Every great idea started in a kitchen, man."];
                if ctx.rng.one_in(2) {
                    lines.push("Somebody always had a snack ready when the thinking got hard.");
                    if ctx.rng.one_in(2) {
                        lines.push("Those were hip, hip people, man.");
                    }
                }
                lines
            }
            4 => vec!["That rug really held the whole place together..."],
            _ => vec!["You used to get high. You still do, but you used to, too."],
        }
    }

    fn mellow(actor: &Actor, ctx: &mut TickContext<'_>) -> Vec<&'static str> {
        let smarts = actor.effective.intelligence;
        match ctx.rng.range(0, 5) {
            0 => vec!["The herb reveals you to yourself."],
            1 => vec!["The scariest thing would be reaching for something and it not being there!"],
            2 => {
                let mut lines = vec!["They call them fingers, but you never see them fing."];
                if smarts > 2 && ctx.rng.one_in(2) {
                    lines.push("... oh, there they go.");
                }
                lines
            }
            3 => vec![
                "All matter is energy vibrating slowly, and everyone is one mind looking at itself.",
            ],
            4 => {
                let mut lines = vec!["You only ever smoke in the late evening."];
                for extra in [
                    "Well, sometimes the early evening, but mostly the late evening.",
                    "Just the early, mid and late evening.",
                    "Now and then the early afternoon, or the late mid-afternoon.",
                    "Oh, and sometimes the early-mid-late-early-morning.",
                ] {
                    if ctx.rng.one_in(4) {
                        lines.push(extra);
                    }
                }
                if smarts > 2 {
                    lines.push("...But never at dusk.");
                }
                lines
            }
            _ => Vec::new(),
        }
    }

    /// `None` asks for another roll from the top.
    fn hungry(actor: &mut Actor, ctx: &mut TickContext<'_>) -> Option<Vec<&'static str>> {
        let lines = match ctx.rng.range(0, 5) {
            0 => vec!["Nobody's here, man."],
            1 => {
                actor.hunger += 4;
                let mut lines = vec!["Man, a cheeseburger sounds SO awesome right now."];
                if actor.has_trait(Trait::Vegetarian) {
                    lines.push("Eh... maybe not.");
                } else if actor.has_trait(Trait::LactoseIntolerant) {
                    lines.push("Maybe without the cheese... yeah.");
                }
                lines
            }
            2 => vec!["Walking down the hall alone, sharing a joint with fifty elves."],
            3 => vec!["That stuff was the shiz-nittle snip-snap."],
            4 => return None,
            _ => Vec::new(),
        };
        Some(lines)
    }
}

impl ConditionHandler for WeedHigh {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        bonus.add_all(-1, 0, 0, -1);
        bonus.hinder_dexterity(ConditionKind::WeedHigh, 1);
        if !actor.is_npc {
            Self::muse(actor, inst, ctx);
        }
        Lifecycle::Active
    }
}

/// A long, escalating delirium.
pub struct Datura;

impl ConditionHandler for Datura {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let d = inst.duration;
        bonus.perception -= 6;
        bonus.dexterity -= 3;
        if actor.has_condition(ConditionKind::Asthma) {
            ctx.message(Tone::Good, "You can breathe again!");
            ops::cure(actor, ctx, ConditionKind::Asthma, None);
        }
        if actor.thirst < 20 && ctx.rng.one_in(8) {
            actor.thirst += 1;
        }
        if d > 1000 && actor.focus >= 1 && ctx.rng.one_in(4) {
            actor.focus -= 1;
        }
        if d > 2000 && ctx.rng.one_in(8) && actor.stim < 20 {
            actor.stim += 1;
        }
        if d > 3000 && actor.focus >= 1 && ctx.rng.one_in(2) {
            actor.focus -= 1;
        }
        if d > 4000 && ctx.rng.one_in(64) {
            let relief = ctx.rng.range(1, 8);
            actor.mod_pain(-relief);
        }
        if !actor.has_effect(Effect::Hallu) && d > 5000 && ctx.rng.one_in(4) {
            actor.add_effect(Effect::Hallu, 3600);
        }
        if d > 6000 && ctx.rng.one_in(128) {
            let relief = ctx.rng.range(3, 24);
            actor.mod_pain(-relief);
            if d > 8000 && ctx.rng.one_in(16) {
                ctx.message(
                    Tone::Bad,
                    "You're experiencing loss of basic motor skills and blurred vision.  \
                     Your mind recoils in horror, unable to communicate with your spinal column.",
                );
                ctx.message(Tone::Bad, "You stagger and fall!");
                let downed = ctx.rng.range(1, 4);
                actor.add_effect(Effect::Downed, downed);
                if ctx.rng.one_in(8) || ops::will_vomit(actor, ctx.rng, 10) {
                    ops::vomit(actor, ctx);
                }
            }
        }
        if d > 7000 && actor.focus >= 1 {
            actor.focus -= 1;
        }
        if d > 8000 && ctx.rng.one_in(256) {
            let visuals = ctx.rng.range(40, 200);
            actor.add_effect(Effect::Visuals, visuals);
            let relief = ctx.rng.range(8, 40);
            actor.mod_pain(-relief);
        }
        if d > 12000 && ctx.rng.one_in(256) {
            ctx.message(Tone::Bad, "There's some kind of big machine in the sky.");
            let visuals = ctx.rng.range(80, 400);
            actor.add_effect(Effect::Visuals, visuals);
            if ctx.rng.one_in(32) {
                ctx.message(Tone::Bad, "It's some kind of electric snake, coming right at you!");
                let pain = ctx.rng.range(4, 40);
                actor.mod_pain(pain);
                ops::vomit(actor, ctx);
            }
        }
        if d > 14000 && ctx.rng.one_in(128) {
            ctx.message(
                Tone::Bad,
                "Order us some golf shoes, otherwise we'll never get out of this place alive.",
            );
            let visuals = ctx.rng.range(400, 2000);
            actor.add_effect(Effect::Visuals, visuals);
            if ctx.rng.one_in(8) {
                ctx.message(Tone::Bad, "The possibility of physical and mental collapse is now very real.");
                if ctx.rng.one_in(2) || ops::will_vomit(actor, ctx.rng, 10) {
                    ctx.message(Tone::Bad, "No one should be asked to handle this trip.");
                    ops::vomit(actor, ctx);
                    let pain = ctx.rng.range(8, 40);
                    actor.mod_pain(pain);
                }
            }
        }
        Lifecycle::Active
    }
}

/// Depressant that slowly bleeds off stimulant level. Used for both
/// xanax and valium.
pub struct Sedative;

impl ConditionHandler for Sedative {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if inst.duration % 25 == 0 && (actor.stim > 0 || ctx.rng.one_in(2)) {
            actor.stim -= 1;
        }
        Lifecycle::Active
    }
}

/// A short rush followed by a longer comedown.
pub struct Adrenaline;

impl ConditionHandler for Adrenaline {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        match inst.duration {
            d if d > 150 => bonus.add_all(5, 3, -8, 1),
            150 => {
                if actor.is_npc {
                    return Lifecycle::Active;
                }
                let text = if actor.has_trait(Trait::MycusDefender) {
                    "We require repose; our fibers are nearly spent..."
                } else {
                    "Your adrenaline rush wears off.  You feel AWFUL!"
                };
                ctx.message(Tone::Bad, text);
            }
            _ => {
                bonus.add_all(-2, 0, -1, -1);
                bonus.hinder_dexterity(ConditionKind::Adrenaline, 1);
            }
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        Some(if inst.duration > 150 { "Adrenaline Rush" } else { "Adrenaline Comedown" }.to_string())
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let text = if inst.duration > 150 {
            "Speed + 40;   Strength + 5;   Dexterity + 3;\nIntelligence - 8;   Perception + 1"
        } else {
            "Speed - 10;   Strength - 2;   Dexterity - 1;   Intelligence - 1;   Perception - 1"
        };
        Some(text.to_string())
    }

    fn speed_modifier(&self, inst: &ConditionInstance) -> i32 {
        if inst.duration > 150 { 40 } else { -10 }
    }

    fn on_gain(&self, actor: &Actor, ctx: &mut TickContext<'_>) {
        if actor.is_npc {
            return;
        }
        let text = if actor.has_trait(Trait::MycusDefender) {
            "Mycal wrath fills our fibers, and we grow turgid."
        } else {
            "You feel a surge of adrenaline!"
        };
        ctx.message(Tone::Good, text);
    }
}

/// Jet injector chemicals.
pub struct Jetinjector;

impl ConditionHandler for Jetinjector {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        match inst.duration {
            d if d > 50 => bonus.add_all(1, 1, 0, 1),
            50 => {
                if !actor.is_npc {
                    ctx.message(
                        Tone::Bad,
                        "The jet injector's chemicals wear off.  You feel AWFUL!",
                    );
                }
            }
            _ => {
                bonus.add_all(-1, 0, -1, -2);
                bonus.hinder_dexterity(ConditionKind::Jetinjector, 2);
            }
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        Some(if inst.duration > 50 { "Chemical Rush" } else { "Chemical Comedown" }.to_string())
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let text = if inst.duration > 50 {
            "Strength + 1;   Dexterity + 1;   Perception + 1"
        } else {
            "Strength - 1;   Dexterity - 2;   Intelligence - 1;   Perception - 2"
        };
        Some(text.to_string())
    }
}

/// An asthma attack. Fatal if it runs too long.
pub struct Asthma;

impl ConditionHandler for Asthma {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if inst.duration > 1200 {
            if !actor.is_npc {
                ctx.message(Tone::Bad, "Your asthma overcomes you.\nYou asphyxiate.");
                ctx.memorial("Succumbed to an asthma attack.");
            }
            actor.hurt_all(500);
        } else if inst.duration > 700 && ctx.rng.one_in(20) && !actor.is_npc {
            ctx.message(Tone::Bad, "You wheeze and gasp for air.");
        }
        bonus.strength -= 2;
        bonus.hinder_dexterity(ConditionKind::Asthma, 3);
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        Some(if inst.duration > 800 { "Heavy Asthma" } else { "Asthma" }.to_string())
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        Some(format!(
            "Speed - {};   Strength - 2;   Dexterity - 3",
            inst.duration / 5
        ))
    }

    fn speed_modifier(&self, inst: &ConditionInstance) -> i32 {
        -(inst.duration / 5)
    }
}

const GRACK_POWER: i32 = 500;

/// Absurd, temporary godhood.
pub struct Grack;

impl ConditionHandler for Grack {
    fn tick(
        &self,
        _actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        bonus.add_all(GRACK_POWER, GRACK_POWER, GRACK_POWER, GRACK_POWER);
        Lifecycle::Active
    }

    fn speed_modifier(&self, _inst: &ConditionInstance) -> i32 {
        20000
    }
}

/// Meth: a high, then a long and ugly comedown.
pub struct Meth;

impl ConditionHandler for Meth {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if inst.duration > 200 {
            bonus.add_all(1, 2, 2, 3);
        } else {
            bonus.add_all(-3, 0, -1, -2);
            bonus.hinder_dexterity(ConditionKind::Meth, 2);
            if ctx.rng.one_in(150) {
                ctx.message(Tone::Bad, "You feel paranoid. They're watching you.");
                actor.mod_pain(1);
                actor.fatigue += ctx.rng.dice(1, 6);
            } else if ctx.rng.one_in(500) {
                ctx.message(
                    Tone::Bad,
                    "You feel like you need less teeth. You pull one out, and it is rotten to the core.",
                );
                actor.mod_pain(1);
            } else if ctx.rng.one_in(500) {
                ctx.message(Tone::Bad, "You notice a large abscess. You pick at it.");
                let regions: Vec<BodyRegion> = BodyRegion::main_regions().collect();
                let pick = ctx.rng.range(0, regions.len() as i32 - 1);
                let region = regions.get(pick as usize).copied();
                if !actor.conditions.has_at(ConditionKind::Formication, region) {
                    ops::inflict(
                        actor,
                        ctx,
                        Infliction::new(ConditionKind::Formication, 600).on(region),
                    );
                }
                actor.mod_pain(1);
            } else if ctx.rng.one_in(500) {
                ctx.message(
                    Tone::Bad,
                    "You feel so sick, like you've been poisoned, but you need more. So much more.",
                );
                ops::vomit(actor, ctx);
                actor.fatigue += ctx.rng.dice(1, 6);
            }
            actor.fatigue += 1;
        }
        if ops::will_vomit(actor, ctx.rng, 2000) {
            ops::vomit(actor, ctx);
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        Some(if inst.duration > 200 { "High on Meth" } else { "Meth Comedown" }.to_string())
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let text = if inst.duration > 200 {
            "Strength + 1;   Dexterity + 2;\nIntelligence + 2;   Perception + 3"
        } else {
            "Strength - 3;   Dexterity - 2;   Intelligence - 1;   Perception - 2"
        };
        Some(text.to_string())
    }

    fn speed_modifier(&self, inst: &ConditionInstance) -> i32 {
        if inst.duration > 600 { 50 } else { -40 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::Bench;
    use crate::rng::FixedRoller;

    #[test]
    fn drunk_penalties_scale_with_duration() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        let (bonus, _) = bench.run(&Drunk, &mut actor, ConditionKind::Drunk, 3000);
        assert_eq!(bonus.strength, -2);
        assert_eq!(bonus.dexterity, -3);
        assert_eq!(bonus.intelligence, -4);
        assert_eq!(bonus.perception, -3);

        let (bonus, _) = bench.run(&Drunk, &mut actor, ConditionKind::Drunk, 500);
        assert_eq!(bonus.strength, 1);
        assert!(bonus.miss_reasons.is_empty());
    }

    #[test]
    fn heavy_drinking_knocks_you_out() {
        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut actor = Actor::new("Test");
        bench.run(&Drunk, &mut actor, ConditionKind::Drunk, 5000);
        assert!(actor.is_asleep());
        assert_eq!(
            actor.conditions.get(ConditionKind::Sleep, None).map(|i| i.duration),
            Some(2500)
        );
        assert!(bench.events.contains_message("You pass out."));
    }

    #[test]
    fn weed_thoughts_depend_on_how_high() {
        let cases = [
            (300, "What if all the air in the world turned to wood? That would be the scariest thing."),
            (110, "The herb reveals you to yourself."),
            (60, "Nobody's here, man."),
        ];
        for (duration, expected) in cases {
            let mut bench = Bench::new(FixedRoller::Low, 7);
            let mut actor = Actor::new("Test");
            let (bonus, _) = bench.run(&WeedHigh, &mut actor, ConditionKind::WeedHigh, duration);
            assert_eq!((bonus.strength, bonus.perception), (-1, -1));
            assert!(bench.events.contains_message(expected), "{duration}: {expected}");
        }

        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        bench.run(&WeedHigh, &mut actor, ConditionKind::WeedHigh, 300);
        assert!(bench.events.is_empty());
    }

    #[test]
    fn drunk_labels() {
        let actor = Actor::new("Test");
        let label = |d| Drunk.label(&ConditionInstance::new(ConditionKind::Drunk, d, 1, None), &actor);
        assert_eq!(label(2500).as_deref(), Some("Wasted"));
        assert_eq!(label(1500).as_deref(), Some("Trashed"));
        assert_eq!(label(801).as_deref(), Some("Drunk"));
        assert_eq!(label(800).as_deref(), Some("Tipsy"));
    }

    #[test]
    fn drunk_description_lists_penalties() {
        let inst = ConditionInstance::new(ConditionKind::Drunk, 3000, 1, None);
        insta::assert_snapshot!(
            Drunk.description(&inst).unwrap_or_default().trim_end(),
            @"Strength - 2;   Dexterity - 3;   Intelligence - 4;   Perception - 3;"
        );
    }

    #[test]
    fn cig_thresholds() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        let (bonus, _) = bench.run(&Cig, &mut actor, ConditionKind::Cig, 100);
        assert_eq!((bonus.intelligence, bonus.perception), (1, 1));
        let (bonus, _) = bench.run(&Cig, &mut actor, ConditionKind::Cig, 600);
        assert_eq!((bonus.strength, bonus.dexterity), (-1, -1));
        assert_eq!(actor.hunger, 0);
    }

    #[test]
    fn datura_clears_asthma() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        actor
            .conditions
            .inflict(ConditionKind::Asthma, 300, 1, None, malady_core::InflictMode::Merge);
        let (bonus, _) = bench.run(&Datura, &mut actor, ConditionKind::Datura, 500);
        assert!(!actor.has_condition(ConditionKind::Asthma));
        assert_eq!((bonus.perception, bonus.dexterity), (-6, -3));
    }

    #[test]
    fn sedatives_drain_stim_on_the_quarter() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        actor.stim = 3;
        bench.run(&Sedative, &mut actor, ConditionKind::Valium, 50);
        assert_eq!(actor.stim, 2);
        bench.run(&Sedative, &mut actor, ConditionKind::Valium, 51);
        assert_eq!(actor.stim, 2);
    }

    #[test]
    fn adrenaline_phases() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        let (bonus, _) = bench.run(&Adrenaline, &mut actor, ConditionKind::Adrenaline, 200);
        assert_eq!((bonus.strength, bonus.dexterity, bonus.intelligence, bonus.perception), (5, 3, -8, 1));
        let (bonus, _) = bench.run(&Adrenaline, &mut actor, ConditionKind::Adrenaline, 150);
        assert!(bonus.is_empty());
        assert!(bench.events.contains_message("Your adrenaline rush wears off.  You feel AWFUL!"));
        let inst = ConditionInstance::new(ConditionKind::Adrenaline, 100, 1, None);
        assert_eq!(Adrenaline.speed_modifier(&inst), -10);
    }

    #[test]
    fn long_asthma_attack_kills() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        bench.run(&Asthma, &mut actor, ConditionKind::Asthma, 1201);
        assert!(actor.is_dead());
        let inst = ConditionInstance::new(ConditionKind::Asthma, 1000, 1, None);
        assert_eq!(Asthma.speed_modifier(&inst), -200);
    }

    #[test]
    fn meth_comedown_grinds_you_down() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        let (bonus, _) = bench.run(&Meth, &mut actor, ConditionKind::Meth, 100);
        assert_eq!(bonus.strength, -3);
        assert_eq!(actor.fatigue, 1);

        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut actor = Actor::new("Test");
        bench.run(&Meth, &mut actor, ConditionKind::Meth, 100);
        assert_eq!(actor.pain, 1);
        assert_eq!(actor.fatigue, 2);
        assert!(bench.events.contains_message("You feel paranoid. They're watching you."));
    }
}
