use std::fmt;
use std::sync::OnceLock;

use malady_core::{Actor, ConditionInstance, ConditionKind};

use crate::event::Tone;
use crate::handler::ConditionHandler;
use crate::handlers;

/// Labels are cut to this many characters.
pub const MAX_LABEL_LEN: usize = 26;

/// Static text attached to a condition kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descriptor {
    /// Status name, or `None` for conditions the actor is not told about.
    pub name: Option<&'static str>,
    /// Fallback description.
    pub summary: &'static str,
    /// Message shown when the condition is gained.
    pub gain_message: Option<(Tone, &'static str)>,
    /// Memorial recorded when the condition is gained.
    pub gain_memorial: Option<&'static str>,
    /// Message shown when the condition ends or is cured.
    pub end_message: Option<&'static str>,
    /// Memorial recorded when the condition ends or is cured.
    pub removal_memorial: Option<&'static str>,
}

struct Entry {
    handler: Option<Box<dyn ConditionHandler>>,
    descriptor: Descriptor,
}

/// Registry of handlers and descriptors, indexed by [`ConditionKind::tag`].
///
/// Built once and read-only afterwards. Kinds without a handler are valid
/// and simply do nothing when ticked.
pub struct Catalog {
    entries: Vec<Entry>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("kinds", &self.entries.len())
            .field(
                "handlers",
                &self.entries.iter().filter(|e| e.handler.is_some()).count(),
            )
            .finish()
    }
}

impl Catalog {
    /// The shared built-in catalog.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::standard)
    }

    /// A fresh catalog with every built-in handler registered.
    pub fn standard() -> Self {
        let entries = ConditionKind::all()
            .map(|kind| Entry {
                handler: handlers::builtin(kind),
                descriptor: descriptor(kind),
            })
            .collect();
        Self { entries }
    }

    /// Replace the handler for `kind`.
    pub fn with_handler(mut self, kind: ConditionKind, handler: impl ConditionHandler + 'static) -> Self {
        self.entries[kind.tag()].handler = Some(Box::new(handler));
        self
    }

    /// The handler for `kind`, if one is registered.
    pub fn handler(&self, kind: ConditionKind) -> Option<&dyn ConditionHandler> {
        self.entries[kind.tag()].handler.as_deref()
    }

    /// Whether `kind` has a handler.
    pub fn is_registered(&self, kind: ConditionKind) -> bool {
        self.handler(kind).is_some()
    }

    /// Static text for `kind`.
    pub fn descriptor(&self, kind: ConditionKind) -> &Descriptor {
        &self.entries[kind.tag()].descriptor
    }

    /// Display name, falling back to the key for unnamed kinds.
    pub fn name(&self, kind: ConditionKind) -> &'static str {
        self.descriptor(kind).name.unwrap_or(kind.key())
    }

    /// Status label, at most [`MAX_LABEL_LEN`] characters. Empty for
    /// conditions the actor is not told about.
    pub fn label(&self, inst: &ConditionInstance, actor: &Actor) -> String {
        let label = self
            .handler(inst.kind)
            .and_then(|h| h.label(inst, actor))
            .or_else(|| self.descriptor(inst.kind).name.map(str::to_string))
            .unwrap_or_default();
        label.chars().take(MAX_LABEL_LEN).collect()
    }

    /// Description with current numbers filled in.
    pub fn description(&self, inst: &ConditionInstance) -> String {
        self.handler(inst.kind)
            .and_then(|h| h.description(inst))
            .unwrap_or_else(|| self.descriptor(inst.kind).summary.to_string())
    }

    /// Speed delta of one instance.
    pub fn speed_modifier(&self, inst: &ConditionInstance) -> i32 {
        self.handler(inst.kind)
            .map_or(0, |h| h.speed_modifier(inst))
    }
}

fn descriptor(kind: ConditionKind) -> Descriptor {
    use ConditionKind as K;
    let d = Descriptor::default();
    match kind {
        K::CommonCold => Descriptor {
            name: Some("Common Cold"),
            summary: "Increased thirst;   Frequent coughing\n\
                      Strength - 3;   Dexterity - 1;   Intelligence - 2;   Perception - 1\n\
                      Symptoms alleviated by medication (cough syrup).",
            gain_message: Some((Tone::Bad, "You feel a cold coming on...")),
            gain_memorial: Some("Caught a cold."),
            removal_memorial: Some("Got over the cold."),
            ..d
        },
        K::Flu => Descriptor {
            name: Some("Influenza"),
            summary: "Increased thirst;   Frequent coughing;   Occasional vomiting\n\
                      Strength - 4;   Dexterity - 2;   Intelligence - 2;   Perception - 1\n\
                      Symptoms alleviated by medication (cough syrup).",
            gain_message: Some((Tone::Bad, "You feel a flu coming on...")),
            gain_memorial: Some("Caught the flu."),
            removal_memorial: Some("Got over the flu."),
            ..d
        },
        K::Crushed => Descriptor {
            gain_message: Some((Tone::Bad, "The ceiling collapses on you!")),
            ..d
        },
        K::LyingDown => Descriptor {
            gain_message: Some((Tone::Neutral, "You lie down to go to sleep...")),
            ..d
        },
        K::Sleep => Descriptor {
            end_message: Some("You wake up."),
            ..d
        },
        K::Formication => Descriptor {
            summary: "You stop to scratch yourself frequently; high intelligence helps you resist\n\
                      this urge.",
            gain_message: Some((Tone::Bad, "Your skin feels extremely itchy!")),
            ..d
        },
        K::Drunk | K::High | K::WeedHigh => Descriptor {
            name: match kind {
                K::High => Some("High"),
                _ => None,
            },
            summary: match kind {
                K::High => "Intelligence - 1;   Perception - 1",
                _ => "",
            },
            gain_message: Some((Tone::Warning, "You feel lightheaded.")),
            ..d
        },
        K::Cig => Descriptor {
            name: Some("Nicotine"),
            ..d
        },
        K::Datura => Descriptor {
            name: Some("Experiencing Datura"),
            summary: "Buy the ticket, take the ride.  The datura has you now.",
            ..d
        },
        K::Jetinjector => Descriptor {
            gain_message: Some((
                Tone::Neutral,
                "You feel a rush as the chemicals flow through your body!",
            )),
            ..d
        },
        K::Asthma => Descriptor {
            gain_message: Some((Tone::Bad, "You can't breathe... asthma attack!")),
            ..d
        },
        K::Grack => Descriptor {
            name: Some("RELEASE THE GRACKEN!!!!"),
            summary: "Unleashed the Gracken.",
            ..d
        },
        K::Amigara => Descriptor {
            gain_message: Some((Tone::Bad, "You can't look away from the faultline...")),
            ..d
        },
        K::StemcellTreatment => Descriptor {
            name: Some("Stem cell treatment"),
            summary: "Your insides are shifting in strange ways as the treatment takes effect.",
            gain_message: Some((
                Tone::Good,
                "You receive a pureed bone & enamel injection into your eyeball.",
            )),
            ..d
        },
        K::Bite => Descriptor {
            summary: "You have a nasty bite wound.",
            gain_message: Some((Tone::Bad, "The bite wound feels really deep...")),
            gain_memorial: Some("Received a deep bite wound."),
            removal_memorial: Some("Recovered from a bite wound."),
            ..d
        },
        K::Infected => Descriptor {
            summary: "You have an infected wound.",
            gain_message: Some((Tone::Bad, "Your bite wound feels infected.")),
            gain_memorial: Some("Contracted an infection."),
            removal_memorial: Some("Recovered from an infection... this time."),
            ..d
        },
        K::Recover => Descriptor {
            name: Some("Recovering From Infection"),
            summary: "You are recovering from an infection.",
            ..d
        },
        K::LackSleep => Descriptor {
            name: Some("Lacking Sleep"),
            summary: "You haven't slept in a while, and it shows.\n\
                      You can't move as quickly and your stats just aren't where they should be.",
            gain_message: Some((Tone::Warning, "You are too tired to function well.")),
            ..d
        },
        K::Grabbed => Descriptor {
            name: Some("Grabbed"),
            summary: "You have been grabbed by an attacker.\n\
                      You cannot dodge and blocking is very difficult.",
            gain_message: Some((Tone::Bad, "You have been grabbed.")),
            ..d
        },
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use malady_core::BodyRegion;

    #[test]
    fn every_kind_has_an_entry() {
        let catalog = Catalog::standard();
        for kind in ConditionKind::all() {
            let _ = catalog.descriptor(kind);
        }
    }

    #[test]
    fn catalog_only_kinds_have_no_handler() {
        let catalog = Catalog::global();
        for kind in [
            ConditionKind::TookProzac,
            ConditionKind::Amigara,
            ConditionKind::AskedToTrain,
            ConditionKind::AskedPersonalInfo,
        ] {
            assert!(!catalog.is_registered(kind), "{kind:?}");
        }
        assert!(catalog.is_registered(ConditionKind::Bite));
        assert!(catalog.is_registered(ConditionKind::Sleep));
        assert!(catalog.is_registered(ConditionKind::AlarmClock));
    }

    #[test]
    fn labels_fit_the_status_column() {
        let catalog = Catalog::global();
        let actor = Actor::new("Test");
        for kind in ConditionKind::all() {
            for duration in [1, 100, 1000, 5000, 20000] {
                for intensity in 1..=3 {
                    let inst = ConditionInstance::new(kind, duration, intensity, Some(BodyRegion::HandR));
                    assert!(catalog.label(&inst, &actor).chars().count() <= MAX_LABEL_LEN);
                }
            }
        }
    }

    #[test]
    fn sleep_ends_with_wake_message() {
        let d = Catalog::global().descriptor(ConditionKind::Sleep);
        assert_eq!(d.end_message, Some("You wake up."));
        assert_eq!(Catalog::global().name(ConditionKind::Sleep), "sleep");
    }
}
