use std::collections::HashSet;

use malady_core::{Actor, Position};
use serde::Deserialize;

/// Monster groups a condition can call in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterGroup {
    /// Things from beyond.
    Nether,
}

/// Everything a condition handler needs to know about, or do to, the
/// surroundings.
pub trait World {
    /// Ambient light at `pos`.
    fn light_level(&self, pos: Position) -> i32;

    /// Whether `pos` is in direct sunlight.
    fn is_in_sunlight(&self, pos: Position) -> bool;

    /// Make a noise. Returns `true` if anyone who matters heard it.
    fn sound(&mut self, pos: Position, volume: i32, description: &str) -> bool;

    /// Try to spawn a monster. Returns `true` on success.
    fn spawn_monster(&mut self, group: MonsterGroup, pos: Position) -> bool;

    /// Whether something already stands at `pos`.
    fn is_occupied(&self, pos: Position) -> bool;

    /// Pick a teleport destination for something standing at `from`.
    fn teleport(&mut self, from: Position) -> Position;

    /// Interrupt whatever the actor was doing.
    fn cancel_activity(&mut self);

    /// Whether the player can see `pos`.
    fn can_see(&self, pos: Position) -> bool;

    /// How comfortable the bedding at `pos` is.
    fn sleep_comfort(&self, _pos: Position) -> i32 {
        0
    }

    /// A dream for a mutation category at the given strength.
    fn category_dream(&self, _category: &str, _strength: i32) -> Option<String> {
        None
    }

    /// Apply a random mutation.
    fn mutate(&mut self, _actor: &mut Actor) {}
}

const DEFAULT_MAX_RECORDS: usize = 256;

fn keep_latest<T>(records: &mut Vec<T>, max: usize) {
    if max > 0 && records.len() > max {
        let excess = records.len() - max;
        records.drain(..excess);
    }
}

/// A fixed, inspectable [`World`].
///
/// Settings come from scenario files; everything the conditions do to the
/// world is recorded for later inspection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticWorld {
    /// Light everywhere.
    pub light_level: i32,
    /// Whether everything is sunlit.
    pub sunlight: bool,
    /// Bed comfort everywhere.
    pub comfort: i32,
    /// Whether sounds are heard.
    pub hearing: bool,
    /// Whether the player sees everything.
    pub visible: bool,
    /// Whether category dreams are available.
    pub dreams: bool,
    /// Where teleports land, relative to the origin.
    pub teleport_offset: (i32, i32),
    /// How many sounds and spawns to remember (0 = unlimited). The oldest
    /// go first.
    pub max_records: usize,
    #[serde(skip)]
    occupied: HashSet<Position>,
    #[serde(skip)]
    sounds: Vec<(Position, i32, String)>,
    #[serde(skip)]
    spawned: Vec<(MonsterGroup, Position)>,
    #[serde(skip)]
    interruptions: u32,
    #[serde(skip)]
    mutations: u32,
}

impl Default for StaticWorld {
    fn default() -> Self {
        Self {
            light_level: 0,
            sunlight: false,
            comfort: 0,
            hearing: true,
            visible: true,
            dreams: true,
            teleport_offset: (10, 10),
            max_records: DEFAULT_MAX_RECORDS,
            occupied: HashSet::new(),
            sounds: Vec::new(),
            spawned: Vec::new(),
            interruptions: 0,
            mutations: 0,
        }
    }
}

impl StaticWorld {
    /// A dark, quiet world with neutral bedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the light level.
    pub fn with_light(mut self, level: i32) -> Self {
        self.light_level = level;
        self
    }

    /// Set whether sounds are heard.
    pub fn with_hearing(mut self, hearing: bool) -> Self {
        self.hearing = hearing;
        self
    }

    /// Set bed comfort.
    pub fn with_comfort(mut self, comfort: i32) -> Self {
        self.comfort = comfort;
        self
    }

    /// Mark a tile occupied.
    pub fn occupy(&mut self, pos: Position) {
        self.occupied.insert(pos);
    }

    /// Sounds made so far.
    pub fn sounds(&self) -> &[(Position, i32, String)] {
        &self.sounds
    }

    /// Monsters spawned so far.
    pub fn spawned(&self) -> &[(MonsterGroup, Position)] {
        &self.spawned
    }

    /// Forget the recorded sounds and spawns. Occupied tiles stay occupied.
    pub fn clear_records(&mut self) {
        self.sounds.clear();
        self.spawned.clear();
    }

    /// How often an activity was cancelled.
    pub fn interruptions(&self) -> u32 {
        self.interruptions
    }

    /// How many mutations were applied.
    pub fn mutations(&self) -> u32 {
        self.mutations
    }
}

impl World for StaticWorld {
    fn light_level(&self, _pos: Position) -> i32 {
        self.light_level
    }

    fn is_in_sunlight(&self, _pos: Position) -> bool {
        self.sunlight
    }

    fn sound(&mut self, pos: Position, volume: i32, description: &str) -> bool {
        self.sounds.push((pos, volume, description.to_string()));
        keep_latest(&mut self.sounds, self.max_records);
        self.hearing
    }

    fn spawn_monster(&mut self, group: MonsterGroup, pos: Position) -> bool {
        if self.occupied.contains(&pos) {
            return false;
        }
        self.occupied.insert(pos);
        self.spawned.push((group, pos));
        keep_latest(&mut self.spawned, self.max_records);
        true
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.occupied.contains(&pos)
    }

    fn teleport(&mut self, from: Position) -> Position {
        from.offset(self.teleport_offset.0, self.teleport_offset.1)
    }

    fn cancel_activity(&mut self) {
        self.interruptions += 1;
    }

    fn can_see(&self, _pos: Position) -> bool {
        self.visible
    }

    fn sleep_comfort(&self, _pos: Position) -> i32 {
        self.comfort
    }

    fn category_dream(&self, category: &str, strength: i32) -> Option<String> {
        if !self.dreams {
            return None;
        }
        let vividness = match strength {
            1 => "faintly",
            2 => "clearly",
            _ => "vividly",
        };
        Some(format!("You dream {vividness} of your {category} nature."))
    }

    fn mutate(&mut self, _actor: &mut Actor) {
        self.mutations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_respects_occupancy() {
        let mut world = StaticWorld::new();
        let pos = Position::new(3, 4);
        assert!(world.spawn_monster(MonsterGroup::Nether, pos));
        assert!(world.is_occupied(pos));
        assert!(!world.spawn_monster(MonsterGroup::Nether, pos));
        assert_eq!(world.spawned().len(), 1);
    }

    #[test]
    fn sounds_are_recorded_even_when_unheard() {
        let mut world = StaticWorld::new().with_hearing(false);
        assert!(!world.sound(Position::default(), 12, "beep"));
        assert_eq!(world.sounds().len(), 1);
    }

    #[test]
    fn records_keep_only_the_latest() {
        let mut world = StaticWorld {
            max_records: 3,
            ..StaticWorld::new()
        };
        for volume in 0..10 {
            world.sound(Position::default(), volume, "cough");
            world.spawn_monster(MonsterGroup::Nether, Position::new(volume, 0));
        }
        let volumes: Vec<i32> = world.sounds().iter().map(|s| s.1).collect();
        assert_eq!(volumes, vec![7, 8, 9]);
        assert_eq!(world.spawned().len(), 3);
        assert_eq!(world.spawned()[0].1, Position::new(7, 0));

        world.clear_records();
        assert!(world.sounds().is_empty());
        assert!(world.spawned().is_empty());
        assert!(world.is_occupied(Position::new(0, 0)));
    }

    #[test]
    fn deserializes_scenario_block() {
        let world: StaticWorld =
            serde_json::from_str(r#"{"light_level": 40, "sunlight": true, "comfort": 3}"#)
                .expect("valid world");
        assert_eq!(world.light_level(Position::default()), 40);
        assert!(world.is_in_sunlight(Position::default()));
        assert_eq!(world.sleep_comfort(Position::default()), 3);
        assert!(world.hearing);
    }
}
