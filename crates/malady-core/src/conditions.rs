use serde::{Deserialize, Serialize};

use crate::body::BodyRegion;
use crate::condition::{ConditionInstance, ConditionKey, ConditionKind};

/// Whether an inflict merged into an existing instance or replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InflictMode {
    /// Add duration and intensity to an existing instance.
    #[default]
    Merge,
    /// Overwrite an existing instance outright.
    Replace,
}

/// What an inflict did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inflicted {
    /// No instance with this key existed; a new one was inserted.
    Added,
    /// An existing instance absorbed the new one.
    Merged,
    /// An existing instance was overwritten.
    Replaced,
    /// A later wound stage already holds the region; nothing changed.
    Superseded,
}

/// One entry of a key snapshot taken before a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// The instance's key.
    pub key: ConditionKey,
    /// The serial it had when the snapshot was taken.
    pub serial: u64,
}

/// The conditions active on one actor, in insertion order.
///
/// Keys are unique: singleton kinds appear at most once, region-scoped kinds
/// at most once per region, and at most one wound-chain kind per region.
/// A wound-chain kind evicts earlier stages on its region and is refused
/// when a later stage is already there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ConditionInstance>", into = "Vec<ConditionInstance>")]
pub struct ConditionSet {
    instances: Vec<ConditionInstance>,
    next_serial: u64,
}

impl From<Vec<ConditionInstance>> for ConditionSet {
    fn from(list: Vec<ConditionInstance>) -> Self {
        let mut set = Self::default();
        for inst in list {
            set.insert(inst, InflictMode::Merge);
        }
        set
    }
}

impl From<ConditionSet> for Vec<ConditionInstance> {
    fn from(set: ConditionSet) -> Self {
        set.instances
    }
}

impl ConditionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition. Singleton kinds ignore `region`.
    pub fn inflict(
        &mut self,
        kind: ConditionKind,
        duration: i32,
        intensity: i32,
        region: Option<BodyRegion>,
        mode: InflictMode,
    ) -> Inflicted {
        self.insert(
            ConditionInstance::new(kind, duration, intensity, region),
            mode,
        )
    }

    /// Insert a prepared instance under the merge rules.
    pub fn insert(&mut self, mut incoming: ConditionInstance, mode: InflictMode) -> Inflicted {
        let key = ConditionKey::new(incoming.kind, incoming.region);
        incoming.region = key.region;
        incoming.duration = incoming.duration.max(0);
        incoming.intensity = incoming.kind.clamp_intensity(incoming.intensity);

        if let Some(stage) = key.kind.wound_stage() {
            let on_region = |i: &ConditionInstance| i.region == key.region && i.kind != key.kind;
            if self
                .instances
                .iter()
                .any(|i| on_region(i) && i.kind.wound_stage() > Some(stage))
            {
                return Inflicted::Superseded;
            }
            self.instances
                .retain(|i| !(on_region(i) && i.kind.is_wound_chain()));
        }

        let serial = self.bump_serial();
        match self.position(key) {
            Some(idx) => match mode {
                InflictMode::Merge => {
                    let existing = &mut self.instances[idx];
                    existing.duration = existing.duration.saturating_add(incoming.duration).max(0);
                    existing.add_intensity(incoming.intensity);
                    if incoming.aux.is_some() {
                        existing.aux = incoming.aux;
                    }
                    Inflicted::Merged
                }
                InflictMode::Replace => {
                    incoming.serial = serial;
                    self.instances[idx] = incoming;
                    Inflicted::Replaced
                }
            },
            None => {
                incoming.serial = serial;
                self.instances.push(incoming);
                Inflicted::Added
            }
        }
    }

    fn bump_serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }

    fn position(&self, key: ConditionKey) -> Option<usize> {
        self.instances.iter().position(|i| i.key() == key)
    }

    /// Remove the instance with this key.
    pub fn remove(&mut self, kind: ConditionKind, region: Option<BodyRegion>) -> Option<ConditionInstance> {
        let idx = self.position(ConditionKey::new(kind, region))?;
        Some(self.instances.remove(idx))
    }

    /// Remove every instance of `kind`, across all regions.
    pub fn remove_kind(&mut self, kind: ConditionKind) -> Vec<ConditionInstance> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.instances)
            .into_iter()
            .partition(|i| i.kind == kind);
        self.instances = kept;
        removed
    }

    /// Look up the instance with this key.
    pub fn get(&self, kind: ConditionKind, region: Option<BodyRegion>) -> Option<&ConditionInstance> {
        let key = ConditionKey::new(kind, region);
        self.instances.iter().find(|i| i.key() == key)
    }

    /// Mutable lookup.
    pub fn get_mut(
        &mut self,
        kind: ConditionKind,
        region: Option<BodyRegion>,
    ) -> Option<&mut ConditionInstance> {
        let key = ConditionKey::new(kind, region);
        self.instances.iter_mut().find(|i| i.key() == key)
    }

    /// Any instance of `kind`, on any region.
    pub fn has(&self, kind: ConditionKind) -> bool {
        self.instances.iter().any(|i| i.kind == kind)
    }

    /// An instance of `kind` on exactly `region`.
    pub fn has_at(&self, kind: ConditionKind, region: Option<BodyRegion>) -> bool {
        self.get(kind, region).is_some()
    }

    /// Longest remaining duration among instances of `kind`.
    pub fn longest_duration(&self, kind: ConditionKind) -> Option<i32> {
        self.instances
            .iter()
            .filter(|i| i.kind == kind)
            .map(|i| i.duration)
            .max()
    }

    /// Snapshot of every key with its current serial, in collection order.
    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.instances
            .iter()
            .map(|i| SnapshotEntry {
                key: i.key(),
                serial: i.serial,
            })
            .collect()
    }

    /// Copy out the instance the snapshot entry refers to, if it is still
    /// the same insertion.
    pub fn checkout(&self, entry: &SnapshotEntry) -> Option<ConditionInstance> {
        self.instances
            .iter()
            .find(|i| i.key() == entry.key && i.serial == entry.serial)
            .cloned()
    }

    /// Write a checked-out instance back. Returns `false` and drops the
    /// write if the original was removed or replaced meanwhile.
    pub fn commit(&mut self, inst: ConditionInstance) -> bool {
        let key = inst.key();
        match self
            .instances
            .iter_mut()
            .find(|i| i.key() == key && i.serial == inst.serial)
        {
            Some(slot) => {
                slot.duration = inst.duration.max(0);
                slot.intensity = inst.kind.clamp_intensity(inst.intensity);
                slot.aux = inst.aux;
                true
            }
            None => false,
        }
    }

    /// Remove the instance a snapshot entry refers to, if it is still the
    /// same insertion.
    pub fn remove_entry(&mut self, entry: &SnapshotEntry) -> Option<ConditionInstance> {
        let idx = self
            .instances
            .iter()
            .position(|i| i.key() == entry.key && i.serial == entry.serial)?;
        Some(self.instances.remove(idx))
    }

    /// Iterate in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &ConditionInstance> {
        self.instances.iter()
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// `true` when nothing is active.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
