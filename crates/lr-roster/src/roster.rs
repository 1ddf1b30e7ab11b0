//! Roster storage: `Roster` (rider records) and `RiderRngs` (per-rider RNG).
//!
//! # Why two structs?
//!
//! The provider phase needs `&mut RiderRngs` (each automated rider's RNG)
//! while the provider reads the board and the roster.  Keeping the RNGs out
//! of `Roster` lets the round controller hand out both borrows at once:
//!
//! ```ignore
//! let roster: &Roster = &round.roster;
//! for (id, rng) in round.rngs.iter_mut() {
//!     provider.next_step(id, &view_for(roster, id), rng);
//! }
//! ```

use std::collections::BTreeMap;

use lr_core::{AgentId, RiderRng, StartPose};

use crate::{InputBinding, Rider, RiderKind};

// ── RiderRngs ─────────────────────────────────────────────────────────────────

/// Per-rider deterministic RNG state keyed by `AgentId`.
///
/// A `BTreeMap` keeps iteration in ascending id order, which is the order the
/// round applies provider answers in.
pub struct RiderRngs {
    seed:  u64,
    inner: BTreeMap<AgentId, RiderRng>,
}

impl RiderRngs {
    /// An empty set seeded from `global_seed`.
    pub fn new(global_seed: u64) -> Self {
        Self { seed: global_seed, inner: BTreeMap::new() }
    }

    /// Seed an RNG for every rider in `roster`.
    pub fn for_roster(global_seed: u64, roster: &Roster) -> Self {
        let mut rngs = Self::new(global_seed);
        for id in roster.ids() {
            rngs.insert(id);
        }
        rngs
    }

    /// Seed an RNG for `agent` unless it already has one.
    pub fn insert(&mut self, agent: AgentId) {
        let seed = self.seed;
        self.inner
            .entry(agent)
            .or_insert_with(|| RiderRng::new(seed, agent));
    }

    pub fn remove(&mut self, agent: AgentId) -> Option<RiderRng> {
        self.inner.remove(&agent)
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut RiderRng> {
        self.inner.get_mut(&agent)
    }

    /// Disjoint mutable references in ascending id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut RiderRng)> + '_ {
        self.inner.iter_mut().map(|(&id, rng)| (id, rng))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Every rider taking part in the next (or current) round.
///
/// Riders are kept in ascending id order; ids come from a counter that starts
/// at 1 and is never rewound, so removals leave gaps rather than reusing ids.
#[derive(Clone, Debug)]
pub struct Roster {
    riders:  Vec<Rider>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self { riders: Vec::new(), next_id: 1 }
    }

    /// Append a rider and return its freshly allocated id.
    pub fn add(&mut self, kind: RiderKind, binding: Option<InputBinding>) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.riders.push(Rider::new(id, kind, binding));
        id
    }

    /// Remove and return a rider; `None` if the id is unknown.
    pub fn remove(&mut self, id: AgentId) -> Option<Rider> {
        let idx = self.position_of(id)?;
        Some(self.riders.remove(idx))
    }

    #[inline]
    fn position_of(&self, id: AgentId) -> Option<usize> {
        self.riders.binary_search_by_key(&id, |r| r.id).ok()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn get(&self, id: AgentId) -> Option<&Rider> {
        self.position_of(id).map(|i| &self.riders[i])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Rider> {
        self.position_of(id).map(move |i| &mut self.riders[i])
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.position_of(id).is_some()
    }

    /// The rider bound to `binding`, if any.
    pub fn find_by_binding(&self, binding: &str) -> Option<AgentId> {
        self.riders
            .iter()
            .find(|r| r.binding.as_ref().is_some_and(|b| b.as_str() == binding))
            .map(|r| r.id)
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    pub fn iter(&self) -> impl Iterator<Item = &Rider> + '_ {
        self.riders.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Rider> + '_ {
        self.riders.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.riders.iter().map(|r| r.id)
    }

    pub fn as_slice(&self) -> &[Rider] {
        &self.riders
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.riders.iter().filter(|r| r.alive).count()
    }

    /// Ids of riders still alive, ascending.
    pub fn live_ids(&self) -> Vec<AgentId> {
        self.riders.iter().filter(|r| r.alive).map(|r| r.id).collect()
    }

    // ── Round preparation ─────────────────────────────────────────────────

    /// Move riders onto `poses`, in roster order.
    ///
    /// Extra poses are ignored; riders without a pose keep their old one.
    pub fn place(&mut self, poses: &[StartPose]) {
        for (rider, pose) in self.riders.iter_mut().zip(poses) {
            rider.position = pose.pos;
            rider.heading  = pose.heading;
        }
    }

    pub fn revive_all(&mut self) {
        for rider in &mut self.riders {
            rider.alive = true;
        }
    }

    pub fn reset_scores(&mut self) {
        for rider in &mut self.riders {
            rider.score = 0;
        }
    }
}
