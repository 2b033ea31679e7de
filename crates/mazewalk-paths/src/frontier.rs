//! The frontier: every candidate route placed so far, kept best-first.

use std::collections::BinaryHeap;

use mazewalk_core::Point;

use crate::candidate::{CandidatePath, PathCost};

/// Stable handle to a frontier entry. Entries are numbered in the order they
/// were placed, and that number breaks ties between equal costs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

impl EntryId {
    /// Position in placement order, starting at zero.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Heap key, ordered by `(cost, id)` so the cheapest and then oldest live
/// entry pops first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct EntryRef {
    cost: u64,
    id: EntryId,
}

impl Ord for EntryRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for EntryRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// All candidate routes known to a search.
///
/// Entries are only ever added. Live entries sit in a min-heap keyed by
/// cost; dead entries drop out of the heap for good but stay in the
/// collection, and always order after every live one.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    entries: Vec<CandidatePath>,
    live: BinaryHeap<EntryRef>,
    dead: Vec<EntryId>,
    taken: Option<EntryId>,
}

impl std::fmt::Debug for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.id.0, self.cost)
    }
}

impl Frontier {
    /// A frontier seeded with the one-node route at `start`.
    pub fn new(start: Point) -> Self {
        let mut frontier = Self::default();
        frontier.push(CandidatePath::new(start));
        frontier
    }

    /// Total number of entries ever placed, dead ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that can still be expanded.
    pub fn live_len(&self) -> usize {
        self.live.len() + usize::from(self.taken.is_some())
    }

    /// Number of dead-ended entries.
    #[inline]
    pub fn dead_len(&self) -> usize {
        self.dead.len()
    }

    /// Place a new entry.
    pub fn push(&mut self, path: CandidatePath) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(path);
        self.file(id);
        id
    }

    /// The entry the next expansion would pick, without taking it.
    pub fn best(&self) -> Option<&CandidatePath> {
        self.live.peek().map(|r| &self.entries[r.id.0])
    }

    /// Take the best live entry out of the ordering for expansion.
    ///
    /// The entry stays in the collection; hand it back with
    /// [`settle`](Self::settle) once it has been mutated. Returns `None`
    /// when no live entry remains.
    pub fn take_best(&mut self) -> Option<EntryId> {
        if let Some(id) = self.taken.take() {
            self.file(id);
        }
        let id = self.live.pop()?.id;
        self.taken = Some(id);
        Some(id)
    }

    /// Mutable access to an entry. Callers must [`settle`](Self::settle) a
    /// taken entry afterwards so a changed cost is re-filed.
    pub(crate) fn get_mut(&mut self, id: EntryId) -> &mut CandidatePath {
        &mut self.entries[id.0]
    }

    /// Access to an entry.
    pub fn get(&self, id: EntryId) -> &CandidatePath {
        &self.entries[id.0]
    }

    /// Re-file an entry taken with [`take_best`](Self::take_best) under its
    /// new cost. Its placement rank is unchanged.
    pub fn settle(&mut self, id: EntryId) {
        if self.taken == Some(id) {
            self.taken = None;
            self.file(id);
        }
    }

    /// Entries in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &CandidatePath> {
        self.entries.iter()
    }

    /// Entries in scheduling order: live ones by ascending cost, ties by
    /// placement, then the dead ones in placement order.
    pub fn ordered(&self) -> Vec<&CandidatePath> {
        let mut ids: Vec<EntryId> = self.entries_by_state(false);
        ids.sort_by_key(|&id| (self.entries[id.0].cost(), id));
        ids.extend(self.entries_by_state(true));
        ids.into_iter().map(|id| &self.entries[id.0]).collect()
    }

    fn entries_by_state(&self, dead: bool) -> Vec<EntryId> {
        if dead {
            let mut ids = self.dead.clone();
            ids.sort();
            ids
        } else {
            self.live.iter().map(|r| r.id).chain(self.taken).collect()
        }
    }

    fn file(&mut self, id: EntryId) {
        match self.entries[id.0].cost() {
            PathCost::Live(cost) => self.live.push(EntryRef { cost, id }),
            PathCost::Dead => self.dead.push(id),
        }
    }
}
