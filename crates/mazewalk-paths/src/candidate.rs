use std::fmt;

use mazewalk_core::Point;

/// Accumulated cost of a candidate route.
///
/// The derived ordering puts every `Live` cost, in ascending order, ahead
/// of `Dead`, which is exactly the order the frontier is kept in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCost {
    /// Still expandable, with the sum of its hop costs so far.
    Live(u64),
    /// Dead-ended: the last scan found nowhere to go. Never expanded again.
    Dead,
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live(c) => write!(f, "{c}"),
            Self::Dead => f.write_str("dead"),
        }
    }
}

/// A route from the start through a sequence of junction nodes.
///
/// Each candidate owns its node list outright. Branching copies the prefix
/// once, after which the parent and the branch evolve independently.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidatePath {
    nodes: Vec<Point>,
    cost: PathCost,
}

impl CandidatePath {
    /// A fresh route holding only the start node, at cost zero.
    pub fn new(start: Point) -> Self {
        Self {
            nodes: vec![start],
            cost: PathCost::Live(0),
        }
    }

    /// Junction nodes from the start to the current end.
    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// The node the route currently ends at.
    #[inline]
    pub fn last(&self) -> Point {
        // Constructors always seed the start node and nodes are never popped.
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of junction nodes, start included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a route holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn cost(&self) -> PathCost {
        self.cost
    }

    /// The accumulated cost, or `None` once dead.
    #[inline]
    pub fn live_cost(&self) -> Option<u64> {
        match self.cost {
            PathCost::Live(c) => Some(c),
            PathCost::Dead => None,
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.cost == PathCost::Dead
    }

    /// Whether the route ends at `p`.
    #[inline]
    pub fn ends_at(&self, p: Point) -> bool {
        self.last() == p
    }

    /// Whether `p` already appears anywhere on the route.
    pub fn contains(&self, p: Point) -> bool {
        self.nodes.contains(&p)
    }

    /// Consume the route, keeping its nodes.
    pub fn into_nodes(self) -> Vec<Point> {
        self.nodes
    }

    pub(crate) fn mark_dead(&mut self) {
        self.cost = PathCost::Dead;
    }

    /// Append `node`, adding `hop` to the running cost. Dead routes stay dead.
    pub(crate) fn extend_to(&mut self, node: Point, hop: u64) {
        self.nodes.push(node);
        if let PathCost::Live(c) = self.cost {
            self.cost = PathCost::Live(c.saturating_add(hop));
        }
    }

    /// Copy of this route with `node` appended at total cost `cost`.
    pub(crate) fn branch(&self, node: Point, cost: u64) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self {
            nodes,
            cost: PathCost::Live(cost),
        }
    }
}

impl fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} [", self.cost)?;
        for (i, p) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]}")
    }
}
