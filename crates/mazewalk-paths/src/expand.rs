//! Advancing a candidate route by one corridor hop.

use mazewalk_core::{Grid, Point};

use crate::candidate::CandidatePath;
use crate::corridor::CorridorScanner;
use crate::cost::Heuristic;
use crate::solver::Revisit;

/// What one expansion step found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// No route has reached the goal yet.
    Continuing,
    /// This route, either the expanded one or one of its branches, ends at
    /// the goal.
    Terminal(CandidatePath),
}

/// The result of [`PathExpander::expand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expanded {
    /// New routes for the alternatives not taken by the expanded route.
    pub siblings: Vec<CandidatePath>,
    pub outcome: Expansion,
    /// Junctions found that already lay on the expanded route.
    pub revisits: usize,
}

impl Expanded {
    fn dead_end(revisits: usize) -> Self {
        Self {
            siblings: Vec::new(),
            outcome: Expansion::Continuing,
            revisits,
        }
    }
}

/// Grows candidate routes hop by hop.
#[derive(Clone, Debug)]
pub struct PathExpander<'a> {
    scanner: CorridorScanner<'a>,
    heuristic: Heuristic,
    revisit: Revisit,
}

impl<'a> PathExpander<'a> {
    pub fn new(grid: &'a Grid, goal: Point, heuristic: Heuristic, revisit: Revisit) -> Self {
        Self {
            scanner: CorridorScanner::new(grid, goal),
            heuristic,
            revisit,
        }
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.scanner.goal()
    }

    /// Advance `path` by one hop.
    ///
    /// The first junction found extends `path` itself; every further one
    /// becomes a sibling branching off the route as it was before this
    /// call. A route with nowhere to go is marked dead. Dead routes are left
    /// untouched.
    ///
    /// Siblings are charged for the hop from the old end of the route. Under
    /// [`Heuristic::Legacy`] the extended route is charged as if it hopped
    /// from its new end, so its horizontal term is always zero and only the
    /// remaining distance to the goal is added.
    pub fn expand(&self, path: &mut CandidatePath) -> Expanded {
        let Some(base) = path.live_cost() else {
            return Expanded::dead_end(0);
        };

        let mut reachable = self.scanner.scan(path.nodes());
        let revisits = reachable.iter().filter(|&&p| path.contains(p)).count();
        if self.revisit == Revisit::Forbid {
            reachable.retain(|&p| !path.contains(p));
        }

        let Some((&first, rest)) = reachable.split_first() else {
            path.mark_dead();
            return Expanded::dead_end(revisits);
        };

        let goal = self.goal();
        let here = path.last();
        let siblings: Vec<CandidatePath> = rest
            .iter()
            .map(|&node| {
                let cost = base.saturating_add(self.heuristic.hop_cost(here, node, goal));
                path.branch(node, cost)
            })
            .collect();
        let origin = match self.heuristic {
            Heuristic::Legacy => first,
            Heuristic::Manhattan => here,
        };
        path.extend_to(first, self.heuristic.hop_cost(origin, first, goal));

        let outcome = if path.ends_at(goal) {
            Expansion::Terminal(path.clone())
        } else {
            siblings
                .iter()
                .find(|s| s.ends_at(goal))
                .cloned()
                .map_or(Expansion::Continuing, Expansion::Terminal)
        };

        Expanded {
            siblings,
            outcome,
            revisits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::PathCost;

    const OPEN_5X5: &str = "\
##.##
#...#
#...#
#...#
##.##";

    fn expander(grid: &Grid) -> PathExpander<'_> {
        PathExpander::new(grid, Point::new(2, 4), Heuristic::Legacy, Revisit::Allow)
    }

    #[test]
    fn first_junction_extends_in_place() {
        let grid = Grid::parse(OPEN_5X5).unwrap();
        let ex = expander(&grid);
        let mut path = CandidatePath::new(Point::new(2, 0));

        let step = ex.expand(&mut path);
        assert!(step.siblings.is_empty());
        assert_eq!(step.outcome, Expansion::Continuing);
        assert_eq!(path.nodes(), &[Point::new(2, 0), Point::new(2, 1)]);
        assert_eq!(path.cost(), PathCost::Live(3));
    }

    #[test]
    fn extra_junctions_become_siblings_from_the_old_prefix() {
        let grid = Grid::parse(OPEN_5X5).unwrap();
        let ex = expander(&grid);
        let mut path = CandidatePath::new(Point::new(2, 0));
        ex.expand(&mut path);

        let step = ex.expand(&mut path);
        assert_eq!(step.outcome, Expansion::Continuing);
        assert_eq!(path.last(), Point::new(3, 1));
        // 3 + |2-3| + |4-1|, without the doubled horizontal step.
        assert_eq!(path.cost(), PathCost::Live(7));

        assert_eq!(step.siblings.len(), 2);
        assert_eq!(
            step.siblings[0].nodes(),
            &[Point::new(2, 0), Point::new(2, 1), Point::new(1, 1)]
        );
        assert_eq!(step.siblings[0].cost(), PathCost::Live(9));
        assert_eq!(
            step.siblings[1].nodes(),
            &[Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)]
        );
        assert_eq!(step.siblings[1].cost(), PathCost::Live(5));
    }

    #[test]
    fn extension_and_siblings_charge_horizontal_hops_differently() {
        // From (2,1) both (3,1) and (1,1) are one step sideways. As the
        // extension (3,1) pays only its remaining distance; as a sibling
        // (1,1) also pays the doubled step.
        let grid = Grid::parse(OPEN_5X5).unwrap();
        let ex = expander(&grid);
        let mut path = CandidatePath::new(Point::new(2, 0));
        path.extend_to(Point::new(2, 1), 3);

        let step = ex.expand(&mut path);
        assert_eq!(path.last(), Point::new(3, 1));
        assert_eq!(path.cost(), PathCost::Live(3 + 4));
        assert_eq!(step.siblings[0].last(), Point::new(1, 1));
        assert_eq!(step.siblings[0].cost(), PathCost::Live(3 + 2 + 4));

        // Manhattan keeps the old end as the origin for both.
        let ex = PathExpander::new(&grid, Point::new(2, 4), Heuristic::Manhattan, Revisit::Allow);
        let mut path = CandidatePath::new(Point::new(2, 0));
        path.extend_to(Point::new(2, 1), 0);
        let step = ex.expand(&mut path);
        assert_eq!(path.cost(), PathCost::Live(2));
        assert_eq!(step.siblings[0].cost(), PathCost::Live(2));
    }

    #[test]
    fn sibling_reaching_goal_is_terminal() {
        let grid = Grid::parse(OPEN_5X5).unwrap();
        let ex = expander(&grid);
        let mut path = CandidatePath::new(Point::new(2, 0));
        // Hand-build the route down the middle column.
        path.extend_to(Point::new(2, 1), 3);
        path.extend_to(Point::new(2, 2), 2);
        path.extend_to(Point::new(2, 3), 1);

        let step = ex.expand(&mut path);
        assert_eq!(path.last(), Point::new(3, 3));
        assert_eq!(step.siblings.len(), 2);
        let Expansion::Terminal(done) = step.outcome else {
            panic!("expected the goal to be reached");
        };
        assert_eq!(done.last(), Point::new(2, 4));
        assert_eq!(done.len(), 5);
        assert_eq!(done, step.siblings[1]);
    }

    #[test]
    fn extended_route_reaching_goal_is_terminal() {
        let grid = Grid::parse("##.##\n##.##\n##.##").unwrap();
        let ex = PathExpander::new(&grid, Point::new(2, 2), Heuristic::Legacy, Revisit::Allow);
        let mut path = CandidatePath::new(Point::new(2, 0));
        let step = ex.expand(&mut path);
        assert_eq!(step.outcome, Expansion::Terminal(path.clone()));
        assert_eq!(path.cost(), PathCost::Live(0));
    }

    #[test]
    fn dead_end_marks_route_dead() {
        let grid = Grid::parse("##.##\n##.##\n#####\n##.##").unwrap();
        let ex = PathExpander::new(&grid, Point::new(2, 3), Heuristic::Legacy, Revisit::Allow);
        let mut path = CandidatePath::new(Point::new(2, 0));
        let step = ex.expand(&mut path);
        assert!(path.is_dead());
        assert!(step.siblings.is_empty());
        assert_eq!(step.outcome, Expansion::Continuing);

        // Expanding again changes nothing.
        let again = ex.expand(&mut path);
        assert!(again.siblings.is_empty());
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn forbid_drops_junctions_already_on_the_route() {
        // A 2x2 loop of open cells: (1,1)->(2,1)->(2,2)->(1,2)->(1,1).
        let grid = Grid::parse(
            "\
#.###
#..##
#..##
#####
###.#",
        )
        .unwrap();
        let goal = Point::new(3, 4);
        let route = [Point::new(1, 1), Point::new(2, 1), Point::new(2, 2), Point::new(1, 2)];

        let mut allowed = CandidatePath::new(Point::new(1, 0));
        let mut forbidden = CandidatePath::new(Point::new(1, 0));
        for &p in &route {
            allowed.extend_to(p, 1);
            forbidden.extend_to(p, 1);
        }

        let allow = PathExpander::new(&grid, goal, Heuristic::Legacy, Revisit::Allow);
        let step = allow.expand(&mut allowed);
        assert_eq!(step.revisits, 1);
        assert_eq!(allowed.last(), Point::new(1, 1));

        let forbid = PathExpander::new(&grid, goal, Heuristic::Legacy, Revisit::Forbid);
        let step = forbid.expand(&mut forbidden);
        assert_eq!(step.revisits, 1);
        assert!(forbidden.is_dead());
    }
}
