//! Hop costs used to order the frontier.

use mazewalk_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// How the cost of one corridor hop is estimated.
///
/// The search orders candidates by the sum of their hop costs, so the
/// choice here decides both which candidate is expanded next and whether
/// the returned route is the shortest one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Doubled horizontal hop length plus the remaining Manhattan distance
    /// from the hop's end to the goal. The vertical hop length is not
    /// counted at all. Not admissible: routes are good, not guaranteed
    /// shortest.
    #[default]
    Legacy,
    /// Hop length plus the change in Manhattan distance to the goal. The
    /// running cost is then route length plus remaining distance (less a
    /// constant), an admissible A* ordering. Routes are still accepted as
    /// soon as they are generated, so this steers the search toward short
    /// routes without proving the result shortest.
    Manhattan,
}

impl Heuristic {
    /// Cost of hopping from junction `from` to junction `to` while heading
    /// for `goal`. Never negative.
    pub fn hop_cost(self, from: Point, to: Point, goal: Point) -> u64 {
        match self {
            Self::Legacy => {
                let hop = (to.x - from.x).unsigned_abs() as u64 * 2;
                hop + manhattan(to, goal).unsigned_abs() as u64
            }
            Self::Manhattan => {
                let delta = i64::from(manhattan(from, to)) + i64::from(manhattan(to, goal))
                    - i64::from(manhattan(from, goal));
                // Triangle inequality keeps `delta` non-negative.
                delta.max(0) as u64
            }
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Manhattan => "manhattan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 7);
        let b = Point::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn legacy_doubles_horizontal_and_ignores_vertical_hop() {
        let goal = Point::new(2, 4);
        // Vertical hop: only the remaining distance counts.
        assert_eq!(Heuristic::Legacy.hop_cost(Point::new(2, 0), Point::new(2, 1), goal), 3);
        // Horizontal hop of one: 2 + |2-3| + |4-1|.
        assert_eq!(Heuristic::Legacy.hop_cost(Point::new(2, 1), Point::new(3, 1), goal), 6);
        // Reaching the goal vertically costs nothing.
        assert_eq!(Heuristic::Legacy.hop_cost(Point::new(2, 0), goal, goal), 0);
    }

    #[test]
    fn manhattan_hops_telescope() {
        let goal = Point::new(9, 9);
        let route = [Point::new(0, 0), Point::new(0, 5), Point::new(6, 5), Point::new(6, 2)];
        let total: u64 = route
            .windows(2)
            .map(|w| Heuristic::Manhattan.hop_cost(w[0], w[1], goal))
            .sum();
        // Sum of hop lengths + h(last) - h(first).
        let length: i32 = route.windows(2).map(|w| manhattan(w[0], w[1])).sum();
        let expected = length + manhattan(route[3], goal) - manhattan(route[0], goal);
        assert_eq!(total, expected as u64);
    }

    #[test]
    fn manhattan_hop_toward_goal_is_free() {
        let goal = Point::new(5, 0);
        assert_eq!(Heuristic::Manhattan.hop_cost(Point::new(0, 0), Point::new(3, 0), goal), 0);
        assert_eq!(Heuristic::Manhattan.hop_cost(Point::new(3, 0), Point::new(0, 0), goal), 6);
    }
}
