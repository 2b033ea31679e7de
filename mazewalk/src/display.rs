use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use mazewalk_paths::{Frontier, FrontierObserver};

/// Redraws the whole frontier on the terminal after every search step.
///
/// Drawing errors are kept rather than raised, since the observer cannot
/// fail the search; the first one is returned by [`finish`](Self::finish).
pub struct FrontierDisplay<W: Write> {
    out: W,
    steps: usize,
    error: Option<io::Error>,
}

impl<W: Write> FrontierDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            steps: 0,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn draw(&mut self, frontier: &Frontier) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(
            self.out,
            "step {}: {} paths, {} live, {} dead",
            self.steps,
            frontier.len(),
            frontier.live_len(),
            frontier.dead_len()
        )?;
        for path in frontier.ordered() {
            writeln!(self.out, "{path}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> FrontierObserver for FrontierDisplay<W> {
    fn frontier_changed(&mut self, frontier: &Frontier) {
        if self.error.is_some() {
            return;
        }
        self.steps += 1;
        if let Err(e) = self.draw(frontier) {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::Grid;
    use mazewalk_paths::Solver;

    #[test]
    fn every_step_redraws_the_ordered_frontier() {
        let grid = Grid::parse("##.##\n#...#\n#.#.#\n#...#\n##.##").unwrap();
        let mut display = FrontierDisplay::new(Vec::new());
        Solver::default().solve_observed(&grid, &mut display).unwrap();
        let text = String::from_utf8(display.finish().unwrap()).unwrap();

        let screens: Vec<&str> = text.split("step ").skip(1).collect();
        assert!(screens.len() > 1);
        assert!(screens[0].starts_with("1: 1 paths, 1 live, 0 dead"));
        assert!(screens[0].contains("[(2, 0) (2, 1)]"));
        assert!(text.contains("(2, 4)]}"));
    }
}
