use crate::frontier::Frontier;

/// Read-only hook called after every frontier growth step.
///
/// Observers see the frontier but cannot change it, so attaching one never
/// alters which route is found. Any `FnMut(&Frontier)` closure is an
/// observer.
pub trait FrontierObserver {
    fn frontier_changed(&mut self, frontier: &Frontier);
}

impl<F: FnMut(&Frontier)> FrontierObserver for F {
    fn frontier_changed(&mut self, frontier: &Frontier) {
        self(frontier)
    }
}
