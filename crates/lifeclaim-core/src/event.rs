//! Advance trigger and generation listeners.
//!
//! Raising an [`AdvanceGenerationEvent`] with an owner advances the grid
//! once on that owner's behalf, then hands the resulting
//! [`GenerationReport`] to every registered [`GenerationListener`].
//! Listeners are notified newest-first, so a listener registered later can
//! react before the ones it was layered on top of.
//!
//! The grid knows nothing about this module; the registry lives entirely
//! on the driver side.

use lifeclaim_grid::{GenerationReport, Grid};
use lifeclaim_types::{ListenerId, OwnerId};

/// Callback invoked after each generation step.
///
/// Implementations can log, collect statistics, or forward the report
/// elsewhere. They see the grid read-only, already holding the new
/// generation.
pub trait GenerationListener: Send {
    /// Called once per generation, after the grid has been replaced.
    fn on_generation(&mut self, generation: u64, report: &GenerationReport, grid: &Grid);
}

/// A listener that ignores every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpListener;

impl GenerationListener for NoOpListener {
    fn on_generation(&mut self, _generation: u64, _report: &GenerationReport, _grid: &Grid) {}
}

/// Registry of generation listeners and the trigger that advances a grid.
#[derive(Default)]
pub struct AdvanceGenerationEvent {
    listeners: Vec<(ListenerId, Box<dyn GenerationListener>)>,
}

impl AdvanceGenerationEvent {
    /// Create an event with no listeners.
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener and return the handle that unregisters it.
    pub fn register<L>(&mut self, listener: L) -> ListenerId
    where
        L: GenerationListener + 'static,
    {
        let id = ListenerId::new();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the handle was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advance `grid` once for `owner` and notify listeners newest-first.
    pub fn raise(&mut self, generation: u64, owner: OwnerId, grid: &mut Grid) -> GenerationReport {
        let report = grid.advance_with_report(owner);
        for (_, listener) in self.listeners.iter_mut().rev() {
            listener.on_generation(generation, &report, grid);
        }
        report
    }
}

impl std::fmt::Debug for AdvanceGenerationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvanceGenerationEvent")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::mpsc::{self, Receiver, Sender};

    use super::*;

    struct Tagged {
        tag: &'static str,
        tx: Sender<(&'static str, u64, usize)>,
    }

    impl GenerationListener for Tagged {
        fn on_generation(&mut self, generation: u64, report: &GenerationReport, _grid: &Grid) {
            let _ = self.tx.send((self.tag, generation, report.population));
        }
    }

    fn tagged(tag: &'static str, tx: &Sender<(&'static str, u64, usize)>) -> Tagged {
        Tagged {
            tag,
            tx: tx.clone(),
        }
    }

    fn drain(rx: &Receiver<(&'static str, u64, usize)>) -> Vec<&'static str> {
        rx.try_iter().map(|(tag, _, _)| tag).collect()
    }

    #[test]
    fn raise_advances_grid_and_returns_report() {
        let mut grid = Grid::new(5, 5).unwrap();
        let owner = OwnerId::new();
        for (x, y) in [(1, 1), (1, 2), (1, 3)] {
            grid.set_owner(x, y, Some(owner)).unwrap();
        }
        let mut event = AdvanceGenerationEvent::new();

        let report = event.raise(1, owner, &mut grid);

        assert_eq!(report.owner, owner);
        assert_eq!(report.births, 2);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn listeners_notified_newest_first() {
        let (tx, rx) = mpsc::channel();
        let mut event = AdvanceGenerationEvent::new();
        let _ = event.register(tagged("first", &tx));
        let _ = event.register(tagged("second", &tx));
        let _ = event.register(tagged("third", &tx));
        let mut grid = Grid::new(3, 3).unwrap();

        let _ = event.raise(1, OwnerId::new(), &mut grid);

        assert_eq!(drain(&rx), vec!["third", "second", "first"]);
    }

    #[test]
    fn unregistered_listener_is_not_notified() {
        let (tx, rx) = mpsc::channel();
        let mut event = AdvanceGenerationEvent::new();
        let keep = event.register(tagged("keep", &tx));
        let dropped = event.register(tagged("dropped", &tx));
        assert_eq!(event.listener_count(), 2);

        assert!(event.unregister(dropped));
        assert!(!event.unregister(dropped));
        assert_eq!(event.listener_count(), 1);

        let mut grid = Grid::new(3, 3).unwrap();
        let _ = event.raise(1, OwnerId::new(), &mut grid);
        assert_eq!(drain(&rx), vec!["keep"]);

        assert!(event.unregister(keep));
        let _ = event.raise(2, OwnerId::new(), &mut grid);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn listener_sees_generation_number_and_new_grid() {
        struct Census {
            seen: Vec<(u64, usize)>,
            tx: Sender<Vec<(u64, usize)>>,
        }
        impl GenerationListener for Census {
            fn on_generation(&mut self, generation: u64, _report: &GenerationReport, grid: &Grid) {
                self.seen.push((generation, grid.population()));
                let _ = self.tx.send(self.seen.clone());
            }
        }

        let (tx, rx) = mpsc::channel();
        let mut event = AdvanceGenerationEvent::new();
        let _ = event.register(Census {
            seen: Vec::new(),
            tx,
        });
        let owner = OwnerId::new();
        let mut grid = Grid::new(5, 5).unwrap();
        for (x, y) in [(2, 1), (2, 2), (2, 3)] {
            grid.set_owner(x, y, Some(owner)).unwrap();
        }

        let _ = event.raise(7, owner, &mut grid);
        let _ = event.raise(8, owner, &mut grid);

        let last = rx.try_iter().last().unwrap_or_default();
        assert_eq!(last, vec![(7, 2), (8, 0)]);
    }

    #[test]
    fn no_op_listener_changes_nothing() {
        let mut event = AdvanceGenerationEvent::new();
        let _ = event.register(NoOpListener);
        let mut grid = Grid::new(4, 4).unwrap();
        let report = event.raise(1, OwnerId::new(), &mut grid);
        assert_eq!(report.population, 0);
    }
}
