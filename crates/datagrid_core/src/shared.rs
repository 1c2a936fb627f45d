//! Thread-safe grid handle.

use crate::config::GridConfig;
use crate::error::GridResult;
use crate::grid::Grid;
use crate::snapshot::GridSnapshot;
use crate::stats::{GridCounters, GridStats};
use parking_lot::Mutex;
use std::sync::Arc;

/// A grid shared between threads.
///
/// One mutex guards the whole engine state, so every command runs to
/// completion before the next one starts. Clones refer to the same grid.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
    counters: Arc<GridCounters>,
}

impl SharedGrid {
    /// Wraps an existing grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let counters = grid.counters();
        Self {
            inner: Arc::new(Mutex::new(grid)),
            counters,
        }
    }

    /// Builds a grid from `config` and wraps it.
    pub fn from_config(config: GridConfig) -> GridResult<Self> {
        Ok(Self::new(Grid::new(config)?))
    }

    /// Runs `f` with exclusive access to the grid.
    pub fn with<R>(&self, f: impl FnOnce(&mut Grid) -> R) -> R {
        let mut grid = self.inner.lock();
        f(&mut grid)
    }

    /// Takes a render snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        self.inner.lock().snapshot()
    }

    /// Reads the counters without taking the grid lock.
    #[must_use]
    pub fn stats(&self) -> GridStats {
        self.counters.snapshot()
    }
}

impl From<Grid> for SharedGrid {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnDescriptor;
    use datagrid_codec::Record;
    use std::thread;

    #[test]
    fn concurrent_selection() {
        let data: Vec<Record> = (0..100)
            .map(|i| Record::new().with("name", format!("n{i}")))
            .collect();
        let shared = SharedGrid::from_config(
            GridConfig::new()
                .columns(vec![ColumnDescriptor::new("name")])
                .data(data),
        )
        .unwrap();
        let ids = shared.with(|g| g.view_ids().to_vec());

        let handles: Vec<_> = ids
            .chunks(25)
            .map(|chunk| {
                let grid = shared.clone();
                let chunk = chunk.to_vec();
                thread::spawn(move || {
                    for id in chunk {
                        grid.with(|g| g.toggle_select(id, true)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.snapshot().selected_count, 100);
        assert!(shared.snapshot().all_selected);
    }

    #[test]
    fn stats_without_lock() {
        let shared: SharedGrid = Grid::new(GridConfig::new()).unwrap().into();
        let before = shared.stats().recomputes;
        shared.with(Grid::refresh);
        assert_eq!(shared.stats().recomputes, before + 1);
    }
}
