use std::collections::HashMap;

use tracing::debug;

use crate::chart::ChartHandle;
use crate::chart::slots::Slot;

// Explicit per-renderer map; replaces the ambient per-window registry the page
// script kept under window[canvasId + '_chart'].
#[derive(Debug)]
pub struct ChartRegistry<H: ChartHandle> {
    charts: HashMap<Slot, H>,
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }

    pub fn dispose(&mut self, slot: Slot) -> bool {
        match self.charts.remove(&slot) {
            Some(old) => {
                debug!("disposing existing chart for {slot}");
                old.dispose();
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, slot: Slot, handle: H) {
        self.dispose(slot);
        self.charts.insert(slot, handle);
    }

    pub fn handle(&self, slot: Slot) -> Option<&H> {
        self.charts.get(&slot)
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.charts.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn resize_all(&mut self) {
        for (slot, chart) in self.charts.iter_mut() {
            debug!("resizing chart {slot}");
            chart.resize();
        }
    }
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
