use tracing::{debug, error, info};

use crate::chart::config::ChartSpec;
use crate::chart::registry::ChartRegistry;
use crate::chart::slots::{Slot, SlotPlan, plan_slot};
use crate::chart::{CanvasSurface, ChartBackend};
use crate::dom::Document;
use crate::input::DashboardData;
use crate::normalize::normalize_headline;

pub const DEFAULT_CANVAS_WIDTH: u32 = 400;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 300;

pub struct DashboardRenderer<D: Document, B: ChartBackend> {
    document: D,
    backend: B,
    charts: ChartRegistry<B::Handle>,
}

impl<D: Document, B: ChartBackend> DashboardRenderer<D, B> {
    pub fn new(document: D, backend: B) -> Self {
        Self {
            document,
            backend,
            charts: ChartRegistry::new(),
        }
    }

    pub fn initialize(&mut self) {
        let data = DashboardData::from_document(&self.document);
        self.render(&data);
    }

    pub fn render(&mut self, data: &DashboardData) {
        let headline = normalize_headline(data);
        for slot in Slot::ALL {
            match plan_slot(slot, data, &headline) {
                SlotPlan::Chart(spec) => {
                    self.render_chart(slot, &spec);
                }
                SlotPlan::Placeholder(message) => {
                    info!("no data for {slot}; showing placeholder");
                    // The replacement destroys the slot's canvas, so any chart
                    // still registered there is dead.
                    self.charts.dispose(slot);
                    self.document.replace_with_notice(slot.canvas_id(), message);
                }
                SlotPlan::Skip(reason) => {
                    info!("skipping {slot}: {reason}");
                }
            }
        }
        info!(charts = self.charts.len(), "dashboard initialization complete");
    }

    pub fn render_chart(&mut self, slot: Slot, spec: &ChartSpec) -> Option<&B::Handle> {
        let canvas_id = slot.canvas_id();
        let Some(container) = self.document.container_size(canvas_id) else {
            error!("canvas {canvas_id} not found");
            return None;
        };
        let width = if container.width == 0 {
            DEFAULT_CANVAS_WIDTH
        } else {
            container.width
        };
        let height = if container.height == 0 {
            DEFAULT_CANVAS_HEIGHT
        } else {
            container.height
        };
        self.document.set_canvas_size(canvas_id, width, height);

        self.charts.dispose(slot);

        let surface = CanvasSurface {
            canvas_id: canvas_id.to_string(),
            width,
            height,
        };
        match self.backend.construct(&surface, spec) {
            Ok(handle) => {
                self.charts.insert(slot, handle);
                debug!("chart {slot} created");
                self.charts.handle(slot)
            }
            Err(err) => {
                error!("error creating chart {slot}: {err}");
                None
            }
        }
    }

    pub fn handle_resize(&mut self) {
        self.charts.resize_all();
    }

    pub fn charts(&self) -> &ChartRegistry<B::Handle> {
        &self.charts
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/renderer.rs"]
mod tests;
