pub mod config;
pub mod registry;
pub mod slots;

use thiserror::Error;

use crate::chart::config::ChartSpec;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// A located canvas, already sized, handed to the capability at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSurface {
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
}

pub trait ChartHandle {
    fn resize(&mut self);
    fn dispose(self);
}

pub trait ChartBackend {
    type Handle: ChartHandle;

    fn construct(
        &mut self,
        surface: &CanvasSurface,
        spec: &ChartSpec,
    ) -> Result<Self::Handle, BackendError>;
}
