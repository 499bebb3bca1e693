use tracing::{info, warn};

use crate::chart::ChartBackend;
use crate::dom::Document;
use crate::renderer::DashboardRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Idle,
    Loading,
    Ready,
}

// One-shot request for the charting capability, issued at most once per boot.
pub trait CapabilityLoader {
    fn request(&mut self);
}

pub struct DashboardBoot<D: Document, B: ChartBackend> {
    phase: BootPhase,
    document: Option<D>,
    renderer: Option<DashboardRenderer<D, B>>,
}

impl<D: Document, B: ChartBackend> DashboardBoot<D, B> {
    pub fn new(document: D) -> Self {
        Self {
            phase: BootPhase::Idle,
            document: Some(document),
            renderer: None,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn page_ready(&mut self, capability: Option<B>, loader: &mut dyn CapabilityLoader) {
        if self.phase != BootPhase::Idle {
            warn!("page-ready signal ignored in {:?} phase", self.phase);
            return;
        }
        match capability {
            Some(backend) => self.start(backend),
            None => {
                warn!("charting capability not available; requesting deferred load");
                loader.request();
                self.phase = BootPhase::Loading;
            }
        }
    }

    pub fn capability_loaded(&mut self, backend: B) {
        if self.phase != BootPhase::Loading {
            warn!("capability delivery ignored in {:?} phase", self.phase);
            return;
        }
        info!("charting capability loaded");
        self.start(backend);
    }

    pub fn window_resized(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.handle_resize();
        }
    }

    pub fn renderer(&self) -> Option<&DashboardRenderer<D, B>> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut DashboardRenderer<D, B>> {
        self.renderer.as_mut()
    }

    fn start(&mut self, backend: B) {
        let Some(document) = self.document.take() else {
            warn!("bootstrap already consumed its document; ignoring");
            return;
        };
        let mut renderer = DashboardRenderer::new(document, backend);
        renderer.initialize();
        self.renderer = Some(renderer);
        self.phase = BootPhase::Ready;
    }
}
