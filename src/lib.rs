pub mod boot;
pub mod chart;
pub mod dom;
pub mod input;
pub mod normalize;
pub mod renderer;
pub mod tracing;

pub use boot::{BootPhase, CapabilityLoader, DashboardBoot};
pub use chart::config::{ChartKind, ChartSpec, Dataset, IndexAxis, LegendPosition, ValueRange};
pub use chart::registry::ChartRegistry;
pub use chart::slots::{Slot, SlotPlan, plan_slot};
pub use chart::{BackendError, CanvasSurface, ChartBackend, ChartHandle};
pub use dom::{ContainerSize, Document, StaticDocument};
pub use input::{DashboardData, PayloadError, ScoreMap};
pub use normalize::{HeadlineSeries, normalize_headline};
pub use renderer::DashboardRenderer;
