// Live chart widgets for the torrent metrics API
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::category_chart::CategoryChart;
pub use application::live_chart::LiveChart;
pub use application::metrics_api::{MetricsApi, MetricsQuery};
pub use application::surface::{ChartEngine, ChartSurface};
pub use domain::chart::{ChartKind, ChartSeries, ChartSpec};
pub use domain::snapshot::MetricsSnapshot;
pub use error::WidgetError;
