// Application layer - Chart controllers and the ports they depend on
pub mod category_chart;
pub mod live_chart;
pub mod metrics_api;
pub mod renderer;
pub mod surface;
