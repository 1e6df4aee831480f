// Domain layer - Core chart and snapshot models
pub mod chart;
pub mod snapshot;
