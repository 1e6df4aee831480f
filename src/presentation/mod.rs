// Presentation layer - Chart surface implementations
pub mod log_surface;
