// Snapshot renderer - applies a decoded snapshot to a chart surface
use crate::application::surface::ChartSurface;
use crate::domain::snapshot::MetricsSnapshot;

/// Replace the surface's label sequence and its single value series with the
/// snapshot's contents, then request a redraw. Mutates only the passed
/// surface; the snapshot is consumed and not retained.
pub fn render_snapshot(surface: &mut dyn ChartSurface, snapshot: MetricsSnapshot) {
    let MetricsSnapshot { labels, values } = snapshot;
    surface.replace_series(labels, values);
    surface.redraw();
}
