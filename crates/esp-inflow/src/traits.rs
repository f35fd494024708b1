//! Common interface for inflow correlations.

/// Flow as a function of flowing bottomhole pressure for one well.
///
/// Implementations are pure and calibrated at construction.
pub trait InflowCorrelation: Send + Sync {
    fn method_label(&self) -> &'static str;

    /// Rate (m³/d) at flowing bottomhole pressure `pwf` (bar).
    fn flow_at(&self, pwf: f64) -> f64;

    /// Absolute open flow (rate at pwf = 0).
    fn flow_max(&self) -> f64 {
        self.flow_at(0.0)
    }

    /// Productivity index above the bubble point (m³/d/bar).
    fn productivity_index(&self) -> f64;

    /// Fetkovich (C, n) when the correlation has them.
    fn backpressure_coefficients(&self) -> Option<(f64, f64)> {
        None
    }
}
