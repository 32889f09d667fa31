//! Recompute cycle: read settings, regenerate all three curves, publish them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::curve::{generate_curve, Curve, SampleRange};
use crate::params::ParameterSource;
use crate::relay::{PerRelay, RelaySettings};

/// The three curves of one recompute cycle, labelled by relay slot.
pub type CurveSet = PerRelay<Curve>;

/// Consumer of finished curve sets, e.g. a chart.
///
/// Each call replaces everything previously shown; the surface owns the set
/// from then on.
pub trait RenderSurface {
    fn present(&mut self, curves: CurveSet);
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn present(&mut self, curves: CurveSet) {
        (**self).present(curves);
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Rc<RefCell<S>> {
    fn present(&mut self, curves: CurveSet) {
        self.borrow_mut().present(curves);
    }
}

/// Curves for all three relays over the default grid.
pub fn recompute(settings: &RelaySettings) -> CurveSet {
    recompute_over(settings, &SampleRange::default())
}

/// Curves for all three relays over a shared grid.
pub fn recompute_over(settings: &RelaySettings, range: &SampleRange) -> CurveSet {
    settings.map(|_, cfg| generate_curve(cfg.pickup_current, cfg.time_multiplier, range))
}

/// Drives a [`RenderSurface`] from parameter change notifications.
pub struct RecomputeController<S> {
    surface: S,
    range: SampleRange,
    cycles: u64,
}

impl<S: RenderSurface> RecomputeController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_range(surface, SampleRange::default())
    }

    pub fn with_range(surface: S, range: SampleRange) -> Self {
        Self {
            surface,
            range,
            cycles: 0,
        }
    }

    /// Re-read every field from `source`, recompute and publish.
    ///
    /// Returns the settings the cycle used.
    pub fn on_parameter_changed<P: ParameterSource + ?Sized>(
        &mut self,
        source: &P,
    ) -> RelaySettings {
        let settings = source.read_settings();
        self.apply(&settings);
        settings
    }

    pub fn apply(&mut self, settings: &RelaySettings) {
        let curves = recompute_over(settings, &self.range);
        self.cycles += 1;
        log::debug!(
            "[recompute] cycle={} samples A={} B={} C={}",
            self.cycles,
            curves.a.len(),
            curves.b.len(),
            curves.c.len()
        );
        self.surface.present(curves);
    }

    pub fn range(&self) -> &SampleRange {
        &self.range
    }

    /// Completed recompute cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
