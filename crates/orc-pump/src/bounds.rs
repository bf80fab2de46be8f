//! Exhaust-state validity check.

use crate::config::PumpConfig;
use crate::error::PumpResult;
use crate::result::Flag;
use orc_fluids::PropertyProvider;
use tracing::debug;

/// Temperature/pressure pair at which a derived bound is looked up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceState {
    pub t_k: f64,
    pub p_pa: f64,
}

/// Cold, low-pressure corner used for a missing `h_min`.
pub const LOWER_REFERENCE: ReferenceState = ReferenceState {
    t_k: 253.15,
    p_pa: 0.5e5,
};

/// Hot, high-pressure corner used for a missing `h_max`.
pub const UPPER_REFERENCE: ReferenceState = ReferenceState {
    t_k: 500.0,
    p_pa: 40e5,
};

/// Open interval of acceptable exhaust enthalpies [J/kg].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExhaustBounds {
    pub h_min: f64,
    pub h_max: f64,
}

impl ExhaustBounds {
    /// Bounds from the configuration, deriving only the missing ones from
    /// the provider.
    pub fn resolve(
        provider: &dyn PropertyProvider,
        fluid: &str,
        config: &PumpConfig,
    ) -> PumpResult<Self> {
        let derive = |reference: ReferenceState, which: &'static str| -> PumpResult<f64> {
            let h = provider.enthalpy_pt(fluid, reference.p_pa, reference.t_k)?;
            debug!(fluid, bound = which, t_k = reference.t_k, p_pa = reference.p_pa, h, "derived exhaust bound");
            Ok(h)
        };
        let h_min = match config.h_min {
            Some(h) => h,
            None => derive(LOWER_REFERENCE, "h_min")?,
        };
        let h_max = match config.h_max {
            Some(h) => h,
            None => derive(UPPER_REFERENCE, "h_max")?,
        };
        Ok(Self { h_min, h_max })
    }

    /// Strict containment: values on a bound are rejected.
    pub fn contains(&self, h_ex: f64) -> bool {
        self.h_min < h_ex && h_ex < self.h_max
    }

    pub fn check(&self, h_ex: f64) -> Flag {
        if self.contains(h_ex) {
            Flag::Accepted
        } else {
            Flag::ExhaustOutOfBounds
        }
    }
}
