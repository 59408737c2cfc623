//! Pure-water term: delegate and fast-series strategies.
//!
//! The full pure-water formulation lives outside this crate behind the
//! `WaterEos` trait; its output is transformed into Gibbs derivatives
//! here. Below 313.15 K a supplementary series reproduces the same
//! term without a backend call.

use crate::consts::FAST_T_MAX_K;
use crate::error::{EosError, EosResult};
use crate::gibbs::GibbsDerivs;
use crate::series::{eval_pure, reduced_p, reduced_t};
use crate::tables::WATER_SUPP;
use sw_core::numeric::ensure_finite;
use sw_core::timing;

/// Pure-water properties returned by the external equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterProps {
    /// Specific enthalpy [kJ/kg]
    pub h: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub s: f64,
    /// Density [kg/m³]
    pub rho: f64,
    /// Isobaric heat capacity [kJ/(kg·K)]
    pub cp: f64,
    /// Isentropic temperature-pressure coefficient [K/MPa]
    pub betas: f64,
    /// Speed of sound [m/s]
    pub w: f64,
}

/// External pure-water equation of state.
///
/// Implementations must be thread-safe (Send + Sync) to support
/// parallel evaluation across independent states. Failures (state
/// outside the validity region, non-convergence) propagate to the
/// caller unchanged; this crate adds no handling of its own.
pub trait WaterEos: Send + Sync {
    /// Get the backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Evaluate pure-water properties at temperature [K] and
    /// pressure [MPa].
    fn properties(&self, t_k: f64, p_mpa: f64) -> EosResult<WaterProps>;
}

/// Strategy for the pure-water Gibbs term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterStrategy {
    /// Delegate to the external pure-water equation of state.
    Delegate,
    /// Evaluate the supplementary fast series.
    FastSeries,
}

impl WaterStrategy {
    /// Select the strategy for a state. The fast series applies only at
    /// or below 313.15 K; above that the delegate is used regardless of
    /// the flag. The fallback is silent, a policy choice rather than an
    /// error.
    pub fn select(fast: bool, t_k: f64) -> Self {
        if fast && t_k <= FAST_T_MAX_K {
            WaterStrategy::FastSeries
        } else {
            WaterStrategy::Delegate
        }
    }
}

/// Pure-water Gibbs derivatives from the external equation of state.
pub fn water_delegate(eos: &dyn WaterEos, t_k: f64, p_mpa: f64) -> EosResult<GibbsDerivs> {
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(EosError::InvalidArg {
            what: "temperature must be positive and finite",
        });
    }

    let w = eos.properties(t_k, p_mpa)?;
    if !w.rho.is_finite() || w.rho <= 0.0 {
        return Err(EosError::NonPhysical {
            what: "pure-water density",
        });
    }

    // A zero sound speed from the backend would make gpp infinite.
    let gpp = ensure_finite(
        -1e6 / (w.rho * w.w).powi(2) - w.betas.powi(2) * 1e3 * w.cp / t_k,
        "pure-water gpp",
    )?;

    Ok(GibbsDerivs {
        g: w.h - t_k * w.s,
        gt: -w.s,
        gp: 1.0 / w.rho,
        gtt: -w.cp / t_k,
        gtp: w.betas * w.cp / t_k,
        gpp,
        gs: 0.0,
        gsp: 0.0,
    })
}

/// Pure-water Gibbs derivatives from the supplementary fast series.
///
/// Valid for liquid water at or below 313.15 K and moderate pressure;
/// `WaterStrategy::select` enforces the temperature gate, the pressure
/// envelope is the caller's responsibility.
pub fn water_fast(t_k: f64, p_mpa: f64) -> GibbsDerivs {
    let timer = timing::Timer::start("water_fast");
    let derivs = eval_pure(&WATER_SUPP, reduced_t(t_k), reduced_p(p_mpa));
    if let Some(elapsed) = timer.stop() {
        timing::eos_timing::WATER_FAST_CALLS.record(elapsed);
    }
    derivs
}
