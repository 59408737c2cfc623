//! CoolProp-backed pure-water equation of state.

use crate::error::{EosError, EosResult};
use crate::water::{WaterEos, WaterProps};
use rfluids::prelude::*;
use rfluids::substance::Pure;
use sw_core::timing;

/// CoolProp backend for the pure-water term.
///
/// Evaluates the reference water formulation through `rfluids` and
/// repackages the outputs into the units of the `WaterEos` contract.
///
/// Thread-safe: Fluid instances are created per query and never shared.
pub struct CoolPropWater {
    // Future: could add configuration options here (e.g., backend selection, caching)
}

impl CoolPropWater {
    /// Temperature step for the expansion-coefficient central
    /// difference [K].
    const DT_ALPHA: f64 = 0.05;

    /// Create a new CoolProp water backend.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at given P,T state.
    fn fluid_at_pt(&self, p_pa: f64, t_k: f64) -> EosResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| EosError::Backend {
                message: format!("rfluids error at P={} Pa, T={} K: {}", p_pa, t_k, e),
            })
    }

    fn density_at(&self, p_pa: f64, t_k: f64) -> EosResult<f64> {
        let mut fluid = self.fluid_at_pt(p_pa, t_k)?;
        fluid.density().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })
    }
}

impl Default for CoolPropWater {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterEos for CoolPropWater {
    fn name(&self) -> &str {
        "CoolProp reference water"
    }

    fn properties(&self, t_k: f64, p_mpa: f64) -> EosResult<WaterProps> {
        let _timer = timing::Timer::start("water_delegate_query");
        let start = std::time::Instant::now();

        let p_pa = p_mpa * 1e6;
        let mut fluid = self.fluid_at_pt(p_pa, t_k)?;

        let h = fluid.enthalpy().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;
        let s = fluid.entropy().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting entropy: {}", e),
        })?;
        let rho = fluid.density().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;
        let cp = fluid.specific_heat().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting specific heat: {}", e),
        })?;
        let w = fluid.sound_speed().map_err(|e| EosError::Backend {
            message: format!("rfluids error getting sound speed: {}", e),
        })?;

        if !rho.is_finite() || rho <= 0.0 {
            return Err(EosError::NonPhysical { what: "density" });
        }
        if !cp.is_finite() || cp <= 0.0 {
            return Err(EosError::NonPhysical { what: "cp" });
        }
        if !w.is_finite() || w <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "speed of sound",
            });
        }

        // betas = T·alpha/(rho·cp), with the isobaric expansion
        // coefficient alpha from a central density difference. The
        // truncation error is orders of magnitude below the agreement
        // tolerance between the two water strategies.
        let rho_lo = self.density_at(p_pa, t_k - Self::DT_ALPHA)?;
        let rho_hi = self.density_at(p_pa, t_k + Self::DT_ALPHA)?;
        let alpha = -(rho_hi - rho_lo) / (2.0 * Self::DT_ALPHA) / rho;
        let betas = t_k * alpha / (rho * cp) * 1e6; // K/Pa -> K/MPa

        if timing::is_enabled() {
            timing::eos_timing::WATER_DELEGATE_CALLS.record(start.elapsed().as_secs_f64());
        }

        Ok(WaterProps {
            h: h * 1e-3,
            s: s * 1e-3,
            rho,
            cp: cp * 1e-3,
            betas,
            w,
        })
    }
}
