//! Seawater state evaluation: input record, model and result record.

use crate::consts::{M_SALT, R_MOLAR};
use crate::coolprop::CoolPropWater;
use crate::error::{EosError, EosResult};
use crate::gibbs::GibbsDerivs;
use crate::saline::saline_gibbs;
use crate::water::{WaterEos, WaterStrategy, water_delegate, water_fast};
use sw_core::timing;
use sw_core::units::{Density, Pressure, Temperature, Velocity};
use uom::si::{
    mass_density::kilogram_per_cubic_meter, pressure::megapascal,
    thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

/// Inputs of one seawater state evaluation.
///
/// Immutable once constructed; a new input produces a new state. All
/// fields are required, so a partially specified evaluation cannot
/// exist.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaWaterInput {
    p: Pressure,
    t: Temperature,
    salinity: f64,
    fast: bool,
}

impl SeaWaterInput {
    /// Create a validated input record.
    ///
    /// Pressure and temperature must be positive and finite; salinity
    /// is an absolute mass fraction in [0, 1). `fast` requests the
    /// supplementary pure-water series where its temperature envelope
    /// allows.
    pub fn new(p: Pressure, t: Temperature, salinity: f64, fast: bool) -> EosResult<Self> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !salinity.is_finite() || !(0.0..1.0).contains(&salinity) {
            return Err(EosError::InvalidArg {
                what: "salinity must be a mass fraction in [0, 1)",
            });
        }

        Ok(Self {
            p,
            t,
            salinity,
            fast,
        })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get absolute salinity [kg/kg].
    pub fn salinity(&self) -> f64 {
        self.salinity
    }

    /// Whether the fast pure-water series was requested.
    pub fn fast(&self) -> bool {
        self.fast
    }

    fn temperature_k(&self) -> f64 {
        self.t.value
    }

    fn pressure_mpa(&self) -> f64 {
        self.p.get::<megapascal>()
    }
}

/// Salinity-dependent outputs, present only for nonzero salinity.
///
/// At S = 0 these are undefined rather than zero: the osmotic
/// coefficient divides by the molality, which vanishes with salinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalineProps {
    /// Relative chemical potential [kJ/kg]
    pub mu: f64,
    /// Chemical potential of water [kJ/kg]
    pub mu_water: f64,
    /// Chemical potential of sea salt [kJ/kg]
    pub mu_salt: f64,
    /// Osmotic coefficient [-]
    pub osmotic: f64,
    /// Haline contraction coefficient [kg/kg]
    pub haline: f64,
}

/// One evaluated seawater state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaWaterState {
    /// Pressure [Pa]
    pub pressure: Pressure,
    /// Temperature [K]
    pub temperature: Temperature,
    /// Absolute salinity [kg/kg]
    pub salinity: f64,
    /// Density [kg/m³]
    pub density: Density,
    /// Specific volume [m³/kg]
    pub specific_volume_m3_kg: f64,
    /// Specific enthalpy [kJ/kg]
    pub enthalpy_kj_kg: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub entropy_kj_kg_k: f64,
    /// Specific internal energy [kJ/kg]
    pub internal_energy_kj_kg: f64,
    /// Specific Gibbs energy [kJ/kg]
    pub gibbs_energy_kj_kg: f64,
    /// Specific Helmholtz energy [kJ/kg]
    pub helmholtz_energy_kj_kg: f64,
    /// Isobaric heat capacity [kJ/(kg·K)]
    pub cp_kj_kg_k: f64,
    /// Thermal expansion coefficient [1/K]
    pub alpha_per_k: f64,
    /// Isentropic temperature-pressure coefficient [K/MPa]
    pub betas_k_mpa: f64,
    /// Isothermal compressibility [1/MPa]
    pub kappa_t_per_mpa: f64,
    /// Isentropic compressibility [1/MPa]
    pub kappa_s_per_mpa: f64,
    /// Speed of sound [m/s]
    pub sound_speed: Velocity,
    /// Combined Gibbs derivative set the properties derive from
    pub derivs: GibbsDerivs,
    /// Salinity-dependent outputs; `None` exactly when salinity is zero
    pub saline: Option<SalineProps>,
}

impl SeaWaterState {
    pub fn pressure_mpa(&self) -> f64 {
        self.pressure.get::<megapascal>()
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
    }

    pub fn sound_speed_m_s(&self) -> f64 {
        self.sound_speed.get::<meter_per_second>()
    }
}

/// Seawater property model.
///
/// Combines the pure-water term (delegate backend or fast series) with
/// the saline correction and derives the full property set from the
/// combined Gibbs derivatives.
pub struct SeaWaterModel {
    water: Box<dyn WaterEos>,
}

impl SeaWaterModel {
    /// Model with the CoolProp-backed pure-water delegate.
    pub fn new() -> Self {
        Self {
            water: Box::new(CoolPropWater::new()),
        }
    }

    /// Model with a caller-supplied pure-water backend.
    pub fn with_water_eos(water: Box<dyn WaterEos>) -> Self {
        Self { water }
    }

    /// Name of the pure-water backend in use.
    pub fn water_backend(&self) -> &str {
        self.water.name()
    }

    /// Evaluate one seawater state.
    pub fn evaluate(&self, input: &SeaWaterInput) -> EosResult<SeaWaterState> {
        let timer = timing::Timer::start("state_evaluation");

        let t = input.temperature_k();
        let p = input.pressure_mpa();
        let s = input.salinity;

        let water = match WaterStrategy::select(input.fast, t) {
            WaterStrategy::FastSeries => water_fast(t, p),
            WaterStrategy::Delegate => water_delegate(self.water.as_ref(), t, p)?,
        };
        let saline = saline_gibbs(t, p, s);
        let combined = water + saline;

        let state = compose(input, t, p, s, combined, &saline)?;
        if let Some(elapsed) = timer.stop() {
            timing::eos_timing::STATE_EVALUATIONS.record(elapsed);
        }
        Ok(state)
    }
}

impl Default for SeaWaterModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the combined derivative set to the physical property set.
///
/// A vanishing denominator derivative marks a state outside the
/// validity region of the formulation and is surfaced as a domain
/// error, never as a silent infinity.
fn compose(
    input: &SeaWaterInput,
    t: f64,
    p: f64,
    s: f64,
    d: GibbsDerivs,
    saline: &GibbsDerivs,
) -> EosResult<SeaWaterState> {
    if d.gp == 0.0 {
        return Err(EosError::SingularDerivative { what: "gp" });
    }
    if d.gtt == 0.0 {
        return Err(EosError::SingularDerivative { what: "gtt" });
    }

    let w_denom = d.gtp * d.gtp - d.gtt * 1e3 * d.gpp * 1e-6;
    if w_denom == 0.0 {
        return Err(EosError::SingularDerivative {
            what: "sound speed denominator",
        });
    }
    let w_arg = d.gtt * 1e3 / w_denom;
    if w_arg < 0.0 {
        return Err(EosError::NonPhysical {
            what: "squared sound speed",
        });
    }

    let saline_props = if s != 0.0 {
        let m = s / (1.0 - s) / M_SALT;
        Some(SalineProps {
            mu: d.gs,
            mu_water: d.g - s * d.gs,
            mu_salt: d.g + (1.0 - s) * d.gs,
            // Saline-only Gibbs value here, not the combined one
            osmotic: -(saline.g - s * d.gs) / (m * R_MOLAR * t),
            haline: -d.gsp / d.gp,
        })
    } else {
        None
    };

    Ok(SeaWaterState {
        pressure: input.pressure(),
        temperature: input.temperature(),
        salinity: s,
        density: Density::new::<kilogram_per_cubic_meter>(1.0 / d.gp),
        specific_volume_m3_kg: d.gp,
        enthalpy_kj_kg: d.g - t * d.gt,
        entropy_kj_kg_k: -d.gt,
        internal_energy_kj_kg: d.g - t * d.gt - 1e3 * p * d.gp,
        gibbs_energy_kj_kg: d.g,
        helmholtz_energy_kj_kg: d.g - 1e3 * p * d.gp,
        cp_kj_kg_k: -t * d.gtt,
        alpha_per_k: d.gtp / d.gp,
        betas_k_mpa: -d.gtp / d.gtt,
        kappa_t_per_mpa: -d.gpp / d.gp,
        kappa_s_per_mpa: (d.gtp * d.gtp - d.gt * d.gpp) / (d.gp * d.gtt),
        sound_speed: Velocity::new::<meter_per_second>(d.gp * w_arg.sqrt()),
        derivs: d,
        saline: saline_props,
    })
}
