//! sw-eos: seawater thermodynamic state evaluation for seaflow.
//!
//! Evaluates density, enthalpy, entropy, compressibilities, sound
//! speed, chemical potentials, the osmotic coefficient and the haline
//! contraction coefficient of seawater from temperature, pressure and
//! absolute salinity. The Gibbs energy of seawater is the sum of a
//! pure-water term and a salinity-dependent correction series; every
//! output property derives from the combined derivative set by
//! closed-form chain-rule formulas.
//!
//! # Architecture
//!
//! The full pure-water formulation is a black box behind the `WaterEos`
//! trait, which isolates this crate from backend dependencies. The
//! default backend delegates to CoolProp's reference water formulation
//! (via `rfluids`); at or below 313.15 K a caller can instead opt into
//! a supplementary fast series with no backend call.
//!
//! # Example
//!
//! ```no_run
//! use sw_core::units::{k, mpa};
//! use sw_eos::{SeaWaterInput, SeaWaterModel};
//!
//! let model = SeaWaterModel::new();
//! let input = SeaWaterInput::new(mpa(1.0), k(300.0), 0.04, false).unwrap();
//!
//! let state = model.evaluate(&input).unwrap();
//! println!("Density: {} kg/m³", state.density_kg_m3());
//! ```

mod consts;
pub mod coolprop;
pub mod error;
pub mod gibbs;
pub mod saline;
pub mod seawater;
pub mod series;
pub mod sweep;
mod tables;
pub mod water;

// Re-exports for ergonomics
pub use coolprop::CoolPropWater;
pub use error::{EosError, EosResult};
pub use gibbs::GibbsDerivs;
pub use saline::saline_gibbs;
pub use seawater::{SalineProps, SeaWaterInput, SeaWaterModel, SeaWaterState};
pub use sweep::{
    SweepDefinition, SweepError, SweepResult, SweepType, SweepVariable, execute_pressure_sweep,
    execute_salinity_sweep, execute_temperature_sweep,
};
pub use water::{WaterEos, WaterProps, WaterStrategy, water_delegate, water_fast};
