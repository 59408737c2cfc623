//! Seawater property sweep generation.
//!
//! Supports parametric sweeps across temperature, pressure and
//! salinity. Used to generate profiles, comparison tables and
//! sensitivity analyses.

use crate::error::EosResult;
use crate::seawater::{SeaWaterInput, SeaWaterModel, SeaWaterState};
use std::fmt;
use sw_core::units::{Pressure, Temperature, k, mpa};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Quantity being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    /// Temperature [K]
    Temperature,
    /// Pressure [MPa]
    Pressure,
    /// Absolute salinity [kg/kg]
    Salinity,
}

/// Error in sweep execution.
#[derive(Debug, Clone)]
pub enum SweepError {
    /// Invalid sweep configuration
    InvalidConfiguration(String),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SweepError {}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone)]
pub struct SweepDefinition {
    /// Quantity being swept
    pub variable: SweepVariable,
    /// Start value (K, MPa or kg/kg depending on the variable)
    pub start: f64,
    /// End value
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a validated sweep definition.
    pub fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(SweepDefinition {
            variable,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(self.start + i as f64 * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // For logarithmic sweep, both start and end must be positive
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear(); // Fall back to linear if signs don't match
        }

        let mut points = Vec::with_capacity(self.num_points);
        let log_start = self.start.ln();
        let log_end = self.end.ln();
        let log_delta = (log_end - log_start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            let log_val = log_start + i as f64 * log_delta;
            points.push(log_val.exp());
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Salinity => write!(f, "Salinity"),
        }
    }
}

/// Result of a seawater property sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Quantity that was swept
    pub variable: SweepVariable,
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<f64>,
    /// Computed states (None entries for failed points)
    pub states: Vec<Option<SeaWaterState>>,
    /// Number of successful computations
    pub num_successful: usize,
    /// Number of failed computations
    pub num_failed: usize,
}

impl SweepResult {
    /// Get density array (excluding failed points)
    pub fn density_kg_m3(&self) -> Vec<f64> {
        self.states
            .iter()
            .filter_map(|s| s.as_ref().map(|state| state.density_kg_m3()))
            .collect()
    }

    /// Get enthalpy array (excluding failed points)
    pub fn enthalpy_kj_kg(&self) -> Vec<f64> {
        self.states
            .iter()
            .filter_map(|s| s.as_ref().map(|state| state.enthalpy_kj_kg))
            .collect()
    }

    /// Get entropy array (excluding failed points)
    pub fn entropy_kj_kg_k(&self) -> Vec<f64> {
        self.states
            .iter()
            .filter_map(|s| s.as_ref().map(|state| state.entropy_kj_kg_k))
            .collect()
    }

    /// Get sound speed array (excluding failed points)
    pub fn sound_speed_m_s(&self) -> Vec<f64> {
        self.states
            .iter()
            .filter_map(|s| s.as_ref().map(|state| state.sound_speed_m_s()))
            .collect()
    }

    /// Get independent values corresponding to successful states
    pub fn successful_independent_values(&self) -> Vec<f64> {
        self.independent_values
            .iter()
            .zip(&self.states)
            .filter_map(|(val, state)| state.as_ref().map(|_| *val))
            .collect()
    }
}

fn evaluate_point(model: &SeaWaterModel, input: EosResult<SeaWaterInput>) -> Option<SeaWaterState> {
    input.and_then(|i| model.evaluate(&i)).ok()
}

fn collect(
    variable: SweepVariable,
    values: Vec<f64>,
    states: Vec<Option<SeaWaterState>>,
) -> SweepResult {
    let num_successful = states.iter().filter(|s| s.is_some()).count();
    let num_failed = states.len() - num_successful;
    SweepResult {
        variable,
        independent_values: values,
        states,
        num_successful,
        num_failed,
    }
}

/// Execute a temperature sweep at fixed pressure and salinity.
pub fn execute_temperature_sweep(
    model: &SeaWaterModel,
    sweep_def: &SweepDefinition,
    fixed_pressure: Pressure,
    salinity: f64,
    fast: bool,
) -> Result<SweepResult, SweepError> {
    if sweep_def.variable != SweepVariable::Temperature {
        return Err(SweepError::InvalidConfiguration(
            "Sweep definition must be for the Temperature variable".to_string(),
        ));
    }

    let temperatures = sweep_def.generate_points();
    let states = temperatures
        .iter()
        .map(|&t_k| {
            evaluate_point(
                model,
                SeaWaterInput::new(fixed_pressure, k(t_k), salinity, fast),
            )
        })
        .collect();

    Ok(collect(SweepVariable::Temperature, temperatures, states))
}

/// Execute a pressure sweep at fixed temperature and salinity.
pub fn execute_pressure_sweep(
    model: &SeaWaterModel,
    sweep_def: &SweepDefinition,
    fixed_temperature: Temperature,
    salinity: f64,
    fast: bool,
) -> Result<SweepResult, SweepError> {
    if sweep_def.variable != SweepVariable::Pressure {
        return Err(SweepError::InvalidConfiguration(
            "Sweep definition must be for the Pressure variable".to_string(),
        ));
    }

    let pressures = sweep_def.generate_points();
    let states = pressures
        .iter()
        .map(|&p_mpa| {
            evaluate_point(
                model,
                SeaWaterInput::new(mpa(p_mpa), fixed_temperature, salinity, fast),
            )
        })
        .collect();

    Ok(collect(SweepVariable::Pressure, pressures, states))
}

/// Execute a salinity sweep at fixed temperature and pressure.
pub fn execute_salinity_sweep(
    model: &SeaWaterModel,
    sweep_def: &SweepDefinition,
    fixed_pressure: Pressure,
    fixed_temperature: Temperature,
    fast: bool,
) -> Result<SweepResult, SweepError> {
    if sweep_def.variable != SweepVariable::Salinity {
        return Err(SweepError::InvalidConfiguration(
            "Sweep definition must be for the Salinity variable".to_string(),
        ));
    }

    let salinities = sweep_def.generate_points();
    let states = salinities
        .iter()
        .map(|&s| {
            evaluate_point(
                model,
                SeaWaterInput::new(fixed_pressure, fixed_temperature, s, fast),
            )
        })
        .collect();

    Ok(collect(SweepVariable::Salinity, salinities, states))
}
