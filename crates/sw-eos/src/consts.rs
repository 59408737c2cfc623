//! Fixed constants of the seawater formulation.

/// Universal gas constant [kJ/(kmol·K)]
pub(crate) const R_MOLAR: f64 = 8.314472;

/// Normal salinity of standard seawater [kg/kg]
pub(crate) const S_NORMAL: f64 = 0.03516504;

/// Reference salinity of the salinity-ratio variable [kg/kg]
pub(crate) const S_REF: f64 = S_NORMAL * 40.0 / 35.0;

/// Molar mass of sea salt [kg/kmol]
pub(crate) const M_SALT: f64 = 31.4038218;

/// Temperature reference [K] and reduction span [K]
pub(crate) const T_REF_K: f64 = 273.15;
pub(crate) const T_SPAN: f64 = 40.0;

/// Pressure reference [MPa] and reduction span [MPa]
pub(crate) const P_REF_MPA: f64 = 0.101325;
pub(crate) const P_SPAN: f64 = 100.0;

/// Upper temperature bound of the fast pure-water series [K]
pub(crate) const FAST_T_MAX_K: f64 = 313.15;
