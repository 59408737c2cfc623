//! Gibbs energy derivative set.

use std::ops::Add;

/// Specific Gibbs energy and its partial derivatives with respect to
/// temperature, pressure and salinity, up to second order.
///
/// Every property of the state follows from this set by closed-form
/// chain-rule formulas. The pure-water and saline contributions each
/// produce one; the combined set is their field-wise sum. `gs` and
/// `gsp` are meaningful only for the saline contribution and are zero
/// for pure water.
///
/// Units: `g` kJ/kg, `gt` kJ/(kg·K), `gp` m³/kg, `gtt` kJ/(kg·K²),
/// `gtp` m³/(kg·K), `gpp` m³/(kg·MPa), `gs` kJ/kg, `gsp` m³/kg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GibbsDerivs {
    pub g: f64,
    pub gt: f64,
    pub gp: f64,
    pub gtt: f64,
    pub gtp: f64,
    pub gpp: f64,
    pub gs: f64,
    pub gsp: f64,
}

impl GibbsDerivs {
    /// The all-zero derivative set (the saline contribution at S = 0).
    pub const ZERO: GibbsDerivs = GibbsDerivs {
        g: 0.0,
        gt: 0.0,
        gp: 0.0,
        gtt: 0.0,
        gtp: 0.0,
        gpp: 0.0,
        gs: 0.0,
        gsp: 0.0,
    };
}

impl Add for GibbsDerivs {
    type Output = GibbsDerivs;

    fn add(self, rhs: GibbsDerivs) -> GibbsDerivs {
        GibbsDerivs {
            g: self.g + rhs.g,
            gt: self.gt + rhs.gt,
            gp: self.gp + rhs.gp,
            gtt: self.gtt + rhs.gtt,
            gtp: self.gtp + rhs.gtp,
            gpp: self.gpp + rhs.gpp,
            gs: self.gs + rhs.gs,
            gsp: self.gsp + rhs.gsp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_additive_identity() {
        let d = GibbsDerivs {
            g: 1.0,
            gt: 2.0,
            gp: 3.0,
            gtt: 4.0,
            gtp: 5.0,
            gpp: 6.0,
            gs: 7.0,
            gsp: 8.0,
        };
        assert_eq!(d + GibbsDerivs::ZERO, d);
    }

    #[test]
    fn addition_is_field_wise() {
        let a = GibbsDerivs {
            g: 1.0,
            gt: 1.0,
            gp: 1.0,
            gtt: 1.0,
            gtp: 1.0,
            gpp: 1.0,
            gs: 1.0,
            gsp: 1.0,
        };
        let b = GibbsDerivs {
            g: 0.5,
            gt: -0.5,
            gp: 0.25,
            gtt: -0.25,
            gtp: 2.0,
            gpp: -2.0,
            gs: 4.0,
            gsp: -4.0,
        };
        let c = a + b;
        assert_eq!(c.g, 1.5);
        assert_eq!(c.gt, 0.5);
        assert_eq!(c.gp, 1.25);
        assert_eq!(c.gtt, 0.75);
        assert_eq!(c.gtp, 3.0);
        assert_eq!(c.gpp, -1.0);
        assert_eq!(c.gs, 5.0);
        assert_eq!(c.gsp, -3.0);
    }
}
