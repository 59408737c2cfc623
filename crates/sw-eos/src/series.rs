//! Double power-series evaluation in reduced temperature and pressure.
//!
//! Both Gibbs series of the formulation share this shape: a sum of
//! `coeff · tau^j · pi^k` terms, differentiated up to second order in
//! each reduced variable, with the saline variant carrying an extra
//! salinity-ratio dimension and one logarithmic singular term. All
//! partials accumulate in a single pass over the table; the unit
//! normalization to kJ/kg and m³/kg is applied after summation.

use crate::consts::{P_REF_MPA, P_SPAN, S_REF, T_REF_K, T_SPAN};
use crate::gibbs::GibbsDerivs;

/// Reduced temperature for T in kelvin.
#[inline]
pub fn reduced_t(t_k: f64) -> f64 {
    (t_k - T_REF_K) / T_SPAN
}

/// Reduced pressure for P in MPa.
#[inline]
pub fn reduced_p(p_mpa: f64) -> f64 {
    (p_mpa - P_REF_MPA) / P_SPAN
}

/// Convert raw accumulator sums to the output units: ×10⁻³ for
/// energy-like terms, ×10⁻⁶ for volume-like terms, with one reduction
/// span divisor per derivative order. The salinity derivatives carry
/// the extra `2·S_ref` factor of the salinity-ratio chain rule.
#[allow(clippy::too_many_arguments)]
fn normalize(g: f64, gt: f64, gp: f64, gtt: f64, gtp: f64, gpp: f64, gs: f64, gsp: f64) -> GibbsDerivs {
    GibbsDerivs {
        g: g * 1e-3,
        gt: gt / T_SPAN * 1e-3,
        gp: gp / P_SPAN * 1e-6,
        gtt: gtt / (T_SPAN * T_SPAN) * 1e-3,
        gtp: gtp / T_SPAN / P_SPAN * 1e-6,
        gpp: gpp / (P_SPAN * P_SPAN) * 1e-6,
        gs: gs / S_REF / 2.0 * 1e-3,
        gsp: gsp / S_REF / 2.0 / P_SPAN * 1e-6,
    }
}

/// Evaluate a `(j, k, coeff)` series without a salinity dimension.
pub fn eval_pure(table: &[(i32, i32, f64)], tau: f64, pi: f64) -> GibbsDerivs {
    let (mut g, mut gt, mut gp, mut gtt, mut gtp, mut gpp) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    for &(j, k, c) in table {
        g += c * tau.powi(j) * pi.powi(k);
        if j >= 1 {
            gt += c * f64::from(j) * tau.powi(j - 1) * pi.powi(k);
        }
        if k >= 1 {
            gp += f64::from(k) * c * tau.powi(j) * pi.powi(k - 1);
        }
        if j >= 2 {
            gtt += f64::from(j * (j - 1)) * c * tau.powi(j - 2) * pi.powi(k);
        }
        if j >= 1 && k >= 1 {
            gtp += f64::from(j * k) * c * tau.powi(j - 1) * pi.powi(k - 1);
        }
        if k >= 2 {
            gpp += f64::from(k * (k - 1)) * c * tau.powi(j) * pi.powi(k - 2);
        }
    }

    normalize(g, gt, gp, gtt, gtp, gpp, 0.0, 0.0)
}

/// Evaluate an `(i, j, k, coeff)` series in the salinity-ratio variable
/// `x` with the logarithmic mode: `i == 1` entries use `x²·ln(x)` as
/// the salinity factor (only the tau/pi exponents are differentiated
/// for `gt`), and `2·ln(x) + 1` for the salinity derivative.
///
/// `x` must be positive; the `x = 0` case is the caller's zero branch.
pub fn eval_saline(table: &[(i32, i32, i32, f64)], x: f64, tau: f64, pi: f64) -> GibbsDerivs {
    let (mut g, mut gt, mut gp, mut gtt, mut gtp, mut gpp) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let (mut gs, mut gsp) = (0.0, 0.0);
    let ln_x = x.ln();
    let x2_ln_x = x * x * ln_x;

    for &(i, j, k, c) in table {
        if i == 1 {
            g += c * x2_ln_x * tau.powi(j) * pi.powi(k);
            gs += c * (2.0 * ln_x + 1.0) * tau.powi(j) * pi.powi(k);
        } else {
            g += c * x.powi(i) * tau.powi(j) * pi.powi(k);
            gs += f64::from(i) * c * x.powi(i - 2) * tau.powi(j) * pi.powi(k);
        }
        if j >= 1 {
            let xf = if i == 1 { x2_ln_x } else { x.powi(i) };
            gt += c * xf * f64::from(j) * tau.powi(j - 1) * pi.powi(k);
        }
        if k >= 1 {
            gp += f64::from(k) * c * x.powi(i) * tau.powi(j) * pi.powi(k - 1);
            gsp += f64::from(i * k) * c * x.powi(i - 2) * tau.powi(j) * pi.powi(k - 1);
        }
        if j >= 2 {
            gtt += f64::from(j * (j - 1)) * c * x.powi(i) * tau.powi(j - 2) * pi.powi(k);
        }
        if j >= 1 && k >= 1 {
            gtp += f64::from(j * k) * c * x.powi(i) * tau.powi(j - 1) * pi.powi(k - 1);
        }
        if k >= 2 {
            gpp += f64::from(k * (k - 1)) * c * x.powi(i) * tau.powi(j) * pi.powi(k - 2);
        }
    }

    normalize(g, gt, gp, gtt, gtp, gpp, gs, gsp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{SALINE, WATER_SUPP};

    #[test]
    fn supplementary_series_at_reference_point() {
        // At tau = pi = 0 a single table entry survives per
        // accumulator, so every output is one coefficient times its
        // integer factor and scale.
        let d = eval_pure(&WATER_SUPP, 0.0, 0.0);
        assert!((d.g - 0.101342743139674).abs() < 1e-15);
        assert!((d.gt - 1.476445869773505e-4).abs() < 1e-18);
        assert!((d.gp - 1.00015695367145e-3).abs() < 1e-17);
        assert!((d.gtt - -0.01544723241629875).abs() < 1e-16);
        assert!((d.gtp - -6.77459512960155e-8).abs() < 1e-21);
        assert!((d.gpp - -5.0891530840726e-7).abs() < 1e-20);
        assert_eq!(d.gs, 0.0);
        assert_eq!(d.gsp, 0.0);
    }

    // The cross-partial checks difference g over physical T and P.
    // g is in kJ/kg while gtp is in m³/(kg·K); 1 kJ/(kg·MPa) equals
    // 10⁻³ m³/kg, hence the 1e-3 on the finite-difference estimate.

    #[test]
    fn mixed_partial_matches_finite_difference_pure() {
        let (t, p) = (300.0, 10.0);
        let (dt, dp) = (0.05, 0.05);
        let f = |t_k: f64, p_mpa: f64| eval_pure(&WATER_SUPP, reduced_t(t_k), reduced_p(p_mpa)).g;
        let fd = (f(t + dt, p + dp) - f(t + dt, p - dp) - f(t - dt, p + dp) + f(t - dt, p - dp))
            / (4.0 * dt * dp)
            * 1e-3;
        let gtp = eval_pure(&WATER_SUPP, reduced_t(t), reduced_p(p)).gtp;
        assert!(
            (fd - gtp).abs() < gtp.abs() * 1e-4 + 1e-12,
            "fd = {fd}, gtp = {gtp}"
        );
    }

    #[test]
    fn mixed_partial_matches_finite_difference_saline() {
        let x = (0.035_f64 / crate::consts::S_REF).sqrt();
        let (t, p) = (295.0, 5.0);
        let (dt, dp) = (0.05, 0.05);
        let f =
            |t_k: f64, p_mpa: f64| eval_saline(&SALINE, x, reduced_t(t_k), reduced_p(p_mpa)).g;
        let fd = (f(t + dt, p + dp) - f(t + dt, p - dp) - f(t - dt, p + dp) + f(t - dt, p - dp))
            / (4.0 * dt * dp)
            * 1e-3;
        let gtp = eval_saline(&SALINE, x, reduced_t(t), reduced_p(p)).gtp;
        assert!(
            (fd - gtp).abs() < gtp.abs() * 1e-4 + 1e-12,
            "fd = {fd}, gtp = {gtp}"
        );
    }

    #[test]
    fn temperature_derivative_matches_finite_difference() {
        let x = (0.04_f64 / crate::consts::S_REF).sqrt();
        let (t, p) = (300.0, 1.0);
        let dt = 0.01;
        let f = |t_k: f64| eval_saline(&SALINE, x, reduced_t(t_k), reduced_p(p)).g;
        let fd = (f(t + dt) - f(t - dt)) / (2.0 * dt);
        let gt = eval_saline(&SALINE, x, reduced_t(t), reduced_p(p)).gt;
        assert!((fd - gt).abs() < gt.abs() * 1e-6 + 1e-12, "fd = {fd}, gt = {gt}");
    }
}
