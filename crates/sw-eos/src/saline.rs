//! Saline correction term.

use crate::consts::S_REF;
use crate::gibbs::GibbsDerivs;
use crate::series::{eval_saline, reduced_p, reduced_t};
use crate::tables::SALINE;
use sw_core::timing;

/// Salinity-dependent correction to the Gibbs energy and its
/// derivatives at temperature [K], pressure [MPa] and absolute
/// salinity [kg/kg].
///
/// S = 0 has no saline contribution and the series is singular at
/// X = 0, so the zero set is returned without evaluating it. The check
/// is an exact comparison: arbitrarily small nonzero salinities still
/// go through the series.
pub fn saline_gibbs(t_k: f64, p_mpa: f64, salinity: f64) -> GibbsDerivs {
    if salinity == 0.0 {
        return GibbsDerivs::ZERO;
    }

    let timer = timing::Timer::start("saline_series");
    let x = (salinity / S_REF).sqrt();
    let derivs = eval_saline(&SALINE, x, reduced_t(t_k), reduced_p(p_mpa));
    if let Some(elapsed) = timer.stop() {
        timing::eos_timing::SALINE_CALLS.record(elapsed);
    }
    derivs
}
