//! CoolProp-backed integration tests.
//!
//! These tests exercise the pure-water delegate for real. The anchor
//! values come from the published formulation; we use tolerances wide
//! enough to absorb backend solver differences but tight enough to
//! catch any transform or scaling mistake.

use sw_core::units::{k, mpa};
use sw_eos::{SeaWaterInput, SeaWaterModel};

fn state(model: &SeaWaterModel, t_k: f64, p_mpa: f64, s: f64, fast: bool) -> sw_eos::SeaWaterState {
    let input = SeaWaterInput::new(mpa(p_mpa), k(t_k), s, fast).unwrap();
    model.evaluate(&input).unwrap()
}

#[test]
fn reference_state_delegate_strategy() {
    let model = SeaWaterModel::new();
    let st = state(&model, 300.0, 1.0, 0.04, false);

    assert!(
        (st.density_kg_m3() - 1026.7785717245113).abs() < 0.05,
        "rho = {} kg/m³",
        st.density_kg_m3()
    );
    assert!(
        (st.derivs.gs - 88.56221805501536).abs() < 1e-6,
        "gs = {} kJ/kg",
        st.derivs.gs
    );

    let saline = st.saline.expect("nonzero salinity outputs");
    assert!(
        (saline.haline - 0.7311487666026304).abs() < 1e-4,
        "haline = {}",
        saline.haline
    );
}

#[test]
fn delegate_and_fast_strategies_agree() {
    // The two pure-water strategies model the same physical term via
    // two numerical approximations; below 313.15 K at moderate
    // pressure they must agree closely.
    let model = SeaWaterModel::new();

    for t_k in [280.0, 300.0, 310.0] {
        for p_mpa in [0.101325, 1.0, 5.0] {
            for s in [0.0, 0.035] {
                let fast = state(&model, t_k, p_mpa, s, true);
                let full = state(&model, t_k, p_mpa, s, false);

                let rho_rel =
                    (fast.density_kg_m3() - full.density_kg_m3()).abs() / full.density_kg_m3();
                assert!(
                    rho_rel < 1e-4,
                    "rho mismatch at T={t_k}, P={p_mpa}, S={s}: {} vs {}",
                    fast.density_kg_m3(),
                    full.density_kg_m3()
                );

                let dh = (fast.enthalpy_kj_kg - full.enthalpy_kj_kg).abs();
                assert!(dh < 0.05, "h mismatch at T={t_k}, P={p_mpa}, S={s}: {dh}");

                let ds = (fast.entropy_kj_kg_k - full.entropy_kj_kg_k).abs();
                assert!(ds < 2e-4, "s mismatch at T={t_k}, P={p_mpa}, S={s}: {ds}");

                let dcp = (fast.cp_kj_kg_k - full.cp_kj_kg_k).abs();
                assert!(dcp < 5e-3, "cp mismatch at T={t_k}, P={p_mpa}, S={s}: {dcp}");

                let w_rel =
                    (fast.sound_speed_m_s() - full.sound_speed_m_s()).abs() / full.sound_speed_m_s();
                assert!(w_rel < 1e-3, "w mismatch at T={t_k}, P={p_mpa}, S={s}");
            }
        }
    }
}

#[test]
fn salinity_derivatives_are_strategy_independent() {
    // gs and gsp come from the saline series alone; the water strategy
    // must not change them.
    let model = SeaWaterModel::new();
    let fast = state(&model, 305.0, 2.0, 0.03, true);
    let full = state(&model, 305.0, 2.0, 0.03, false);

    assert!((fast.derivs.gs - full.derivs.gs).abs() < 1e-15);
    assert!((fast.derivs.gsp - full.derivs.gsp).abs() < 1e-21);
}

#[test]
fn fast_flag_falls_back_above_envelope() {
    // Above 313.15 K the fast flag silently selects the delegate, so
    // both calls hit the same backend and produce the same state.
    let model = SeaWaterModel::new();
    let flagged = state(&model, 320.0, 1.0, 0.035, true);
    let delegate = state(&model, 320.0, 1.0, 0.035, false);

    assert!((flagged.density_kg_m3() - delegate.density_kg_m3()).abs() < 1e-12);
    assert!((flagged.enthalpy_kj_kg - delegate.enthalpy_kj_kg).abs() < 1e-12);
}

#[test]
fn pure_water_through_delegate() {
    let model = SeaWaterModel::new();
    let st = state(&model, 300.0, 1.0, 0.0, false);

    assert!(st.saline.is_none());
    // Liquid water density near this state
    assert!(
        st.density_kg_m3() > 990.0 && st.density_kg_m3() < 1000.0,
        "rho = {} kg/m³",
        st.density_kg_m3()
    );
    // Sound speed of liquid water is about 1.5 km/s
    assert!(
        st.sound_speed_m_s() > 1400.0 && st.sound_speed_m_s() < 1600.0,
        "w = {} m/s",
        st.sound_speed_m_s()
    );
}

#[test]
fn backend_failure_propagates() {
    let model = SeaWaterModel::new();
    // Far above the validity region of the water formulation
    let input = SeaWaterInput::new(mpa(1.0), k(50_000.0), 0.0, false).unwrap();

    let err = model.evaluate(&input).unwrap_err();
    assert!(matches!(err, sw_eos::EosError::Backend { .. }));
}

#[test]
fn backend_name_is_reported() {
    let model = SeaWaterModel::new();
    assert!(model.water_backend().contains("CoolProp"));
}
