//! Coefficient tables of the seawater formulation.
//!
//! Entries are `(j, k, coeff)` for the supplementary pure-water series
//! and `(i, j, k, coeff)` for the saline series, in the published
//! order. Summation order does not affect the documented result.

/// Supplementary pure-water Gibbs series, indexed by `(j, k)` exponent
/// pairs in reduced temperature and pressure. Liquid water only, valid
/// below 313.15 K at moderate pressure.
pub(crate) const WATER_SUPP: [(i32, i32, f64); 41] = [
    (0, 0, 101.342743139674),
    (0, 1, 100015.695367145),
    (0, 2, -2544.5765420363),
    (0, 3, 284.517778446287),
    (0, 4, -33.3146754253611),
    (0, 5, 4.20263108803084),
    (0, 6, -0.546428511471039),
    (1, 0, 5.90578347909402),
    (1, 1, -270.983805184062),
    (1, 2, 776.153611613101),
    (1, 3, -196.51255088122),
    (1, 4, 28.9796526294175),
    (1, 5, -2.13290083518327),
    (2, 0, -12357.785933039),
    (2, 1, 1455.0364540468),
    (2, 2, -756.558385769359),
    (2, 3, 273.479662323528),
    (2, 4, -55.5604063817218),
    (2, 5, 4.34420671917197),
    (3, 0, 736.741204151612),
    (3, 1, -672.50778314507),
    (3, 2, 499.360390819152),
    (3, 3, -239.545330654412),
    (3, 4, 48.8012518593872),
    (3, 5, -1.66307106208905),
    (4, 0, -148.185936433658),
    (4, 1, 397.968445406972),
    (4, 2, -301.815380621876),
    (4, 3, 152.196371733841),
    (4, 4, -26.3748377232802),
    (5, 0, 58.0259125842571),
    (5, 1, -194.618310617595),
    (5, 2, 120.520654902025),
    (5, 3, -55.2723052340152),
    (5, 4, 6.48190668077221),
    (6, 0, -18.9843846514172),
    (6, 1, 63.5113936641785),
    (6, 2, -22.2897317140459),
    (6, 3, 8.17060541818112),
    (7, 0, 3.05081646487967),
    (7, 1, -9.63108119393062),
];

/// Saline Gibbs series, indexed by `(i, j, k)` exponents in the
/// salinity-ratio variable, reduced temperature and reduced pressure.
/// `i == 1` marks the logarithmic singular term.
pub(crate) const SALINE: [(i32, i32, i32, f64); 64] = [
    (1, 0, 0, 5812.81456626732),
    (2, 0, 0, 1416.27648484197),
    (3, 0, 0, -2432.14662381794),
    (4, 0, 0, 2025.80115603697),
    (5, 0, 0, -1091.66841042967),
    (6, 0, 0, 374.60123787784),
    (7, 0, 0, -48.5891069025409),
    (1, 1, 0, 851.226734946706),
    (2, 1, 0, 168.072408311545),
    (3, 1, 0, -493.407510141682),
    (4, 1, 0, 543.835333000098),
    (5, 1, 0, -196.028306689776),
    (6, 1, 0, 36.7571622995805),
    (2, 2, 0, 880.031352997204),
    (3, 2, 0, -43.0664675978042),
    (4, 2, 0, -68.5572509204491),
    (2, 3, 0, -225.267649263401),
    (3, 3, 0, -10.0227370861875),
    (4, 3, 0, 49.3667694856254),
    (2, 4, 0, 91.4260447751259),
    (3, 4, 0, 0.875600661808945),
    (4, 4, 0, -17.1397577419788),
    (2, 5, 0, -21.6603240875311),
    (4, 5, 0, 2.49697009569508),
    (2, 6, 0, 2.13016970847183),
    (2, 0, 1, -3310.49154044839),
    (3, 0, 1, 199.459603073901),
    (4, 0, 1, -54.7919133532887),
    (5, 0, 1, 36.0284195611086),
    (2, 1, 1, 729.116529735046),
    (3, 1, 1, -175.292041186547),
    (4, 1, 1, -22.6683558512829),
    (2, 2, 1, -860.764303783977),
    (3, 2, 1, 383.058066002476),
    (2, 3, 1, 694.244814133268),
    (3, 3, 1, -460.319931801257),
    (2, 4, 1, -297.728741987187),
    (3, 4, 1, 234.565187611355),
    (2, 0, 2, 384.794152978599),
    (3, 0, 2, -52.2940909281335),
    (4, 0, 2, -4.08193978912261),
    (2, 1, 2, -343.956902961561),
    (3, 1, 2, 83.1923927801819),
    (2, 2, 2, 337.409530269367),
    (3, 2, 2, -54.1917262517112),
    (2, 3, 2, -204.889641964903),
    (2, 4, 2, 74.726141138756),
    (2, 0, 3, -96.5324320107458),
    (3, 0, 3, 68.0444942726459),
    (4, 0, 3, -30.1755111971161),
    (2, 1, 3, 124.687671116248),
    (3, 1, 3, -29.483064349429),
    (2, 2, 3, -178.314556207638),
    (3, 2, 3, 25.6398487389914),
    (2, 3, 3, 113.561697840594),
    (2, 4, 3, -36.4872919001588),
    (2, 0, 4, 15.8408172766824),
    (3, 0, 4, -3.41251932441282),
    (2, 1, 4, -31.656964386073),
    (2, 2, 4, 44.2040358308),
    (2, 3, 4, -11.1282734326413),
    (2, 0, 5, -2.62480156590992),
    (2, 1, 5, 7.04658803315449),
    (2, 2, 5, -7.92001547211682),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(WATER_SUPP.len(), 41);
        assert_eq!(SALINE.len(), 64);
    }

    #[test]
    fn log_entries_have_zero_pressure_exponent() {
        // The singular i == 1 entries only appear with k == 0 and
        // j <= 1, so no pressure or second temperature derivative ever
        // touches the logarithmic factor.
        for (i, j, k, _) in SALINE {
            if i == 1 {
                assert_eq!(k, 0);
                assert!(j <= 1);
            }
        }
    }
}
