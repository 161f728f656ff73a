//! Score computation for each CVSS version, plus the shared rounding rules.

pub mod v2;
pub mod v3;
pub mod v4;
mod v4_lookup;

/// CVSS 3.x "round up": the smallest one-decimal value that is >= the input.
///
/// Implemented per the 3.1 specification appendix: scale by 1e5 first so
/// float representation noise (e.g. 8.6 stored as 8.599999...) does not
/// push a value across a 0.1 boundary.
pub(crate) fn round_up(value: f64) -> f64 {
    let scaled = (value * 100_000.0).round() as i64;
    if scaled % 10_000 == 0 {
        scaled as f64 / 100_000.0
    } else {
        ((scaled / 10_000) + 1) as f64 / 10.0
    }
}

/// Standard rounding to one decimal, half away from zero (CVSS 2.0 and the
/// final 4.0 value).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_is_a_ceiling_at_one_decimal() {
        assert_eq!(round_up(4.02), 4.1);
        assert_eq!(round_up(4.0), 4.0);
        assert_eq!(round_up(7.941190), 8.0);
        assert_eq!(round_up(0.0), 0.0);
        assert_eq!(round_up(9.99999), 10.0);
    }

    #[test]
    fn round_up_ignores_representation_noise() {
        // 8.6 is not exactly representable; a naive ceil would yield 8.7.
        assert_eq!(round_up(0.1 + 8.5), 8.6);
    }

    #[test]
    fn round1_is_half_away() {
        assert_eq!(round1(6.6555), 6.7);
        assert_eq!(round1(1.746708), 1.7);
        assert_eq!(round1(9.9951), 10.0);
        assert_eq!(round1(0.04), 0.0);
    }
}
