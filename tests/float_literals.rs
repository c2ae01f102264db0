//! Integration tests for float literal evaluation.
//!
//! Expected bit patterns are the correctly rounded IEEE encodings of the
//! exact decimal values.

mod test_util;

use litfold::{FloatConstant, FloatKind};
use rstest::rstest;
use test_util::float;

const TWO_POW_MINUS_149: &str = "0.00000000000000000000000000000000000000000000140129846432481707092372958328991613128026194187651577175706828388979108268586060148663818836212158203125";
const TWO_POW_MINUS_150: &str = "0.000000000000000000000000000000000000000000000700649232162408535461864791644958065640130970938257885878534141944895541342930300743319094181060791015625";
const TWO_POW_MINUS_126: &str = "0.000000000000000000000000000000000000011754943508222875079687365372222456778186655567720875215087517062784172594547271728515625";

#[rstest]
#[case::one_and_a_half("1.5", 0x3fc0_0000)]
#[case::half("0.5", 0x3f00_0000)]
#[case::three("3.0", 0x4040_0000)]
#[case::leading_dot(".25", 0x3e80_0000)]
#[case::trailing_dot("2.", 0x4000_0000)]
#[case::hundred("100.0", 0x42c8_0000)]
#[case::two_pow_24("16777216.0", 0x4b80_0000)]
#[case::rounds_to_two_pow_53("9007199254740993.0", 0x5a00_0000)]
#[case::flt_max("340282346638528859811704183484516925440.0", 0x7f7f_ffff)]
#[case::smallest_normal(TWO_POW_MINUS_126, 0x0080_0000)]
#[case::smallest_subnormal(TWO_POW_MINUS_149, 0x0000_0001)]
#[case::zero("0.0", 0x0000_0000)]
#[case::positive_zero("+0.0", 0x0000_0000)]
#[case::negative_zero("-0.0", 0x8000_0000)]
#[case::negative("-1.5", 0xbfc0_0000)]
fn exact_in_single_precision(#[case] src: &str, #[case] bits: u32) {
    assert_eq!(float(src), FloatConstant::Single(bits));
}

#[rstest]
#[case::one_point_one("1.1", 0x3ff1_9999_9999_999a)]
#[case::tenth("0.1", 0x3fb9_9999_9999_999a)]
#[case::three_tenths("0.3", 0x3fd3_3333_3333_3333)]
#[case::next_after_three_tenths("0.30000000000000004", 0x3fd3_3333_3333_3334)]
#[case::two_pow_24_plus_one("16777217.0", 0x4170_0000_1000_0000)]
#[case::two_pow_128("340282366920938463463374607431768211456.0", 0x47f0_0000_0000_0000)]
#[case::pi(
    "3.141592653589793238462643383279502884197169399375",
    0x4009_21fb_5444_2d18
)]
#[case::half_smallest_single_subnormal(TWO_POW_MINUS_150, 0x3690_0000_0000_0000)]
fn needs_double_precision(#[case] src: &str, #[case] bits: u64) {
    assert_eq!(float(src), FloatConstant::Double(bits));
}

#[rstest]
fn overflow_is_single_infinity() {
    let src = format!("1{}.0", "0".repeat(310));
    assert_eq!(float(&src), FloatConstant::Single(0x7f80_0000));
}

#[rstest]
fn double_subnormal_stays_double() {
    let src = format!("0.{}1", "0".repeat(307));
    assert_eq!(float(&src), FloatConstant::Double(0x0007_30d6_7819_e8d2));
}

#[rstest]
#[case::half_min_subnormal("5", FloatConstant::Double(0x1))]
#[case::just_above_half("24703282292062328", FloatConstant::Double(0x1))]
#[case::just_below_half("24703282292062327", FloatConstant::Single(0x0))]
fn tiny_values_round_at_double_subnormal_boundary(
    #[case] tail: &str,
    #[case] expected: FloatConstant,
) {
    let src = format!("0.{}{tail}", "0".repeat(323));
    assert_eq!(float(&src), expected);
}

#[rstest]
#[case::below("0000001788139343261718749999")]
#[case::above("0000001788139343261718750001")]
#[case::exact("000000178813934326171875")]
fn values_near_single_midpoint_stay_double(#[case] fraction: &str) {
    let constant = float(&format!("1.{fraction}"));
    assert_eq!(constant, FloatConstant::Double(0x3ff0_0000_3000_0000));
}

#[rstest]
#[expect(
    clippy::cast_possible_truncation,
    reason = "narrowing to f32 is the property under test"
)]
fn classification_follows_single_round_trip() {
    for src in ["1.1", "1.5", "0.1", "3.0", "16777217.0"] {
        let constant = float(src);
        let value = constant.to_f64();
        let round_trips = f64::from(value as f32).to_bits() == value.to_bits();
        assert_eq!(constant.kind() == FloatKind::Single, round_trips, "{src}");
    }
}

#[rstest]
fn renders_as_hex_pattern() {
    assert_eq!(float("1.5").to_string(), "(f32 0x3fc00000)");
    assert_eq!(float("0.1").to_string(), "(f64 0x3fb999999999999a)");
}
