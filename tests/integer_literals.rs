//! Integration tests for integer literal evaluation and tier narrowing.

mod test_util;

use litfold::{
    IntType, TierTable,
    literal::{Base, Sign, evaluate_integer_literal, evaluate_number},
};
use rstest::rstest;
use test_util::{int, split_sign};

#[rstest]
#[case::zero("0", IntType::unsigned(8), 0)]
#[case::u8_max("255", IntType::unsigned(8), 255)]
#[case::past_u8("256", IntType::unsigned(16), 256)]
#[case::u16_max("65535", IntType::unsigned(16), 65_535)]
#[case::past_u16("65536", IntType::unsigned(32), 65_536)]
#[case::u32_max("4294967295", IntType::unsigned(32), 4_294_967_295)]
#[case::past_u32("4294967296", IntType::unsigned(64), 4_294_967_296)]
#[case::u64_max("18446744073709551615", IntType::unsigned(64), 18_446_744_073_709_551_615)]
#[case::i8_min("-128", IntType::signed(8), -128)]
#[case::i8_max("+127", IntType::signed(8), 127)]
#[case::past_i8_min("-129", IntType::signed(16), -129)]
#[case::past_i8_max("+128", IntType::signed(16), 128)]
#[case::i64_min("-9223372036854775808", IntType::signed(64), -9_223_372_036_854_775_808)]
#[case::plus_zero("+0", IntType::signed(8), 0)]
#[case::minus_zero("-0", IntType::signed(8), 0)]
fn narrows_to_smallest_tier(#[case] src: &str, #[case] ty: IntType, #[case] value: i128) {
    let constant = int(src);
    assert_eq!(constant.ty(), ty);
    assert_eq!(constant.value(), value);
}

#[rstest]
#[case::binary("0b0111101010110111")]
#[case::octal("075267")]
#[case::padded_octal("0075267")]
#[case::decimal("31415")]
#[case::hex("0x7AB7")]
#[case::padded_hex("0x007ab7")]
fn bases_agree_on_value(#[case] src: &str) {
    let constant = int(src);
    assert_eq!(constant.ty(), IntType::unsigned(16));
    assert_eq!(constant.value(), 31_415);
}

#[rstest]
#[case::past_u64("18446744073709551616", false)]
#[case::well_past_u64("18446744073709551617", false)]
#[case::past_i64_min("-9223372036854775809", true)]
#[case::past_i64_max("+9223372036854775808", true)]
#[case::long_hex("0x1ffffffffffffffff", false)]
fn reports_range_errors(#[case] src: &str, #[case] signed: bool) {
    let (sign, text) = split_sign(src);
    let err = match evaluate_number(sign, text, &TierTable::default()) {
        Ok(constant) => panic!("expected range error, got {constant:?}"),
        Err(err) => err,
    };
    assert_eq!(err.literal(), src);
    assert_eq!(err.is_signed(), signed);
}

#[rstest]
fn negative_bits_are_twos_complement_of_tier() {
    let constant = int("-129");
    assert_eq!(constant.bits(), 0xFF7F);
    assert_eq!(constant.to_string(), "(i16 -129)");
}

#[rstest]
fn leading_zeros_do_not_widen() {
    let constant = int("0x00000000000000000000000000000000000000FF");
    assert_eq!(constant.ty(), IntType::unsigned(8));
    assert_eq!(constant.value(), 255);
}

#[rstest]
#[case::four_tier(&[8, 16, 32, 64], "300", IntType::unsigned(16))]
#[case::three_tier(&[8, 32, 64], "300", IntType::unsigned(32))]
#[case::odd_widths(&[12, 24, 64], "4095", IntType::unsigned(12))]
fn custom_tables_drive_narrowing(
    #[case] widths: &[u32],
    #[case] digits: &str,
    #[case] ty: IntType,
) {
    let tiers = TierTable::new(widths, widths).unwrap_or_else(|e| panic!("bad table: {e}"));
    let constant = evaluate_integer_literal(Sign::None, Base::Decimal, digits, &tiers)
        .unwrap_or_else(|e| panic!("unexpected range error: {e}"));
    assert_eq!(constant.ty(), ty);
}

#[rstest]
fn narrow_table_rejects_what_default_accepts() {
    let tiers = TierTable::new(&[8, 16, 32], &[8, 16, 32])
        .unwrap_or_else(|e| panic!("bad table: {e}"));
    let result = evaluate_integer_literal(Sign::None, Base::Decimal, "4294967296", &tiers);
    assert!(result.is_err());
}
