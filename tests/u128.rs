use wideuint::UintError;
use wideuint::primitives::U128;

#[test]
fn u128_consts() {
    assert_eq!(U128::MAX, U128::new(u64::MAX, u64::MAX));
    assert_eq!(U128::ZERO, U128::default());
    assert_eq!(U128::ONE, U128::from(1u8));
    assert!(U128::ZERO.is_zero());
    assert!(!U128::ONE.is_zero());
}

#[test]
fn u128_ordering_compares_upper_first() {
    let small = U128::new(0, u64::MAX);
    let big = U128::new(1, 0);

    assert!(small < big);
    assert!(U128::new(1, 1) > big);
    assert_eq!(U128::new(7, 7).cmp(&U128::new(7, 7)), core::cmp::Ordering::Equal);
}

#[test]
fn u128_from_native_sign_extends() {
    assert_eq!(U128::from(-1i32), U128::MAX);
    assert_eq!(U128::from(-2i64), U128::new(u64::MAX, u64::MAX - 1));
    assert_eq!(U128::from(-128i8), U128::new(u64::MAX, (-128i64) as u64));
    assert_eq!(U128::from(127i8), U128::new(0, 127));
    assert_eq!(U128::from_native(42usize), U128::new(0, 42));
    assert_eq!(U128::from(u128::MAX), U128::MAX);
}

#[test]
fn u128_truncate_and_try_from() {
    let v = U128::new(1, 0x1_0000_00FF);

    assert_eq!(v.truncate_to::<u8>(), 0xFF);
    assert_eq!(v.truncate_to::<u32>(), 0xFF);
    assert_eq!(v.truncate_to::<u64>(), 0x1_0000_00FF);
    assert_eq!(v.truncate_to::<u128>(), (1u128 << 64) | 0x1_0000_00FF);
    assert_eq!(U128::MAX.truncate_to::<i8>(), -1);

    assert_eq!(u64::try_from(U128::new(0, 5)), Ok(5));
    assert_eq!(u8::try_from(U128::from(255u8)), Ok(255));
    assert_eq!(
        u8::try_from(U128::from(256u16)),
        Err(UintError::Overflow { bits: 8 })
    );
    assert_eq!(
        u64::try_from(U128::new(1, 0)),
        Err(UintError::Overflow { bits: 64 })
    );
    assert_eq!(u128::try_from(U128::MAX), Ok(u128::MAX));
}

#[test]
fn u128_word_and_byte_arrays() {
    let v = U128::new(0x0102_0304_0506_0708, 0x090A_0B0C_0D0E_0F10);

    let words: [u64; 2] = v.into();
    assert_eq!(words, [0x0102_0304_0506_0708, 0x090A_0B0C_0D0E_0F10]);
    assert_eq!(U128::from(words), v);

    let bytes: [u8; 16] = v.into();
    assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    assert_eq!(U128::from(bytes), v);
}

#[test]
fn u128_add_and_sub_carry_borrow() {
    let low_full = U128::new(0, u64::MAX);

    assert_eq!(low_full + 1u8, U128::new(1, 0));
    assert_eq!(U128::new(1, 0) - 1u8, low_full);

    assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
    assert_eq!(U128::ZERO - U128::ONE, U128::MAX);

    let (_, overflow) = U128::MAX.overflowing_add(U128::ONE);
    assert!(overflow);
    let (_, overflow) = low_full.overflowing_add(U128::ONE);
    assert!(!overflow);
    let (_, borrow) = U128::ZERO.overflowing_sub(U128::ONE);
    assert!(borrow);
}

#[test]
fn u128_increment_and_decrement_wrap() {
    let mut v = U128::MAX;
    v += 1u8;
    assert_eq!(v, U128::ZERO);

    v -= 1u8;
    assert_eq!(v, U128::MAX);
}

#[test]
fn u128_mul_matches_native() {
    let a = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    let b = 0xF0E1_D2C3_B4A5_9687_7869_5A4B_3C2D_1E0Fu128;

    assert_eq!(
        U128::from(a) * U128::from(b),
        U128::from(0xc3c3d4f72a6ec42aa229a005599ccef0u128)
    );
    assert_eq!(U128::from(a) * U128::from(b), U128::from(a.wrapping_mul(b)));

    assert_eq!(U128::MAX * 2u8, U128::new(u64::MAX, u64::MAX - 1));
    assert_eq!(U128::new(0, u64::MAX) * U128::new(0, u64::MAX), U128::new(u64::MAX - 1, 1));
}

#[test]
fn u128_widening_mul() {
    assert_eq!(U128::widening_mul(u64::MAX, u64::MAX), U128::new(u64::MAX - 1, 1));
    assert_eq!(U128::widening_mul(1 << 32, 1 << 32), U128::new(1, 0));
}

#[test]
fn u128_divmod_fast_paths() {
    let v = U128::new(3, 99);

    assert_eq!(v.divmod(U128::ONE), Ok((v, U128::ZERO)));
    assert_eq!(v.divmod(v), Ok((U128::ONE, U128::ZERO)));
    assert_eq!(v.divmod(U128::MAX), Ok((U128::ZERO, v)));
    assert_eq!(U128::ZERO.divmod(v), Ok((U128::ZERO, U128::ZERO)));
    assert_eq!(v.divmod(U128::ZERO), Err(UintError::DivisionByZero));
    assert_eq!(v.checked_div(U128::ZERO), Err(UintError::DivisionByZero));
    assert_eq!(v.checked_rem(U128::ZERO), Err(UintError::DivisionByZero));
}

#[test]
fn u128_div_matches_native() {
    let a = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    let b = 0xF0E1_D2C3_B4A5_9687_7869_5A4B_3C2D_1E0Fu128;

    assert_eq!(U128::from(b) / U128::from(a), U128::from(0xd3u8));
    assert_eq!(
        U128::from(b) % U128::from(a),
        U128::from(0xcf9e6d3c0ad9b8687b8ea1b4c7dadfu128)
    );
    assert_eq!(U128::from(a) / U128::from(b), U128::ZERO);

    assert_eq!(U128::MAX / 3u8, U128::from(u128::MAX / 3));
    assert_eq!(U128::MAX % 10u8, U128::from(u128::MAX % 10));
    assert_eq!(U128::from(1000u32) / 10u8, U128::from(100u8));
}

#[test]
#[should_panic(expected = "division by zero")]
fn u128_div_by_zero_panics() {
    let _ = U128::ONE / U128::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn u128_rem_by_zero_panics() {
    let _ = U128::ONE % 0u8;
}

#[test]
fn u128_shifts() {
    let one = U128::ONE;

    assert_eq!(one << 0u32, one);
    assert_eq!(one << 1u32, U128::from(2u8));
    assert_eq!(one << 64u32, U128::new(1, 0));
    assert_eq!(one << 127u32, U128::new(1 << 63, 0));
    assert_eq!(one << 128u32, U128::ZERO);
    assert_eq!(U128::new(0, 0x8000_0000_0000_0001) << 1u32, U128::new(1, 2));

    let top = U128::new(1 << 63, 0);
    assert_eq!(top >> 127u32, one);
    assert_eq!(top >> 64u32, U128::new(0, 1 << 63));
    assert_eq!(U128::new(1, 2) >> 1u32, U128::new(0, 0x8000_0000_0000_0001));
    assert_eq!(top >> 128u32, U128::ZERO);
}

#[test]
fn u128_shift_out_of_range_returns_zero() {
    let v = U128::MAX;
    let huge = U128::new(1, 0);
    let just_over = U128::from(128u8);

    assert_eq!(v << huge, U128::ZERO);
    assert_eq!(v >> huge, U128::ZERO);
    assert_eq!(v << just_over, U128::ZERO);
    assert_eq!(v >> just_over, U128::ZERO);
    assert_eq!(v << U128::from(127u8), U128::new(1 << 63, 0));
}

#[test]
fn u128_bitwise_ops() {
    let a = U128::new(0xFF00_FF00_FF00_FF00, 0x0F0F_0F0F_0F0F_0F0F);
    let b = U128::new(0x0FF0_0FF0_0FF0_0FF0, 0xFFFF_0000_FFFF_0000);

    assert_eq!(a & b, U128::new(0x0F00_0F00_0F00_0F00, 0x0F0F_0000_0F0F_0000));
    assert_eq!(a | b, U128::new(0xFFF0_FFF0_FFF0_FFF0, 0xFFFF_0F0F_FFFF_0F0F));
    assert_eq!(a ^ b, U128::new(0xF0F0_F0F0_F0F0_F0F0, 0xF0F0_0F0F_F0F0_0F0F));
    assert_eq!(!U128::ZERO, U128::MAX);
}

#[test]
fn u128_bit_counts() {
    assert_eq!(U128::ZERO.bits(), 0);
    assert_eq!(U128::ONE.bits(), 1);
    assert_eq!(U128::new(0, u64::MAX).bits(), 64);
    assert_eq!(U128::new(1, 0).bits(), 65);
    assert_eq!(U128::MAX.bits(), 128);

    assert_eq!(U128::ZERO.leading_zeros(), 128);
    assert_eq!(U128::new(0x10, 0).leading_zeros(), 59);
    assert_eq!(U128::ZERO.trailing_zeros(), 128);
    assert_eq!(U128::new(1, 0).trailing_zeros(), 64);
    assert_eq!(U128::MAX.count_ones(), 128);
}

#[test]
fn u128_to_string_radix() {
    assert_eq!(
        U128::MAX.to_string_radix(10, 0).unwrap(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(
        U128::MAX.to_string_radix(16, 0).unwrap(),
        "ffffffffffffffffffffffffffffffff"
    );
    assert_eq!(U128::ZERO.to_string_radix(10, 0).unwrap(), "0");
    assert_eq!(U128::from(255u8).to_string_radix(2, 12).unwrap(), "000011111111");
    assert_eq!(U128::from(1295u16).to_string_radix(36, 0).unwrap(), "zz");
    assert_eq!(U128::from(7u8).to_string_radix(8, 1).unwrap(), "7");

    assert_eq!(U128::ONE.to_string_radix(1, 0), Err(UintError::InvalidBase(1)));
    assert_eq!(U128::ONE.to_string_radix(37, 0), Err(UintError::InvalidBase(37)));
}

#[test]
fn u128_formatting_traits() {
    let v = U128::from(255u8);

    assert_eq!(format!("{}", v), "255");
    assert_eq!(format!("{:x}", v), "ff");
    assert_eq!(format!("{:X}", v), "FF");
    assert_eq!(format!("{:#x}", v), "0xff");
    assert_eq!(format!("{:o}", v), "377");
    assert_eq!(format!("{:b}", v), "11111111");
    assert_eq!(format!("{:08}", v), "00000255");
    assert_eq!(format!("{:>6}", v), "   255");
    assert_eq!(format!("{:#010x}", v), "0x000000ff");
    assert_eq!(U128::MAX.to_string(), u128::MAX.to_string());
}

#[test]
fn u128_strict_parse() {
    assert_eq!(U128::from_str_radix("ff", 16), Ok(U128::from(255u8)));
    assert_eq!(U128::from_str_radix("FF", 16), Ok(U128::from(255u8)));
    assert_eq!(U128::from_str_radix("zz", 36), Ok(U128::from(1295u16)));
    assert_eq!(
        "340282366920938463463374607431768211455".parse::<U128>(),
        Ok(U128::MAX)
    );

    assert_eq!(
        U128::from_str_radix("12z", 10),
        Err(UintError::InvalidDigit { index: 2, found: 'z' })
    );
    assert_eq!(
        U128::from_str_radix("102", 2),
        Err(UintError::InvalidDigit { index: 2, found: '2' })
    );
    assert_eq!(U128::from_str_radix("", 10), Err(UintError::Empty));
    assert_eq!(U128::from_str_radix("1", 40), Err(UintError::InvalidBase(40)));
}

#[test]
fn u128_strict_parse_wraps() {
    // 2^128 + 5
    assert_eq!(
        U128::from_str_radix("340282366920938463463374607431768211461", 10),
        Ok(U128::from(5u8))
    );
}

#[test]
fn u128_lossy_parse_reads_unknown_characters_as_zero() {
    assert_eq!(U128::from_str_radix_lossy("1_2", 10), U128::from(102u8));
    assert_eq!(U128::from_str_radix_lossy("1X2", 10), U128::from(102u8));
    assert_eq!(U128::from_str_radix_lossy("FF", 16), U128::ZERO);
    assert_eq!(U128::from_str_radix_lossy("ff", 16), U128::from(255u8));
    assert_eq!(U128::from_str_radix_lossy("", 10), U128::ZERO);
}

#[test]
fn u128_lossy_parse_keeps_letters_above_base() {
    // 'x' is digit 33: 1 * 100 + 33 * 10 + 2
    assert_eq!(U128::from_str_radix_lossy("1x2", 10), U128::from(432u16));
    assert_eq!(U128::from_str_radix_lossy("z", 2), U128::from(35u8));
    assert!(U128::from_str_radix("1x2", 10).is_err());
}

#[test]
fn u128_export_bits() {
    let v = U128::new(0, 0x0102);

    assert_eq!(v.export_bits().len(), 16);
    assert_eq!(v.export_bits_truncate(), vec![1, 2]);
    assert_eq!(U128::ZERO.export_bits_truncate(), Vec::<u8>::new());
    assert_eq!(U128::MAX.export_bits_truncate().len(), 16);
    assert_eq!(U128::from_be_bytes(U128::MAX.to_be_bytes()), U128::MAX);
}

#[test]
fn u128_mixed_native_operands() {
    let v = U128::new(0, 5);

    assert_eq!(v, 5u64);
    assert_eq!(v, 5i32);
    assert!(v > 4u8);
    assert!(v <= 5usize);
    assert!(U128::new(1, 0) > u64::MAX);

    let mut acc = U128::ONE;
    acc <<= 70u32;
    acc |= 1u8;
    acc *= 3u8;
    assert_eq!(acc, U128::new(3 << 6, 3));

    acc >>= 70u32;
    assert_eq!(acc, U128::from(3u8));
    acc %= 2u8;
    assert_eq!(acc, U128::ONE);
}
