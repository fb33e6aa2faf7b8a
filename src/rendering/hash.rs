//! Rolling string hash used to seed the data cells of the card pattern.

/// Hash `s` with the classic `h * 31 + unit` rolling update.
///
/// The update runs over UTF-16 code units and wraps exactly like a 32-bit
/// signed integer (`((h << 5) - h) + unit`). The absolute value of the final
/// signed result is returned, so `i32::MIN` comes back as `2147483648`.
pub fn string_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
