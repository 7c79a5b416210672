use soroban_sdk::{Bytes, Env, String};

use crate::types::LedgerError;

/// Amounts carry 7 decimal places.
pub const AMOUNT_DECIMALS: u32 = 7;
pub const AMOUNT_SCALE: i128 = 10_000_000;

const MAX_NUMERIC_LEN: usize = 48;
const MAX_ID_LEN: usize = 32;
const MAX_RAW_VALUE_LEN: usize = 1024;

/// Parses non-negative decimal text such as `"100"` or `"15.5"` into a
/// fixed-point amount.
pub fn parse_amount(text: &String) -> Result<i128, LedgerError> {
    let len = text.len() as usize;
    if len == 0 || len > MAX_NUMERIC_LEN {
        return Err(LedgerError::InvalidArgument);
    }
    let mut buf = [0u8; MAX_NUMERIC_LEN];
    text.copy_into_slice(&mut buf[..len]);

    let mut whole: i128 = 0;
    let mut fraction: i128 = 0;
    let mut fraction_digits = 0u32;
    let mut seen_point = false;
    let mut seen_digit = false;

    for &byte in &buf[..len] {
        match byte {
            b'0'..=b'9' => {
                let digit = (byte - b'0') as i128;
                seen_digit = true;
                if seen_point {
                    if fraction_digits == AMOUNT_DECIMALS {
                        return Err(LedgerError::InvalidArgument);
                    }
                    fraction = fraction * 10 + digit;
                    fraction_digits += 1;
                } else {
                    whole = whole
                        .checked_mul(10)
                        .and_then(|w| w.checked_add(digit))
                        .ok_or(LedgerError::InvalidArgument)?;
                }
            }
            b'.' if !seen_point => seen_point = true,
            _ => return Err(LedgerError::InvalidArgument),
        }
    }

    if !seen_digit {
        return Err(LedgerError::InvalidArgument);
    }

    let fraction = fraction * 10i128.pow(AMOUNT_DECIMALS - fraction_digits);
    whole
        .checked_mul(AMOUNT_SCALE)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(LedgerError::InvalidArgument)
}

/// Builds `<prefix><seq>` with `seq` left-padded with zeros to `width` digits.
pub fn format_id(env: &Env, prefix: &str, seq: u64, width: u32) -> Result<String, LedgerError> {
    let mut digits = [0u8; 20];
    let mut count = 0usize;
    let mut rest = seq;
    loop {
        digits[count] = b'0' + (rest % 10) as u8;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let padding = (width as usize).saturating_sub(count);
    let total = prefix.len() + padding + count;
    if total > MAX_ID_LEN {
        return Err(LedgerError::InvalidArgument);
    }

    let mut buf = [b'0'; MAX_ID_LEN];
    buf[..prefix.len()].copy_from_slice(prefix.as_bytes());
    for i in 0..count {
        buf[total - 1 - i] = digits[i];
    }

    let id = core::str::from_utf8(&buf[..total]).map_err(|_| LedgerError::InvalidArgument)?;
    Ok(String::from_str(env, id))
}

/// True when `id` is `prefix` followed by one or more ASCII digits, the shape
/// produced by `format_id`.
pub fn is_id_of(id: &String, prefix: &str) -> bool {
    let len = id.len() as usize;
    if len <= prefix.len() || len > MAX_ID_LEN {
        return false;
    }
    let mut buf = [0u8; MAX_ID_LEN];
    id.copy_into_slice(&mut buf[..len]);

    let (head, digits) = buf[..len].split_at(prefix.len());
    head == prefix.as_bytes() && digits.iter().all(u8::is_ascii_digit)
}

/// Copies the UTF-8 bytes of `text`.
pub fn to_bytes(env: &Env, text: &String) -> Result<Bytes, LedgerError> {
    let len = text.len() as usize;
    if len > MAX_RAW_VALUE_LEN {
        return Err(LedgerError::InvalidArgument);
    }
    let mut buf = [0u8; MAX_RAW_VALUE_LEN];
    text.copy_into_slice(&mut buf[..len]);
    Ok(Bytes::from_slice(env, &buf[..len]))
}
