//! Byte-level operations on nucleotide sequences
//!
//! These functions work on plain byte slices. Anything alphabet specific
//! (which symbols exist, how they pair) is passed in by the caller.

use super::{ComputeError, ComputeResult};

/// Reverse a sequence in-place
pub fn reverse_in_place(sequence: &mut [u8]) {
    sequence.reverse();
}

/// Count occurrences of each of `symbols` in a sequence
///
/// Matching is case-insensitive. Bytes that are not listed in `symbols`
/// are ignored, so the counts only add up to the sequence length when the
/// sequence was validated against the same symbol set.
pub fn count_symbols<const N: usize>(sequence: &[u8], symbols: &[u8; N]) -> [usize; N] {
    let mut counts = [0; N];

    for &base in sequence {
        let upper = base.to_ascii_uppercase();
        if let Some(slot) = symbols.iter().position(|&s| s == upper) {
            counts[slot] += 1;
        }
    }

    counts
}

/// Complement a sequence with the given pairing function
///
/// The output is always uppercase. A byte the pairing function does not
/// know about aborts the whole operation; no partial result is returned.
pub fn complement_with<F>(sequence: &[u8], pair: F) -> ComputeResult<Vec<u8>>
where
    F: Fn(u8) -> Option<u8>,
{
    sequence
        .iter()
        .enumerate()
        .map(|(pos, &base)| {
            pair(base.to_ascii_uppercase()).ok_or_else(|| {
                ComputeError::InvalidInput(format!(
                    "No complement for symbol '{}' at position {}",
                    base.escape_ascii(),
                    pos
                ))
            })
        })
        .collect()
}

/// Reverse-complement a sequence with the given pairing function
pub fn reverse_complement_with<F>(sequence: &[u8], pair: F) -> ComputeResult<Vec<u8>>
where
    F: Fn(u8) -> Option<u8>,
{
    let mut result = complement_with(sequence, pair)?;
    reverse_in_place(&mut result);
    Ok(result)
}

/// Transcribe DNA to RNA (T -> U)
pub fn transcribe(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|&base| match base {
            b'T' => b'U',
            b't' => b'u',
            _ => base,
        })
        .collect()
}

/// Reverse-transcribe RNA to DNA (U -> T)
pub fn reverse_transcribe(rna: &[u8]) -> Vec<u8> {
    rna.iter()
        .map(|&base| match base {
            b'U' => b'T',
            b'u' => b't',
            _ => base,
        })
        .collect()
}

/// Number of G and C symbols, either case
pub fn gc_count(sequence: &[u8]) -> usize {
    sequence
        .iter()
        .filter(|&&base| matches!(base, b'G' | b'g' | b'C' | b'c'))
        .count()
}

/// Divide `numerator` by `denominator`, rounding ties to the even quotient
///
/// `denominator` must be non-zero.
pub fn div_round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    match (remainder * 2).cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient & 1),
    }
}

/// Round a share in `0.0..=1.0` to two decimal places
///
/// Rounding looks at the exact binary value of `value`, not its shortest
/// decimal spelling: 0.025 is stored slightly above 0.025 and becomes 0.03,
/// 0.975 is stored slightly below and becomes 0.97. Only values that land
/// exactly on a half (0.125, 0.875, ...) round to the even hundredth.
pub fn round_hundredths(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 0.0;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    if exponent >= 0 {
        return value;
    }

    // value * 100 == scaled / 2^shift exactly
    let scaled = mantissa as u128 * 100;
    let shift = exponent.unsigned_abs();
    if shift >= 127 {
        return 0.0;
    }

    let whole = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let hundredths = match remainder.cmp(&half) {
        std::cmp::Ordering::Less => whole,
        std::cmp::Ordering::Greater => whole + 1,
        std::cmp::Ordering::Equal => whole + (whole & 1),
    };

    hundredths as f64 / 100.0
}

/// GC content of a sequence as a whole percentage
///
/// The ratio is computed exactly and rounded half-to-even, so 12.5%
/// becomes 12 and 37.5% becomes 38. An empty sequence has a GC content
/// of 0.
pub fn gc_percent(sequence: &[u8]) -> u32 {
    if sequence.is_empty() {
        return 0;
    }

    let gc = gc_count(sequence) as u64;
    div_round_half_even(gc * 100, sequence.len() as u64) as u32
}

/// GC content of consecutive, non-overlapping windows
///
/// Windows start at offset 0. A trailing remainder shorter than
/// `window_size` is dropped.
pub fn gc_percent_windows(sequence: &[u8], window_size: usize) -> ComputeResult<Vec<u32>> {
    if window_size == 0 {
        return Err(ComputeError::InvalidArgument(
            "Window size must be at least 1".to_string(),
        ));
    }

    Ok(sequence.chunks_exact(window_size).map(gc_percent).collect())
}
