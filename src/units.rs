use crate::error::{HarnessErr, Result};

const KIB: f64 = 1024.0;

/// Parses a cache size such as `4G`, `1.5M` or `64K` into bytes, using
/// binary multiples.
pub fn parse_byte_size(size: &str) -> Result<u64> {
    let size = size.trim();
    let invalid = || HarnessErr::InvalidArgument(format!("malformed byte size {size:?}"));

    let (count, scale) = match size.char_indices().last() {
        Some((i, 'G')) => (&size[..i], KIB * KIB * KIB),
        Some((i, 'M')) => (&size[..i], KIB * KIB),
        Some((i, 'K')) => (&size[..i], KIB),
        _ => return Err(invalid()),
    };

    let count: f64 = count.trim().parse().map_err(|_| invalid())?;
    if !count.is_finite() || count < 0.0 {
        return Err(invalid());
    }

    Ok((count * scale).round() as u64)
}
