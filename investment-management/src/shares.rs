use shared::{
    errors::Error,
    types::{Amount, Bps},
    BPS_DENOMINATOR,
};

/// Ownership of `holding` out of `total`, in basis points, truncated toward
/// zero. `holding` must not exceed `total`.
pub fn ownership_bps(holding: Amount, total: Amount) -> Result<Bps, Error> {
    if total <= 0 || holding < 0 || holding > total {
        return Err(Error::InvalidAmount);
    }
    if holding == total {
        return Ok(BPS_DENOMINATOR as Bps);
    }

    let bps = holding
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(Error::InvalidAmount)?
        .checked_div(total)
        .ok_or(Error::InvalidAmount)?;

    // holding <= total keeps this within 0..=10000
    Ok(bps as Bps)
}
