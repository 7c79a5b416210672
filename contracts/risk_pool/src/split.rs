use crate::types::{LedgerError, PremiumSplit};

pub const BASIS_POINTS: u32 = 10_000;

struct Tier {
    floor: i64,
    ceiling: Option<i64>, // exclusive; `None` is unbounded
    pool_bps: u32,
    insurer_bps: u32,
}

impl Tier {
    fn contains(&self, pool_size: i64) -> bool {
        pool_size >= self.floor && self.ceiling.map_or(true, |ceiling| pool_size < ceiling)
    }
}

// Half-open ranges covering every non-negative pool size. 70..80 shares the
// 60..70 split.
const TIERS: [Tier; 6] = [
    Tier { floor: 0, ceiling: Some(20), pool_bps: 2_500, insurer_bps: 7_000 },
    Tier { floor: 20, ceiling: Some(40), pool_bps: 3_000, insurer_bps: 6_500 },
    Tier { floor: 40, ceiling: Some(60), pool_bps: 3_500, insurer_bps: 6_000 },
    Tier { floor: 60, ceiling: Some(80), pool_bps: 4_000, insurer_bps: 5_500 },
    Tier { floor: 80, ceiling: Some(100), pool_bps: 4_500, insurer_bps: 5_000 },
    Tier { floor: 100, ceiling: None, pool_bps: 5_000, insurer_bps: 4_500 },
];

/// Pool and insurer shares for a group already holding `pool_size` risks. The
/// administrative fee takes the remaining basis points.
pub fn split_percentages(pool_size: i64) -> Result<PremiumSplit, LedgerError> {
    if pool_size < 0 {
        return Err(LedgerError::InvalidArgument);
    }

    let tier = TIERS
        .iter()
        .find(|tier| tier.contains(pool_size))
        .ok_or(LedgerError::UndefinedTier)?;

    Ok(PremiumSplit {
        pool_bps: tier.pool_bps,
        insurer_bps: tier.insurer_bps,
        admin_bps: BASIS_POINTS - tier.pool_bps - tier.insurer_bps,
    })
}

impl PremiumSplit {
    /// Divides `premium` into (pool, insurer, admin) amounts. Pool and insurer
    /// shares truncate; the admin amount is the exact remainder.
    pub fn apportion(&self, premium: i128) -> Result<(i128, i128, i128), LedgerError> {
        let pool_amount = share(premium, self.pool_bps)?;
        let insurer_amount = share(premium, self.insurer_bps)?;
        let admin_amount = premium - pool_amount - insurer_amount;
        Ok((pool_amount, insurer_amount, admin_amount))
    }
}

fn share(amount: i128, bps: u32) -> Result<i128, LedgerError> {
    amount
        .checked_mul(bps as i128)
        .map(|scaled| scaled / BASIS_POINTS as i128)
        .ok_or(LedgerError::AmountOverflow)
}
