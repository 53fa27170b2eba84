use shared::errors::Error;
use shared::types::{Amount, Milestone};

/// Allocations may be zero (a checkpoint without funds) but never negative
pub fn validate_allocation(funds_allocated: Amount) -> Result<(), Error> {
    if funds_allocated < 0 {
        Err(Error::InvalidAmount)
    } else {
        Ok(())
    }
}

/// A milestone can only move from Created to Completed
pub fn validate_completable(milestone: &Milestone) -> Result<(), Error> {
    if milestone.completed {
        Err(Error::AlreadyCompleted)
    } else {
        Ok(())
    }
}

/// Funds are released once, and only after completion
pub fn validate_releasable(milestone: &Milestone) -> Result<(), Error> {
    if !milestone.completed {
        return Err(Error::MilestoneNotCompleted);
    }
    if milestone.funds_released {
        return Err(Error::FundsAlreadyReleased);
    }
    Ok(())
}
