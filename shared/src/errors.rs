use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidInput = 3,

    // Project errors
    ProjectNotFound = 10,
    AlreadyVerified = 11,

    // Investment errors
    InvalidAmount = 20,

    // Milestone errors
    MilestoneNotFound = 30,
    AlreadyCompleted = 31,
    MilestoneNotCompleted = 32,
    FundsAlreadyReleased = 33,

    // Revenue errors
    NoRevenueRecorded = 40,
    InsufficientRevenue = 41,
    DistributionNotFound = 42,
}
