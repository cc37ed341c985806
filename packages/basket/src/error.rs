use soroban_sdk::contracterror;

pub type BasketResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    #[doc = "Basket must hold exactly five assets whose weights sum to 100"]
    InvalidBasketSpec = 3,
    #[doc = "Fee percentage must be within 0..=100"]
    InvalidFee = 4,
    PositionAlreadyOpen = 5,
    NoPositionFound = 6,
    #[doc = "Cannot sell more than the total index value"]
    OverRedemption = 7,
    TransferFailed = 8,
    BasketNotFound = 9,
    BasketLimitReached = 10,
    InvalidAmount = 11,
    MathError = 12,
    NotInitialized = 13,
}
