//! Whole-percentage arithmetic shared by the basket contracts.
//!
//! Every split truncates toward zero. Callers rely on this: a buy never hands
//! out more than it was paid for, and a fee never exceeds the proceeds it is
//! taken from.

use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, Vec, I256};

use crate::{
    constants::PERCENTAGE_PRECISION,
    error::{BasketResult, ErrorCode},
    math::safe_math::SafeMath,
    math_error, validate,
};

const SCALE: i128 = PERCENTAGE_PRECISION as i128;

/// `floor(amount * percentage / 100)`
pub fn percentage_of(env: &Env, amount: i128, percentage: u32) -> BasketResult<i128> {
    validate!(
        env,
        amount >= 0,
        ErrorCode::InvalidAmount,
        "percentage_of: negative amount {}",
        amount
    )?;

    amount
        .fixed_mul_floor(i128::from(percentage), SCALE)
        .ok_or_else(math_error!(env))
}

/// `floor(part * 100 / whole)`, left unbounded so callers can reject values above 100.
///
/// When `part * 100` leaves the i128 range the ratio is computed in 256 bits
/// and saturates at `i128::MAX`.
pub fn percentage_ratio(env: &Env, part: i128, whole: i128) -> BasketResult<i128> {
    validate!(
        env,
        part >= 0,
        ErrorCode::InvalidAmount,
        "percentage_ratio: negative part {}",
        part
    )?;
    validate!(
        env,
        whole > 0,
        ErrorCode::MathError,
        "percentage_ratio: non-positive whole {}",
        whole
    )?;

    match part.fixed_div_floor(whole, SCALE) {
        Some(ratio) => Ok(ratio),
        None => Ok(I256::from_i128(env, part)
            .mul(&I256::from_i128(env, SCALE))
            .div(&I256::from_i128(env, whole))
            .to_i128()
            .unwrap_or(i128::MAX)),
    }
}

pub fn sum_weights(env: &Env, weights: &Vec<u32>) -> BasketResult<u32> {
    let mut total = 0_u32;
    for weight in weights.iter() {
        total = total.safe_add(weight, env)?;
    }

    Ok(total)
}

/// Splits `total` across `weights`, one truncated share per weight.
pub fn split_by_weights(env: &Env, total: i128, weights: &Vec<u32>) -> BasketResult<Vec<i128>> {
    let mut shares = Vec::new(env);
    for weight in weights.iter() {
        shares.push_back(percentage_of(env, total, weight)?);
    }

    Ok(shares)
}

/// Applies the same percentage to every amount.
pub fn scale_amounts(env: &Env, amounts: &Vec<i128>, percentage: u32) -> BasketResult<Vec<i128>> {
    let mut scaled = Vec::new(env);
    for amount in amounts.iter() {
        scaled.push_back(percentage_of(env, amount, percentage)?);
    }

    Ok(scaled)
}

pub fn sum_amounts(env: &Env, amounts: &Vec<i128>) -> BasketResult<i128> {
    let mut total = 0_i128;
    for amount in amounts.iter() {
        total = total.safe_add(amount, env)?;
    }

    Ok(total)
}
