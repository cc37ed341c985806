use basket::{
    constants::PERCENTAGE_PRECISION,
    error::{BasketResult, ErrorCode},
    math::{
        percentage::{percentage_of, percentage_ratio, scale_amounts, split_by_weights, sum_amounts},
        safe_math::SafeMath,
    },
    validate,
};
use soroban_sdk::{log, Address, Env, Vec};

use crate::{
    settlement::{PositionChange, SaleSummary, Settlement, Transfer},
    storage::{get_position, BasketDefinition, Config, Position},
};

pub fn load_position(env: &Env, owner: &Address, basket_id: u32) -> BasketResult<Position> {
    match get_position(env, owner, basket_id) {
        Some(position) if position.exists => Ok(position),
        _ => {
            log!(env, "Meme Index: No index found for user {} in basket {}", owner, basket_id);
            Err(ErrorCode::NoPositionFound)
        }
    }
}

/// Computes the transfers and the new position for a buy.
///
/// The buyer pays `total_cost` of the base asset and receives, for every
/// basket asset, `floor(total_cost * weight / 100)` out of the contract's
/// inventory.
pub fn plan_buy(
    env: &Env,
    config: &Config,
    buyer: &Address,
    basket_id: u32,
    basket: &BasketDefinition,
    existing: Option<Position>,
    total_cost: i128,
) -> BasketResult<Settlement> {
    validate!(
        env,
        total_cost > 0,
        ErrorCode::InvalidAmount,
        "Meme Index: Buy Index: total cost must be positive, got {}",
        total_cost
    )?;
    validate!(
        env,
        !existing.map_or(false, |position| position.exists),
        ErrorCode::PositionAlreadyOpen,
        "Meme Index: Buy Index: index {} already bought",
        basket_id
    )?;

    let contract = env.current_contract_address();
    let token_amounts = split_by_weights(env, total_cost, &basket.weights)?;

    let mut transfers = Vec::new(env);
    transfers.push_back(Transfer {
        asset: config.base_asset.clone(),
        from: buyer.clone(),
        to: contract.clone(),
        amount: total_cost,
    });
    for (asset, amount) in basket.assets.iter().zip(token_amounts.iter()) {
        transfers.push_back(Transfer {
            asset,
            from: contract.clone(),
            to: buyer.clone(),
            amount,
        });
    }

    Ok(Settlement {
        owner: buyer.clone(),
        basket_id,
        transfers,
        change: PositionChange::Open(Position {
            basket_id,
            invested: total_cost,
            token_amounts,
            exists: true,
        }),
    })
}

/// Computes the transfers and the shrunk position for a sell.
///
/// The sell fraction is the truncated percentage `redeem_amount` represents
/// of `invested`. Each asset releases that fraction of its holding, the fee
/// is taken from the sum of the releases and the remainder goes to the seller.
pub fn plan_sell(
    env: &Env,
    config: &Config,
    seller: &Address,
    basket: &BasketDefinition,
    position: &Position,
    fee_percentage: u32,
    redeem_amount: i128,
) -> BasketResult<(Settlement, SaleSummary)> {
    validate!(
        env,
        redeem_amount > 0,
        ErrorCode::InvalidAmount,
        "Meme Index: Sell Index: redeem amount must be positive, got {}",
        redeem_amount
    )?;

    // bound the ratio first, then the raw amount: truncation lets a redeem
    // slightly above `invested` still round down to 100
    let sell_fraction = percentage_ratio(env, redeem_amount, position.invested)?;
    validate!(
        env,
        sell_fraction <= i128::from(PERCENTAGE_PRECISION),
        ErrorCode::OverRedemption,
        "Meme Index: Sell Index: cannot sell more than the total index value, fraction {}",
        sell_fraction
    )?;
    validate!(
        env,
        redeem_amount <= position.invested,
        ErrorCode::OverRedemption,
        "Meme Index: Sell Index: redeem amount {} exceeds invested {}",
        redeem_amount,
        position.invested
    )?;
    let sell_fraction = u32::try_from(sell_fraction).map_err(|_| ErrorCode::MathError)?;

    let released = scale_amounts(env, &position.token_amounts, sell_fraction)?;
    let total_return = sum_amounts(env, &released)?;
    let fee = percentage_of(env, total_return, fee_percentage)?;
    let net_to_user = total_return.safe_sub(fee, env)?;

    let contract = env.current_contract_address();
    let mut transfers = Vec::new(env);
    for (asset, amount) in basket.assets.iter().zip(released.iter()) {
        transfers.push_back(Transfer {
            asset,
            from: contract.clone(),
            to: seller.clone(),
            amount,
        });
    }
    transfers.push_back(Transfer {
        asset: config.base_asset.clone(),
        from: contract.clone(),
        to: config.admin.clone(),
        amount: fee,
    });
    transfers.push_back(Transfer {
        asset: config.base_asset.clone(),
        from: contract,
        to: seller.clone(),
        amount: net_to_user,
    });

    let invested = position.invested.safe_sub(redeem_amount, env)?;
    let change = if invested == 0 {
        PositionChange::Close
    } else {
        let remaining = PERCENTAGE_PRECISION.safe_sub(sell_fraction, env)?;
        PositionChange::Update(Position {
            basket_id: position.basket_id,
            invested,
            token_amounts: scale_amounts(env, &position.token_amounts, remaining)?,
            exists: true,
        })
    };

    Ok((
        Settlement {
            owner: seller.clone(),
            basket_id: position.basket_id,
            transfers,
            change,
        },
        SaleSummary {
            sell_fraction,
            released,
            total_return,
            fee,
            net_to_user,
        },
    ))
}
