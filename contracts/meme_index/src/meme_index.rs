use basket::error::ErrorCode;
use soroban_sdk::{Address, Env, Vec};

use crate::storage::{BasketDefinition, Config, Position};

pub trait MemeIndexTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, base_asset: Address);

    fn create_index(
        env: Env,
        sender: Address,
        assets: Vec<Address>,
        weights: Vec<u32>,
    ) -> Result<u32, ErrorCode>;

    fn update_fee_percentage(env: Env, sender: Address, new_fee: u32) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn buy_index(env: Env, sender: Address, basket_id: u32, total_cost: i128)
        -> Result<(), ErrorCode>;

    fn sell_index(
        env: Env,
        sender: Address,
        basket_id: u32,
        redeem_amount: i128,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    /// One slot per basket created so far, `None` where `owner` holds nothing.
    fn get_user_indexes(env: Env, owner: Address) -> Vec<Option<Position>>;

    fn query_position(env: Env, owner: Address, basket_id: u32) -> Option<Position>;

    fn query_basket(env: Env, basket_id: u32) -> Result<BasketDefinition, ErrorCode>;

    fn query_basket_count(env: Env) -> u32;

    fn query_fee_percentage(env: Env) -> u32;

    fn query_config(env: Env) -> Config;
}
