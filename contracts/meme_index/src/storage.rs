use basket::{
    constants::{
        DEFAULT_FEE_PERCENTAGE, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::ErrorCode,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    FeePercentage,
    BasketCount,
    Basket(u32),
    Position(Address, u32),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Operator allowed to create baskets, change the fee and upgrade
    pub admin: Address,
    /// Token deposited on buy and paid out on sell
    pub base_asset: Address,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Meme Index: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });
    bump_instance(env);

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    bump_instance(env);
}

// ################################################################
//                           Fee Policy
// ################################################################

pub fn get_fee_percentage(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FeePercentage)
        .unwrap_or(DEFAULT_FEE_PERCENTAGE)
}

pub fn save_fee_percentage(env: &Env, fee_percentage: u32) {
    env.storage()
        .instance()
        .set(&DataKey::FeePercentage, &fee_percentage);
}

// ################################################################
//                            Baskets
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketDefinition {
    pub assets: Vec<Address>,
    /// Whole percentages, one per asset, summing to 100
    pub weights: Vec<u32>,
}

pub fn get_basket_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BasketCount)
        .unwrap_or(0)
}

pub fn save_basket_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::BasketCount, &count);
}

pub fn save_basket(env: &Env, basket_id: u32, basket: &BasketDefinition) {
    let key = DataKey::Basket(basket_id);
    env.storage().persistent().set(&key, basket);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_basket(env: &Env, basket_id: u32) -> Option<BasketDefinition> {
    let key = DataKey::Basket(basket_id);
    let basket = env
        .storage()
        .persistent()
        .get::<_, BasketDefinition>(&key);

    if basket.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    basket
}

// ################################################################
//                           Positions
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub basket_id: u32,
    /// Base asset amount currently backing the position
    pub invested: i128,
    /// Quantity of each basket asset allocated to the position
    pub token_amounts: Vec<i128>,
    pub exists: bool,
}

pub fn get_position(env: &Env, owner: &Address, basket_id: u32) -> Option<Position> {
    let key = DataKey::Position(owner.clone(), basket_id);
    let position = env.storage().persistent().get::<_, Position>(&key);

    if position.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    position
}

pub fn save_position(env: &Env, owner: &Address, position: &Position) {
    let key = DataKey::Position(owner.clone(), position.basket_id);
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_position(env: &Env, owner: &Address, basket_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Position(owner.clone(), basket_id));
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use basket::{error::BasketResult, validate};

    use super::*;

    pub fn is_admin(env: &Env, config: &Config, sender: &Address) -> BasketResult {
        validate!(
            env,
            config.admin == *sender,
            ErrorCode::NotAuthorized,
            "Meme Index: You are not authorized!"
        )
    }
}
