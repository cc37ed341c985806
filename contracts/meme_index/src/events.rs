use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct MemeIndexEvents {}

impl MemeIndexEvents {
    /// Emitted when the contract is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[base_asset: Address, fee_percentage: u32]`
    pub fn initialize(env: &Env, admin: Address, base_asset: Address, fee_percentage: u32) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (base_asset, fee_percentage));
    }

    /// Emitted when the operator defines a new basket
    ///
    /// - topics - `["index_created", operator: Address, basket_id: u32]`
    /// - data - `[assets: Vec<Address>, weights: Vec<u32>]`
    pub fn index_created(
        env: &Env,
        operator: Address,
        basket_id: u32,
        assets: Vec<Address>,
        weights: Vec<u32>,
    ) {
        let topics = (Symbol::new(env, "index_created"), operator, basket_id);
        env.events().publish(topics, (assets, weights));
    }

    /// Emitted when the redemption fee changes
    ///
    /// - topics - `["fee_updated", operator: Address]`
    /// - data - `[old_fee: u32, new_fee: u32]`
    pub fn fee_updated(env: &Env, operator: Address, old_fee: u32, new_fee: u32) {
        let topics = (Symbol::new(env, "fee_updated"), operator);
        env.events().publish(topics, (old_fee, new_fee));
    }

    /// Emitted when a user opens a position
    ///
    /// - topics - `["index_bought", buyer: Address, basket_id: u32]`
    /// - data - `total_cost: i128`
    pub fn index_bought(env: &Env, buyer: Address, basket_id: u32, total_cost: i128) {
        let topics = (Symbol::new(env, "index_bought"), buyer, basket_id);
        env.events().publish(topics, total_cost);
    }

    /// - topics - `["fee_collected", operator: Address]`
    /// - data - `fee: i128`
    pub fn fee_collected(env: &Env, operator: Address, fee: i128) {
        let topics = (Symbol::new(env, "fee_collected"), operator);
        env.events().publish(topics, fee);
    }

    /// Emitted after the fee, once the seller has been paid
    ///
    /// - topics - `["index_sold", seller: Address, basket_id: u32]`
    /// - data - `net_to_user: i128`
    pub fn index_sold(env: &Env, seller: Address, basket_id: u32, net_to_user: i128) {
        let topics = (Symbol::new(env, "index_sold"), seller, basket_id);
        env.events().publish(topics, net_to_user);
    }
}
