//! Commit half of every ledger operation.
//!
//! The controllers compute a [`Settlement`] without touching tokens or
//! storage. Committing issues the transfers in order and only then writes the
//! position. Any transfer error aborts the commit; the host rolls back the
//! transfers already issued in the same invocation when the entry point
//! returns the error.

use basket::error::{BasketResult, ErrorCode};
use soroban_sdk::{contracttype, log, token, Address, Env, Vec};

use crate::storage::{remove_position, save_position, Position};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub asset: Address,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

/// Moves assets on behalf of the contract.
pub trait AssetTransfer {
    fn transfer(&self, env: &Env, transfer: &Transfer) -> BasketResult;
}

/// Transfers through the asset's SEP-41 token contract.
pub struct TokenTransfer;

impl AssetTransfer for TokenTransfer {
    fn transfer(&self, env: &Env, transfer: &Transfer) -> BasketResult {
        let client = token::Client::new(env, &transfer.asset);
        match client.try_transfer(&transfer.from, &transfer.to, &transfer.amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(
                    env,
                    "Meme Index: Settlement: transfer of {} {} from {} to {} failed",
                    transfer.amount,
                    transfer.asset,
                    transfer.from,
                    transfer.to
                );
                Err(ErrorCode::TransferFailed)
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionChange {
    Open(Position),
    Update(Position),
    Close,
}

/// Breakdown of a sell, reported in events and checked by tests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleSummary {
    pub sell_fraction: u32,
    pub released: Vec<i128>,
    pub total_return: i128,
    pub fee: i128,
    pub net_to_user: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub owner: Address,
    pub basket_id: u32,
    pub transfers: Vec<Transfer>,
    pub change: PositionChange,
}

impl Settlement {
    pub fn commit(self, env: &Env, transferor: &impl AssetTransfer) -> BasketResult {
        for transfer in self.transfers.iter() {
            transferor.transfer(env, &transfer)?;
        }

        match self.change {
            PositionChange::Open(position) | PositionChange::Update(position) => {
                save_position(env, &self.owner, &position)
            }
            PositionChange::Close => remove_position(env, &self.owner, self.basket_id),
        }

        Ok(())
    }
}
