extern crate std;

use core::cell::RefCell;

use basket::error::{BasketResult, ErrorCode};
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

use crate::{
    contract::MemeIndex,
    controller::ledger::{plan_buy, plan_sell},
    settlement::{AssetTransfer, PositionChange, SaleSummary, Transfer},
    storage::{get_position, save_position, BasketDefinition, Config, Position},
};

/// Records transfers instead of moving tokens, optionally failing the n-th one.
struct RecordingTransfer {
    issued: RefCell<std::vec::Vec<Transfer>>,
    fail_at: Option<usize>,
}

impl RecordingTransfer {
    fn new() -> Self {
        RecordingTransfer {
            issued: RefCell::new(std::vec::Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(index: usize) -> Self {
        RecordingTransfer {
            issued: RefCell::new(std::vec::Vec::new()),
            fail_at: Some(index),
        }
    }
}

impl AssetTransfer for RecordingTransfer {
    fn transfer(&self, _env: &Env, transfer: &Transfer) -> BasketResult {
        if self.fail_at == Some(self.issued.borrow().len()) {
            return Err(ErrorCode::TransferFailed);
        }
        self.issued.borrow_mut().push(transfer.clone());

        Ok(())
    }
}

struct Fixture {
    env: Env,
    contract: Address,
    config: Config,
    basket: BasketDefinition,
    owner: Address,
}

impl Fixture {
    fn new() -> Self {
        let env = Env::default();
        let contract = env.register(MemeIndex, ());
        let config = Config {
            admin: Address::generate(&env),
            base_asset: Address::generate(&env),
        };

        let mut assets = Vec::new(&env);
        for _ in 0..5 {
            assets.push_back(Address::generate(&env));
        }
        let basket = BasketDefinition {
            assets,
            weights: vec![&env, 10, 20, 30, 20, 20],
        };
        let owner = Address::generate(&env);

        Fixture {
            env,
            contract,
            config,
            basket,
            owner,
        }
    }

    fn position(&self, invested: i128, token_amounts: [i128; 5]) -> Position {
        Position {
            basket_id: 0,
            invested,
            token_amounts: Vec::from_array(&self.env, token_amounts),
            exists: true,
        }
    }
}

#[test]
fn buy_plan_deposits_before_releasing() {
    let f = Fixture::new();

    f.env.as_contract(&f.contract, || {
        let settlement =
            plan_buy(&f.env, &f.config, &f.owner, 0, &f.basket, None, 1_000).unwrap();

        assert_eq!(settlement.transfers.len(), 6);
        assert_eq!(
            settlement.transfers.get(0).unwrap(),
            Transfer {
                asset: f.config.base_asset.clone(),
                from: f.owner.clone(),
                to: f.contract.clone(),
                amount: 1_000,
            }
        );
        for (i, amount) in [100, 200, 300, 200, 200].into_iter().enumerate() {
            assert_eq!(
                settlement.transfers.get(i as u32 + 1).unwrap(),
                Transfer {
                    asset: f.basket.assets.get(i as u32).unwrap(),
                    from: f.contract.clone(),
                    to: f.owner.clone(),
                    amount,
                }
            );
        }
        assert_eq!(
            settlement.change,
            PositionChange::Open(f.position(1_000, [100, 200, 300, 200, 200]))
        );
    });
}

#[test]
fn buy_plan_rejects_open_position() {
    let f = Fixture::new();

    f.env.as_contract(&f.contract, || {
        let existing = f.position(10, [1, 2, 3, 2, 2]);
        assert_eq!(
            plan_buy(&f.env, &f.config, &f.owner, 0, &f.basket, Some(existing), 1_000),
            Err(ErrorCode::PositionAlreadyOpen)
        );

        let mut closed = f.position(10, [1, 2, 3, 2, 2]);
        closed.exists = false;
        assert!(plan_buy(&f.env, &f.config, &f.owner, 0, &f.basket, Some(closed), 1_000).is_ok());
    });
}

#[test]
fn sell_plan_pays_fee_before_seller() {
    let f = Fixture::new();

    f.env.as_contract(&f.contract, || {
        let position = f.position(1_000, [100, 200, 300, 200, 200]);
        let (settlement, summary) =
            plan_sell(&f.env, &f.config, &f.owner, &f.basket, &position, 10, 500).unwrap();

        assert_eq!(
            summary,
            SaleSummary {
                sell_fraction: 50,
                released: Vec::from_array(&f.env, [50, 100, 150, 100, 100]),
                total_return: 500,
                fee: 50,
                net_to_user: 450,
            }
        );

        assert_eq!(settlement.transfers.len(), 7);
        assert_eq!(
            settlement.transfers.get(5).unwrap(),
            Transfer {
                asset: f.config.base_asset.clone(),
                from: f.contract.clone(),
                to: f.config.admin.clone(),
                amount: 50,
            }
        );
        assert_eq!(
            settlement.transfers.get(6).unwrap(),
            Transfer {
                asset: f.config.base_asset.clone(),
                from: f.contract.clone(),
                to: f.owner.clone(),
                amount: 450,
            }
        );
        assert_eq!(
            settlement.change,
            PositionChange::Update(f.position(500, [50, 100, 150, 100, 100]))
        );
    });
}

#[test]
fn sell_plan_closes_fully_redeemed_position() {
    let f = Fixture::new();

    f.env.as_contract(&f.contract, || {
        let position = f.position(1_000, [100, 200, 300, 200, 200]);
        let (settlement, summary) =
            plan_sell(&f.env, &f.config, &f.owner, &f.basket, &position, 0, 1_000).unwrap();

        assert_eq!(summary.sell_fraction, 100);
        assert_eq!(summary.fee, 0);
        assert_eq!(summary.net_to_user, 1_000);
        assert_eq!(settlement.change, PositionChange::Close);
    });
}

#[test]
fn commit_issues_transfers_in_order_then_saves() {
    let f = Fixture::new();
    let transferor = RecordingTransfer::new();

    f.env.as_contract(&f.contract, || {
        let settlement =
            plan_buy(&f.env, &f.config, &f.owner, 0, &f.basket, None, 1_000).unwrap();
        let expected: std::vec::Vec<Transfer> = settlement.transfers.iter().collect();

        settlement.commit(&f.env, &transferor).unwrap();

        assert_eq!(*transferor.issued.borrow(), expected);
        assert_eq!(
            get_position(&f.env, &f.owner, 0),
            Some(f.position(1_000, [100, 200, 300, 200, 200]))
        );
    });
}

#[test]
fn commit_removes_closed_position() {
    let f = Fixture::new();
    let transferor = RecordingTransfer::new();

    f.env.as_contract(&f.contract, || {
        let position = f.position(1_000, [100, 200, 300, 200, 200]);
        save_position(&f.env, &f.owner, &position);

        let (settlement, _) =
            plan_sell(&f.env, &f.config, &f.owner, &f.basket, &position, 10, 1_000).unwrap();
        settlement.commit(&f.env, &transferor).unwrap();

        assert_eq!(transferor.issued.borrow().len(), 7);
        assert_eq!(get_position(&f.env, &f.owner, 0), None);
    });
}

#[test]
fn failed_transfer_leaves_position_untouched() {
    let f = Fixture::new();
    let transferor = RecordingTransfer::failing_at(3);

    f.env.as_contract(&f.contract, || {
        let settlement =
            plan_buy(&f.env, &f.config, &f.owner, 0, &f.basket, None, 1_000).unwrap();

        assert_eq!(
            settlement.commit(&f.env, &transferor),
            Err(ErrorCode::TransferFailed)
        );
        assert_eq!(transferor.issued.borrow().len(), 3);
        assert_eq!(get_position(&f.env, &f.owner, 0), None);
    });
}
