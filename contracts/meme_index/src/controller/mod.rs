pub mod ledger;
pub mod registry;
