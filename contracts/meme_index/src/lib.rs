#![no_std]

mod contract;
mod controller;
mod events;
mod meme_index;
mod settlement;
mod storage;

pub use crate::contract::{MemeIndex, MemeIndexClient};
pub use crate::storage::{BasketDefinition, Config, Position};
