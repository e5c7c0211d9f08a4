//! A single-item ascending auction.
//!
//! # Description
//! An instance tracks one auction: its title and description, the starting
//! and reserve prices, the deadline and the best bid so far. Anybody except
//! the creator can outbid the current highest bid while the auction is active
//! and the deadline has not passed. Once the deadline passes anybody can end
//! the auction; the creator can stop it early at any time while it is active.
//!
//! Bids are only recorded, no CCD is escrowed or transferred. The reserve
//! price is informational and never prevents the auction from ending.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, impls::*, structs::*};
use concordium_std::*;
use marker::PhantomData;

mod constants;
mod contract;
mod errors;
mod events;
mod impls;
mod structs;
