//! A single-choice voting contract.
//!
//! # Description
//! Every account can cast one vote for a candidate id while voting is open.
//! Candidate ids are not validated. The account that created the instance is
//! the admin and the only one allowed to close voting, which cannot be
//! reopened.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, structs::*};
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod events;
mod impls;
mod structs;
