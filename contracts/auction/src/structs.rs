use super::*;

/// The lifecycle of an auction. There is no way back to `Active`.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, Eq, PartialEq)]
pub enum AuctionStatus {
    /// Accepting bids until the end time.
    Active,
    /// Ended by `endAuction` after the end time.
    Ended,
    /// Stopped early by the creator.
    Stopped,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    pub title: String,
    pub description: String,
    pub starting_price: u64,
    /// Informational only, never checked when the auction ends.
    pub reserve_price: u64,
    /// Unix time in seconds.
    pub auction_end_time: u64,
    pub highest_bid: u64,
    /// The creator until the first bid is accepted.
    pub highest_bidder: Address,
    pub total_bids: u64,
    pub status: AuctionStatus,
    pub creator: Address,
    pub phantom_data: PhantomData<S>,
}

/// Type of the parameter to the `init` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    pub title: String,
    pub description: String,
    pub starting_price: u64,
    pub reserve_price: u64,
    /// Added to the slot time of the creating block.
    pub duration_in_seconds: u64,
}

/// Full snapshot of the auction returned by `view`.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct AuctionView {
    pub title: String,
    pub description: String,
    pub starting_price: u64,
    pub reserve_price: u64,
    pub auction_end_time: u64,
    pub highest_bid: u64,
    pub highest_bidder: Address,
    pub total_bids: u64,
    pub status: AuctionStatus,
    pub creator: Address,
    pub reserve_met: bool,
    pub time_remaining: u64,
}
