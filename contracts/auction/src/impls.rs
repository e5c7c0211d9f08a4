use super::*;

/// Whole seconds since the unix epoch for a block slot time.
pub fn unix_seconds(slot_time: Timestamp) -> u64 {
    slot_time.timestamp_millis() / 1000
}

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new active auction owned by `creator`.
    ///
    /// It rejects if `now + duration_in_seconds` overflows.
    pub fn new(params: InitParams, creator: Address, now: u64) -> ContractResult<Self> {
        let auction_end_time = now
            .checked_add(params.duration_in_seconds)
            .ok_or(CustomContractError::EndTimeOverflow)?;

        Ok(Self {
            title: params.title,
            description: params.description,
            starting_price: params.starting_price,
            reserve_price: params.reserve_price,
            auction_end_time,
            highest_bid: params.starting_price,
            highest_bidder: creator,
            total_bids: 0,
            status: AuctionStatus::Active,
            creator,
            phantom_data: PhantomData,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }

    pub fn is_ended(&self) -> bool {
        !self.is_active()
    }

    pub fn reserve_met(&self) -> bool {
        self.highest_bid >= self.reserve_price
    }

    pub fn time_remaining(&self, now: u64) -> u64 {
        self.auction_end_time.saturating_sub(now)
    }

    /// Records `amount` as the new highest bid of `bidder`.
    ///
    /// It rejects if:
    /// - The auction is not active;
    /// - The end time has been reached;
    /// - The amount does not exceed the current highest bid;
    /// - The bidder is the creator.
    pub fn place_bid(&mut self, bidder: Address, amount: u64, now: u64) -> ContractResult<()> {
        ensure!(self.is_active(), CustomContractError::AuctionNotActive);
        ensure!(
            now < self.auction_end_time,
            CustomContractError::AuctionExpired
        );
        ensure!(amount > self.highest_bid, CustomContractError::BidTooLow);
        ensure!(bidder != self.creator, CustomContractError::CreatorCannotBid);

        let total_bids = self
            .total_bids
            .checked_add(1)
            .ok_or(CustomContractError::Overflow)?;

        self.highest_bid = amount;
        self.highest_bidder = bidder;
        self.total_bids = total_bids;

        Ok(())
    }

    /// Ends the auction once its end time is reached. Anybody may call it.
    pub fn end(&mut self, now: u64) -> ContractResult<()> {
        ensure!(self.is_active(), CustomContractError::AuctionNotActive);
        ensure!(
            now >= self.auction_end_time,
            CustomContractError::AuctionStillRunning
        );

        self.status = AuctionStatus::Ended;
        Ok(())
    }

    /// Stops the auction regardless of its end time. Creator only.
    pub fn emergency_stop(&mut self, sender: Address) -> ContractResult<()> {
        ensure!(sender == self.creator, CustomContractError::OnlyCreator);
        ensure!(self.is_active(), CustomContractError::AuctionNotActive);

        self.status = AuctionStatus::Stopped;
        Ok(())
    }

    pub fn end_event(&self) -> EndEvent {
        EndEvent {
            highest_bidder: self.highest_bidder,
            highest_bid: self.highest_bid,
            reserve_met: self.reserve_met(),
        }
    }

    pub fn view(&self, now: u64) -> AuctionView {
        AuctionView {
            title: self.title.clone(),
            description: self.description.clone(),
            starting_price: self.starting_price,
            reserve_price: self.reserve_price,
            auction_end_time: self.auction_end_time,
            highest_bid: self.highest_bid,
            highest_bidder: self.highest_bidder,
            total_bids: self.total_bids,
            status: self.status,
            creator: self.creator,
            reserve_met: self.reserve_met(),
            time_remaining: self.time_remaining(now),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const CREATOR: Address = Address::Account(AccountAddress([1; 32]));
    const BIDDER: Address = Address::Account(AccountAddress([2; 32]));

    fn params(duration_in_seconds: u64) -> InitParams {
        InitParams {
            title: String::from("Art"),
            description: String::from("Oil painting"),
            starting_price: 100,
            reserve_price: 500,
            duration_in_seconds,
        }
    }

    #[concordium_test]
    fn test_unix_seconds_truncates_millis() {
        claim_eq!(unix_seconds(Timestamp::from_timestamp_millis(1_999)), 1);
        claim_eq!(unix_seconds(Timestamp::from_timestamp_millis(4_600_000)), 4_600);
    }

    #[concordium_test]
    fn test_end_time_overflow() {
        let result = State::<TestStateApi>::new(params(u64::MAX), CREATOR, 1);
        claim_eq!(result.err(), Some(CustomContractError::EndTimeOverflow));

        let state = State::<TestStateApi>::new(params(u64::MAX - 1), CREATOR, 1)
            .expect_report("End time fits exactly");
        claim_eq!(state.auction_end_time, u64::MAX);
    }

    #[concordium_test]
    fn test_flags_never_both_true() {
        let mut state = State::<TestStateApi>::new(params(10), CREATOR, 0)
            .expect_report("Failed to create state");
        claim!(state.is_active() && !state.is_ended());

        claim_eq!(state.place_bid(BIDDER, 101, 5), Ok(()));
        claim_eq!(state.emergency_stop(CREATOR), Ok(()));
        claim!(!state.is_active() && state.is_ended());
        claim_eq!(state.status, AuctionStatus::Stopped);

        // Ending after a stop is rejected and keeps the stop.
        claim_eq!(state.end(10), Err(CustomContractError::AuctionNotActive));
        claim_eq!(state.status, AuctionStatus::Stopped);
    }

    #[concordium_test]
    fn test_time_remaining_saturates() {
        let state = State::<TestStateApi>::new(params(100), CREATOR, 1_000)
            .expect_report("Failed to create state");
        claim_eq!(state.time_remaining(1_000), 100);
        claim_eq!(state.time_remaining(1_099), 1);
        claim_eq!(state.time_remaining(1_100), 0);
        claim_eq!(state.time_remaining(5_000), 0);
    }

    #[concordium_test]
    fn test_bid_count_overflow() {
        let mut state = State::<TestStateApi>::new(params(100), CREATOR, 0)
            .expect_report("Failed to create state");
        state.total_bids = u64::MAX;

        claim_eq!(
            state.place_bid(BIDDER, 200, 10),
            Err(CustomContractError::Overflow)
        );
        claim_eq!(state.total_bids, u64::MAX);
        claim_eq!(state.highest_bid, 100);
        claim_eq!(state.highest_bidder, CREATOR);
    }
}
