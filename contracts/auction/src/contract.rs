use super::*;

/// Init function that creates a new auction.
///
/// The creator is the account that sent the init transaction and the end time
/// is counted from the slot time of the block.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The end time overflows;
/// - Fails to log `Created` event.
#[init(contract = "Auction", parameter = "InitParams", enable_logger)]
fn auction_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    _state_builder: &mut StateBuilder<S>,
    logger: &mut impl HasLogger,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    let creator = Address::Account(ctx.init_origin());
    let now = unix_seconds(ctx.metadata().slot_time());

    let state = State::new(params, creator, now)?;

    // Event for auction creation.
    logger.log(&CustomEvent::Created(CreatedEvent {
        creator,
        starting_price: state.starting_price,
        reserve_price: state.reserve_price,
        auction_end_time: state.auction_end_time,
    }))?;

    Ok(state)
}

/// Receive function in which accounts can outbid the highest bid before the
/// auction end time. The parameter is the bid amount.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The auction is not active;
/// - The auction end time has been reached;
/// - The bid is not higher than the current highest bid;
/// - Sender is the auction creator;
/// - Fails to log `Bid` event.
#[receive(
    mutable,
    contract = "Auction",
    name = "placeBid",
    parameter = "u64",
    enable_logger
)]
fn auction_place_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let amount: u64 = ctx.parameter_cursor().get()?;
    let bidder = ctx.sender();
    let now = unix_seconds(ctx.metadata().slot_time());

    host.state_mut().place_bid(bidder, amount, now)?;

    // Event for bid.
    logger.log(&CustomEvent::Bid(BidEvent { bidder, amount }))?;

    Ok(())
}

/// Receive function used to end the auction once its end time is reached.
/// Anybody can call it.
///
/// It rejects if:
/// - The auction is not active;
/// - The auction end time has not been reached;
/// - Fails to log `Ended` event.
#[receive(mutable, contract = "Auction", name = "endAuction", enable_logger)]
fn auction_end<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let now = unix_seconds(ctx.metadata().slot_time());
    let state = host.state_mut();

    state.end(now)?;

    // Event for auction end.
    logger.log(&CustomEvent::Ended(state.end_event()))?;

    Ok(())
}

/// Receive function used by the creator to stop the auction before its end
/// time.
///
/// It rejects if:
/// - Sender is not the auction creator;
/// - The auction is not active;
/// - Fails to log `EmergencyStop` event.
#[receive(
    mutable,
    contract = "Auction",
    name = "emergencyStopAuction",
    enable_logger
)]
fn auction_emergency_stop<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();

    state.emergency_stop(ctx.sender())?;

    // Event for emergency stop.
    logger.log(&CustomEvent::EmergencyStop(state.end_event()))?;

    Ok(())
}

#[receive(contract = "Auction", name = "getCurrentHighestBid", return_value = "u64")]
fn get_current_highest_bid<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().highest_bid)
}

#[receive(
    contract = "Auction",
    name = "getCurrentHighestBidder",
    return_value = "Address"
)]
fn get_current_highest_bidder<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().highest_bidder)
}

#[receive(contract = "Auction", name = "getTotalBids", return_value = "u64")]
fn get_total_bids<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().total_bids)
}

/// Whether the auction still accepts bids.
#[receive(contract = "Auction", name = "getAuctionStatus", return_value = "bool")]
fn get_auction_status<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().is_active())
}

#[receive(contract = "Auction", name = "hasAuctionEnded", return_value = "bool")]
fn has_auction_ended<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().is_ended())
}

#[receive(contract = "Auction", name = "getAuctionEndTime", return_value = "u64")]
fn get_auction_end_time<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().auction_end_time)
}

#[receive(contract = "Auction", name = "getStartingPrice", return_value = "u64")]
fn get_starting_price<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().starting_price)
}

#[receive(contract = "Auction", name = "getReservePrice", return_value = "u64")]
fn get_reserve_price<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().reserve_price)
}

#[receive(contract = "Auction", name = "getAuctionCreator", return_value = "Address")]
fn get_auction_creator<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().creator)
}

#[receive(contract = "Auction", name = "getAuctionTitle", return_value = "String")]
fn get_auction_title<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().title.clone())
}

#[receive(contract = "Auction", name = "getAuctionDesc", return_value = "String")]
fn get_auction_desc<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().description.clone())
}

/// Whether the highest bid reaches the reserve price. Purely informational.
#[receive(contract = "Auction", name = "isReservePriceMet", return_value = "bool")]
fn is_reserve_price_met<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().reserve_met())
}

/// Seconds left until the end time, zero once it is reached.
#[receive(contract = "Auction", name = "getTimeRemaining", return_value = "u64")]
fn get_time_remaining<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let now = unix_seconds(ctx.metadata().slot_time());
    Ok(host.state().time_remaining(now))
}

/// View function that returns the whole auction in one call.
#[receive(contract = "Auction", name = "view", return_value = "AuctionView")]
fn view<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AuctionView> {
    let now = unix_seconds(ctx.metadata().slot_time());
    Ok(host.state().view(now))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const CREATOR: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);

    const CREATED_AT: u64 = 1_000;
    const DURATION: u64 = 3_600;
    const END_TIME: u64 = CREATED_AT + DURATION;

    fn slot_time(seconds: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(seconds * 1000)
    }

    fn art_params() -> InitParams {
        InitParams {
            title: String::from("Art"),
            description: String::from("Oil painting"),
            starting_price: 100,
            reserve_price: 500,
            duration_in_seconds: DURATION,
        }
    }

    fn new_host_with(params: InitParams) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(CREATOR)
            .set_metadata_slot_time(slot_time(CREATED_AT))
            .set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();
        let mut logger = TestLogger::init();

        let state = auction_init(&ctx, &mut state_builder, &mut logger)
            .expect_report("Failed during init_Auction");

        TestHost::new(state, state_builder)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        new_host_with(art_params())
    }

    fn new_ctx<'a>(sender: AccountAddress, seconds: u64) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender))
            .set_metadata_slot_time(slot_time(seconds));
        ctx
    }

    fn bid(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        amount: u64,
        seconds: u64,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&amount);
        let mut ctx = new_ctx(sender, seconds);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();
        auction_place_bid(&ctx, host, &mut logger)
    }

    fn end(host: &mut TestHost<State<TestStateApi>>, seconds: u64) -> ContractResult<()> {
        let ctx = new_ctx(BOB, seconds);
        let mut logger = TestLogger::init();
        auction_end(&ctx, host, &mut logger)
    }

    fn stop(host: &mut TestHost<State<TestStateApi>>, sender: AccountAddress) -> ContractResult<()> {
        let ctx = new_ctx(sender, CREATED_AT + 1);
        let mut logger = TestLogger::init();
        auction_emergency_stop(&ctx, host, &mut logger)
    }

    #[concordium_test]
    /// Test that initialization sets every field and logs the creation.
    fn test_init() {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&art_params());
        ctx.set_init_origin(CREATOR)
            .set_metadata_slot_time(slot_time(CREATED_AT))
            .set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();
        let mut logger = TestLogger::init();

        let state = auction_init(&ctx, &mut state_builder, &mut logger)
            .expect_report("Failed during init_Auction");

        claim_eq!(state.title, "Art");
        claim_eq!(state.description, "Oil painting");
        claim_eq!(state.starting_price, 100);
        claim_eq!(state.reserve_price, 500);
        claim_eq!(state.auction_end_time, END_TIME);
        claim_eq!(state.highest_bid, 100);
        claim_eq!(state.highest_bidder, Address::Account(CREATOR));
        claim_eq!(state.total_bids, 0);
        claim_eq!(state.creator, Address::Account(CREATOR));
        claim!(state.is_active());
        claim!(!state.is_ended());

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Created(CreatedEvent {
                creator: Address::Account(CREATOR),
                starting_price: 100,
                reserve_price: 500,
                auction_end_time: END_TIME,
            })),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    fn test_init_end_time_overflow() {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            duration_in_seconds: u64::MAX,
            ..art_params()
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(CREATOR)
            .set_metadata_slot_time(slot_time(CREATED_AT))
            .set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();
        let mut logger = TestLogger::init();

        let result = auction_init(&ctx, &mut state_builder, &mut logger);

        claim!(result.is_err(), "Overflowing end time should reject");
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    /// Walks through the art auction:
    /// 1. Alice bids 150 at t=1500 and becomes the highest bidder.
    /// 2. Bob bids 120 at t=1600 and is rejected.
    /// 3. Ending at t=2000 is rejected because the end time is 4600.
    /// 4. Ending at t=4600 succeeds, the reserve of 500 is not met.
    fn test_art_auction() {
        let mut host = default_host();

        claim_eq!(bid(&mut host, ALICE, 150, 1_500), Ok(()));
        claim_eq!(host.state().highest_bid, 150);
        claim_eq!(host.state().highest_bidder, Address::Account(ALICE));
        claim_eq!(host.state().total_bids, 1);

        claim_eq!(
            bid(&mut host, BOB, 120, 1_600),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(host.state().highest_bid, 150);
        claim_eq!(host.state().total_bids, 1);

        claim_eq!(
            end(&mut host, 2_000),
            Err(CustomContractError::AuctionStillRunning)
        );
        claim!(host.state().is_active());

        claim_eq!(end(&mut host, END_TIME), Ok(()));
        claim!(!host.state().is_active());
        claim!(host.state().is_ended());
        claim_eq!(host.state().status, AuctionStatus::Ended);

        let ctx = new_ctx(BOB, END_TIME);
        claim_eq!(is_reserve_price_met(&ctx, &host), Ok(false));
        claim_eq!(has_auction_ended(&ctx, &host), Ok(true));
        claim_eq!(get_auction_status(&ctx, &host), Ok(false));
    }

    #[concordium_test]
    fn test_bid_logs_event() {
        let mut host = default_host();
        let bytes = to_bytes(&200u64);
        let mut ctx = new_ctx(ALICE, 1_500);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = auction_place_bid(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Bid(BidEvent {
                bidder: Address::Account(ALICE),
                amount: 200,
            })),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    /// Bids equal to the highest bid are ties and are rejected.
    fn test_bid_tie_rejected() {
        let mut host = default_host();

        claim_eq!(
            bid(&mut host, ALICE, 100, 1_500),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(bid(&mut host, ALICE, 101, 1_500), Ok(()));
        claim_eq!(
            bid(&mut host, BOB, 101, 1_501),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(host.state().highest_bidder, Address::Account(ALICE));
        claim_eq!(host.state().total_bids, 1);
    }

    #[concordium_test]
    /// Highest bid never decreases and every accepted bid is counted.
    fn test_bid_sequence() {
        let mut host = default_host();
        let bids = [
            (ALICE, 110, true),
            (BOB, 105, false),
            (BOB, 200, true),
            (ALICE, 200, false),
            (ALICE, 1_000, true),
            (BOB, 0, false),
        ];

        let mut accepted = 0;
        let mut highest = host.state().highest_bid;
        for (i, (bidder, amount, ok)) in bids.iter().enumerate() {
            let result = bid(&mut host, *bidder, *amount, CREATED_AT + i as u64);
            claim_eq!(result.is_ok(), *ok);
            if *ok {
                accepted += 1;
            }
            claim!(host.state().highest_bid >= highest);
            highest = host.state().highest_bid;
        }

        claim_eq!(host.state().total_bids, accepted);
        claim_eq!(host.state().highest_bid, 1_000);
        claim_eq!(host.state().highest_bidder, Address::Account(ALICE));
    }

    #[concordium_test]
    fn test_creator_cannot_bid() {
        let mut host = default_host();

        claim_eq!(
            bid(&mut host, CREATOR, 1_000, 1_500),
            Err(CustomContractError::CreatorCannotBid)
        );
        claim_eq!(host.state().total_bids, 0);
        claim_eq!(host.state().highest_bidder, Address::Account(CREATOR));
    }

    #[concordium_test]
    fn test_bid_at_end_time_rejected() {
        let mut host = default_host();

        claim_eq!(bid(&mut host, ALICE, 150, END_TIME - 1), Ok(()));
        claim_eq!(
            bid(&mut host, BOB, 200, END_TIME),
            Err(CustomContractError::AuctionExpired)
        );
        // The auction is still active until somebody ends it.
        claim!(host.state().is_active());
    }

    #[concordium_test]
    fn test_bid_after_end_rejected() {
        let mut host = default_host();

        claim_eq!(end(&mut host, END_TIME + 10), Ok(()));
        claim_eq!(
            bid(&mut host, ALICE, 1_000, END_TIME + 11),
            Err(CustomContractError::AuctionNotActive)
        );
        claim_eq!(
            end(&mut host, END_TIME + 12),
            Err(CustomContractError::AuctionNotActive)
        );
        claim_eq!(host.state().status, AuctionStatus::Ended);
    }

    #[concordium_test]
    fn test_end_logs_outcome() {
        let mut host = default_host();
        claim_eq!(bid(&mut host, ALICE, 600, 1_500), Ok(()));

        let ctx = new_ctx(BOB, END_TIME);
        let mut logger = TestLogger::init();
        let result = auction_end(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Ended(EndEvent {
                highest_bidder: Address::Account(ALICE),
                highest_bid: 600,
                reserve_met: true,
            })),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    fn test_emergency_stop() {
        let mut host = default_host();
        claim_eq!(bid(&mut host, ALICE, 150, 1_500), Ok(()));

        claim_eq!(
            stop(&mut host, ALICE),
            Err(CustomContractError::OnlyCreator)
        );
        claim!(host.state().is_active());

        let ctx = new_ctx(CREATOR, 1_600);
        let mut logger = TestLogger::init();
        let result = auction_emergency_stop(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(!host.state().is_active());
        claim!(host.state().is_ended());
        claim_eq!(host.state().status, AuctionStatus::Stopped);
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::EmergencyStop(EndEvent {
                highest_bidder: Address::Account(ALICE),
                highest_bid: 150,
                reserve_met: false,
            })),
            "Incorrect event emitted"
        );

        // Stopping twice fails, bids are no longer accepted.
        claim_eq!(
            stop(&mut host, CREATOR),
            Err(CustomContractError::AuctionNotActive)
        );
        claim_eq!(
            bid(&mut host, BOB, 1_000, 1_700),
            Err(CustomContractError::AuctionNotActive)
        );
    }

    #[concordium_test]
    fn test_stop_checks_creator_first() {
        let mut host = default_host();
        claim_eq!(end(&mut host, END_TIME), Ok(()));

        claim_eq!(
            stop(&mut host, BOB),
            Err(CustomContractError::OnlyCreator)
        );
        claim_eq!(
            stop(&mut host, CREATOR),
            Err(CustomContractError::AuctionNotActive)
        );
        claim_eq!(host.state().status, AuctionStatus::Ended);
    }

    #[concordium_test]
    fn test_getters() {
        let mut host = default_host();
        claim_eq!(bid(&mut host, BOB, 700, 2_000), Ok(()));

        let ctx = new_ctx(ALICE, 2_600);
        claim_eq!(get_current_highest_bid(&ctx, &host), Ok(700));
        claim_eq!(
            get_current_highest_bidder(&ctx, &host),
            Ok(Address::Account(BOB))
        );
        claim_eq!(get_total_bids(&ctx, &host), Ok(1));
        claim_eq!(get_auction_status(&ctx, &host), Ok(true));
        claim_eq!(has_auction_ended(&ctx, &host), Ok(false));
        claim_eq!(get_auction_end_time(&ctx, &host), Ok(END_TIME));
        claim_eq!(get_starting_price(&ctx, &host), Ok(100));
        claim_eq!(get_reserve_price(&ctx, &host), Ok(500));
        claim_eq!(
            get_auction_creator(&ctx, &host),
            Ok(Address::Account(CREATOR))
        );
        claim_eq!(get_auction_title(&ctx, &host), Ok(String::from("Art")));
        claim_eq!(
            get_auction_desc(&ctx, &host),
            Ok(String::from("Oil painting"))
        );
        claim_eq!(is_reserve_price_met(&ctx, &host), Ok(true));
        claim_eq!(get_time_remaining(&ctx, &host), Ok(2_000));

        let late_ctx = new_ctx(ALICE, END_TIME + 100);
        claim_eq!(get_time_remaining(&late_ctx, &host), Ok(0));
    }

    #[concordium_test]
    fn test_view() {
        let host = default_host();
        let ctx = new_ctx(ALICE, 1_600);

        claim_eq!(
            view(&ctx, &host),
            Ok(AuctionView {
                title: String::from("Art"),
                description: String::from("Oil painting"),
                starting_price: 100,
                reserve_price: 500,
                auction_end_time: END_TIME,
                highest_bid: 100,
                highest_bidder: Address::Account(CREATOR),
                total_bids: 0,
                status: AuctionStatus::Active,
                creator: Address::Account(CREATOR),
                reserve_met: false,
                time_remaining: 3_000,
            })
        );
    }

    #[concordium_test]
    /// Zero duration auctions can be ended right away and never take bids.
    fn test_zero_duration() {
        let mut host = new_host_with(InitParams {
            duration_in_seconds: 0,
            ..art_params()
        });

        claim_eq!(
            bid(&mut host, ALICE, 150, CREATED_AT),
            Err(CustomContractError::AuctionExpired)
        );
        claim_eq!(end(&mut host, CREATED_AT), Ok(()));
    }

    #[concordium_test]
    fn test_unparsable_bid() {
        let mut host = default_host();
        let mut ctx = new_ctx(ALICE, 1_500);
        ctx.set_parameter(&[1, 2]);
        let mut logger = TestLogger::init();

        let result = auction_place_bid(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::ParseParams));
        claim_eq!(host.state().total_bids, 0);
    }

    #[concordium_test]
    fn test_error_messages() {
        claim_eq!(
            CustomContractError::AuctionNotActive.message(),
            "Auction is not active"
        );
        claim_eq!(
            CustomContractError::BidTooLow.message(),
            "Bid amount must be higher than current highest bid"
        );
        claim_eq!(
            CustomContractError::AuctionStillRunning.message(),
            "Auction duration has not yet ended"
        );
    }
}
