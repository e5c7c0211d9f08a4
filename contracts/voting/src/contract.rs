use super::*;

/// Init function that opens a new voting. The account that sent the init
/// transaction becomes the admin.
///
/// It rejects if:
/// - Fails to log `Created` event.
#[init(contract = "Voting", enable_logger)]
fn voting_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
    logger: &mut impl HasLogger,
) -> InitResult<State<S>> {
    let admin = Address::Account(ctx.init_origin());

    let state = State::new(state_builder, admin);

    // Event for voting creation.
    logger.log(&CustomEvent::Created(admin))?;

    Ok(state)
}

/// Cast a vote for the candidate id given as parameter.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Voting is closed;
/// - Sender has already voted;
/// - Fails to log `Vote` event.
#[receive(
    mutable,
    contract = "Voting",
    name = "vote",
    parameter = "u64",
    enable_logger
)]
fn vote<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let candidate_id: u64 = ctx.parameter_cursor().get()?;
    let voter = ctx.sender();

    host.state_mut().vote(voter, candidate_id)?;

    // Event for vote.
    logger.log(&CustomEvent::Vote(VoteEvent {
        voter,
        candidate_id,
    }))?;

    Ok(())
}

/// Close voting for good.
///
/// It rejects if:
/// - Sender is not the admin;
/// - Fails to log `Closed` event.
#[receive(mutable, contract = "Voting", name = "closeVoting", enable_logger)]
fn close_voting<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = ctx.sender();
    let was_open = host.state_mut().close(&sender)?;

    // Event for closing, only on the transition.
    if was_open {
        logger.log(&CustomEvent::Closed(sender))?;
    }

    Ok(())
}

#[receive(contract = "Voting", name = "getVotes", return_value = "u64")]
fn get_votes<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().total_votes)
}

#[receive(contract = "Voting", name = "getVotingStatus", return_value = "bool")]
fn get_voting_status<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().is_voting_open)
}

/// Candidate id voted for by the given address.
///
/// Returns `0` both for an address that has not voted and for a vote for
/// candidate `0`; use `hasVoted` to tell them apart.
#[receive(
    contract = "Voting",
    name = "getUserVote",
    parameter = "Address",
    return_value = "u64"
)]
fn get_user_vote<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let user: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().user_vote(&user))
}

#[receive(
    contract = "Voting",
    name = "hasVoted",
    parameter = "Address",
    return_value = "bool"
)]
fn has_voted<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let user: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().has_voted(&user))
}

#[receive(contract = "Voting", name = "getAdmin", return_value = "Address")]
fn get_admin<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().admin)
}

/// View function that returns the voting summary.
#[receive(contract = "Voting", name = "view", return_value = "VotingView")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<VotingView> {
    Ok(host.state().view())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([0u8; 32]);
    const VOTER_A: AccountAddress = AccountAddress([1u8; 32]);
    const VOTER_B: AccountAddress = AccountAddress([2u8; 32]);
    const VOTER_C: AccountAddress = AccountAddress([3u8; 32]);

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);
        let mut state_builder = TestStateBuilder::new();
        let mut logger = TestLogger::init();

        let state = voting_init(&ctx, &mut state_builder, &mut logger)
            .expect_report("Failed during init_Voting");

        TestHost::new(state, state_builder)
    }

    fn new_ctx<'a>(sender: AccountAddress) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx
    }

    fn cast(
        host: &mut TestHost<State<TestStateApi>>,
        voter: AccountAddress,
        candidate_id: u64,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&candidate_id);
        let mut ctx = new_ctx(voter);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();
        vote(&ctx, host, &mut logger)
    }

    fn close(host: &mut TestHost<State<TestStateApi>>, sender: AccountAddress) -> ContractResult<()> {
        let ctx = new_ctx(sender);
        let mut logger = TestLogger::init();
        close_voting(&ctx, host, &mut logger)
    }

    fn user_vote(host: &TestHost<State<TestStateApi>>, user: AccountAddress) -> ContractResult<u64> {
        let bytes = to_bytes(&Address::Account(user));
        let mut ctx = new_ctx(ADMIN);
        ctx.set_parameter(&bytes);
        get_user_vote(&ctx, host)
    }

    fn user_has_voted(
        host: &TestHost<State<TestStateApi>>,
        user: AccountAddress,
    ) -> ContractResult<bool> {
        let bytes = to_bytes(&Address::Account(user));
        let mut ctx = new_ctx(ADMIN);
        ctx.set_parameter(&bytes);
        has_voted(&ctx, host)
    }

    #[concordium_test]
    fn test_init() {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);
        let mut state_builder = TestStateBuilder::new();
        let mut logger = TestLogger::init();

        let state = voting_init(&ctx, &mut state_builder, &mut logger)
            .expect_report("Failed during init_Voting");

        claim_eq!(state.total_votes, 0);
        claim!(state.is_voting_open);
        claim_eq!(state.admin, Address::Account(ADMIN));
        claim!(!state.has_voted(&Address::Account(ADMIN)));

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Created(Address::Account(ADMIN))),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    /// Voter A votes for 7 and cannot vote again, only the admin can close
    /// voting and after that voter B cannot vote.
    fn test_voting_flow() {
        let mut host = default_host();

        claim_eq!(cast(&mut host, VOTER_A, 7), Ok(()));
        claim_eq!(host.state().total_votes, 1);
        claim_eq!(user_vote(&host, VOTER_A), Ok(7));

        claim_eq!(
            cast(&mut host, VOTER_A, 2),
            Err(CustomContractError::AlreadyVoted)
        );
        claim_eq!(host.state().total_votes, 1);
        claim_eq!(user_vote(&host, VOTER_A), Ok(7));

        claim_eq!(close(&mut host, VOTER_A), Err(CustomContractError::OnlyAdmin));
        claim!(host.state().is_voting_open);

        claim_eq!(close(&mut host, ADMIN), Ok(()));
        claim!(!host.state().is_voting_open);

        claim_eq!(
            cast(&mut host, VOTER_B, 5),
            Err(CustomContractError::VotingClosed)
        );
        claim_eq!(host.state().total_votes, 1);
        claim!(!host.state().has_voted(&Address::Account(VOTER_B)));
    }

    #[concordium_test]
    fn test_vote_logs_event() {
        let mut host = default_host();
        let bytes = to_bytes(&3u64);
        let mut ctx = new_ctx(VOTER_B);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = vote(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Vote(VoteEvent {
                voter: Address::Account(VOTER_B),
                candidate_id: 3,
            })),
            "Incorrect event emitted"
        );
    }

    #[concordium_test]
    /// Every address is counted once, candidate ids are not validated.
    fn test_many_voters() {
        let mut host = default_host();

        claim_eq!(cast(&mut host, VOTER_A, u64::MAX), Ok(()));
        claim_eq!(cast(&mut host, VOTER_B, 1), Ok(()));
        claim_eq!(cast(&mut host, ADMIN, 1), Ok(()));
        claim_eq!(
            cast(&mut host, VOTER_B, 1),
            Err(CustomContractError::AlreadyVoted)
        );

        let ctx = new_ctx(VOTER_C);
        claim_eq!(get_votes(&ctx, &host), Ok(3));
        claim_eq!(user_vote(&host, VOTER_A), Ok(u64::MAX));
        claim_eq!(user_vote(&host, VOTER_B), Ok(1));
        claim_eq!(user_vote(&host, ADMIN), Ok(1));
    }

    #[concordium_test]
    /// Closing twice succeeds both times and only the first logs an event.
    fn test_close_twice() {
        let mut host = default_host();

        let ctx = new_ctx(ADMIN);
        let mut logger = TestLogger::init();
        claim_eq!(close_voting(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(close_voting(&ctx, &mut host, &mut logger), Ok(()));

        claim!(!host.state().is_voting_open);
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Closed(Address::Account(ADMIN))),
            "Incorrect event emitted"
        );
        claim_eq!(get_voting_status(&ctx, &host), Ok(false));
    }

    #[concordium_test]
    fn test_non_admin_cannot_close_after_close() {
        let mut host = default_host();

        claim_eq!(close(&mut host, ADMIN), Ok(()));
        claim_eq!(close(&mut host, VOTER_C), Err(CustomContractError::OnlyAdmin));
    }

    #[concordium_test]
    /// `getUserVote` cannot tell a vote for candidate 0 from no vote, while
    /// `hasVoted` can.
    fn test_candidate_zero_is_ambiguous() {
        let mut host = default_host();

        claim_eq!(cast(&mut host, VOTER_A, 0), Ok(()));

        claim_eq!(user_vote(&host, VOTER_A), Ok(0));
        claim_eq!(user_vote(&host, VOTER_B), Ok(0));

        claim_eq!(user_has_voted(&host, VOTER_A), Ok(true));
        claim_eq!(user_has_voted(&host, VOTER_B), Ok(false));

        // The presence check, not the value, blocks a second vote.
        claim_eq!(
            cast(&mut host, VOTER_A, 4),
            Err(CustomContractError::AlreadyVoted)
        );
    }

    #[concordium_test]
    fn test_views() {
        let mut host = default_host();
        claim_eq!(cast(&mut host, VOTER_A, 9), Ok(()));

        let ctx = new_ctx(VOTER_B);
        claim_eq!(get_admin(&ctx, &host), Ok(Address::Account(ADMIN)));
        claim_eq!(get_voting_status(&ctx, &host), Ok(true));
        claim_eq!(
            view(&ctx, &host),
            Ok(VotingView {
                admin: Address::Account(ADMIN),
                total_votes: 1,
                is_voting_open: true,
            })
        );
    }

    #[concordium_test]
    fn test_unparsable_parameters() {
        let mut host = default_host();

        let mut ctx = new_ctx(VOTER_A);
        ctx.set_parameter(&[7]);
        let mut logger = TestLogger::init();
        claim_eq!(
            vote(&ctx, &mut host, &mut logger),
            Err(CustomContractError::ParseParams)
        );
        claim_eq!(host.state().total_votes, 0);

        claim_eq!(
            get_user_vote(&ctx, &host),
            Err(CustomContractError::ParseParams)
        );
    }

    #[concordium_test]
    fn test_error_messages() {
        claim_eq!(CustomContractError::VotingClosed.message(), "Voting is closed");
        claim_eq!(
            CustomContractError::AlreadyVoted.message(),
            "User already voted"
        );
        claim_eq!(
            CustomContractError::OnlyAdmin.message(),
            "Only admin can close voting"
        );
    }
}
