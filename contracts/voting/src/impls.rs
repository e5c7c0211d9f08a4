use super::*;

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates open voting with no votes, administered by `admin`.
    pub fn new(state_builder: &mut StateBuilder<S>, admin: Address) -> Self {
        Self {
            total_votes: 0,
            is_voting_open: true,
            admin,
            user_votes: state_builder.new_map(),
        }
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.user_votes.get(voter).is_some()
    }

    /// Candidate id voted for by `voter`, `0` if `voter` has not voted.
    pub fn user_vote(&self, voter: &Address) -> u64 {
        self.user_votes.get(voter).map(|vote| *vote).unwrap_or(0)
    }

    /// Records the vote of `voter`.
    ///
    /// It rejects if:
    /// - Voting is closed;
    /// - `voter` already has a recorded vote.
    pub fn vote(&mut self, voter: Address, candidate_id: u64) -> ContractResult<()> {
        ensure!(self.is_voting_open, CustomContractError::VotingClosed);
        ensure!(!self.has_voted(&voter), CustomContractError::AlreadyVoted);

        let total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(CustomContractError::Overflow)?;

        self.user_votes.insert(voter, candidate_id);
        self.total_votes = total_votes;

        Ok(())
    }

    /// Closes voting. Closing already closed voting is accepted and changes
    /// nothing. Returns whether voting was open before the call.
    pub fn close(&mut self, sender: &Address) -> ContractResult<bool> {
        ensure!(*sender == self.admin, CustomContractError::OnlyAdmin);

        let was_open = self.is_voting_open;
        self.is_voting_open = false;

        Ok(was_open)
    }

    pub fn view(&self) -> VotingView {
        VotingView {
            admin: self.admin,
            total_votes: self.total_votes,
            is_voting_open: self.is_voting_open,
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: Address = Address::Account(AccountAddress([0; 32]));
    const VOTER: Address = Address::Account(AccountAddress([1; 32]));

    #[concordium_test]
    fn test_vote_count_overflow() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, ADMIN);
        state.total_votes = u64::MAX;

        claim_eq!(state.vote(VOTER, 3), Err(CustomContractError::Overflow));
        claim_eq!(state.total_votes, u64::MAX);
        claim!(!state.has_voted(&VOTER));
        claim_eq!(state.user_vote(&VOTER), 0);
    }
}
