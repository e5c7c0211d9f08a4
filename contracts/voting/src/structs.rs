use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Number of recorded votes.
    pub total_votes: u64,
    /// Once false it stays false.
    pub is_voting_open: bool,
    /// Creator of the instance, allowed to close voting.
    pub admin: Address,
    /// Candidate id voted for by each address. Absent until the address votes.
    pub user_votes: StateMap<Address, u64, S>,
}

/// Summary of the voting returned by `view`.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct VotingView {
    pub admin: Address,
    pub total_votes: u64,
    pub is_voting_open: bool,
}
