use super::*;

pub type ContractResult<A> = Result<A, CustomContractError>;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Voting has been closed (Error code: -4).
    VotingClosed,
    /// Sender already has a recorded vote (Error code: -5).
    AlreadyVoted,
    /// Only the admin can close voting (Error code: -6).
    OnlyAdmin,
    /// Counter overflow (Error code: -7).
    Overflow,
}

impl CustomContractError {
    /// Human readable description of the violated rule.
    ///
    /// Rejections only carry the error code on chain; clients and tools map
    /// the code back to this text off-chain.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ParseParams => "Failed to parse parameter",
            Self::LogFull => "Event log is full",
            Self::LogMalformed => "Event log is malformed",
            Self::VotingClosed => "Voting is closed",
            Self::AlreadyVoted => "User already voted",
            Self::OnlyAdmin => "Only admin can close voting",
            Self::Overflow => "Arithmetic overflow",
        }
    }
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}
