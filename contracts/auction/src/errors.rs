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
    /// Auction was ended or stopped (Error code: -4).
    AuctionNotActive,
    /// Bid placed at or after the auction end time (Error code: -5).
    AuctionExpired,
    /// Bid is not strictly higher than the current highest bid (Error code: -6).
    BidTooLow,
    /// The auction creator tried to bid (Error code: -7).
    CreatorCannotBid,
    /// Attempt to end the auction before its end time (Error code: -8).
    AuctionStillRunning,
    /// Only the auction creator can stop the auction (Error code: -9).
    OnlyCreator,
    /// Creation time plus duration does not fit into `u64` (Error code: -10).
    EndTimeOverflow,
    /// Counter overflow (Error code: -11).
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
            Self::AuctionNotActive => "Auction is not active",
            Self::AuctionExpired => "Auction has ended",
            Self::BidTooLow => "Bid amount must be higher than current highest bid",
            Self::CreatorCannotBid => "Auction creator cannot bid",
            Self::AuctionStillRunning => "Auction duration has not yet ended",
            Self::OnlyCreator => "Only auction creator can stop the auction",
            Self::EndTimeOverflow => "Auction end time overflows",
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
