use super::*;

/// An untagged event of auction creation.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct CreatedEvent {
    /// Account who created the auction.
    pub creator: Address,
    /// Initial highest bid.
    pub starting_price: u64,
    /// Informational minimum price.
    pub reserve_price: u64,
    /// Unix time in seconds after which bids are rejected.
    pub auction_end_time: u64,
}

/// An untagged event of an accepted bid.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct BidEvent {
    /// Account who has bidden.
    pub bidder: Address,
    /// New highest bid.
    pub amount: u64,
}

/// An untagged event describing the outcome of an auction.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct EndEvent {
    /// Winning account, the creator if nobody has bidden.
    pub highest_bidder: Address,
    /// Winning bid.
    pub highest_bid: u64,
    /// Whether the winning bid reaches the reserve price.
    pub reserve_met: bool,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, Eq, PartialEq)]
pub enum CustomEvent {
    /// Auction Created
    Created(CreatedEvent),
    /// Bid Accepted
    Bid(BidEvent),
    /// Auction Ended after its end time
    Ended(EndEvent),
    /// Auction Stopped by the creator
    EmergencyStop(EndEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Created(event) => {
                out.write_u8(CREATED_TAG)?;
                event.serial(out)
            }
            CustomEvent::Bid(event) => {
                out.write_u8(BID_TAG)?;
                event.serial(out)
            }
            CustomEvent::Ended(event) => {
                out.write_u8(ENDED_TAG)?;
                event.serial(out)
            }
            CustomEvent::EmergencyStop(event) => {
                out.write_u8(EMERGENCY_STOP_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            CREATED_TAG => CreatedEvent::deserial(source).map(CustomEvent::Created),
            BID_TAG => BidEvent::deserial(source).map(CustomEvent::Bid),
            ENDED_TAG => EndEvent::deserial(source).map(CustomEvent::Ended),
            EMERGENCY_STOP_TAG => EndEvent::deserial(source).map(CustomEvent::EmergencyStop),
            _ => Err(ParseError::default()),
        }
    }
}
