use super::*;

/// An untagged event of a cast vote.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq)]
pub struct VoteEvent {
    /// Account who has voted.
    pub voter: Address,
    /// Candidate voted for, not validated.
    pub candidate_id: u64,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, Eq, PartialEq)]
pub enum CustomEvent {
    /// Voting Created by the admin
    Created(Address),
    /// Vote Cast
    Vote(VoteEvent),
    /// Voting Closed by the admin
    Closed(Address),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Created(admin) => {
                out.write_u8(CREATED_TAG)?;
                admin.serial(out)
            }
            CustomEvent::Vote(event) => {
                out.write_u8(VOTE_TAG)?;
                event.serial(out)
            }
            CustomEvent::Closed(admin) => {
                out.write_u8(CLOSED_TAG)?;
                admin.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            CREATED_TAG => Address::deserial(source).map(CustomEvent::Created),
            VOTE_TAG => VoteEvent::deserial(source).map(CustomEvent::Vote),
            CLOSED_TAG => Address::deserial(source).map(CustomEvent::Closed),
            _ => Err(ParseError::default()),
        }
    }
}
