/// Tag for the voting Created event.
pub const CREATED_TAG: u8 = u8::MAX;

/// Tag for the Vote event.
pub const VOTE_TAG: u8 = u8::MAX - 1;

/// Tag for the voting Closed event.
pub const CLOSED_TAG: u8 = u8::MAX - 2;
