/// Tag for the auction Created event.
pub const CREATED_TAG: u8 = u8::MAX;

/// Tag for the Bid event.
pub const BID_TAG: u8 = u8::MAX - 1;

/// Tag for the auction Ended event.
pub const ENDED_TAG: u8 = u8::MAX - 2;

/// Tag for the Emergency Stop event.
pub const EMERGENCY_STOP_TAG: u8 = u8::MAX - 3;
