/// Local development chain constants.
pub mod develop;

/// Ropsten testnet constants.
pub mod ropsten;
