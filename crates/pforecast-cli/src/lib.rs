//! Ship forecast CLI library.
//!
//! Report types and text/JSON rendering for the `pforecast-cli` binary,
//! plus terminal styling helpers.

pub mod output;
pub mod terminal;
