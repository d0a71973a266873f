//! Snapshot framing for an external renderer
//!
//! Snapshots are postcard-encoded and COBS-framed, so a byte stream of
//! consecutive snapshots can be split on `0x00`.

use crate::controller::GameState;

/// Buffer size that fits any encoded snapshot frame
pub const MAX_SNAPSHOT_FRAME: usize = 128;

/// Frame delimiter
pub const FRAME_DELIMITER: u8 = 0x00;

/// Encode a snapshot into `buf`, including the trailing delimiter
///
/// Returns the used part of the buffer.
pub fn encode<'a>(state: &GameState, buf: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
    postcard::to_slice_cobs(state, buf)
}

/// Decode one frame in place
pub fn decode(frame: &mut [u8]) -> Result<GameState, postcard::Error> {
    postcard::from_bytes_cobs(frame)
}
