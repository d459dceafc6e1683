use crate::participant::Participant;
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode participant: {0}")]
    EncodeError(String),

    #[error("Failed to decode participant: {0}")]
    DecodeError(String),
}

/// Codec for the persisted form of a participant (JSON object)
pub struct ParticipantCodec;

impl ParticipantCodec {
    /// Encode a participant to JSON bytes
    pub fn encode(participant: &Participant) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(participant).map_err(|e| CodecError::EncodeError(e.to_string()))
    }

    /// Decode a participant from JSON bytes
    pub fn decode(bytes: &[u8]) -> Result<Participant, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))
    }
}
