// Participant module - THE RECORD
// The single entity kept in the ledger and its byte encoding

mod codec;
mod model;

pub use codec::{CodecError, ParticipantCodec};
pub use model::{Participant, PARTICIPANT_DOC_TYPE, TAX_AUTHORITY_MARKER, TAX_EXEMPT_MARKER};
