// Participant lifecycle - create and read single records

use crate::ledger::{args, Ledger, LedgerError, RecordRole};
use crate::participant::{Participant, ParticipantCodec};
use crate::storage::LedgerStore;
use tracing::{debug, info, warn};

impl<S: LedgerStore> Ledger<S> {
    /// Create a participant from `[name, category, balance]`
    pub fn create<A: AsRef<str>>(&self, args: &[A]) -> Result<Participant, LedgerError> {
        args::expect_exactly(args, 3, "create", "3 (name, category, balance)")?;

        let name = args::non_empty(args, 0)?;
        let category = args::non_empty(args, 1)?;
        let balance_text = args::non_empty(args, 2)?;
        let balance = args::integer(balance_text, 2)?;

        self.create_participant(name, category, balance)
    }

    /// Create a participant and write it under its name
    ///
    /// Fails with `AlreadyExists` if the name is taken; the existing record
    /// is left untouched.
    pub fn create_participant(
        &self,
        name: &str,
        category: &str,
        balance: i64,
    ) -> Result<Participant, LedgerError> {
        debug!(name, category, balance, "creating participant");

        if self.store.get(name.as_bytes())?.is_some() {
            warn!(name, "participant already exists");
            return Err(LedgerError::AlreadyExists(name.to_string()));
        }

        let participant = Participant::new(name, category, balance);
        let bytes = ParticipantCodec::encode(&participant)?;
        self.store.put(participant.key(), &bytes)?;

        info!(name, category = participant.category(), balance, "participant created");
        Ok(participant)
    }

    /// Read the stored bytes for `[name]`
    pub fn read<A: AsRef<str>>(&self, args: &[A]) -> Result<Vec<u8>, LedgerError> {
        args::expect_exactly(args, 1, "read", "1 (name)")?;
        self.fetch(args[0].as_ref(), RecordRole::Participant)
    }

    /// Read and decode a participant
    pub fn participant(&self, name: &str) -> Result<Participant, LedgerError> {
        let bytes = self.fetch(name, RecordRole::Participant)?;
        Ok(ParticipantCodec::decode(&bytes)?)
    }

    /// Fetch raw record bytes, mapping absence to `NotFound`
    pub(crate) fn fetch(&self, name: &str, role: RecordRole) -> Result<Vec<u8>, LedgerError> {
        match self.store.get(name.as_bytes())? {
            Some(bytes) => Ok(bytes),
            None => {
                debug!(name, %role, "record not found");
                Err(LedgerError::NotFound {
                    role,
                    name: name.to_string(),
                })
            }
        }
    }
}
