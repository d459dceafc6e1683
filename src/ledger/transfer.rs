// Transfer engine - taxed point transfers between two participants
//
// Sender, receiver and tax authority are fetched, decoded and checked before
// anything is written. The resulting writes go to the store as one
// write-set in the order tax authority, sender, receiver.

use crate::ledger::{args, AmountParsing, Ledger, LedgerError, RecordRole};
use crate::participant::{Participant, ParticipantCodec, TAX_AUTHORITY_MARKER, TAX_EXEMPT_MARKER};
use crate::storage::{LedgerStore, WriteSet};
use tracing::{debug, info, warn};

/// Outcome of a completed transfer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub sender: String,
    pub receiver: String,
    /// Amount debited from the sender
    pub amount: i64,
    /// Amount credited to the tax authority
    pub tax: i64,
    /// Amount credited to the receiver
    pub net: i64,
    /// Receiver was tax exempt
    pub exempt: bool,
}

impl<S: LedgerStore> Ledger<S> {
    /// Transfer points from `[sender, receiver, amount]`; extra arguments
    /// are ignored
    pub fn transfer<A: AsRef<str>>(&self, args: &[A]) -> Result<TransferReceipt, LedgerError> {
        args::expect_at_least(args, 3, "transfer", "3 (sender, receiver, amount)")?;

        let sender = args[0].as_ref();
        let receiver = args[1].as_ref();
        let amount_text = args[2].as_ref();

        let amount = match self.config.amount_parsing {
            AmountParsing::Strict => args::integer(amount_text, 2)?,
            AmountParsing::Lenient => args::integer(amount_text, 2).unwrap_or_else(|_| {
                let amount = args::integer_or_default(amount_text);
                warn!(amount = amount_text, parsed = amount, "unparseable transfer amount");
                amount
            }),
        };

        self.transfer_points(sender, receiver, amount)
    }

    /// Move `amount` from `sender` to `receiver`, taxing it unless the
    /// receiver is exempt
    pub fn transfer_points(
        &self,
        sender: &str,
        receiver: &str,
        amount: i64,
    ) -> Result<TransferReceipt, LedgerError> {
        debug!(sender, receiver, amount, "starting transfer");

        let tax_key = self.config.tax_authority_key.as_str();
        let sender_bytes = self.fetch(sender, RecordRole::Sender)?;
        let receiver_bytes = self.fetch(receiver, RecordRole::Receiver)?;
        let authority_bytes = self.fetch(tax_key, RecordRole::TaxAuthority)?;

        let mut from = ParticipantCodec::decode(&sender_bytes)?;
        let mut to = ParticipantCodec::decode(&receiver_bytes)?;
        let mut authority = ParticipantCodec::decode(&authority_bytes)?;

        for party in [&from, &to] {
            if self.config.category_is(party.category(), TAX_AUTHORITY_MARKER) {
                warn!(name = party.name(), "tax authority cannot take part in a transfer");
                return Err(LedgerError::CategoryRestriction(party.name().to_string()));
            }
        }

        if from.balance() < amount {
            warn!(sender, balance = from.balance(), amount, "insufficient balance");
            return Err(LedgerError::InsufficientBalance {
                name: sender.to_string(),
                available: from.balance(),
                required: amount,
            });
        }

        let exempt = self.config.category_is(to.category(), TAX_EXEMPT_MARKER);
        let tax = if exempt { 0 } else { self.config.tax_on(amount) };
        let net = amount - tax;

        // Compute every new balance before touching the write-set
        let sender_after = checked(from.balance().checked_sub(amount), &from)?;
        let receiver_after = checked(to.balance().checked_add(net), &to)?;
        let authority_after = checked(authority.balance().checked_add(tax), &authority)?;

        from.set_balance(sender_after);
        to.set_balance(receiver_after);

        let mut writes = WriteSet::new();
        if !exempt {
            authority.set_balance(authority_after);
            writes.put(tax_key, ParticipantCodec::encode(&authority)?);
        }
        writes.put(sender, ParticipantCodec::encode(&from)?);
        writes.put(receiver, ParticipantCodec::encode(&to)?);

        self.store.commit(writes)?;

        info!(sender, receiver, amount, tax, net, exempt, "transfer complete");
        Ok(TransferReceipt {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount,
            tax,
            net,
            exempt,
        })
    }
}

fn checked(balance: Option<i64>, party: &Participant) -> Result<i64, LedgerError> {
    balance.ok_or_else(|| LedgerError::BalanceOverflow(party.name().to_string()))
}
