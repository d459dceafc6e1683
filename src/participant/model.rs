use serde::{Deserialize, Serialize};

/// Document type tag written with every participant record
pub const PARTICIPANT_DOC_TYPE: &str = "participant";

/// Category marker for the tax authority
pub const TAX_AUTHORITY_MARKER: &str = "TaxAuth";

/// Category marker for receivers that pay no tax
pub const TAX_EXEMPT_MARKER: &str = "TaxExempt";

/// A named account holding a point balance and a category
///
/// The name doubles as the store key. Categories are kept in the lowercase
/// form they were normalized to at creation. Fields missing from a stored
/// record decode to their zero values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    #[serde(rename = "docType")]
    doc_type: String,
    name: String,
    category: String,
    balance: i64,
}

impl Participant {
    /// Create a participant, lowercasing the category
    pub fn new(name: impl Into<String>, category: &str, balance: i64) -> Self {
        Self {
            doc_type: PARTICIPANT_DOC_TYPE.to_string(),
            name: name.into(),
            category: category.to_lowercase(),
            balance,
        }
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Store key for this participant
    pub fn key(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub(crate) fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }
}
