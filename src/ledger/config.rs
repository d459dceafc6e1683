use crate::ledger::LedgerError;
use crate::participant::TAX_AUTHORITY_MARKER;

/// How category markers are compared against stored categories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryMatching {
    /// Byte-for-byte comparison against the mixed-case markers.
    /// Stored categories are lowercase, so records created through the
    /// ledger never match.
    #[default]
    Exact,
    /// ASCII case-insensitive comparison
    CaseInsensitive,
}

/// What a transfer does with an amount that is not an integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmountParsing {
    /// Unparseable amounts become zero and the transfer proceeds.
    /// Out-of-range amounts saturate to `i64::MIN`/`i64::MAX`.
    #[default]
    Lenient,
    /// Unparseable amounts are rejected before any store access
    Strict,
}

/// Configuration for the ledger
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Store key of the tax authority record
    pub tax_authority_key: String,
    /// Percentage of a taxed transfer credited to the tax authority
    pub tax_rate_percent: u8,
    pub category_matching: CategoryMatching,
    pub amount_parsing: AmountParsing,
}

impl LedgerConfig {
    /// Create a new config with builder pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tax authority key
    pub fn with_tax_authority_key(mut self, key: impl Into<String>) -> Self {
        self.tax_authority_key = key.into();
        self
    }

    /// Set the tax rate in percent
    pub fn with_tax_rate_percent(mut self, rate: u8) -> Self {
        self.tax_rate_percent = rate;
        self
    }

    pub fn with_category_matching(mut self, matching: CategoryMatching) -> Self {
        self.category_matching = matching;
        self
    }

    pub fn with_amount_parsing(mut self, parsing: AmountParsing) -> Self {
        self.amount_parsing = parsing;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.tax_authority_key.is_empty() {
            return Err(LedgerError::InvalidConfig(
                "tax_authority_key must be non-empty".to_string(),
            ));
        }
        if self.tax_rate_percent > 100 {
            return Err(LedgerError::InvalidConfig(format!(
                "tax_rate_percent must be <= 100, got {}",
                self.tax_rate_percent
            )));
        }
        Ok(())
    }

    /// Whether a stored category counts as the given marker
    pub fn category_is(&self, category: &str, marker: &str) -> bool {
        match self.category_matching {
            CategoryMatching::Exact => category == marker,
            CategoryMatching::CaseInsensitive => category.eq_ignore_ascii_case(marker),
        }
    }

    /// Tax owed on a taxed transfer of `amount`, truncating toward zero
    pub fn tax_on(&self, amount: i64) -> i64 {
        let tax = i128::from(amount) * i128::from(self.tax_rate_percent) / 100;
        // |tax| <= |amount| while the rate is at most 100
        i64::try_from(tax).unwrap_or(amount)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            tax_authority_key: TAX_AUTHORITY_MARKER.to_string(),
            tax_rate_percent: 2,
            category_matching: CategoryMatching::Exact,
            amount_parsing: AmountParsing::Lenient,
        }
    }
}
