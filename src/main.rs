// ledger - run one ledger operation against a sled database

use clap::Parser;
use pointledger::ledger::{AmountParsing, CategoryMatching};
use pointledger::{Ledger, LedgerConfig, LedgerError, SledStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ledger", version, about = "Participant ledger with taxed point transfers")]
struct Cli {
    /// Path of the sled database
    #[arg(long, default_value = "ledger-db")]
    db: PathBuf,

    /// Store key of the tax authority participant
    #[arg(long, default_value = "TaxAuth")]
    tax_authority: String,

    /// Tax rate in percent applied to taxed transfers
    #[arg(long, default_value_t = 2)]
    tax_rate: u8,

    /// Reject transfer amounts that are not integers
    #[arg(long)]
    strict_amount: bool,

    /// Compare category markers case-insensitively
    #[arg(long)]
    case_insensitive_categories: bool,

    /// Operation name (create, read, transfer, initParty, readParty, transferPoints)
    operation: String,

    /// Positional operation arguments
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn config(&self) -> LedgerConfig {
        let amount_parsing = if self.strict_amount {
            AmountParsing::Strict
        } else {
            AmountParsing::Lenient
        };
        let category_matching = if self.case_insensitive_categories {
            CategoryMatching::CaseInsensitive
        } else {
            CategoryMatching::Exact
        };

        LedgerConfig::new()
            .with_tax_authority_key(self.tax_authority.clone())
            .with_tax_rate_percent(self.tax_rate)
            .with_amount_parsing(amount_parsing)
            .with_category_matching(category_matching)
    }
}

fn run(cli: &Cli) -> Result<Option<Vec<u8>>, LedgerError> {
    let store = SledStore::open(&cli.db)?;
    let ledger = Ledger::with_config(store, cli.config())?;

    let payload = ledger.dispatch(&cli.operation, cli.args.as_slice())?;
    ledger.store().flush()?;
    Ok(payload)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(Some(payload)) => {
            println!("{}", String::from_utf8_lossy(&payload));
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
