#![deny(missing_docs)]

use std::path::PathBuf;

use apparel::ean::Ean;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "atelier_cli")]
#[command(bin_name = "atelier_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Session snapshot file
    #[arg(long, value_name = "SESSION_FILE")]
    pub(crate) session: PathBuf,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Create a new empty session
    Create,

    /// Add garment variants from the catalog to the work table
    Add {
        /// Garment catalog file (CSV)
        #[arg(long, value_name = "CATALOG_FILE")]
        garments: PathBuf,

        /// EANs of the variants to add
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        eans: Vec<Ean>,
    },

    /// Select or deselect one work table item
    Select {
        /// EAN of the work table item
        #[arg(long)]
        ean: Ean,

        /// Selection action
        #[arg(long, value_enum)]
        action: SelectionActionArg,
    },

    /// Select or deselect every work table item
    SelectAll {
        /// Selection action
        #[arg(long, value_enum)]
        action: SelectionActionArg,
    },

    /// Overwrite the build quantity of one work table item
    SetQuantity {
        /// EAN of the work table item
        #[arg(long)]
        ean: Ean,

        /// Build quantity (>= 0)
        #[arg(long)]
        quantity: u32,
    },

    /// Adjust the build quantity of every selected item
    AdjustQuantity {
        /// Signed quantity delta; quantities are floored at 0
        #[arg(long, allow_hyphen_values = true)]
        delta: i32,

        /// Only adjust items of this size
        #[arg(long)]
        size: Option<String>,
    },

    /// Remove every selected item from the work table
    RemoveSelected,

    /// Assign a component to the filtered work table destinations
    Assign {
        /// Component catalog file (CSV)
        #[arg(long, value_name = "CATALOG_FILE")]
        components: PathBuf,

        /// EAN of the component to assign
        #[arg(long)]
        ean: Ean,

        /// Consumption per garment unit (>= 0)
        #[arg(long, allow_hyphen_values = true)]
        consumption: Decimal,

        /// Destination filter: garment references (empty = pass all)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        references: Vec<String>,

        /// Destination filter: garment colors (empty = pass all)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        colors: Vec<String>,

        /// Destination filter: garment sizes (empty = pass all)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        sizes: Vec<String>,
    },

    /// Revert the records of the last assignment
    Undo,

    /// Replace the consumption value of one ledger record
    SetConsumption {
        /// Row position in the ordered ledger (0-based)
        #[arg(long)]
        row: usize,

        /// Consumption per garment unit (>= 0)
        #[arg(long, allow_hyphen_values = true)]
        consumption: Decimal,
    },

    /// Remove one ledger record
    RemoveRecord {
        /// Row position in the ordered ledger (0-based)
        #[arg(long)]
        row: usize,
    },

    /// Export the assignment ledger for the ERP
    ExportLedger {
        /// Output file (CSV)
        #[arg(long, value_name = "OUTPUT_FILE")]
        output: PathBuf,
    },

    /// Print the aggregate purchase requirements
    Purchases,

    /// Print the work table and the assignment ledger
    Status,

    /// Clear the work table and the assignment ledger
    Reset,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub(crate) enum SelectionActionArg {
    Select,
    Deselect,
}

impl SelectionActionArg {
    pub(crate) fn to_selected(&self) -> bool {
        matches!(self, SelectionActionArg::Select)
    }
}
