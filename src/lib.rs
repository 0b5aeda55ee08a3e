//! txcanon - canonicity checker and fixer for Cardano transaction CBOR.
//!
//! Takes hex-encoded CBOR transactions (or raw, unwitnessed transaction
//! bodies) from era-tagged envelope files, validates them against the
//! ledger's canonical encoding rules, and can rewrite fixable deviations
//! into canonical form. It refuses to rewrite a transaction that already
//! carries witness signatures, since that would invalidate them.
//!
//! # Features
//!
//! - Report-only validation with findings grouped into unfixable and fixable
//! - Transform commands that re-encode into canonical CBOR
//! - Pre-signing guard that rejects any non-canonical transaction
//! - Codec behind a trait, so the CML engine can be swapped out in tests

pub mod cli;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod report;
pub mod transaction;

pub use cli::{Args, Command};
pub use error::{Error, Result};

use codec::CmlCodec;
use transaction::{
    TransformRawTxArgs, TransformTxArgs, ValidateRawTxArgs, ValidateTxArgs, transform_raw_tx,
    transform_tx, validate_raw_tx, validate_tx,
};

/// Run txcanon with the given arguments.
pub fn run(args: &Args) -> Result<()> {
    let codec = CmlCodec::new();

    match &args.command {
        Command::Validate { tx_file } => {
            let tx_file_data = envelope::read_tx_file(tx_file)?;
            validate_tx(&codec, &ValidateTxArgs { tx_file_data })
        }

        Command::ValidateRaw { tx_file } => {
            let raw_tx_file_data = envelope::read_raw_tx_file(tx_file)?;
            validate_raw_tx(&codec, &ValidateRawTxArgs { raw_tx_file_data })
        }

        Command::Transform { tx_file, out_file } => {
            let tx_file_data = envelope::read_tx_file(tx_file)?;
            transform_tx(
                &codec,
                &TransformTxArgs {
                    tx_file_data,
                    out_file: out_file.clone(),
                },
            )
        }

        Command::TransformRaw { tx_file, out_file } => {
            let raw_tx_file_data = envelope::read_raw_tx_file(tx_file)?;
            transform_raw_tx(
                &codec,
                &TransformRawTxArgs {
                    raw_tx_file_data,
                    out_file: out_file.clone(),
                },
            )
        }
    }
}
