//! CLI argument parsing for txcanon.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Canonicity checker and fixer for Cardano transaction CBOR.
///
/// Validates hex-encoded CBOR transactions against the ledger's canonical
/// encoding rules and rewrites fixable deviations into canonical form.
#[derive(Parser, Debug)]
#[command(
    name = "txcanon",
    version,
    about = "Canonicity checker and fixer for Cardano transaction CBOR",
    after_help = r#"EXAMPLES:
    txcanon validate tx.json                              Report findings for a signed tx
    txcanon validate-raw tx.raw.json                      Report findings for an unwitnessed tx
    txcanon transform tx.json --out-file tx.fixed.json    Fix and rewrite a signed tx
    txcanon transform-raw tx.raw.json -o tx.fixed.json    Fix and rewrite an unwitnessed tx

Validation is report-only and always exits 0 when the file could be read;
transform refuses transactions with unfixable errors, and refuses to fix a
transaction that already carries witness signatures."#
)]
pub struct Args {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a full transaction envelope and report findings.
    ///
    /// Prints unfixable findings first, then fixable ones. This command
    /// never fails on findings; it only reports them.
    #[command(name = "validate")]
    Validate {
        /// Transaction envelope file (signed or unwitnessed).
        tx_file: PathBuf,
    },

    /// Validate a raw (unwitnessed) transaction envelope and report findings.
    #[command(name = "validate-raw")]
    ValidateRaw {
        /// Unwitnessed transaction envelope file.
        tx_file: PathBuf,
    },

    /// Fix a full transaction and write the canonical form to a file.
    ///
    /// Fails if the transaction has unfixable errors, or if fixing it
    /// would invalidate witness signatures it already carries.
    #[command(name = "transform")]
    Transform {
        /// Transaction envelope file (signed or unwitnessed).
        tx_file: PathBuf,

        /// Output envelope file.
        #[arg(long, short = 'o')]
        out_file: PathBuf,
    },

    /// Fix a raw (unwitnessed) transaction and write the canonical form.
    #[command(name = "transform-raw")]
    TransformRaw {
        /// Unwitnessed transaction envelope file.
        tx_file: PathBuf,

        /// Output envelope file.
        #[arg(long, short = 'o')]
        out_file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let args = Args::try_parse_from(["txcanon", "validate", "tx.json"]).unwrap();
        match args.command {
            Command::Validate { tx_file } => assert_eq!(tx_file, PathBuf::from("tx.json")),
            _ => panic!("Expected Validate"),
        }
    }

    #[test]
    fn test_parse_transform_with_out_file() {
        let args =
            Args::try_parse_from(["txcanon", "transform", "tx.json", "--out-file", "out.json"])
                .unwrap();
        match args.command {
            Command::Transform { tx_file, out_file } => {
                assert_eq!(tx_file, PathBuf::from("tx.json"));
                assert_eq!(out_file, PathBuf::from("out.json"));
            }
            _ => panic!("Expected Transform"),
        }
    }

    #[test]
    fn test_parse_transform_raw_short_flag() {
        let args =
            Args::try_parse_from(["txcanon", "transform-raw", "tx.json", "-o", "out.json"])
                .unwrap();
        assert!(matches!(args.command, Command::TransformRaw { .. }));
    }

    #[test]
    fn test_transform_requires_out_file() {
        assert!(Args::try_parse_from(["txcanon", "transform", "tx.json"]).is_err());
    }

    #[test]
    fn test_no_color_is_global() {
        let args =
            Args::try_parse_from(["txcanon", "validate", "tx.json", "--no-color"]).unwrap();
        assert!(args.no_color);
    }
}
