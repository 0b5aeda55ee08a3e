//! Validation and transform commands.
//!
//! Each command is one synchronous pass: validate, decide, and for the
//! transform flows parse, canonicalize and persist. Commands are generic
//! over [`TxCodec`] so the serialization engine stays substitutable.

use crate::codec::TxCodec;
use crate::envelope::{self, TxFileData};
use crate::error::{Error, Result};
use crate::report::{ValidationOutcome, print_validation_errors};
use std::path::PathBuf;

/// Arguments for `validate-raw`.
#[derive(Debug, Clone)]
pub struct ValidateRawTxArgs {
    pub raw_tx_file_data: TxFileData,
}

/// Arguments for `validate`.
#[derive(Debug, Clone)]
pub struct ValidateTxArgs {
    pub tx_file_data: TxFileData,
}

/// Arguments for `transform-raw`.
#[derive(Debug, Clone)]
pub struct TransformRawTxArgs {
    pub raw_tx_file_data: TxFileData,
    pub out_file: PathBuf,
}

/// Arguments for `transform`.
#[derive(Debug, Clone)]
pub struct TransformTxArgs {
    pub tx_file_data: TxFileData,
    pub out_file: PathBuf,
}

/// Guard invoked automatically before signing, not on user request.
///
/// Silent on success; any finding at all is an error, since signing a
/// non-canonical transaction is disallowed even when it would be fixable.
pub fn validate_raw_tx_before_signing<C: TxCodec>(codec: &C, raw_tx_cbor_hex: &str) -> Result<()> {
    let ValidationOutcome {
        contains_unfixable,
        contains_fixable,
    } = print_validation_errors(raw_tx_cbor_hex, |cbor| codec.validate_raw_tx(cbor), false)?;

    if contains_unfixable {
        return Err(Error::TxContainsUnfixableErrors);
    }
    if contains_fixable {
        return Err(Error::TxContainsFixableErrors);
    }
    Ok(())
}

/// Report findings for a raw transaction. Report-only: completes normally
/// whatever the findings are.
pub fn validate_raw_tx<C: TxCodec>(codec: &C, args: &ValidateRawTxArgs) -> Result<()> {
    print_validation_errors(
        &args.raw_tx_file_data.cbor_hex,
        |cbor| codec.validate_raw_tx(cbor),
        true,
    )?;
    Ok(())
}

/// Report findings for a full transaction. Report-only.
pub fn validate_tx<C: TxCodec>(codec: &C, args: &ValidateTxArgs) -> Result<()> {
    print_validation_errors(
        &args.tx_file_data.cbor_hex,
        |cbor| codec.validate_tx(cbor),
        true,
    )?;
    Ok(())
}

/// Fix a raw transaction and write it out. Raw transactions carry no
/// signatures, so fixing is always safe.
pub fn transform_raw_tx<C: TxCodec>(codec: &C, args: &TransformRawTxArgs) -> Result<()> {
    let outcome = print_validation_errors(
        &args.raw_tx_file_data.cbor_hex,
        |cbor| codec.validate_raw_tx(cbor),
        true,
    )?;
    if outcome.contains_unfixable {
        return Err(Error::TxContainsUnfixableErrors);
    }
    if outcome.contains_fixable {
        println!("Fixed transaction will be written to the output file.");
    }

    let raw_tx_cbor = hex::decode(&args.raw_tx_file_data.cbor_hex)?;
    let transformed = codec.transform_raw_tx(codec.parse_raw_tx(&raw_tx_cbor)?)?;
    let encoded = hex::encode(codec.encode_raw_tx(&transformed));
    envelope::write(
        &args.out_file,
        &envelope::construct_raw_tx_output(args.raw_tx_file_data.era, encoded),
    )
}

/// Fix a full transaction and write it out, refusing to rewrite one that
/// already carries witness signatures.
pub fn transform_tx<C: TxCodec>(codec: &C, args: &TransformTxArgs) -> Result<()> {
    let outcome = print_validation_errors(
        &args.tx_file_data.cbor_hex,
        |cbor| codec.validate_tx(cbor),
        true,
    )?;
    if outcome.contains_unfixable {
        return Err(Error::TxContainsUnfixableErrors);
    }

    let tx_cbor = hex::decode(&args.tx_file_data.cbor_hex)?;
    let transformed = codec.transform_tx(codec.parse_tx(&tx_cbor)?)?;
    if outcome.contains_fixable {
        // A fix would change the body bytes and invalidate any signature
        // over them.
        if codec.contains_vkey_witnesses(&transformed) {
            return Err(Error::CannotTransformSignedTx);
        }
        println!("Fixed transaction will be written to the output file.");
    }

    let encoded = hex::encode(codec.encode_tx(&transformed));
    envelope::write(
        &args.out_file,
        &envelope::construct_tx_output(args.tx_file_data.era, encoded),
    )
}
