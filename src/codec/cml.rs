//! Production codec backed by CML.
//!
//! CML's deserializer records the original encoding of every component it
//! parses, so a value re-serialized with `to_cbor_bytes` reproduces the
//! input bytes while `to_canonical_cbor_bytes` yields the canonical form.
//! Comparing the two per component is what detects fixable findings, and
//! re-parsing from the canonical bytes is what "fixes" them.

use crate::codec::{TxCodec, ValidationError};
use crate::error::{Error, Result};
use cml_chain::transaction::{Transaction, TransactionBody};
use cml_core::serialization::{Deserialize, Serialize};

/// Codec over `cml-chain`'s Conway-lineage transaction types.
///
/// A raw transaction is a bare `TransactionBody`; a full transaction is the
/// four-element `Transaction` array that may carry witnesses.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmlCodec;

impl CmlCodec {
    pub fn new() -> Self {
        CmlCodec
    }
}

/// Check that the bytes are well-formed CBOR at all, before asking CML
/// whether they match the transaction grammar.
fn is_well_formed_cbor(bytes: &[u8]) -> bool {
    ciborium::from_reader::<ciborium::Value, _>(bytes).is_ok()
}

/// Compare a component's preserved encoding against its canonical one.
/// Returns whether a finding was recorded.
fn check_canonical<T: Serialize>(
    errors: &mut Vec<ValidationError>,
    value: &T,
    position: &str,
) -> bool {
    if value.to_cbor_bytes() != value.to_canonical_cbor_bytes() {
        errors.push(ValidationError::fixable(
            "non-canonical CBOR encoding",
            position,
        ));
        true
    } else {
        false
    }
}

fn check_inputs_nonempty(errors: &mut Vec<ValidationError>, body: &TransactionBody) {
    if body.inputs.is_empty() {
        errors.push(ValidationError::unfixable(
            "transaction body contains no inputs",
            "transaction.body.inputs",
        ));
    }
}

impl TxCodec for CmlCodec {
    type RawTx = TransactionBody;
    type Tx = Transaction;

    fn validate_raw_tx(&self, bytes: &[u8]) -> Vec<ValidationError> {
        if !is_well_formed_cbor(bytes) {
            return vec![ValidationError::unfixable(
                "not well-formed CBOR",
                "transaction",
            )];
        }
        let body = match TransactionBody::from_cbor_bytes(bytes) {
            Ok(body) => body,
            Err(e) => {
                return vec![ValidationError::unfixable(
                    format!("does not match the transaction body schema: {}", e),
                    "transaction",
                )];
            }
        };

        let mut errors = Vec::new();
        check_inputs_nonempty(&mut errors, &body);
        check_canonical(&mut errors, &body, "transaction.body");
        errors
    }

    fn validate_tx(&self, bytes: &[u8]) -> Vec<ValidationError> {
        if !is_well_formed_cbor(bytes) {
            return vec![ValidationError::unfixable(
                "not well-formed CBOR",
                "transaction",
            )];
        }
        let tx = match Transaction::from_cbor_bytes(bytes) {
            Ok(tx) => tx,
            Err(e) => {
                return vec![ValidationError::unfixable(
                    format!("does not match the transaction schema: {}", e),
                    "transaction",
                )];
            }
        };

        let mut errors = Vec::new();
        check_inputs_nonempty(&mut errors, &tx.body);

        let mut component_finding = check_canonical(&mut errors, &tx.body, "transaction.body");
        component_finding |=
            check_canonical(&mut errors, &tx.witness_set, "transaction.witness_set");
        if let Some(aux) = &tx.auxiliary_data {
            component_finding |= check_canonical(&mut errors, aux, "transaction.auxiliary_data");
        }
        // Only blame the outer container when no component explains the
        // divergence (e.g. an indefinite-length top-level array).
        if !component_finding {
            check_canonical(&mut errors, &tx, "transaction");
        }
        errors
    }

    fn parse_raw_tx(&self, bytes: &[u8]) -> Result<TransactionBody> {
        TransactionBody::from_cbor_bytes(bytes).map_err(|e| Error::ParseFailed(e.to_string()))
    }

    fn parse_tx(&self, bytes: &[u8]) -> Result<Transaction> {
        Transaction::from_cbor_bytes(bytes).map_err(|e| Error::ParseFailed(e.to_string()))
    }

    fn transform_raw_tx(&self, raw_tx: TransactionBody) -> Result<TransactionBody> {
        // Re-parsing from the canonical bytes drops every preserved
        // non-canonical encoding, at all nesting depths.
        TransactionBody::from_cbor_bytes(&raw_tx.to_canonical_cbor_bytes())
            .map_err(|e| Error::ParseFailed(e.to_string()))
    }

    fn transform_tx(&self, tx: Transaction) -> Result<Transaction> {
        Transaction::from_cbor_bytes(&tx.to_canonical_cbor_bytes())
            .map_err(|e| Error::ParseFailed(e.to_string()))
    }

    fn encode_raw_tx(&self, raw_tx: &TransactionBody) -> Vec<u8> {
        raw_tx.to_canonical_cbor_bytes()
    }

    fn encode_tx(&self, tx: &Transaction) -> Vec<u8> {
        tx.to_canonical_cbor_bytes()
    }

    fn contains_vkey_witnesses(&self, tx: &Transaction) -> bool {
        let witness_set = &tx.witness_set;
        // Bootstrap (Byron-style) witnesses are signatures too; either kind
        // is invalidated by re-encoding the body.
        witness_set
            .vkeywitnesses
            .as_ref()
            .is_some_and(|w| !w.is_empty())
            || witness_set
                .bootstrap_witnesses
                .as_ref()
                .is_some_and(|w| !w.is_empty())
    }
}
