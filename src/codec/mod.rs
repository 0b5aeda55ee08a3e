//! Transaction codec abstraction.
//!
//! The CBOR grammar, canonicity rules, and fix-up re-encoding live behind
//! the [`TxCodec`] trait so commands stay independent of the concrete
//! serialization library and tests can substitute fakes.

mod cml;

pub use cml::CmlCodec;

use crate::error::Result;

/// A single finding reported by a validator.
///
/// `fixable` findings are encoding-level and disappear after a canonical
/// re-encode; unfixable findings are structural and survive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub reason: String,
    /// Dotted path into the transaction where the problem was found.
    pub position: String,
    /// Whether a canonical re-encode resolves the problem.
    pub fixable: bool,
}

impl ValidationError {
    pub fn fixable(reason: impl Into<String>, position: impl Into<String>) -> Self {
        ValidationError {
            reason: reason.into(),
            position: position.into(),
            fixable: true,
        }
    }

    pub fn unfixable(reason: impl Into<String>, position: impl Into<String>) -> Self {
        ValidationError {
            reason: reason.into(),
            position: position.into(),
            fixable: false,
        }
    }
}

/// Codec operations required by the validation and transform commands.
///
/// `RawTx` is an unwitnessed transaction body; `Tx` is a full transaction
/// that may carry witnesses. Validation never fails outright, it reports
/// through the returned list; parsing and transforming are fallible.
pub trait TxCodec {
    type RawTx;
    type Tx;

    /// Validate raw (unwitnessed) transaction bytes.
    fn validate_raw_tx(&self, bytes: &[u8]) -> Vec<ValidationError>;

    /// Validate full transaction bytes.
    fn validate_tx(&self, bytes: &[u8]) -> Vec<ValidationError>;

    /// Parse raw transaction bytes into structured form.
    fn parse_raw_tx(&self, bytes: &[u8]) -> Result<Self::RawTx>;

    /// Parse full transaction bytes into structured form.
    fn parse_tx(&self, bytes: &[u8]) -> Result<Self::Tx>;

    /// Rewrite a raw transaction into canonical form.
    fn transform_raw_tx(&self, raw_tx: Self::RawTx) -> Result<Self::RawTx>;

    /// Rewrite a full transaction into canonical form.
    fn transform_tx(&self, tx: Self::Tx) -> Result<Self::Tx>;

    /// Encode a raw transaction to bytes.
    fn encode_raw_tx(&self, raw_tx: &Self::RawTx) -> Vec<u8>;

    /// Encode a full transaction to bytes.
    fn encode_tx(&self, tx: &Self::Tx) -> Vec<u8>;

    /// Whether the transaction carries any witness signatures.
    fn contains_vkey_witnesses(&self, tx: &Self::Tx) -> bool;
}
