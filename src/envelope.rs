//! Transaction file envelopes.
//!
//! Cardano tooling exchanges transactions as JSON "text envelope" files:
//! `{"type": ..., "description": ..., "cborHex": ...}` where the type
//! string carries the era and whether the transaction is witnessed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Ledger era a transaction envelope is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Shelley,
    Allegra,
    Mary,
    Alonzo,
    Babbage,
    Conway,
}

impl Era {
    const ALL: [Era; 6] = [
        Era::Shelley,
        Era::Allegra,
        Era::Mary,
        Era::Alonzo,
        Era::Babbage,
        Era::Conway,
    ];
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Era::Shelley => "Shelley",
            Era::Allegra => "Allegra",
            Era::Mary => "Mary",
            Era::Alonzo => "Alonzo",
            Era::Babbage => "Babbage",
            Era::Conway => "Conway",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Era {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Era::ALL
            .into_iter()
            .find(|era| era.to_string() == s)
            .ok_or_else(|| Error::UnsupportedEra(s.to_string()))
    }
}

/// Transaction data loaded from an envelope file.
#[derive(Debug, Clone)]
pub struct TxFileData {
    pub era: Era,
    pub cbor_hex: String,
}

/// On-disk JSON record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEnvelope {
    #[serde(rename = "type")]
    pub envelope_type: String,
    pub description: String,
    #[serde(rename = "cborHex")]
    pub cbor_hex: String,
}

/// Split an envelope type like `"Unwitnessed Tx ConwayEra"` into its kind
/// prefix and era.
fn parse_envelope_type(envelope_type: &str) -> Option<(&str, Result<Era>)> {
    let (kind, era_token) = envelope_type.rsplit_once(' ')?;
    let era_name = era_token.strip_suffix("Era")?;
    Some((kind, era_name.parse()))
}

fn read_envelope(path: &Path) -> Result<TextEnvelope> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|e| Error::IoError {
        path: Some(path.to_path_buf()),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| Error::InvalidEnvelope {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn file_data(path: &Path, expected_kinds: &[&str]) -> Result<TxFileData> {
    let envelope = read_envelope(path)?;
    let Some((kind, era)) = parse_envelope_type(&envelope.envelope_type) else {
        return Err(Error::InvalidEnvelope {
            path: path.to_path_buf(),
            reason: format!("unrecognized envelope type {:?}", envelope.envelope_type),
        });
    };
    if !expected_kinds.contains(&kind) {
        return Err(Error::InvalidEnvelope {
            path: path.to_path_buf(),
            reason: format!(
                "expected a {} envelope, found {:?}",
                expected_kinds.join(" or "),
                envelope.envelope_type
            ),
        });
    }
    Ok(TxFileData {
        era: era?,
        cbor_hex: envelope.cbor_hex,
    })
}

/// Read a raw (unwitnessed) transaction envelope.
pub fn read_raw_tx_file(path: &Path) -> Result<TxFileData> {
    file_data(path, &["Unwitnessed Tx"])
}

/// Read a full transaction envelope, witnessed or not.
pub fn read_tx_file(path: &Path) -> Result<TxFileData> {
    file_data(path, &["Signed Tx", "Witnessed Tx", "Unwitnessed Tx"])
}

/// Build the output record for a transformed raw transaction.
pub fn construct_raw_tx_output(era: Era, cbor_hex: String) -> TextEnvelope {
    TextEnvelope {
        envelope_type: format!("Unwitnessed Tx {}Era", era),
        description: String::new(),
        cbor_hex,
    }
}

/// Build the output record for a transformed full transaction.
pub fn construct_tx_output(era: Era, cbor_hex: String) -> TextEnvelope {
    TextEnvelope {
        envelope_type: format!("Signed Tx {}Era", era),
        description: String::new(),
        cbor_hex,
    }
}

/// Write an envelope to a file, overwriting any existing content.
pub fn write(path: &Path, envelope: &TextEnvelope) -> Result<()> {
    let json = serde_json::to_string_pretty(envelope).map_err(|e| Error::InvalidEnvelope {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, json + "\n").map_err(|e| Error::IoError {
        path: Some(path.to_path_buf()),
        source: e,
    })
}
