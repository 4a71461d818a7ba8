// crates/gridtune-core/src/savefile.rs
//
// Setup save (.sav) decoding.
//
// Layout (little-endian):
//   step_forward:i32          (counter, unused by target extraction)
//   compressed_len:i32        (declared payload length)
//   decompressed_len:i32      (declared decompressed length)
//   payload[..]               (LZ4 block data; UTF-8 JSON once decompressed)
//
// The JSON document carries "mSetupStintData": per-aspect mDelta* fields plus
// a nested "mSetupOutput" object with the current realized values under a
// camelCase spelling. The target per aspect is output + delta.
//
// The same aspect is spelled three ways (delta field, setup output, UI), so
// a fixed alias table anchored on the delta spelling maps between them. The
// table is load-bearing: a delta key it does not know is an error, never a
// silent zero.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GtError, Result};
use crate::model::target::TargetVector;

const DELTA_PREFIX: &str = "mDelta";
const STINT_KEY: &str = "mSetupStintData";
const OUTPUT_KEY: &str = "mSetupOutput";

struct AspectAlias {
    /// Spelling in the mDelta* field name.
    delta: &'static str,
    /// Spelling in the UI (and in component configs / targets).
    gui: &'static str,
    /// Spelling inside mSetupOutput.
    output: &'static str,
}

/// Alias rows in UI display order; this fixes the target vector's order.
const ASPECT_ALIASES: &[AspectAlias] = &[
    AspectAlias {
        delta: "Aerodynamics",
        gui: "Downforce",
        output: "aerodynamics",
    },
    AspectAlias {
        delta: "Handling",
        gui: "Handling",
        output: "handling",
    },
    AspectAlias {
        delta: "SpeedBalance",
        gui: "Speed Balance",
        output: "speedBalance",
    },
];

/// One synchronous read of the save file, then target extraction. No retry:
/// a missing or unreadable file surfaces as [`GtError::Io`].
pub fn read_targets(path: &Path) -> Result<TargetVector> {
    let bytes = std::fs::read(path)?;
    extract_targets(&bytes)
}

/// Decode a save file and derive the per-aspect target values, keyed by the
/// UI aspect spelling.
pub fn extract_targets(bytes: &[u8]) -> Result<TargetVector> {
    let mut i = 0usize;
    let _step_forward = read_i32(bytes, &mut i)?;
    let _compressed_len = read_i32(bytes, &mut i)?;
    let decompressed_len = read_i32(bytes, &mut i)?;
    if decompressed_len < 0 {
        return Err(GtError::Format(format!(
            "negative declared decompressed length {decompressed_len}"
        )));
    }

    let decompressed = lz4_flex::block::decompress(&bytes[i..], decompressed_len as usize)
        .map_err(|e| GtError::Format(format!("lz4 payload: {e}")))?;
    if decompressed.len() != decompressed_len as usize {
        return Err(GtError::Format(format!(
            "decompressed {} bytes, header declared {}",
            decompressed.len(),
            decompressed_len
        )));
    }

    // Tolerate stray non-UTF-8 bytes; the fields we need decode cleanly.
    let text = String::from_utf8_lossy(&decompressed);
    let doc: Value =
        serde_json::from_str(&text).map_err(|e| GtError::Format(format!("setup json: {e}")))?;

    let stint = doc
        .get(STINT_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| GtError::Format(format!("missing {STINT_KEY} record")))?;
    let output = stint
        .get(OUTPUT_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| GtError::Format(format!("missing {OUTPUT_KEY} record")))?;

    // Every delta field in the document must be known to the alias table.
    for key in stint.keys() {
        if let Some(aspect) = key.strip_prefix(DELTA_PREFIX) {
            if !ASPECT_ALIASES.iter().any(|a| a.delta == aspect) {
                return Err(GtError::Lookup(format!(
                    "delta aspect {aspect} has no alias entry"
                )));
            }
        }
    }

    let mut values = Vec::with_capacity(ASPECT_ALIASES.len());
    for alias in ASPECT_ALIASES {
        let delta = number_field(stint, &format!("{DELTA_PREFIX}{}", alias.delta))?;
        let current = number_field(output, alias.output)?;
        values.push((alias.gui.to_string(), current + delta));
    }
    Ok(TargetVector::new(values))
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| GtError::Format(format!("missing or non-numeric field {key}")))
}

fn read_i32(bytes: &[u8], i: &mut usize) -> Result<i32> {
    if bytes.len() < *i + 4 {
        return Err(GtError::Format("save header truncated".into()));
    }
    let v = i32::from_le_bytes(bytes[*i..*i + 4].try_into().unwrap());
    *i += 4;
    Ok(v)
}
