// crates/gridtune-cli/src/io/components_file.rs
//
// Component config (.yml). An ORDERED list, not a mapping: component order
// fixes the enumeration order of the search, and with it which tuple wins a
// tie, so the file must be able to state it.
//
//   - name: Front Wing
//     settings: { min: 10.0, max: 20.0, increments: 0.1 }
//     aspect_effects: { Downforce: -60.0, Handling: 10.0, "Speed Balance": -15.0 }
//
// aspect_effects give the percent change in each aspect when the setting
// moves across the full min..max range; loading rescales them to per-unit
// coefficients on the -1..+1 aspect scale.

use std::collections::BTreeMap;

use anyhow::Context;
use gridtune_core::Component;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentEntry {
    name: String,
    settings: SettingsSpec,
    aspect_effects: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSpec {
    min: f64,
    max: f64,
    increments: f64,
}

pub fn load_components(path: &str) -> anyhow::Result<Vec<Component>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let entries: Vec<ComponentEntry> =
        serde_yml::from_str(&text).with_context(|| format!("parse {path}"))?;
    if entries.is_empty() {
        anyhow::bail!("no components in {path}");
    }

    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let SettingsSpec {
            min,
            max,
            increments,
        } = entry.settings;
        if max <= min {
            anyhow::bail!("{}: settings max must be > min", entry.name);
        }
        if !increments.is_finite() || increments <= 0.0 {
            anyhow::bail!(
                "{}: settings increments must be > 0 (got {})",
                entry.name,
                increments
            );
        }
        if entry.aspect_effects.is_empty() {
            anyhow::bail!("{}: no aspect_effects", entry.name);
        }

        out.push(Component::from_effect_percents(
            entry.name,
            (min + max) / 2.0,
            (max - min) / 2.0,
            increments,
            entry.aspect_effects.into_iter().collect(),
        ));
    }
    Ok(out)
}
