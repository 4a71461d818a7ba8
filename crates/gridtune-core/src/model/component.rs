// crates/gridtune-core/src/model/component.rs

/// One adjustable car component.
///
/// Settings live on the grid `midpoint ± k*step` for `k = 0..=half_range/step`.
/// Each aspect coefficient is the change in that aspect (on the -1..+1 scale)
/// per unit of setting movement away from the midpoint.
#[derive(Clone, Debug)]
pub struct Component {
    pub name: String,
    pub midpoint: f64,
    pub half_range: f64,
    pub step: f64,
    /// (aspect name, effect per unit), in declared order.
    pub effects: Vec<(String, f64)>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        midpoint: f64,
        half_range: f64,
        step: f64,
        effects: Vec<(String, f64)>,
    ) -> Self {
        Component {
            name: name.into(),
            midpoint,
            half_range,
            step,
            effects,
        }
    }

    /// Build from the config-file shape: effects given as the percent change
    /// in an aspect when moving the setting across the FULL range (min..max).
    /// Rescaled to per-unit on the -1..+1 aspect scale (percent / width / 50).
    pub fn from_effect_percents(
        name: impl Into<String>,
        midpoint: f64,
        half_range: f64,
        step: f64,
        effect_percents: Vec<(String, f64)>,
    ) -> Self {
        let width = half_range * 2.0;
        let effects = effect_percents
            .into_iter()
            .map(|(aspect, pct)| (aspect, pct / width / 50.0))
            .collect();
        Component::new(name, midpoint, half_range, step, effects)
    }

    pub fn effect(&self, aspect: &str) -> Option<f64> {
        self.effects
            .iter()
            .find(|(name, _)| name == aspect)
            .map(|&(_, coeff)| coeff)
    }

    pub fn aspect_names(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|(name, _)| name.as_str())
    }
}
