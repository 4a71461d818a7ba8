// crates/gridtune-core/src/model/target.rs

/// Per-aspect target values for one search, extracted once from a save file
/// (or supplied directly). Immutable for the duration of the search.
#[derive(Clone, Debug, Default)]
pub struct TargetVector {
    /// (aspect name, target value), in declared order.
    pub values: Vec<(String, f64)>,
}

impl TargetVector {
    pub fn new(values: Vec<(String, f64)>) -> Self {
        TargetVector { values }
    }

    pub fn get(&self, aspect: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == aspect)
            .map(|&(_, v)| v)
    }

    pub fn aspect_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
