use crate::error::{GtError, Result};
use crate::model::component::Component;
use crate::model::target::TargetVector;

/// Check the model before a search runs.
///
/// Every component must carry the identical aspect key set, and that set
/// must match the target vector's key set exactly. A mismatch is a
/// configuration/IO error, never a silently skipped aspect.
pub fn validate_model(components: &[Component], target: &TargetVector) -> Result<()> {
    if components.is_empty() {
        return Err(GtError::Configuration("no components defined".into()));
    }
    if target.is_empty() {
        return Err(GtError::Configuration("empty target vector".into()));
    }

    for c in components {
        if c.step <= 0.0 {
            return Err(GtError::Configuration(format!(
                "{}: step must be > 0 (got {})",
                c.name, c.step
            )));
        }
        if c.half_range <= 0.0 {
            return Err(GtError::Configuration(format!(
                "{}: half_range must be > 0 (got {})",
                c.name, c.half_range
            )));
        }
    }

    let reference = sorted_names(components[0].aspect_names());
    for c in &components[1..] {
        let names = sorted_names(c.aspect_names());
        if names != reference {
            return Err(GtError::Configuration(format!(
                "inconsistent aspect names: {} has {:?}, {} has {:?}",
                components[0].name, reference, c.name, names
            )));
        }
    }

    let target_names = sorted_names(target.aspect_names());
    if target_names != reference {
        return Err(GtError::Configuration(format!(
            "aspect names in target {:?} do not match components {:?}",
            target_names, reference
        )));
    }

    Ok(())
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = names.collect();
    v.sort_unstable();
    v
}
