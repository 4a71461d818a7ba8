// crates/gridtune-core/src/model/defaults.rs

use crate::model::component::Component;

const DOWNFORCE: &str = "Downforce";
const HANDLING: &str = "Handling";
const SPEED_BALANCE: &str = "Speed Balance";

/// Built-in reference car: the six adjustable components with their native
/// setting grids and per-unit aspect effects.
///
/// Coefficients are on the -1..+1 aspect scale, per unit of setting movement
/// from the midpoint (the raw design-data percentages divided by 50).
/// Component order is load-bearing: it fixes the enumeration order of the
/// search, and with it which tuple wins a tie.
pub fn reference_components() -> Vec<Component> {
    vec![
        Component::new(
            "Front Wing",
            15.0,
            5.0,
            0.1,
            vec![
                (DOWNFORCE.to_string(), -6.0 / 50.0),
                (HANDLING.to_string(), 1.0 / 50.0),
                (SPEED_BALANCE.to_string(), -1.5 / 50.0),
            ],
        ),
        Component::new(
            "Rear Wing",
            25.0,
            5.0,
            0.1,
            vec![
                (DOWNFORCE.to_string(), -4.0 / 50.0),
                (HANDLING.to_string(), 1.0 / 50.0),
                (SPEED_BALANCE.to_string(), -2.5 / 50.0),
            ],
        ),
        Component::new(
            "Pressure",
            21.0,
            3.0,
            0.6,
            vec![
                (DOWNFORCE.to_string(), 0.0),
                (HANDLING.to_string(), (2.5 / 3.0) / 50.0),
                (SPEED_BALANCE.to_string(), (-2.5 / 3.0) / 50.0),
            ],
        ),
        Component::new(
            "Camber",
            -2.0,
            2.0,
            0.4,
            vec![
                (DOWNFORCE.to_string(), 0.0),
                (HANDLING.to_string(), -3.75 / 50.0),
                (SPEED_BALANCE.to_string(), 3.75 / 50.0),
            ],
        ),
        Component::new(
            "Suspension",
            50.0,
            50.0,
            6.25,
            vec![
                (DOWNFORCE.to_string(), 0.0),
                (HANDLING.to_string(), -0.6 / 50.0),
                (SPEED_BALANCE.to_string(), 0.1 / 50.0),
            ],
        ),
        Component::new(
            "Gears",
            50.0,
            50.0,
            6.25,
            vec![
                (DOWNFORCE.to_string(), 0.0),
                (HANDLING.to_string(), -0.05 / 50.0),
                (SPEED_BALANCE.to_string(), 0.6 / 50.0),
            ],
        ),
    ]
}
