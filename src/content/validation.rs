//! Validation of character tunables before they reach a controller.
//!
//! The tick loop trusts its stats; anything that would make the simulation
//! meaningless is rejected here instead.

use crate::motion::CharacterStats;

/// A single out-of-range tunable.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CharacterStats field '{}' = {} must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking one field is finite
macro_rules! check_finite {
    ($errors:expr, $stats:expr, $field:ident) => {
        if !$stats.$field.is_finite() {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $stats.$field,
                requirement: "finite",
            });
        }
    };
}

/// Helper macro for checking one field is finite and satisfies a predicate
macro_rules! check_field {
    ($errors:expr, $stats:expr, $field:ident, $requirement:expr, |$v:ident| $ok:expr) => {
        let $v = $stats.$field;
        if !$v.is_finite() {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $v,
                requirement: "finite",
            });
        } else if !$ok {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $v,
                requirement: $requirement,
            });
        }
    };
}

/// Validate all tunables.
/// Returns a list of validation errors, empty if the stats are usable.
pub fn validate_stats(stats: &CharacterStats) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_finite!(errors, stats, gravity);
    check_finite!(errors, stats, apex_gravity);
    check_field!(errors, stats, horizontal_accel, ">= 0", |v| v >= 0.0);
    check_field!(errors, stats, max_horizontal_speed, ">= 0", |v| v >= 0.0);
    check_field!(errors, stats, max_fall_speed, "< 0", |v| v < 0.0);
    check_field!(errors, stats, jump_strength, "> 0", |v| v > 0.0);
    check_field!(errors, stats, ground_friction, ">= 0", |v| v >= 0.0);
    check_finite!(errors, stats, fast_fall_speed);
    check_field!(errors, stats, max_apex_time, "> 0", |v| v > 0.0);
    check_finite!(errors, stats, apex_y_vel);
    check_field!(errors, stats, apex_x_vel, ">= 0", |v| v >= 0.0);
    check_field!(errors, stats, coyote_time, ">= 0", |v| v >= 0.0);

    errors
}
