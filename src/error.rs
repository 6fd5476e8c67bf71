use thiserror::Error;

/// Why a set of [`ProjectileParameters`](crate::core::ballistics::ProjectileParameters)
/// has no physical landing time.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidReason {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("gravity must be positive (got {gravity} m/s^2)")]
    NonPositiveGravity { gravity: f64 },

    #[error("no real landing time: vy^2 + 2*g*h is negative ({discriminant})")]
    NegativeDiscriminant { discriminant: f64 },

    #[error("landing time computed as negative ({time} s)")]
    NegativeFlightTime { time: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid projectile parameters: {reason}")]
    InvalidParameters { reason: InvalidReason },
}

impl From<InvalidReason> for ModelError {
    fn from(reason: InvalidReason) -> Self {
        Self::InvalidParameters { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidReason, ModelError};

    #[test]
    fn message_carries_reason() {
        let err = ModelError::from(InvalidReason::NegativeDiscriminant { discriminant: -4.5 });
        let message = err.to_string();
        assert!(message.starts_with("invalid projectile parameters"));
        assert!(message.contains("no real landing time"));
        assert!(message.contains("-4.5"));
    }

    #[test]
    fn non_finite_names_the_field() {
        let err = ModelError::from(InvalidReason::NonFinite { field: "initial_speed" });
        assert!(err.to_string().contains("initial_speed must be a finite number"));
    }
}
