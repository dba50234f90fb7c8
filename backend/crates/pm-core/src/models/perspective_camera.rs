use crate::{CoreError, CoreResult, Vector3};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub position: Vector3,
    pub direction: Vector3,
    pub up_vector: Vector3,
    /// Vertical field of view in degrees
    pub field_of_view: f64,
}

impl PerspectiveCamera {
    /// Check the camera describes a usable view.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        for (field, vector) in [
            ("position", &self.position),
            ("direction", &self.direction),
            ("up_vector", &self.up_vector),
        ] {
            if !vector.is_finite() {
                return Err(Self::invalid(field, "must be finite"));
            }
        }

        if self.direction.is_zero() {
            return Err(Self::invalid("direction", "must not be a zero vector"));
        }
        if self.up_vector.is_zero() {
            return Err(Self::invalid("up_vector", "must not be a zero vector"));
        }

        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(Self::invalid(
                "field_of_view",
                "must be between 0 and 180 degrees (exclusive)",
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn invalid(field: &str, reason: &str) -> CoreError {
        CoreError::Validation {
            message: format!("camera {field} {reason}"),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
