use crate::{CoreError, PerspectiveCamera, Vector3};

use googletest::prelude::*;

fn camera() -> PerspectiveCamera {
    PerspectiveCamera {
        position: Vector3::new(12.2, -3.5, 8.0),
        direction: Vector3::new(-0.5, 0.5, -0.7),
        up_vector: Vector3::new(0.0, 0.0, 1.0),
        field_of_view: 60.0,
    }
}

#[test]
fn given_valid_camera_when_validated_then_ok() {
    assert_that!(camera().validate(), ok(anything()));
}

#[test]
fn given_zero_direction_when_validated_then_direction_rejected() {
    let mut camera = camera();
    camera.direction = Vector3::default();

    let result = camera.validate();

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_that!(field.as_deref(), some(eq("direction")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_field_of_view_out_of_range_when_validated_then_err() {
    for fov in [0.0, 180.0, -10.0, f64::NAN] {
        let mut camera = camera();
        camera.field_of_view = fov;

        assert_that!(camera.validate(), err(anything()));
    }
}

#[test]
fn given_non_finite_position_when_validated_then_err() {
    let mut camera = camera();
    camera.position = Vector3::new(f64::INFINITY, 0.0, 0.0);

    assert_that!(camera.validate(), err(anything()));
}
