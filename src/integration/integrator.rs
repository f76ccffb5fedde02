use crate::objects::circle_body::CircleBody;

/// Integrates the body's state forward in time using Semi-Implicit Euler:
/// velocity first, then the center moves with the new velocity.
pub fn integrate(body: &mut CircleBody, dt: f64) {
    // v = v + a*dt
    body.velocity += body.acceleration * dt;
    // p = p + v*dt
    let center = body.center() + body.velocity * dt;
    body.set_center(center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;

    fn default_test_body() -> CircleBody {
        CircleBody::new(Vec2::ZERO, 1.0).unwrap()
    }

    #[test]
    fn test_integrate_linear_motion_no_acceleration() {
        let mut body = default_test_body().with_velocity(Vec2::new(10.0, -5.0));
        integrate(&mut body, 0.1);

        assert!((body.center().x - 1.0).abs() < EPSILON);
        assert!((body.center().y - -0.5).abs() < EPSILON);
        assert_eq!(body.velocity, Vec2::new(10.0, -5.0)); // Velocity unchanged
    }

    #[test]
    fn test_integrate_constant_acceleration() {
        let mut body = default_test_body().with_acceleration(Vec2::new(0.0, -10.0));
        let dt = 0.1;
        integrate(&mut body, dt);
        // v = (0, -1), p = (0, -0.1)
        assert!((body.velocity.y - -1.0).abs() < EPSILON);
        assert!((body.center().y - -0.1).abs() < EPSILON);

        integrate(&mut body, dt);
        // v = (0, -2), p = (0, -0.3)
        assert!((body.velocity.y - -2.0).abs() < EPSILON);
        assert!((body.center().y - -0.3).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let mut body = default_test_body()
            .with_velocity(Vec2::new(3.0, 4.0))
            .with_acceleration(Vec2::new(-1.0, 2.0));
        let before = body.clone();
        integrate(&mut body, 0.0);
        assert_eq!(body, before);
    }
}
