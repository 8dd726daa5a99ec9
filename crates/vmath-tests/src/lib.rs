//! Integration tests for vmath-rs crates.
//!
//! End-to-end checks of the vector API: arithmetic identities, parsing and
//! formatting round-trips, and serde interop.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use vmath_core::{Vec2, Vec3};

    /// The scenario from the demo binary: two points, their sum, three lengths.
    #[test]
    fn test_demo_vectors() {
        let a = Vec3::new(1.0, 2.0, 0.0);
        let b = Vec3::new(-3.0, 5.0, 0.0);
        let c = a + b;

        assert_eq!(c, Vec3::new(-2.0, 7.0, 0.0));
        assert_relative_eq!(a.length(), 2.236068, epsilon = 1e-6);
        assert_relative_eq!(b.length(), 5.830952, epsilon = 1e-6);
        assert_relative_eq!(c.length(), 7.28011, epsilon = 1e-5);
    }

    #[test]
    fn test_length_invariants() {
        let samples2 = [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.1, 0.7),
            Vec2::splat(123.456),
        ];
        for v in samples2 {
            assert_relative_eq!(
                v.length() * v.length(),
                v.length_squared(),
                max_relative = 1e-5
            );
            assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-6);
        }

        let samples3 = [
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(-3.0, 5.0, 0.0),
            Vec3::new(0.001, -2.5, 40.0),
        ];
        for v in samples3 {
            assert_relative_eq!(
                v.length() * v.length(),
                v.length_squared(),
                max_relative = 1e-5
            );
            assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_axis_products() {
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);
        assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
    }

    #[test]
    fn test_symmetry_properties() {
        let u2 = Vec2::new(1.5, -2.0);
        let v2 = Vec2::new(0.25, 8.0);
        assert_eq!(u2.dot(v2), v2.dot(u2));
        assert_eq!(u2.cross(v2), -v2.cross(u2));
        assert_eq!(u2.distance(v2), v2.distance(u2));

        let u3 = Vec3::new(1.0, 2.0, 3.0);
        let v3 = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(u3.dot(v3), v3.dot(u3));
        assert_eq!(u3.cross(v3), -v3.cross(u3));
        assert_eq!(u3.distance(v3), v3.distance(u3));
    }

    /// Display output fed back through a space-delimited parse reproduces the
    /// exact components (float Display prints a round-trippable form).
    #[test]
    fn test_display_parse_roundtrip() {
        let v2 = Vec2::new(0.1, 1.0 / 3.0);
        let parsed = Vec2::from_delimited(&v2.to_string(), ' ').unwrap();
        assert_eq!(parsed, v2);

        let v3 = Vec3::new(-2.0, 7.0, 0.30000001);
        let parsed = Vec3::from_delimited(&v3.to_string(), ' ').unwrap();
        assert_eq!(parsed, v3);
    }

    #[test]
    fn test_componentwise_product() {
        let u = Vec2::new(2.0, 3.0);
        let v = Vec2::new(10.0, 10.0);
        assert_eq!(u * v, Vec2::new(20.0, 30.0));

        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(10.0, 10.0, 10.0);
        assert_eq!(a * b, Vec3::new(20.0, 30.0, 40.0));
    }

    #[test]
    fn test_lerp_blend() {
        let a2 = Vec2::new(1.0, 1.0);
        let b2 = Vec2::new(3.0, 5.0);
        assert_eq!(a2.lerp(b2, 0.0), a2);
        assert_eq!(a2.lerp(b2, 0.5), Vec2::new(2.0, 3.0));
        assert_eq!(a2.lerp(b2, 1.0), b2);

        let a3 = Vec3::ZERO;
        let b3 = Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(a3.lerp(b3, 0.0), a3);
        assert_eq!(a3.lerp(b3, 0.5), Vec3::new(5.0, 10.0, 15.0));
        assert_eq!(a3.lerp(b3, 1.0), b3);
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!("1,2,3".parse::<Vec3>().unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!("3.0, 4.0".parse::<Vec2>().unwrap(), Vec2::new(3.0, 4.0));
        assert_eq!(
            Vec3::from_delimited("1; 2; 3", ';').unwrap(),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_parse_errors() {
        // wrong component count
        let err = "1,2".parse::<Vec3>().unwrap_err();
        assert!(err.is_count_error());

        let err = "1,2,3".parse::<Vec2>().unwrap_err();
        assert!(err.is_count_error());

        // blank and non-numeric fields
        let err = "1,,3".parse::<Vec3>().unwrap_err();
        assert!(err.is_number_error());

        let err = "1,two,3".parse::<Vec3>().unwrap_err();
        assert!(err.is_number_error());

        assert!("".parse::<Vec2>().is_err());
    }

    #[test]
    fn test_zero_length_normalization() {
        assert_eq!(Vec2::ZERO.try_normalized(), None);
        assert_eq!(Vec3::ZERO.try_normalized(), None);
        assert!(Vec2::ZERO.normalized().is_nan());
        assert!(Vec3::ZERO.normalized().is_nan());
    }

    #[test]
    fn test_point_distance() {
        let origin = Vec2::ZERO;
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(origin.distance(p), 5.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let v2 = Vec2::new(0.5, -1.25);
        let json = serde_json::to_string(&v2).unwrap();
        assert_eq!(serde_json::from_str::<Vec2>(&json).unwrap(), v2);

        let v3 = Vec3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v3).unwrap();
        assert_eq!(serde_json::from_str::<Vec3>(&json).unwrap(), v3);
    }

    #[test]
    fn test_aliases() {
        use vmath_core::{Color3, Point2, Point3};

        let p: Point2 = Vec2::new(1.0, 2.0);
        assert_eq!(p, Vec2::new(1.0, 2.0));

        let p: Point3 = Vec3::new(1.0, 2.0, 3.0);
        let gray: Color3 = Vec3::splat(0.5);
        assert_eq!(p.dot(gray), 3.0);
    }
}
