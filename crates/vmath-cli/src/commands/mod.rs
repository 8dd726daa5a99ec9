//! CLI command implementations

pub mod add;
pub mod angle;
pub mod cross;
pub mod distance;
pub mod dot;
pub mod length;
pub mod lerp;
pub mod normalize;

use anyhow::{Context, Result, bail};
use vmath_core::{Vec2, Vec3};

/// A parsed vector argument, 2 or 3 components wide.
#[derive(Debug, Clone, Copy)]
pub enum Vector {
    V2(Vec2),
    V3(Vec3),
}

/// Two parsed vector arguments of matching width.
#[derive(Debug, Clone, Copy)]
pub enum VectorPair {
    V2(Vec2, Vec2),
    V3(Vec3, Vec3),
}

/// Parse a vector argument, dispatching on component count.
pub fn parse_vector(s: &str, delimiter: char) -> Result<Vector> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        bail!("empty vector argument");
    }

    let width = trimmed.split(delimiter).count();
    let parsed = match width {
        2 => Vec2::from_delimited(trimmed, delimiter).map(Vector::V2),
        3 => Vec3::from_delimited(trimmed, delimiter).map(Vector::V3),
        n => bail!("expected 2 or 3 components, found {} in {:?}", n, s),
    };

    parsed.with_context(|| format!("invalid vector {:?}", s))
}

/// Parse two vector arguments that must share a width.
pub fn parse_pair(a: &str, b: &str, delimiter: char) -> Result<VectorPair> {
    match (parse_vector(a, delimiter)?, parse_vector(b, delimiter)?) {
        (Vector::V2(a), Vector::V2(b)) => Ok(VectorPair::V2(a, b)),
        (Vector::V3(a), Vector::V3(b)) => Ok(VectorPair::V3(a, b)),
        _ => bail!("cannot mix 2D and 3D vectors"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector_two_components() {
        match parse_vector("1,2", ',').unwrap() {
            Vector::V2(v) => assert_eq!(v, Vec2::new(1.0, 2.0)),
            Vector::V3(_) => panic!("two components should dispatch to 2D"),
        }
    }

    #[test]
    fn test_parse_vector_three_components() {
        match parse_vector("1,2,3", ',').unwrap() {
            Vector::V3(v) => assert_eq!(v, Vec3::new(1.0, 2.0, 3.0)),
            Vector::V2(_) => panic!("three components should dispatch to 3D"),
        }
    }

    #[test]
    fn test_parse_vector_custom_delimiter() {
        match parse_vector("1.5; 2.5", ';').unwrap() {
            Vector::V2(v) => assert_eq!(v, Vec2::new(1.5, 2.5)),
            Vector::V3(_) => panic!("two components should dispatch to 2D"),
        }
    }

    #[test]
    fn test_parse_vector_rejects_other_widths() {
        assert!(parse_vector("1", ',').is_err(), "one component should be rejected");
        assert!(parse_vector("1,2,3,4", ',').is_err(), "four components should be rejected");
        assert!(parse_vector("", ',').is_err(), "empty input should be rejected");
    }

    #[test]
    fn test_parse_vector_reports_bad_component() {
        let err = parse_vector("1,2,x", ',').unwrap_err();
        assert!(format!("{:#}", err).contains("component 2"));
    }

    #[test]
    fn test_parse_pair_matching_widths() {
        match parse_pair("1,2", "3,4", ',').unwrap() {
            VectorPair::V2(a, b) => {
                assert_eq!(a, Vec2::new(1.0, 2.0));
                assert_eq!(b, Vec2::new(3.0, 4.0));
            }
            VectorPair::V3(..) => panic!("two 2D arguments should stay 2D"),
        }

        match parse_pair("1,2,0", "-3,5,0", ',').unwrap() {
            VectorPair::V3(a, b) => {
                assert_eq!(a, Vec3::new(1.0, 2.0, 0.0));
                assert_eq!(b, Vec3::new(-3.0, 5.0, 0.0));
            }
            VectorPair::V2(..) => panic!("two 3D arguments should stay 3D"),
        }
    }

    #[test]
    fn test_parse_pair_rejects_mixed_widths() {
        let result = parse_pair("1,2", "3,4,5", ',');
        assert!(result.unwrap_err().to_string().contains("cannot mix"));

        let result = parse_pair("1,2,3", "4,5", ',');
        assert!(result.unwrap_err().to_string().contains("cannot mix"));
    }
}
