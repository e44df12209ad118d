//! Angles in degrees or radians.

use std::{
    f64::consts::PI,
    ops::{Add, Div, Mul, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f64 {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> f64 {
        self.as_radians().0
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// One full turn.
    pub const FULL_TURN: Self = Self(360.0);
}

impl Radians {
    /// One full turn.
    pub const FULL_TURN: Self = Self(2.0 * PI);

    /// Half a turn.
    pub const HALF_TURN: Self = Self(PI);
}

impl Angle for Degrees {
    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }
}

impl Angle for Radians {
    fn as_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    fn as_radians(self) -> Radians {
        self
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        rad.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_arithmetic {
    ($t:ident, $other:ident) => {
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Add<$other> for $t {
            type Output = Self;
            fn add(self, rhs: $other) -> Self {
                self + Self::from(rhs)
            }
        }

        impl Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Sub<$other> for $t {
            type Output = Self;
            fn sub(self, rhs: $other) -> Self {
                self - Self::from(rhs)
            }
        }

        impl Mul<f64> for $t {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $t {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                <f64 as ::approx::AbsDiffEq>::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }
    };
}

impl_angle_arithmetic!(Degrees, Radians);
impl_angle_arithmetic!(Radians, Degrees);

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn converting_quarter_turns_between_units_works() {
        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(-270.0).radians(), -3.0 * PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(-PI / 2.0).degrees(), -90.0, epsilon = EPSILON);
    }

    #[test]
    fn full_turns_agree() {
        assert_abs_diff_eq!(Degrees::FULL_TURN.as_radians(), Radians::FULL_TURN, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians::HALF_TURN.as_degrees(), Degrees(180.0), epsilon = EPSILON);
    }

    #[test]
    fn mixed_unit_arithmetic_works() {
        assert_abs_diff_eq!(Degrees(45.0) + Radians(PI / 2.0), Degrees(135.0), epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(45.0), Radians(PI / 4.0), epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0), epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(3.0) / 4.0, Radians(0.75), epsilon = EPSILON);
    }
}
