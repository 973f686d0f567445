//! Fixed-unit display helpers that ignore the active schema

use crate::TranslateResult;
use crate::quantity::{Angle, Length, Time, Velocity, Volume, DEGREE, METER};

pub fn radians(angle: Angle) -> TranslateResult {
    TranslateResult::new(angle.value(), "rad", 1.)
}

pub fn degrees(angle: Angle) -> TranslateResult {
    TranslateResult::new(angle.value() / DEGREE, "°", DEGREE)
}

pub fn meters(length: Length) -> TranslateResult {
    TranslateResult::new(length.value() / METER, "m", METER)
}

pub fn millimeters(length: Length) -> TranslateResult {
    TranslateResult::new(length.value(), "mm", 1.)
}

pub fn cubic_millimeters(volume: Volume) -> TranslateResult {
    TranslateResult::new(volume.value(), "mm³", 1.)
}

pub fn millimeters_per_second(speed: Velocity) -> TranslateResult {
    TranslateResult::new(speed.value(), "mm/s", 1.)
}

pub fn seconds(duration: Time) -> TranslateResult {
    TranslateResult::new(duration.value(), "s", 1.)
}
