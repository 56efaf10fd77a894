use std::fmt;

use serde::{Deserialize, Serialize};

/// Joint angle formed by three spinal landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelativeAngleId {
    #[serde(rename = "C2_C7_vert_new", alias = "C2_C7_vert")]
    C2C7VertNew,
    #[serde(rename = "C7_T3_vert_new", alias = "C7_T3_vert")]
    C7T3VertNew,
    #[serde(rename = "C7_T3_T8")]
    C7T3T8,
    #[serde(rename = "T3_T8_T12")]
    T3T8T12,
    #[serde(rename = "T8_T12_L3")]
    T8T12L3,
    #[serde(rename = "T12_L3_S")]
    T12L3S,
}

/// Spinal segment measured against the vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbsoluteAngleId {
    #[serde(rename = "C2_C7")]
    C2C7,
    #[serde(rename = "C7_T3")]
    C7T3,
    #[serde(rename = "T3_T8")]
    T3T8,
    #[serde(rename = "T8_T12")]
    T8T12,
    #[serde(rename = "L3_S")]
    L3S,
}

impl RelativeAngleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeAngleId::C2C7VertNew => "C2_C7_vert_new",
            RelativeAngleId::C7T3VertNew => "C7_T3_vert_new",
            RelativeAngleId::C7T3T8 => "C7_T3_T8",
            RelativeAngleId::T3T8T12 => "T3_T8_T12",
            RelativeAngleId::T8T12L3 => "T8_T12_L3",
            RelativeAngleId::T12L3S => "T12_L3_S",
        }
    }
}

impl AbsoluteAngleId {
    pub fn as_str(self) -> &'static str {
        match self {
            AbsoluteAngleId::C2C7 => "C2_C7",
            AbsoluteAngleId::C7T3 => "C7_T3",
            AbsoluteAngleId::T3T8 => "T3_T8",
            AbsoluteAngleId::T8T12 => "T8_T12",
            AbsoluteAngleId::L3S => "L3_S",
        }
    }
}

impl fmt::Display for RelativeAngleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AbsoluteAngleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn relative_angle_order() -> &'static [RelativeAngleId] {
    &[
        RelativeAngleId::C2C7VertNew,
        RelativeAngleId::C7T3VertNew,
        RelativeAngleId::C7T3T8,
        RelativeAngleId::T3T8T12,
        RelativeAngleId::T8T12L3,
        RelativeAngleId::T12L3S,
    ]
}

pub fn absolute_angle_order() -> &'static [AbsoluteAngleId] {
    &[
        AbsoluteAngleId::C2C7,
        AbsoluteAngleId::C7T3,
        AbsoluteAngleId::T3T8,
        AbsoluteAngleId::T8T12,
        AbsoluteAngleId::L3S,
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/angles.rs"]
mod tests;
