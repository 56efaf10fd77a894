use crate::model::angles::{AbsoluteAngleId, RelativeAngleId};

/// Score curve applied to an absolute angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
    /// Plateau at 1.0 up to the center, parabolic falloff to 0.0 above it.
    Neck,
    /// Parabola centered on the normal value, 0.0 outside ±half-width.
    Waist,
}

#[derive(Debug, Clone, Copy)]
pub struct RelativeNormal {
    pub id: RelativeAngleId,
    pub center: f32,
    pub half_width: f32,
}

/// Centers are degrees from the vertical, not the raw measured angle.
#[derive(Debug, Clone, Copy)]
pub struct AbsoluteNormal {
    pub id: AbsoluteAngleId,
    pub shape: CurveShape,
    pub center: f32,
    pub half_width: f32,
}

const RELATIVE_NORMALS: &[RelativeNormal] = &[
    RelativeNormal {
        id: RelativeAngleId::C2C7VertNew,
        center: 31.3,
        half_width: 5.0,
    },
    RelativeNormal {
        id: RelativeAngleId::C7T3VertNew,
        center: 41.7,
        half_width: 10.0,
    },
    RelativeNormal {
        id: RelativeAngleId::C7T3T8,
        center: 158.4,
        half_width: 8.0,
    },
    RelativeNormal {
        id: RelativeAngleId::T3T8T12,
        center: 155.0,
        half_width: 1.0,
    },
    RelativeNormal {
        id: RelativeAngleId::T8T12L3,
        center: 178.3,
        half_width: 2.5,
    },
    RelativeNormal {
        id: RelativeAngleId::T12L3S,
        center: 172.0,
        half_width: 1.5,
    },
];

const ABSOLUTE_NORMALS: &[AbsoluteNormal] = &[
    AbsoluteNormal {
        id: AbsoluteAngleId::C2C7,
        shape: CurveShape::Neck,
        center: 25.0,
        half_width: 17.0,
    },
    AbsoluteNormal {
        id: AbsoluteAngleId::C7T3,
        shape: CurveShape::Neck,
        center: 45.0,
        half_width: 15.0,
    },
    AbsoluteNormal {
        id: AbsoluteAngleId::T3T8,
        shape: CurveShape::Waist,
        center: 15.0,
        half_width: 15.0,
    },
    AbsoluteNormal {
        id: AbsoluteAngleId::T8T12,
        shape: CurveShape::Waist,
        center: 15.0,
        half_width: 15.0,
    },
    AbsoluteNormal {
        id: AbsoluteAngleId::L3S,
        shape: CurveShape::Waist,
        center: 0.0,
        half_width: 16.0,
    },
];

pub fn relative_normals() -> &'static [RelativeNormal] {
    RELATIVE_NORMALS
}

pub fn absolute_normals() -> &'static [AbsoluteNormal] {
    ABSOLUTE_NORMALS
}

pub fn relative_normal(id: RelativeAngleId) -> Option<&'static RelativeNormal> {
    RELATIVE_NORMALS.iter().find(|n| n.id == id)
}

pub fn absolute_normal(id: AbsoluteAngleId) -> Option<&'static AbsoluteNormal> {
    ABSOLUTE_NORMALS.iter().find(|n| n.id == id)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/calibration.rs"]
mod tests;
