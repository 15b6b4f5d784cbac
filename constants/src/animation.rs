/// Horizontal sway amplitude of the camera across a full scroll.
pub const CAMERA_SWAY_AMPLITUDE: f32 = 2.0;

/// Camera height at scroll progress zero.
pub const CAMERA_BASE_HEIGHT: f32 = 2.0;

/// Camera distance from the section axis at scroll progress zero.
pub const CAMERA_BASE_DEPTH: f32 = 5.0;

/// Depth oscillation amplitude over the scroll range.
pub const CAMERA_DEPTH_AMPLITUDE: f32 = 2.0;

/// Total vertical camera travel across the full scroll range.
pub const CAMERA_TRAVEL: f32 = -10.0;

pub enum SpinAxis {
    X,
    Y,
    Z,
}

/// Slow drift applied to a whole section group, independent of the spin of
/// the primary mesh it contains.
pub struct GroupMotion {
    pub float_frequency: f32,
    pub float_amplitude: f32,
    pub spin_axis: SpinAxis,
    pub spin_rate: f32,
}

pub const GROUP_MOTION: [GroupMotion; 5] = [
    GroupMotion {
        float_frequency: 0.5,
        float_amplitude: 0.2,
        spin_axis: SpinAxis::Y,
        spin_rate: 0.1,
    },
    GroupMotion {
        float_frequency: 0.7,
        float_amplitude: 0.3,
        spin_axis: SpinAxis::Z,
        spin_rate: 0.05,
    },
    GroupMotion {
        float_frequency: 0.6,
        float_amplitude: 0.2,
        spin_axis: SpinAxis::Y,
        spin_rate: 0.1,
    },
    GroupMotion {
        float_frequency: 0.8,
        float_amplitude: 0.25,
        spin_axis: SpinAxis::X,
        spin_rate: 0.05,
    },
    GroupMotion {
        float_frequency: 0.4,
        float_amplitude: 0.3,
        spin_axis: SpinAxis::Y,
        spin_rate: 0.08,
    },
];
