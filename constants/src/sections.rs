use bevy::math::Vec3;

/// Number of showcase sections the camera travels through.
pub const SECTION_COUNT: usize = 5;

/// Vertical distance between consecutive section groups (world units).
pub const SECTION_SPACING: f32 = 10.0;

/// Number of cuboids in the box-cluster section.
pub const BOX_CLUSTER_SIZE: usize = 5;

pub struct SectionInfo {
    pub index: usize,
    pub label: &'static str,
    /// Group origin on the vertical axis.
    pub base_offset: f32,
    /// Label placeholder position, relative to the group origin.
    pub label_offset: Vec3,
    pub roughness: f32,
    pub metalness: f32,
    pub wireframe: bool,
}

pub const SECTION_MAP: &[SectionInfo] = &[
    SectionInfo {
        index: 0,
        label: "INNOVATION",
        base_offset: 0.0,
        label_offset: Vec3::new(-2.0, -3.0, 0.0),
        roughness: 0.1,
        metalness: 0.8,
        wireframe: false,
    },
    SectionInfo {
        index: 1,
        label: "CREATIVITY",
        base_offset: -10.0,
        label_offset: Vec3::new(-2.5, -2.0, 0.0),
        roughness: 0.2,
        metalness: 0.6,
        wireframe: false,
    },
    SectionInfo {
        index: 2,
        label: "TECHNOLOGY",
        base_offset: -20.0,
        label_offset: Vec3::new(-2.0, -4.0, 0.0),
        roughness: 0.3,
        metalness: 0.7,
        wireframe: false,
    },
    SectionInfo {
        index: 3,
        label: "FUTURE",
        base_offset: -30.0,
        label_offset: Vec3::new(-1.5, -3.0, 0.0),
        roughness: 0.1,
        metalness: 0.9,
        wireframe: false,
    },
    SectionInfo {
        index: 4,
        label: "TOGETHER",
        base_offset: -40.0,
        label_offset: Vec3::new(-2.5, -4.0, 0.0),
        roughness: 0.2,
        metalness: 0.8,
        wireframe: true,
    },
];

pub fn section_info(index: usize) -> Option<&'static SectionInfo> {
    SECTION_MAP.iter().find(|s| s.index == index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_section() {
        assert_eq!(SECTION_MAP.len(), SECTION_COUNT);
        for (i, info) in SECTION_MAP.iter().enumerate() {
            assert_eq!(info.index, i);
        }
    }

    #[test]
    fn offsets_descend_by_spacing() {
        for info in SECTION_MAP {
            assert_eq!(info.base_offset, -(info.index as f32) * SECTION_SPACING);
        }
    }

    #[test]
    fn lookup_by_index() {
        assert_eq!(section_info(2).map(|s| s.label), Some("TECHNOLOGY"));
        assert!(section_info(SECTION_COUNT).is_none());
    }
}
