//! Import-time processing applied to models before they reach the viewer

use bitflags::bitflags;

bitflags! {
    /// Processing steps requested from the importer when loading a model
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LoadFlags: u32 {
        /// Calculates the tangents and bitangents for the imported meshes.
        const CALC_TANGENT_SPACE = 1 << 0;

        /// Triangulates all faces of all meshes.
        const TRIANGULATE = 1 << 1;

        /// Identifies and joins identical vertex data sets within all imported meshes.
        const JOIN_IDENTICAL_VERTICES = 1 << 2;

        /// Splits meshes with more than one primitive type into homogeneous sub-meshes.
        const SORT_BY_PTYPE = 1 << 3;

        /// Converts all the imported data to a left-handed coordinate space.
        const MAKE_LEFT_HANDED = 1 << 4;

        /// Flips face winding order from CCW to CW.
        const FLIP_WINDING_ORDER = 1 << 5;

        /// Applies per-texture UV transformations and bakes them into the coordinates.
        const TRANSFORM_UV_COORDS = 1 << 6;

        /// Flips all UV coordinates along the y-axis.
        const FLIP_UVS = 1 << 7;

        /// Splits meshes so no sub-mesh is influenced by more than the bone limit.
        const SPLIT_BY_BONE_COUNT = 1 << 8;

        /// Generates smooth normals for meshes that lack them.
        const GEN_SMOOTH_NORMALS = 1 << 9;
    }
}

impl LoadFlags {
    /// What the viewer asks for by default
    pub const VIEWER_DEFAULT: Self = Self::from_bits_truncate(
        Self::CALC_TANGENT_SPACE.bits()
            | Self::TRIANGULATE.bits()
            | Self::JOIN_IDENTICAL_VERTICES.bits()
            | Self::SORT_BY_PTYPE.bits()
            | Self::MAKE_LEFT_HANDED.bits()
            | Self::FLIP_WINDING_ORDER.bits()
            | Self::TRANSFORM_UV_COORDS.bits()
            | Self::FLIP_UVS.bits()
            | Self::SPLIT_BY_BONE_COUNT.bits(),
    );
}

impl Default for LoadFlags {
    fn default() -> Self {
        Self::VIEWER_DEFAULT
    }
}

#[cfg(feature = "assimp")]
impl From<LoadFlags> for asset_importer::postprocess::PostProcessSteps {
    fn from(flags: LoadFlags) -> Self {
        use asset_importer::postprocess::PostProcessSteps as Steps;

        const MAPPING: [(LoadFlags, Steps); 10] = [
            (LoadFlags::CALC_TANGENT_SPACE, Steps::CALC_TANGENT_SPACE),
            (LoadFlags::TRIANGULATE, Steps::TRIANGULATE),
            (LoadFlags::JOIN_IDENTICAL_VERTICES, Steps::JOIN_IDENTICAL_VERTICES),
            (LoadFlags::SORT_BY_PTYPE, Steps::SORT_BY_PTYPE),
            (LoadFlags::MAKE_LEFT_HANDED, Steps::MAKE_LEFT_HANDED),
            (LoadFlags::FLIP_WINDING_ORDER, Steps::FLIP_WINDING_ORDER),
            (LoadFlags::TRANSFORM_UV_COORDS, Steps::TRANSFORM_UV_COORDS),
            (LoadFlags::FLIP_UVS, Steps::FLIP_UVS),
            (LoadFlags::SPLIT_BY_BONE_COUNT, Steps::SPLIT_BY_BONE_COUNT),
            (LoadFlags::GEN_SMOOTH_NORMALS, Steps::GEN_SMOOTH_NORMALS),
        ];

        MAPPING
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .fold(Steps::empty(), |steps, (_, step)| steps | *step)
    }
}
