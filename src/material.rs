use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Render queue value that defers to the shader's own bucket (opaque geometry)
pub const RENDER_QUEUE_FROM_SHADER: i32 = -1;
/// Render queue bucket for alpha-blended geometry, drawn after opaques
pub const RENDER_QUEUE_TRANSPARENT: i32 = 3000;

/// Blend factor applied to source or destination color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// Shader variant switches toggled by the surface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShaderKeyword {
    AlphaTest,
    AlphaBlend,
    AlphaPremultiply,
}

/// Surface state of a renderable object
///
/// The renderer reads these properties; this crate only switches them between
/// the opaque and the faded configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// "RenderType" override tag, empty when not overridden
    pub render_type: String,
    pub src_blend: BlendMode,
    pub dst_blend: BlendMode,
    pub depth_write: bool,
    pub keywords: BTreeSet<ShaderKeyword>,
    pub render_queue: i32,
    /// Linear RGBA
    pub color: [f32; 4],
}

impl Material {
    /// Opaque material with the given RGB color
    pub fn opaque(rgb: [f32; 3]) -> Self {
        let mut material = Self {
            render_type: String::new(),
            src_blend: BlendMode::One,
            dst_blend: BlendMode::Zero,
            depth_write: true,
            keywords: BTreeSet::new(),
            render_queue: RENDER_QUEUE_FROM_SHADER,
            color: [rgb[0], rgb[1], rgb[2], 1.0],
        };
        material.to_opaque_mode();
        material
    }

    pub fn to_opaque_mode(&mut self) {
        self.render_type.clear();
        self.src_blend = BlendMode::One;
        self.dst_blend = BlendMode::Zero;
        self.depth_write = true;
        self.keywords.remove(&ShaderKeyword::AlphaTest);
        self.keywords.remove(&ShaderKeyword::AlphaBlend);
        self.keywords.remove(&ShaderKeyword::AlphaPremultiply);
        self.render_queue = RENDER_QUEUE_FROM_SHADER;
    }

    pub fn to_fade_mode(&mut self) {
        self.render_type = "Transparent".to_string();
        self.src_blend = BlendMode::SrcAlpha;
        self.dst_blend = BlendMode::OneMinusSrcAlpha;
        self.depth_write = false;
        self.keywords.remove(&ShaderKeyword::AlphaTest);
        self.keywords.insert(ShaderKeyword::AlphaBlend);
        self.keywords.remove(&ShaderKeyword::AlphaPremultiply);
        self.render_queue = RENDER_QUEUE_TRANSPARENT;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.color[3] = alpha;
    }

    pub fn alpha(&self) -> f32 {
        self.color[3]
    }

    /// True when the surface is drawn alpha-blended in the transparent bucket
    pub fn is_transparent(&self) -> bool {
        self.keywords.contains(&ShaderKeyword::AlphaBlend)
            && !self.depth_write
            && self.render_queue >= RENDER_QUEUE_TRANSPARENT
    }

    /// True when the surface is in its default opaque configuration
    pub fn is_opaque(&self) -> bool {
        self.keywords.is_empty()
            && self.depth_write
            && self.src_blend == BlendMode::One
            && self.dst_blend == BlendMode::Zero
            && self.render_queue == RENDER_QUEUE_FROM_SHADER
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::opaque([1.0, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_material_is_opaque() {
        let material = Material::opaque([0.2, 0.4, 0.6]);
        assert!(material.is_opaque());
        assert!(!material.is_transparent());
        assert_eq!(material.color, [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn test_fade_mode_switches_blending() {
        let mut material = Material::default();
        material.to_fade_mode();

        assert_eq!(material.render_type, "Transparent");
        assert_eq!(material.src_blend, BlendMode::SrcAlpha);
        assert_eq!(material.dst_blend, BlendMode::OneMinusSrcAlpha);
        assert!(!material.depth_write);
        assert_eq!(material.render_queue, RENDER_QUEUE_TRANSPARENT);
        assert!(material.keywords.contains(&ShaderKeyword::AlphaBlend));
        assert!(material.is_transparent());
    }

    #[test]
    fn test_opaque_mode_undoes_fade() {
        let mut material = Material::opaque([0.5, 0.5, 0.5]);
        material.keywords.insert(ShaderKeyword::AlphaPremultiply);
        material.to_fade_mode();
        material.to_opaque_mode();

        assert!(material.is_opaque());
        assert_eq!(material.render_type, "");
    }

    #[test]
    fn test_fade_is_idempotent() {
        let mut once = Material::default();
        once.to_fade_mode();
        once.set_alpha(0.3);

        let mut twice = once.clone();
        twice.to_fade_mode();
        twice.set_alpha(0.3);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_alpha_keeps_rgb() {
        let mut material = Material::opaque([0.1, 0.2, 0.3]);
        material.set_alpha(0.3);
        assert_eq!(material.color, [0.1, 0.2, 0.3, 0.3]);
        assert_eq!(material.alpha(), 0.3);
    }
}
