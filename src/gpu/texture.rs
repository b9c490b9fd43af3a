//! Depth attachment and the toon gradient-map texture.

/// Depth format shared by every pipeline that depth-tests.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// A depth attachment sized to the surface.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Create a depth texture with the given physical dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Expand ramp brightness levels into RGBA8 texels, darkest first.
#[must_use]
pub fn toon_ramp_texels(levels: &[f32]) -> Vec<u8> {
    levels
        .iter()
        .flat_map(|&level| {
            let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
            [v, v, v, 255]
        })
        .collect()
}

/// A 1-texel-high gradient map sampled with nearest filtering, so diffuse
/// lighting snaps to a few flat bands.
pub struct ToonRamp {
    /// The underlying GPU texture (`levels.len()` x 1).
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl ToonRamp {
    /// Upload a ramp with one texel per brightness level.
    #[must_use]
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, levels: &[f32]) -> Self {
        let texels = if levels.is_empty() {
            toon_ramp_texels(&[1.0])
        } else {
            toon_ramp_texels(levels)
        };
        let width = (texels.len() / 4) as u32;
        let size = wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Toon Ramp"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            // Brightness levels are authored as linear factors.
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(1),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_texels_are_gray_and_opaque() {
        let texels = toon_ramp_texels(&[0.2, 0.55, 1.0]);
        assert_eq!(texels.len(), 12);
        assert_eq!(&texels[0..4], &[51, 51, 51, 255]);
        assert_eq!(&texels[4..8], &[140, 140, 140, 255]);
        assert_eq!(&texels[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn ramp_levels_are_clamped() {
        assert_eq!(toon_ramp_texels(&[-1.0, 2.0]), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }
}
