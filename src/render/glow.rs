use super::helpers::{self, MeshBuffers, ScenePipelineDesc, UniformBinding};
use crate::constants::{GLOW_C, GLOW_COLOR, GLOW_MAX_ALPHA, GLOW_P};
use crate::core::constants::{GLOW_RADIUS, SPHERE_SEGMENTS};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlowUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) glow_color: [f32; 4],
    pub(crate) view_vector: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl GlowUniforms {
    pub(crate) fn new(view_proj: Mat4, view: Mat4, model: Mat4, eye: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            glow_color: helpers::rgb_a(GLOW_COLOR, GLOW_MAX_ALPHA),
            view_vector: eye.extend(0.0).to_array(),
            params: [GLOW_C, GLOW_P, 0.0, 0.0],
        }
    }
}

/// Back-face shell three sphere radii wide, blended additively and never
/// occluded by the sphere in front of it.
pub(crate) struct GlowResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
    pub(crate) mesh: MeshBuffers,
}

pub(crate) fn create_glow_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> GlowResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("glow_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::GLOW_WGSL.into()),
    });
    let uniforms = helpers::create_uniform_binding(
        device,
        "glow_uniforms",
        std::mem::size_of::<GlowUniforms>() as u64,
    );
    let (vertices, indices) =
        crate::core::geometry::sphere_mesh(GLOW_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    let mesh = helpers::upload_mesh(device, "glow_mesh", &vertices, &indices);
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "glow_pipeline",
            shader: &shader,
            layout: &uniforms.layout,
            buffers: &[helpers::mesh_vertex_layout()],
            color_format,
            blend: helpers::ADDITIVE_BLENDING,
            cull_mode: Some(wgpu::Face::Front),
            depth_write: false,
            depth_compare: wgpu::CompareFunction::Always,
        },
    );
    GlowResources {
        pipeline,
        uniforms,
        mesh,
    }
}
