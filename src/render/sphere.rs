use super::helpers::{self, MeshBuffers, ScenePipelineDesc, UniformBinding};
use crate::constants::{
    AMBIENT_COLOR, AMBIENT_INTENSITY, POINT_LIGHT_COLOR, POINT_LIGHT_INTENSITY,
    POINT_LIGHT_POSITION, SPHERE_COLOR, SPHERE_METALNESS, SPHERE_OPACITY, SPHERE_ROUGHNESS,
};
use crate::core::constants::{SPHERE_RADIUS, SPHERE_SEGMENTS};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SphereUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) base_color: [f32; 4],
    pub(crate) material: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) light_pos: [f32; 4],
    pub(crate) light_color: [f32; 4],
}

impl SphereUniforms {
    pub(crate) fn new(view_proj: Mat4, model: Mat4, eye: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            eye: eye.extend(1.0).to_array(),
            base_color: helpers::rgb_a(SPHERE_COLOR, SPHERE_OPACITY),
            material: [SPHERE_ROUGHNESS, SPHERE_METALNESS, 0.0, 0.0],
            ambient: helpers::rgb_scaled(AMBIENT_COLOR, AMBIENT_INTENSITY),
            light_pos: helpers::rgb_a(POINT_LIGHT_POSITION, 1.0),
            light_color: helpers::rgb_scaled(POINT_LIGHT_COLOR, POINT_LIGHT_INTENSITY),
        }
    }
}

pub(crate) struct SphereResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
    pub(crate) mesh: MeshBuffers,
}

pub(crate) fn create_sphere_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SphereResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sphere_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SPHERE_WGSL.into()),
    });
    let uniforms = helpers::create_uniform_binding(
        device,
        "sphere_uniforms",
        std::mem::size_of::<SphereUniforms>() as u64,
    );
    let (vertices, indices) =
        crate::core::geometry::sphere_mesh(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    let mesh = helpers::upload_mesh(device, "sphere_mesh", &vertices, &indices);
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "sphere_pipeline",
            shader: &shader,
            layout: &uniforms.layout,
            buffers: &[helpers::mesh_vertex_layout()],
            color_format,
            blend: wgpu::BlendState::ALPHA_BLENDING,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
            depth_compare: wgpu::CompareFunction::Less,
        },
    );
    SphereResources {
        pipeline,
        uniforms,
        mesh,
    }
}
