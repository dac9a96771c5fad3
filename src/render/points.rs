use super::helpers::{self, ScenePipelineDesc, UniformBinding};
use crate::constants::{POINT_ALPHA_TEST, POINT_COLOR, POINT_OPACITY, POINT_SIZE};
use glam::{Mat4, Vec3};

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointsUniforms {
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) sprite: [f32; 4],
}

impl PointsUniforms {
    pub(crate) fn new(proj: Mat4, view: Mat4, model: Mat4, fovy_radians: f32) -> Self {
        Self {
            proj: proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: helpers::rgb_a(POINT_COLOR, POINT_OPACITY),
            sprite: [
                sprite_world_size(fovy_radians),
                POINT_ALPHA_TEST,
                0.0,
                0.0,
            ],
        }
    }
}

/// World-space quad size giving `POINT_SIZE` attenuated by distance.
#[inline]
fn sprite_world_size(fovy_radians: f32) -> f32 {
    POINT_SIZE * (fovy_radians * 0.5).tan()
}

/// Instanced billboards, six vertices per particle generated in the shader.
pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: u32,
}

impl PointsResources {
    /// Uploads this frame's particle positions; returns how many are drawn.
    pub(crate) fn write_positions(&self, queue: &wgpu::Queue, positions: &[Vec3]) -> u32 {
        let n = positions.len().min(self.capacity as usize);
        if n > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&positions[..n]),
            );
        }
        n as u32
    }
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    capacity: u32,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let uniforms = helpers::create_uniform_binding(
        device,
        "points_uniforms",
        std::mem::size_of::<PointsUniforms>() as u64,
    );
    let capacity = capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("points_instances"),
        size: capacity as u64 * std::mem::size_of::<Vec3>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "points_pipeline",
            shader: &shader,
            layout: &uniforms.layout,
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vec3>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            }],
            color_format,
            blend: helpers::ADDITIVE_BLENDING,
            cull_mode: None,
            depth_write: false,
            depth_compare: wgpu::CompareFunction::LessEqual,
        },
    );
    PointsResources {
        pipeline,
        uniforms,
        instance_buffer,
        capacity,
    }
}
