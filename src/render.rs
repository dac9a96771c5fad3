use crate::constants::CLEAR_COLOR;
use crate::core::scene::SceneTransforms;
use crate::core::Camera;
use glam::Vec3;
use web_sys as web;

mod glow;
mod helpers;
mod points;
mod sphere;
mod targets;

use glow::{create_glow_resources, GlowResources, GlowUniforms};
use points::{create_points_resources, PointsResources, PointsUniforms};
use sphere::{create_sphere_resources, SphereResources, SphereUniforms};
use targets::RenderTargets;

/// Everything the renderer reads from the simulation for one frame.
pub struct RenderView<'v> {
    pub camera: &'v Camera,
    pub scene: &'v SceneTransforms,
    pub particles: &'v [Vec3],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    sphere: SphereResources,
    glow: GlowResources,
    points: PointsResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let sphere = create_sphere_resources(&device, format);
        let glow = create_glow_resources(&device, format);
        let points = create_points_resources(&device, format, particle_capacity as u32);
        log::info!(
            "[gpu] surface {}x{} {:?}, {} particle slots",
            width,
            height,
            format,
            points.capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            sphere,
            glow,
            points,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    /// Draws particles, then the translucent sphere, then the glow shell.
    pub fn render(&mut self, view: &RenderView<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let proj = view.camera.projection_matrix();
        let view_m = view.camera.view_matrix();
        let view_proj = proj * view_m;
        let eye = view.camera.eye;

        let pu = PointsUniforms::new(
            proj,
            view_m,
            view.scene.points.matrix(),
            view.camera.fovy_radians,
        );
        self.queue
            .write_buffer(&self.points.uniforms.buffer, 0, bytemuck::bytes_of(&pu));
        let instance_count = self.points.write_positions(&self.queue, view.particles);

        let su = SphereUniforms::new(view_proj, view.scene.sphere.matrix(), eye);
        self.queue
            .write_buffer(&self.sphere.uniforms.buffer, 0, bytemuck::bytes_of(&su));

        let gu = GlowUniforms::new(view_proj, view_m, view.scene.glow.matrix(), eye);
        self.queue
            .write_buffer(&self.glow.uniforms.buffer, 0, bytemuck::bytes_of(&gu));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if instance_count > 0 {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.points.uniforms.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
                rpass.draw(0..6, 0..instance_count);
            }

            rpass.set_pipeline(&self.sphere.pipeline);
            rpass.set_bind_group(0, &self.sphere.uniforms.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.sphere.mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.sphere.mesh.index_count, 0, 0..1);

            rpass.set_pipeline(&self.glow.pipeline);
            rpass.set_bind_group(0, &self.glow.uniforms.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.glow.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.glow.mesh.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.glow.mesh.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
