//! Draws an [`AnimationDriver`]'s spirals as line strips, plus an optional
//! wireframe companion as an indexed line list.
//!
//! The renderer never owns the driver. Each frame the caller hands it the
//! driver in [`LineRenderer::sync`], which uploads only the spiral buffers
//! whose dirty flag is set, then records a pass with [`LineRenderer::draw`].

use glam::Mat4;
use spiral_core::{icosahedron_wireframe, AnimationDriver, Camera, Color, CompanionConfig};

mod batch;
mod device;
mod pipeline;

use batch::LineBatch;
use pipeline::{create_line_pipelines, LinePipelines};

pub use device::{request_device, surface_config};

pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

pub struct LineRenderer {
    pipelines: LinePipelines,
    spirals: Vec<LineBatch>,
    companion: Option<LineBatch>,
    camera: Camera,
    clear_color: wgpu::Color,
}

impl LineRenderer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        driver: &AnimationDriver,
        companion: Option<&CompanionConfig>,
        camera: Camera,
        background: Color,
    ) -> Self {
        let pipelines = create_line_pipelines(device, color_format);
        let spirals = driver
            .spirals()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                LineBatch::new(
                    device,
                    &pipelines.bind_group_layout,
                    &format!("spiral_{i}"),
                    s.points(),
                    None,
                    s.color().linear_rgba(),
                )
            })
            .collect::<Vec<_>>();
        let companion = companion.map(|c| {
            let wire = icosahedron_wireframe(c.radius, c.detail);
            log::info!(
                "[render] companion: vertices={} edges={}",
                wire.positions.len(),
                wire.edge_count()
            );
            LineBatch::new(
                device,
                &pipelines.bind_group_layout,
                "companion",
                &wire.positions,
                Some(&wire.indices),
                c.color.linear_rgba(),
            )
        });
        let [r, g, b, a] = background.linear_rgba();
        Self {
            pipelines,
            spirals,
            companion,
            camera,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        }
    }

    /// Follow a surface resize. Only the camera aspect changes.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Upload dirty spiral buffers and refresh every uniform block.
    /// Returns how many spiral buffers were uploaded.
    pub fn sync(&mut self, queue: &wgpu::Queue, driver: &mut AnimationDriver) -> usize {
        let view_proj = self.camera.view_proj();
        let mut uploaded = 0;
        for (batch, spiral) in self.spirals.iter().zip(driver.spirals_mut()) {
            if spiral.take_dirty() {
                batch.upload(queue, spiral.points());
                uploaded += 1;
            }
            batch.write_uniforms(queue, view_proj);
        }
        if let Some(c) = &self.companion {
            let model = Mat4::from_rotation_z(driver.companion_rotation());
            c.write_uniforms(queue, view_proj * model);
        }
        uploaded
    }

    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lines_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        if let Some(c) = &self.companion {
            rpass.set_pipeline(&self.pipelines.list);
            c.draw(&mut rpass);
        }
        rpass.set_pipeline(&self.pipelines.strip);
        for batch in &self.spirals {
            batch.draw(&mut rpass);
        }
    }
}
