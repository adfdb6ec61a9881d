use crate::LineUniforms;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

/// GPU resources for one drawn object: vertices, optional indices, and its
/// own uniform block (transform + colour).
pub(crate) struct LineBatch {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_buffer: Option<(wgpu::Buffer, u32)>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
}

impl LineBatch {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        positions: &[Vec3],
        indices: Option<&[u32]>,
        color: [f32; 4],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = indices.map(|idx| {
            let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(idx),
                usage: wgpu::BufferUsages::INDEX,
            });
            (buf, idx.len() as u32)
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<LineUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            vertex_count: positions.len() as u32,
            index_buffer,
            uniform_buffer,
            bind_group,
            color,
        }
    }

    /// Overwrite the vertices in place; the count never changes.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, positions: &[Vec3]) {
        debug_assert_eq!(positions.len() as u32, self.vertex_count);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(positions));
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, mvp: Mat4) {
        let u = LineUniforms {
            mvp: mvp.to_cols_array_2d(),
            color: self.color,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some((ib, count)) => {
                rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..*count, 0, 0..1);
            }
            None => rpass.draw(0..self.vertex_count, 0..1),
        }
    }
}
