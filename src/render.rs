use spiral_core::{AnimationDriver, Camera, FieldConfig};
use spiral_render::LineRenderer;
use std::cell::RefCell;
use web_sys as web;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    lines: LineRenderer,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        field: &FieldConfig,
        driver: &RefCell<AnimationDriver>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let (adapter, device, queue) = spiral_render::request_device(&instance, &surface).await?;
        let config = spiral_render::surface_config(&surface, &adapter, width, height);
        surface.configure(&device, &config);

        let aspect = config.width as f32 / config.height as f32;
        // not held across an await
        let lines = LineRenderer::new(
            &device,
            config.format,
            &driver.borrow(),
            field.companion.as_ref(),
            Camera::looking_at_origin(field.camera_z, aspect),
            field.background,
        );
        log::info!(
            "[gpu] surface {}x{} format={:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            lines,
        })
    }

    /// Reconfigure when the canvas backing store changed size.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.lines.set_viewport(width, height);
    }

    pub fn render(&mut self, driver: &mut AnimationDriver) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.lines.sync(&self.queue, driver);
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.lines.draw(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
