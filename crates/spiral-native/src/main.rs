use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use spiral_core::{AnimationDriver, Camera, FieldConfig, FieldPreset};
use spiral_render::LineRenderer;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    lines: LineRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        field: &FieldConfig,
        driver: &AnimationDriver,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let (adapter, device, queue) = spiral_render::request_device(&instance, &surface).await?;
        let config = spiral_render::surface_config(&surface, &adapter, size.width, size.height);
        surface.configure(&device, &config);

        let aspect = config.width as f32 / config.height as f32;
        let lines = LineRenderer::new(
            &device,
            config.format,
            driver,
            field.companion.as_ref(),
            Camera::looking_at_origin(field.camera_z, aspect),
            field.background,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            lines,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.lines.set_viewport(new_size.width, new_size.height);
    }

    fn render(&mut self, driver: &mut AnimationDriver) -> Result<(), wgpu::SurfaceError> {
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
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // optional first argument names a preset: oscillating | scaled | static
    let preset = std::env::args()
        .nth(1)
        .map(|name| name.parse::<FieldPreset>())
        .transpose()?
        .unwrap_or_default();
    log::info!("spiral-native starting with preset {preset}");
    let field = FieldConfig::preset(preset);
    let mut driver = field.build_driver()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Spiral Field (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &field, &driver))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                driver.toggle_running();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.logical_key == Key::Named(NamedKey::Space) =>
            {
                driver.toggle_running();
            }
            _ => {}
        },
        Event::AboutToWait => {
            driver.tick();
            match state.render(&mut driver) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
