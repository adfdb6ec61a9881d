use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::input;
use crate::render;
use instant::Instant;
use spiral_core::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FrameStats {
    window_start: Instant,
    frames: u32,
}

pub struct FrameContext {
    pub driver: Rc<RefCell<AnimationDriver>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(
        driver: Rc<RefCell<AnimationDriver>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState>,
    ) -> Self {
        Self {
            driver,
            canvas,
            gpu,
            stats: FrameStats {
                window_start: Instant::now(),
                frames: 0,
            },
        }
    }

    /// One animation frame: advance the driver once, then draw.
    pub fn frame(&mut self) {
        let mut driver = self.driver.borrow_mut();
        driver.tick();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&mut driver) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        drop(driver);
        self.log_stats();
    }

    fn log_stats(&mut self) {
        self.stats.frames += 1;
        let elapsed = self.stats.window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_LOG_INTERVAL_SEC {
            let driver = self.driver.borrow();
            log::debug!(
                "[frame] fps={:.1} a={:.4} running={}",
                input::frames_per_second(self.stats.frames, elapsed),
                driver.a(),
                driver.is_running()
            );
            self.stats.window_start = Instant::now();
            self.stats.frames = 0;
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
