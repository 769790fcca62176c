//! winit event loop driving an [`OrbisApp`].

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::builder::AppConfig;
use crate::context::AppContext;
use crate::graphics::GraphicsState;
use crate::traits::OrbisApp;

struct Runner<A: OrbisApp> {
    app: A,
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    last_frame: Option<Instant>,
    /// Left mouse button held — cursor motion orbits the camera.
    orbit_drag: bool,
    cursor: Option<(f64, f64)>,
}

impl<A: OrbisApp> Runner<A> {
    fn new(app: A, config: AppConfig) -> Self {
        Self {
            app,
            config,
            window: None,
            graphics: None,
            last_frame: None,
            orbit_drag: false,
            cursor: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(window)) = (self.graphics.as_mut(), self.window.as_ref()) else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let mut ctx = AppContext::new(window);
        self.app.update(dt, &mut ctx, &mut gfx.renderer);
        if ctx.exit_requested {
            event_loop.exit();
            return;
        }

        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => return,
            Err(err) => {
                log::error!("surface error: {err}");
                event_loop.exit();
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx.renderer.begin_frame();
        self.app.render(&mut gfx.renderer, &mut encoder, &view);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl<A: OrbisApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Some platforms deliver resumed more than once; the window and GPU
        // state are built only for the first.
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_resizable(self.config.resizable)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
                return;
            }
        };

        let mut gfx = match pollster::block_on(GraphicsState::new(
            window.clone(),
            self.config.width,
            self.config.height,
            self.config.vsync,
            &self.config.shader_dir,
        )) {
            Ok(gfx) => gfx,
            Err(err) => {
                log::error!("graphics initialisation failed: {err:#}");
                event_loop.exit();
                return;
            }
        };

        let mut ctx = AppContext::new(&window);
        self.app.setup(&mut ctx, &mut gfx.renderer);
        if ctx.exit_requested {
            event_loop.exit();
            return;
        }

        self.window = Some(window);
        self.graphics = Some(gfx);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.graphics.as_mut() {
                    gfx.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let (Some(gfx), Some(window)) = (self.graphics.as_mut(), self.window.as_ref())
                else {
                    return;
                };
                let mut ctx = AppContext::new(window);
                self.app.on_key(code, &mut ctx, &mut gfx.renderer);
                if ctx.exit_requested {
                    event_loop.exit();
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.orbit_drag = state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } => {
                let previous = self.cursor.replace((position.x, position.y));
                if !self.orbit_drag {
                    return;
                }
                if let (Some((px, py)), Some(gfx)) = (previous, self.graphics.as_mut()) {
                    let dx = (position.x - px) as f32;
                    let dy = (position.y - py) as f32;
                    gfx.renderer.rotate_camera(dx, dy);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 40.0) as f32,
                };
                if let Some(gfx) = self.graphics.as_mut() {
                    gfx.renderer.zoom_camera(steps);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

pub(crate) fn run_internal<A: OrbisApp + 'static>(config: AppConfig, app: A) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    // Poll: render continuously rather than waiting for events.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = Runner::new(app, config);
    event_loop.run_app(&mut runner)?;
    Ok(())
}
