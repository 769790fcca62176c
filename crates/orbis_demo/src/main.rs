//! Sphere demo: draws a UV sphere or an icosphere with a toggleable
//! solid/wireframe overlay.
//!
//! Controls:
//! - `Tab`         — switch between UV sphere and icosphere
//! - `Space`       — cycle solid / wireframe / solid + wireframe
//! - `Up` / `Down` — icosphere subdivision depth
//! - `Left`/`Right`— UV sphere grid resolution
//! - `Escape`      — quit
//!
//! Drag with the left mouse button to orbit, scroll to zoom.  The current
//! mesh and draw mode are shown in the window title.

use orbis_app::{App, AppContext, KeyCode, OrbisApp};
use orbis_mesh::{icosphere, uv_sphere, MeshError};
use orbis_renderer::glam::Mat4;
use orbis_renderer::{DrawMode, RenderObject, Renderer};

const RADIUS: f32 = 1.0;
const UV_PRESETS: [(u32, u32); 4] = [(8, 12), (16, 24), (24, 48), (48, 96)];
const MAX_SUBDIVISIONS: u32 = 5;

const UV_COLOR: [f32; 4] = [0.91, 0.55, 0.25, 1.0];
const ICO_COLOR: [f32; 4] = [0.27, 0.67, 0.71, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SphereKind {
    Uv,
    Ico,
}

struct SphereDemo {
    kind: SphereKind,
    mode: DrawMode,
    uv_preset: usize,
    subdivisions: u32,
    spin: f32,
    uv_object: Option<RenderObject>,
    ico_object: Option<RenderObject>,
}

impl SphereDemo {
    fn new() -> Self {
        Self {
            kind: SphereKind::Ico,
            mode: DrawMode::SolidWireframe,
            uv_preset: 2,
            subdivisions: 3,
            spin: 0.0,
            uv_object: None,
            ico_object: None,
        }
    }

    fn spin_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }

    fn rebuild_uv(&mut self, renderer: &Renderer) -> Result<(), MeshError> {
        let (stacks, sectors) = UV_PRESETS[self.uv_preset];
        let mesh = uv_sphere(RADIUS, stacks, sectors)?;
        log::info!(
            "UV sphere {stacks}x{sectors}: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.uv_object =
            Some(renderer.create_object("UV Sphere", &mesh, self.spin_transform(), UV_COLOR));
        Ok(())
    }

    fn rebuild_ico(&mut self, renderer: &Renderer) -> Result<(), MeshError> {
        let mesh = icosphere(RADIUS, self.subdivisions)?;
        log::info!(
            "icosphere at depth {}: {} vertices, {} triangles",
            self.subdivisions,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.ico_object =
            Some(renderer.create_object("Icosphere", &mesh, self.spin_transform(), ICO_COLOR));
        Ok(())
    }

    fn active_object(&self) -> Option<&RenderObject> {
        match self.kind {
            SphereKind::Uv => self.uv_object.as_ref(),
            SphereKind::Ico => self.ico_object.as_ref(),
        }
    }

    fn title(&self) -> String {
        let shape = match self.kind {
            SphereKind::Uv => {
                let (stacks, sectors) = UV_PRESETS[self.uv_preset];
                format!("UV sphere {stacks}x{sectors}")
            }
            SphereKind::Ico => {
                let faces = 20 * 4_u32.pow(self.subdivisions);
                format!("icosphere depth {} ({faces} faces)", self.subdivisions)
            }
        };
        format!("orbis — {shape} | {}", self.mode.label())
    }
}

impl OrbisApp for SphereDemo {
    fn setup(&mut self, ctx: &mut AppContext, renderer: &mut Renderer) {
        renderer.orbit.distance = 3.2;
        renderer.orbit.yaw = 0.5;
        renderer.orbit.pitch = 0.3;
        renderer.orbit.apply(&mut renderer.camera);

        if let Err(err) = self
            .rebuild_uv(renderer)
            .and_then(|_| self.rebuild_ico(renderer))
        {
            log::error!("mesh generation failed: {err}");
            ctx.request_exit();
            return;
        }

        ctx.window.set_title(&self.title());
    }

    fn update(&mut self, dt: f32, _ctx: &mut AppContext, renderer: &mut Renderer) {
        self.spin += dt * 0.4;
        let transform = self.spin_transform();
        let queue = &renderer.context.queue;
        if let Some(obj) = self.uv_object.as_mut() {
            obj.set_transform(queue, transform);
        }
        if let Some(obj) = self.ico_object.as_mut() {
            obj.set_transform(queue, transform);
        }
    }

    fn on_key(&mut self, key: KeyCode, ctx: &mut AppContext, renderer: &mut Renderer) {
        let result = match key {
            KeyCode::Escape => {
                ctx.request_exit();
                return;
            }
            KeyCode::Tab => {
                self.kind = match self.kind {
                    SphereKind::Uv => SphereKind::Ico,
                    SphereKind::Ico => SphereKind::Uv,
                };
                Ok(())
            }
            KeyCode::Space => {
                self.mode = self.mode.cycled();
                Ok(())
            }
            KeyCode::ArrowUp if self.subdivisions < MAX_SUBDIVISIONS => {
                self.subdivisions += 1;
                self.rebuild_ico(renderer)
            }
            KeyCode::ArrowDown if self.subdivisions > 0 => {
                self.subdivisions -= 1;
                self.rebuild_ico(renderer)
            }
            KeyCode::ArrowRight if self.uv_preset + 1 < UV_PRESETS.len() => {
                self.uv_preset += 1;
                self.rebuild_uv(renderer)
            }
            KeyCode::ArrowLeft if self.uv_preset > 0 => {
                self.uv_preset -= 1;
                self.rebuild_uv(renderer)
            }
            _ => return,
        };

        if let Err(err) = result {
            log::error!("mesh generation failed: {err}");
            return;
        }

        ctx.window.set_title(&self.title());
    }

    fn render(
        &mut self,
        renderer: &mut Renderer,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
    ) {
        let objects: Vec<&RenderObject> = self.active_object().into_iter().collect();
        renderer.render(encoder, surface_view, &objects, self.mode);
    }
}

fn init_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("orbis_demo", log::LevelFilter::Info)
        .level_for("orbis_renderer", log::LevelFilter::Info)
        .level_for("orbis_assets", log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    App::new(SphereDemo::new())
        .with_title("orbis sphere demo")
        .with_size(1280, 720)
        .run()
}
