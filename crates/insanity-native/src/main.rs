use std::time::Duration;

use glam::DVec3;
use instant::Instant;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use insanity_core::{
    action_for_key, fps_title, scene_points, CameraState, CircleInstance, DemoVariant,
    FpsCounter, Projector, ViewportConfig, DEMO_ENV_VAR, FRAME_INTERVAL_MS, KEY_ESCAPE,
    KEY_SPACE, WINDOW_TITLE,
};

mod render;
mod vertex;

use render::GpuState;

const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

#[cfg(feature = "static-demo")]
const DEFAULT_VARIANT: DemoVariant = DemoVariant::Static;
#[cfg(not(feature = "static-demo"))]
const DEFAULT_VARIANT: DemoVariant = DemoVariant::Interactive;

/// Everything the frame loop needs besides the GPU.
struct App {
    variant: DemoVariant,
    projector: Projector,
    camera: CameraState,
    scene: [DVec3; 8],
    fps: FpsCounter,
}

impl App {
    fn new(variant: DemoVariant) -> Self {
        Self {
            variant,
            projector: Projector::new(ViewportConfig::for_variant(variant)),
            camera: CameraState::default(),
            scene: scene_points(),
            fps: FpsCounter::new(Instant::now()),
        }
    }

    /// Fold a key press into the camera. Returns `true` when the app should exit.
    fn handle_key(&mut self, key: &Key) -> bool {
        let Some(action) = key_name(key)
            .and_then(action_for_key)
            .and_then(|action| self.variant.filter(action))
        else {
            return false;
        };
        if !action.is_camera_motion() {
            return true;
        }
        self.camera = self.camera.apply(action);
        log::debug!(
            "[camera] pos=({:.2},{:.2},{:.2}) pitch={:.1} yaw={:.1}",
            self.camera.position.x,
            self.camera.position.y,
            self.camera.position.z,
            self.camera.rotation.pitch,
            self.camera.rotation.yaw
        );
        false
    }

    fn circles(&mut self) -> Vec<CircleInstance> {
        self.camera = self.camera.normalized();
        self.projector
            .project_scene(&self.camera, &self.scene)
            .iter()
            .map(|sp| sp.instance())
            .collect()
    }

    fn frame_drawn(&mut self, window: &winit::window::Window) {
        if !self.variant.shows_fps() {
            return;
        }
        if let Some(fps) = self.fps.frame(Instant::now()) {
            log::info!("[fps] {fps:.2}");
            window.set_title(&fps_title(fps));
        }
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KEY_ESCAPE),
        Key::Named(NamedKey::Space) => Some(KEY_SPACE),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let override_value = std::env::var(DEMO_ENV_VAR).ok();
    let variant = DemoVariant::resolve(override_value.as_deref(), DEFAULT_VARIANT)?;
    let mut app = App::new(variant);
    log::info!(
        "[app] variant={} hfov={} vfov={}",
        variant,
        app.projector.config.horizontal_fov,
        app.projector.config.vertical_fov
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        // Redraw timer; re-armed every time it fires
        Event::NewEvents(StartCause::Init | StartCause::ResumeTimeReached { .. }) => {
            state.window.request_redraw();
            elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if app.handle_key(&logical_key) {
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let circles = app.circles();
                match state.render(&circles) {
                    Ok(()) => app.frame_drawn(state.window),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(err) => log::warn!("[gpu] frame skipped: {err}"),
                }
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}
