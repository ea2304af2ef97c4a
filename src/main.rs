use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use hover_scene::cli::Cli;
use hover_scene::frame::FpsCounter;
use hover_scene::render::Renderer;
use hover_scene::viewport::Viewport;
use hover_scene::{create_default_scene, SceneContext};

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    context: Option<SceneContext>,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            context: None,
            fps: FpsCounter::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(context)) = (&mut self.renderer, &mut self.context) else {
            return;
        };

        match context.advance_frame(|| renderer.acquire_frame()) {
            Ok(output) => {
                renderer.render(output, context.scene(), context.camera());
                if let Some(fps) = self.fps.tick() {
                    log::debug!("{:.1} FPS", fps);
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout, skipping frame"),
            Err(e) => {
                log::error!("Render error: {}", e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.cli.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height))
                .with_resizable(false),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let viewport = Viewport::from(window.inner_size());
        let context = SceneContext::new(
            create_default_scene(),
            viewport,
            self.cli.picking.intersector(),
        );

        let renderer = match pollster::block_on(Renderer::new(window.clone(), context.scene())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "Scene ready: {} cubes, {} picking",
            context.scene().cubes().len(),
            context.intersector_name()
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.context = Some(context);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(context) = &mut self.context {
                    for hover in context.on_pointer_move(position.x as f32, position.y as f32) {
                        log::info!("{}", hover);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!(
        "Hover Scene {}x{} - move the pointer over a cube, Escape to quit",
        cli.width,
        cli.height
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
