//! Application shell: windowing, GPU setup and the frame loop.

use std::sync::Arc;

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use rui_core::{InputState, KeyEvent, PointerEvent};
use rui_render::{RenderContext, RenderResult, RendererError, Theme, VelloPainter};
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::demo::Demo;
use crate::input_map::{map_key, map_mouse_button, printable_text, wheel_lines};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_theme(Theme::default())
    }
}

impl AppConfig {
    /// Default window settings with `theme`, clearing to its background.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            title: "RUI".to_string(),
            width: 800,
            height: 600,
            background_color: theme.background,
            theme,
        }
    }

    /// Pick the palette from `RUI_THEME` (`dark` or anything else for light).
    pub fn from_env() -> Self {
        match std::env::var("RUI_THEME").as_deref() {
            Ok("dark") => Self::with_theme(Theme::dark()),
            _ => Self::default(),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    painter: VelloPainter,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // State
    demo: Demo,
    input: InputState,
    config: AppConfig,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application.
    pub async fn run(config: AppConfig) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    fn init_state(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<AppState> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        log::info!("Window created, initializing renderer...");

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        // Vello renders to Rgba8Unorm; the surface is often Bgra8Unorm.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        log::info!("RUI initialized - {}x{}", surface.config.width, surface.config.height);

        Ok(AppState {
            window,
            surface,
            vello_renderer,
            painter: VelloPainter::new(),
            texture_blitter,
            demo: Demo::new(),
            input: InputState::new(),
            config: self.config.clone(),
        })
    }
}

impl AppState {
    /// Pointer position in logical coordinates.
    fn logical(&self, x: f64, y: f64) -> Point {
        let scale = self.window.scale_factor();
        Point::new(x / scale, y / scale)
    }

    fn render_context(&self) -> RenderContext {
        RenderContext::new(Size::new(
            f64::from(self.surface.config.width),
            f64::from(self.surface.config.height),
        ))
        .with_scale_factor(self.window.scale_factor())
        .with_background(self.config.background_color)
    }

    /// One update pass and one render pass.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> RenderResult<()> {
        let ctx = self.render_context();

        self.demo.frame(&self.input);
        self.demo.render(&mut self.painter, &self.config.theme);

        // Widgets are laid out in logical pixels.
        let mut scene = Scene::new();
        scene.append(&self.painter.take_scene(), Some(ctx.transform()));

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(format!("{e:?}")))?;

        let (width, height) = ctx.target_size();

        let params = RenderParams {
            base_color: ctx.background_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a storage-bindable Rgba8Unorm target.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let mut blit_encoder =
            device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("blit encoder"),
            });
        self.texture_blitter
            .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(blit_encoder.finish()));

        surface_texture.present();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.init_state(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = state.logical(position.x, position.y);
                state
                    .input
                    .handle_pointer_event(PointerEvent::Move { position });
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                let Some(button) = map_mouse_button(button) else {
                    return;
                };
                let position = state.input.pointer_position;
                let event = match button_state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                };
                state.input.handle_pointer_event(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let position = state.input.pointer_position;
                state.input.handle_pointer_event(PointerEvent::Scroll {
                    position,
                    delta: Vec2::new(0.0, wheel_lines(delta)),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let Some(key) = map_key(&event.logical_key) {
                    state.input.handle_key_event(KeyEvent::Pressed(key));
                }
                if let Some(text) = &event.text {
                    let text = printable_text(text);
                    if !text.is_empty() {
                        state.input.handle_key_event(KeyEvent::Text(text));
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                match state.redraw(render_cx) {
                    Ok(()) => {}
                    Err(e @ RendererError::Surface(_)) => log::warn!("Skipping frame: {e}"),
                    Err(e) => log::error!("{e}"),
                }
                state.input.begin_frame();
                state.window.request_redraw();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_drives_clear_color() {
        let config = AppConfig::with_theme(Theme::dark());
        assert_eq!(config.theme, Theme::dark());
        assert_eq!(config.background_color, Theme::dark().background);
        assert_eq!(AppConfig::default().background_color, Theme::default().background);
    }
}
