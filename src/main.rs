//! Gravity Sandbox entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use gravity_sandbox::platform::{Margins, layout};
    use gravity_sandbox::renderer::{MeshSurface, RenderState};
    use gravity_sandbox::{Sandbox, Settings};

    /// Everything the page callbacks share
    struct App {
        sandbox: Sandbox,
        mesh: MeshSurface,
        render_state: Option<RenderState>,
        margins: Margins,
    }

    impl App {
        fn new(settings: &Settings, seed: u64) -> Self {
            Self {
                sandbox: Sandbox::new(settings, seed),
                mesh: MeshSurface::new(settings.circle_segments),
                render_state: None,
                margins: settings.layout,
            }
        }

        /// Step, tessellate and present one frame
        fn frame(&mut self) {
            self.sandbox.frame(&mut self.mesh);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.mesh) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (w, h) = render_state.size;
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Keep the pointer mapping in sync with where the canvas sits
        fn sync_canvas_origin(&mut self, canvas: &HtmlCanvasElement) {
            let rect = canvas.get_bounding_client_rect();
            self.sandbox.pointer.set_origin(rect.left(), rect.top());
        }
    }

    /// Size the canvas to the page body minus the margins
    fn fit_canvas(canvas: &HtmlCanvasElement, margins: Margins) -> (u32, u32) {
        let (client_w, client_h) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| (b.client_width().max(0) as u32, b.client_height().max(0) as u32))
            .unwrap_or((800, 600));

        let (width, height) = layout(client_w, client_h, margins);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Gravity Sandbox starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"canvas\"> element found");
            return;
        };

        let settings = Settings::load();
        settings.save();

        let (width, height) = fit_canvas(&canvas, settings.layout);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(&settings, seed)));
        app.borrow_mut().sync_canvas_origin(&canvas);

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(&canvas, app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Gravity Sandbox running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - track continuously, resize/aim while a gesture is live
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.sync_canvas_origin(&canvas_clone);
                a.sandbox
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - start sizing a new body
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                a.sync_canvas_origin(&canvas_clone);
                a.sandbox
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
                a.sandbox.pointer_pressed();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - fix the radius, or launch
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().sandbox.pointer_released();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == " " {
                    event.prevent_default();
                    let mut a = app.borrow_mut();
                    if a.sandbox.toggle_pause() {
                        log::info!("Paused: {}", a.sandbox.simulation.is_paused());
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            let (w, h) = fit_canvas(&canvas, a.margins);
            a.sync_canvas_origin(&canvas);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(w, h);
            }
            log::debug!("Canvas resized to {}x{}", w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();

        // Re-register for the next frame
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

/// Frames simulated by the native headless run (10 s at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gravity_sandbox::renderer::MeshSurface;
    use gravity_sandbox::{Sandbox, Settings};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Gravity Sandbox (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the interactive web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load_from(path.as_deref());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut sandbox = Sandbox::new(&settings, seed);
    let mut mesh = MeshSurface::new(settings.circle_segments);

    scripted_launch(&mut sandbox);

    for frame in 0..HEADLESS_FRAMES {
        sandbox.frame(&mut mesh);
        if frame % 60 == 0 {
            log::debug!(
                "frame {}: {} bodies, {} vertices",
                frame,
                sandbox.simulation.bodies().len(),
                mesh.vertices().len()
            );
        }
    }

    println!(
        "After {} frames ({} steps):",
        HEADLESS_FRAMES,
        sandbox.simulation.ticks()
    );
    for (i, body) in sandbox.simulation.bodies().iter().enumerate() {
        println!("  #{} {}", i, body);
    }
}

/// Place one body the way a user would: press, drag to size, release,
/// drag to aim, release
#[cfg(not(target_arch = "wasm32"))]
fn scripted_launch(sandbox: &mut gravity_sandbox::Sandbox) {
    sandbox.pointer_moved(500.0, 300.0);
    sandbox.pointer_pressed();
    sandbox.pointer_moved(520.0, 300.0);
    sandbox.pointer_released();
    sandbox.pointer_moved(500.0, 250.0);
    sandbox.pointer_released();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
