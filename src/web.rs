// web.rs - Browser host
//
// Owns everything the core refuses to: the <canvas> element, its 2D
// context and the requestAnimationFrame callback. JS event handlers call
// straight into `CanvasApp`; the frame callback only holds a weak
// reference, so once the app is dropped a late frame finds nothing to tick.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, Window};

use crate::canvas::{ParticleCanvas, encode_png};
use crate::config::Configuration;
use crate::error::{CanvasError, CanvasResult};
use crate::render::Raster;
use crate::scheduler::FrameSource;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame as a frame source
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameSource for AnimationFrames {
    type Handle = i32;

    fn request(&mut self) -> CanvasResult<i32> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| CanvasError::FrameRequest("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| CanvasError::FrameRequest(format!("{e:?}")))
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            warn!(handle, error = ?e, "cancelAnimationFrame failed");
        }
    }
}

struct Host {
    canvas: ParticleCanvas<AnimationFrames>,
    element: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
}

impl Host {
    fn frame(&mut self) {
        let context = self.context.as_ref();
        if let Err(err) = self.canvas.on_frame_with(|raster| present(context, raster)) {
            warn!(%err, "frame loop halted");
        }
    }
}

fn present(context: Option<&CanvasRenderingContext2d>, raster: &Raster) -> CanvasResult<()> {
    let unavailable = |_| CanvasError::SurfaceUnavailable {
        width: raster.width(),
        height: raster.height(),
    };
    let context = context.ok_or(()).map_err(unavailable)?;

    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(raster.pixels()), raster.width(), raster.height())
        .map_err(|_| unavailable(()))?;
    context.put_image_data(&image, 0.0, 0.0).map_err(|_| unavailable(()))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Particle canvas bound to a <canvas> element
#[wasm_bindgen]
pub struct CanvasApp {
    host: Rc<RefCell<Host>>,
    callback: FrameCallback,
}

#[wasm_bindgen]
impl CanvasApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CanvasApp, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
        let element: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas '{}' not found", canvas_id)))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

        let context = element
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let source = AnimationFrames { window, callback: callback.clone() };
        let canvas = ParticleCanvas::new(element.width(), element.height(), source);
        let host = Rc::new(RefCell::new(Host { canvas, element, context }));

        let weak: Weak<RefCell<Host>> = Rc::downgrade(&host);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(host) = weak.upgrade() {
                host.borrow_mut().frame();
            }
        }) as Box<dyn FnMut(f64)>));

        Ok(Self { host, callback })
    }

    /// Apply a JSON settings object; unknown keys are ignored
    pub fn configure(&self, json: &str) -> Result<(), JsValue> {
        let config = Configuration::from_json(json).map_err(js_error)?;
        self.host.borrow_mut().canvas.configure(config);
        Ok(())
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.host.borrow().canvas.config().to_json().map_err(js_error)
    }

    pub fn resize(&self, w: u32, h: u32) {
        let mut host = self.host.borrow_mut();
        host.element.set_width(w);
        host.element.set_height(h);
        host.canvas.resize(w, h);
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.host.borrow_mut().canvas.pointer_move(x, y);
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        self.host.borrow_mut().canvas.pointer_down(x, y);
    }

    pub fn pointer_up(&self) {
        self.host.borrow_mut().canvas.pointer_up();
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.host.borrow_mut().canvas.start().map_err(js_error)
    }

    pub fn stop(&self) {
        self.host.borrow_mut().canvas.stop();
    }

    pub fn reset(&self) {
        self.host.borrow_mut().canvas.reset();
    }

    pub fn is_running(&self) -> bool {
        self.host.borrow().canvas.is_running()
    }

    /// Current frame as PNG bytes
    pub fn snapshot_png(&self) -> Result<Vec<u8>, JsValue> {
        let host = self.host.borrow();
        let frame = host.canvas.snapshot_frame().map_err(js_error)?;
        encode_png(&frame).map_err(js_error)
    }

    // Raw RGBA access for hosts that blit the buffer themselves
    pub fn frame_ptr(&self) -> *const u8 { self.host.borrow().canvas.raster().ptr() }
    pub fn frame_len(&self) -> usize { self.host.borrow().canvas.raster().len() }
    pub fn width(&self) -> u32 { self.host.borrow().canvas.raster().width() }
    pub fn height(&self) -> u32 { self.host.borrow().canvas.raster().height() }
}

impl Drop for CanvasApp {
    fn drop(&mut self) {
        if let Ok(mut host) = self.host.try_borrow_mut() {
            host.canvas.stop();
        }
        self.callback.borrow_mut().take();
    }
}

/// Route Rust panics to the browser console
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
