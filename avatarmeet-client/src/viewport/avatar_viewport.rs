/*
 * Copyright 2025 AvatarMeet Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! The avatar viewport: a three-d scene rendered into a caller-owned
//! canvas, with asset load-and-fit and deterministic teardown.
//!
//! GPU resources are not garbage collected, so every allocation made on
//! mount or asset load has a matching release on replacement or unmount.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use three_d::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use super::frame_loop::FrameLoop;
use super::generation::AssetGeneration;
use super::normalize::fit_to_stage;
use super::ViewportError;
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, IDLE_SPIN_PER_FRAME,
};

/// Backing-store resolution is capped at 2x CSS pixels, matching what the
/// scene needs visually without burning fill rate on high-DPI screens.
const MAX_PIXEL_RATIO: f64 = 2.0;

struct LoadedAsset {
    parts: Model<PhysicalMaterial>,
    /// Node transforms as loaded, composed under the fit each frame.
    base_transforms: Vec<Mat4>,
    /// Center-at-origin and scale-to-fit, from [`fit_to_stage`].
    fit: Mat4,
    /// Ground-plane placement applied outside the idle rotation.
    place: Mat4,
    spin: f32,
}

struct SceneState {
    context: Context,
    camera: Camera,
    ambient: AmbientLight,
    directional: DirectionalLight,
    ground: Gm<Mesh, ColorMaterial>,
    asset: Option<LoadedAsset>,
    width: u32,
    height: u32,
}

/// One 3D rendering surface: scene, camera, lights, render loop.
///
/// The viewport owns its scene exclusively. `unmount()` (or drop) cancels
/// the frame loop, stops resize observation, and releases the scene; a
/// `set_asset` load still in flight at that point is discarded when it
/// resolves.
pub struct AvatarViewport {
    /// `None` after `unmount()`: the scene and its GPU resources are
    /// released as soon as the loops holding references are cancelled.
    inner: Option<Rc<RefCell<SceneState>>>,
    canvas: HtmlCanvasElement,
    /// Every `set_asset` takes a ticket; unmount invalidates. A finished
    /// load only attaches while its ticket is still current.
    generation: Rc<AssetGeneration>,
    render_loop: Option<FrameLoop>,
    resize_observer: Option<web_sys::ResizeObserver>,
    _resize_callback: Option<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array)>>,
    on_asset_error: Rc<dyn Fn(ViewportError)>,
}

impl AvatarViewport {
    /// Build the scene into `canvas` and start the render loop.
    ///
    /// Returns [`ViewportError::NotAttached`] if the canvas is not in the
    /// document, and [`ViewportError::Context`] if WebGL2 is unavailable;
    /// callers treat both as a no-op rather than a crash.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<Self, ViewportError> {
        if !canvas.is_connected() {
            return Err(ViewportError::NotAttached);
        }

        let gl = canvas
            .get_context("webgl2")
            .map_err(|e| ViewportError::Context(format!("{e:?}")))?
            .ok_or_else(|| ViewportError::Context("WebGL2 is not supported".to_string()))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| ViewportError::Context("unexpected context type".to_string()))?;
        let context = Context::from_gl_context(Arc::new(context::Context::from_webgl2_context(gl)))
            .map_err(|e| ViewportError::Context(e.to_string()))?;

        let (width, height) = backing_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let camera = Camera::new_perspective(
            Viewport::new_at_origo(width, height),
            vec3(0.0, 1.4, 3.2),
            vec3(0.0, 0.2, 0.0),
            vec3(0.0, 1.0, 0.0),
            degrees(CAMERA_FOV_DEGREES),
            CAMERA_NEAR,
            CAMERA_FAR,
        );

        let ambient = AmbientLight::new(&context, 0.7, Srgba::WHITE);
        let directional = DirectionalLight::new(&context, 1.2, Srgba::WHITE, vec3(-2.0, -4.0, -2.0));

        // Subtle translucent disc so the avatar reads as standing on
        // something rather than floating.
        let mut ground = Gm::new(
            Mesh::new(&context, &CpuMesh::circle(48)),
            ColorMaterial {
                color: Srgba::new(255, 255, 255, 20),
                is_transparent: true,
                render_states: RenderStates {
                    blend: Blend::TRANSPARENCY,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        ground.set_transformation(
            Mat4::from_translation(vec3(0.0, -0.9, 0.0))
                * Mat4::from_angle_x(degrees(-90.0))
                * Mat4::from_scale(3.0),
        );

        let inner = Rc::new(RefCell::new(SceneState {
            context,
            camera,
            ambient,
            directional,
            ground,
            asset: None,
            width,
            height,
        }));

        let render_loop = {
            let inner = Rc::clone(&inner);
            FrameLoop::start(move || render_tick(&inner))
        };

        let mut viewport = Self {
            inner: Some(inner),
            canvas,
            generation: Rc::new(AssetGeneration::new()),
            render_loop: Some(render_loop),
            resize_observer: None,
            _resize_callback: None,
            on_asset_error: Rc::new(|_| {}),
        };
        viewport.observe_resize();
        Ok(viewport)
    }

    /// Set the callback invoked when an asset load fails. The viewport
    /// keeps its previous state on failure; this is purely informational.
    pub fn set_on_asset_error(&mut self, callback: Rc<dyn Fn(ViewportError)>) {
        self.on_asset_error = callback;
    }

    /// Asynchronously load a glTF asset from `url`, fit it to the stage,
    /// and swap it in for the current one.
    ///
    /// Calling again before the previous load resolves supersedes it: the
    /// late result is dropped without ever attaching to the scene. The
    /// same applies to a load that resolves after `unmount()`.
    pub fn set_asset(&mut self, url: &str) {
        let Some(inner) = &self.inner else {
            return;
        };
        let ticket = self.generation.begin();

        let url = url.to_string();
        let inner = Rc::clone(inner);
        let generation = Rc::clone(&self.generation);
        let on_error = Rc::clone(&self.on_asset_error);
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_asset(&inner, &url, &generation, ticket).await;
            if let Err(e) = result {
                log::error!("avatar asset load failed for {url}: {e}");
                // Only the holder of the current ticket reports; a
                // superseded load stays silent.
                if generation.is_current(ticket) {
                    on_error(e);
                }
            }
        });
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Tear the viewport down: cancel the frame loop, stop resize
    /// observation, release the scene. Safe to call repeatedly, and safe
    /// while a `set_asset` load is still in flight.
    pub fn unmount(&mut self) {
        self.generation.invalidate();
        if let Some(render_loop) = self.render_loop.take() {
            render_loop.cancel();
        }
        if let Some(observer) = self.resize_observer.take() {
            observer.disconnect();
        }
        self._resize_callback = None;
        // The cancelled closures held the other references to the scene;
        // dropping ours releases the asset, the lights, the ground and the
        // GL context. The canvas element itself belongs to the UI.
        self.inner = None;
    }

    /// Continuously match the drawing-buffer size and camera aspect to the
    /// canvas's layout size. A `ResizeObserver` (not a window event) so
    /// flex/grid reflows are caught too.
    fn observe_resize(&mut self) {
        let Some(inner) = &self.inner else {
            return;
        };
        let inner = Rc::clone(inner);
        let canvas = self.canvas.clone();
        let callback = wasm_bindgen::closure::Closure::new(move |_entries: js_sys::Array| {
            let (width, height) = backing_size(&canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            let mut state = inner.borrow_mut();
            state.width = width;
            state.height = height;
            state.camera.set_viewport(Viewport::new_at_origo(width, height));
        });
        match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.canvas);
                self.resize_observer = Some(observer);
                self._resize_callback = Some(callback);
            }
            Err(e) => log::warn!("ResizeObserver unavailable: {e:?}"),
        }
    }
}

impl Drop for AvatarViewport {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Current layout size of the canvas in device pixels, never zero.
fn backing_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let ratio = gloo_utils::window()
        .device_pixel_ratio()
        .clamp(1.0, MAX_PIXEL_RATIO);
    let width = (canvas.client_width() as f64 * ratio).round() as u32;
    let height = (canvas.client_height() as f64 * ratio).round() as u32;
    (width.max(1), height.max(1))
}

/// One frame: advance the idle rotation and redraw. Runs with or without
/// an asset so the lit stage is visible while the avatar loads.
fn render_tick(inner: &Rc<RefCell<SceneState>>) {
    let mut state = inner.borrow_mut();
    let SceneState {
        context,
        camera,
        ambient,
        directional,
        ground,
        asset,
        width,
        height,
    } = &mut *state;

    if let Some(asset) = asset.as_mut() {
        asset.spin += IDLE_SPIN_PER_FRAME;
        let rotation = Mat4::from_angle_y(radians(asset.spin));
        for (part, base) in asset.parts.iter_mut().zip(&asset.base_transforms) {
            part.set_transformation(asset.place * rotation * asset.fit * *base);
        }
    }

    let lights: [&dyn Light; 2] = [&*ambient, &*directional];
    let target = RenderTarget::screen(context, *width, *height);
    target
        .clear(ClearState::color_and_depth(0.0, 0.0, 0.0, 0.0, 1.0))
        .render(camera, &[&*ground], &lights);
    if let Some(asset) = asset.as_ref() {
        let parts: Vec<&Gm<Mesh, PhysicalMaterial>> = asset.parts.iter().collect();
        target.render(camera, &parts, &lights);
    }
}

async fn load_asset(
    inner: &Rc<RefCell<SceneState>>,
    url: &str,
    generation: &AssetGeneration,
    ticket: u64,
) -> Result<(), ViewportError> {
    let mut raw = three_d_asset::io::load_async(&[url])
        .await
        .map_err(|e| ViewportError::AssetLoad(e.to_string()))?;
    let cpu_model: CpuModel = raw
        .deserialize(url)
        .map_err(|e| ViewportError::AssetLoad(e.to_string()))?;

    // The viewport may have been torn down or the load superseded while
    // the download was in flight.
    if !generation.is_current(ticket) {
        log::debug!("discarding superseded asset load for {url}");
        return Ok(());
    }

    let mut state = inner.borrow_mut();
    let parts = Model::<PhysicalMaterial>::new(&state.context, &cpu_model)
        .map_err(|e| ViewportError::AssetLoad(e.to_string()))?;
    if parts.is_empty() {
        return Err(ViewportError::AssetLoad(format!(
            "{url} contains no renderable geometry"
        )));
    }

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for part in parts.iter() {
        let aabb = part.aabb();
        let (lo, hi) = (aabb.min(), aabb.max());
        min = [min[0].min(lo.x), min[1].min(lo.y), min[2].min(lo.z)];
        max = [max[0].max(hi.x), max[1].max(hi.y), max[2].max(hi.z)];
    }
    let fit = fit_to_stage(min, max);

    let base_transforms: Vec<Mat4> = parts.iter().map(|p| p.transformation()).collect();
    // Replacement is atomic from the scene's point of view: the previous
    // asset is dropped here, before the new parts are attached.
    state.asset = Some(LoadedAsset {
        parts,
        base_transforms,
        fit: Mat4::from_scale(fit.scale)
            * Mat4::from_translation(vec3(-fit.center[0], -fit.center[1], -fit.center[2])),
        place: Mat4::from_translation(vec3(0.0, fit.y_offset, 0.0)),
        spin: 0.0,
    });
    Ok(())
}
