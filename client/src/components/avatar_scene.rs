//! Decorative 3D avatar backdrop.
//!
//! Hosts the `scene` crate: mounts a [`scene::engine::Scene`] on the canvas,
//! keeps its viewport in sync with the container, fetches the avatar model,
//! and drives the animation frame loop until the component unmounts.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use scene::camera::Point;
#[cfg(feature = "hydrate")]
use scene::engine::Scene;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Where the avatar model is served from.
pub const MODEL_URL: &str = "/assets/tv_man.glb";

#[cfg(feature = "hydrate")]
type SceneSlot = Rc<RefCell<Option<Scene>>>;

#[cfg(feature = "hydrate")]
fn sync_viewport(scene: &mut Scene, canvas: &web_sys::HtmlCanvasElement) {
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio().max(1.0));
    scene.set_viewport(width, height, dpr);
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Run one frame per animation tick until `alive` goes false or the scene
/// fails to draw. Dropping the scene on exit releases the canvas context, and
/// dropping `resize` detaches the window listener.
#[cfg(feature = "hydrate")]
fn start_frame_loop(slot: SceneSlot, alive: RwSignal<bool>, resize: Option<ResizeWatch>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let mut resize = resize;
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !alive.try_get_untracked().unwrap_or(false) {
            resize.take();
            slot.borrow_mut().take();
            holder_for_cb.borrow_mut().take();
            return;
        }
        let drawn = slot.borrow_mut().as_mut().map_or(Ok(()), Scene::frame);
        if let Err(err) = drawn {
            leptos::logging::warn!("avatar scene stopped: {err:?}");
            resize.take();
            holder_for_cb.borrow_mut().take();
            return;
        }
        let scheduled = holder_for_cb
            .borrow()
            .as_ref()
            .map(|next| window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()));
        if let Some(Err(err)) = scheduled {
            leptos::logging::warn!("avatar scene could not schedule a frame: {err:?}");
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        leptos::logging::warn!("avatar scene could not start its frame loop");
    }
}

/// A window `resize` listener that is removed when dropped.
#[cfg(feature = "hydrate")]
struct ResizeWatch {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl Drop for ResizeWatch {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("avatar scene could not detach its resize listener");
        }
    }
}

#[cfg(feature = "hydrate")]
fn watch_resize(slot: SceneSlot, canvas: web_sys::HtmlCanvasElement) -> Option<ResizeWatch> {
    let window = web_sys::window()?;
    let callback = Closure::wrap(Box::new(move || {
        if let Some(scene) = slot.borrow_mut().as_mut() {
            sync_viewport(scene, &canvas);
        }
    }) as Box<dyn FnMut()>);
    if window
        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::warn!("avatar scene could not watch window resizes");
        return None;
    }
    Some(ResizeWatch { window, callback })
}

#[cfg(feature = "hydrate")]
async fn fetch_model() -> Result<Vec<u8>, gloo_net::Error> {
    let resp = gloo_net::http::Request::get(MODEL_URL).send().await?;
    if !resp.ok() {
        return Err(gloo_net::Error::GlooError(format!("model fetch returned HTTP {}", resp.status())));
    }
    resp.binary().await
}

#[cfg(feature = "hydrate")]
fn load_model(slot: SceneSlot, load_error: RwSignal<Option<String>>) {
    leptos::task::spawn_local(async move {
        let fetched = fetch_model().await;
        let mut guard = slot.borrow_mut();
        let Some(scene) = guard.as_mut() else {
            return;
        };
        let outcome = match fetched {
            Ok(bytes) => scene.load_model(&bytes).map_err(|e| e.to_string()),
            Err(e) => {
                scene.model_failed();
                Err(e.to_string())
            }
        };
        if let Err(err) = outcome {
            leptos::logging::warn!("avatar model unavailable: {err}");
            let message = scene.load_error().map(str::to_owned);
            load_error.try_set(message);
        }
    });
}

#[component]
pub fn AvatarScene() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let load_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let slot: SceneSlot = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let alive = RwSignal::new(true);
        on_cleanup(move || {
            alive.try_set(false);
        });

        let slot = Rc::clone(&slot);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if slot.borrow().is_some() {
                return;
            }
            let mut instance = match Scene::new(canvas.clone(), js_sys::Math::random) {
                Ok(instance) => instance,
                Err(err) => {
                    leptos::logging::warn!("avatar scene unavailable: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut instance, &canvas);
            *slot.borrow_mut() = Some(instance);

            let resize = watch_resize(Rc::clone(&slot), canvas);
            load_model(Rc::clone(&slot), load_error);
            start_frame_loop(Rc::clone(&slot), alive, resize);
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let slot = Rc::clone(&slot);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if canvas.set_pointer_capture(ev.pointer_id()).is_err() {
                        leptos::logging::log!("pointer capture refused");
                    }
                }
                if let Some(scene) = slot.borrow_mut().as_mut() {
                    scene.on_pointer_down(pointer_point(&ev));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let slot = Rc::clone(&slot);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(scene) = slot.borrow_mut().as_mut() {
                    scene.on_pointer_move(pointer_point(&ev));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Shared by pointerup and pointerleave.
    let on_pointer_end = {
        #[cfg(feature = "hydrate")]
        {
            let slot = Rc::clone(&slot);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(scene) = slot.borrow_mut().as_mut() {
                    scene.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            let slot = Rc::clone(&slot);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                if let Some(scene) = slot.borrow_mut().as_mut() {
                    scene.on_wheel(ev.delta_y());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <div class="avatar-scene" aria-hidden="true">
            <canvas
                class="avatar-scene__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end.clone()
                on:pointerleave=on_pointer_end
                on:wheel=on_wheel
            ></canvas>
            <Show when=move || load_error.with(Option::is_some)>
                <p class="avatar-scene__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
