use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{DeviceMotionEvent, DeviceOrientationEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::app::use_session;
use super::readout_panel::ReadoutPanel;
use crate::model::{Acceleration, Rotation};
use crate::sensors::Listener;
use crate::state::{
    MotionReading, OrientationReading, ScreenState, TiltKey, debug_tilt, fallback_active,
    fallback_motion, indicator_offset, normalize_rotation, remap_acceleration,
};
use crate::util::{Debounce, clog, cwarn};

const INDICATOR_PX: f64 = 120.0;
const RESIZE_DEBOUNCE_MS: u32 = 150;

#[function_component(SensorView)]
pub fn sensor_view() -> Html {
    let ctx = use_session();
    let rotation = use_state(Rotation::default);
    let acceleration = use_state(Acceleration::default);
    let screen = use_state(ScreenState::query);
    // Listener closures outlive renders; they read the latest values from these.
    let rotation_ref = use_mut_ref(Rotation::default);
    let screen_ref = use_mut_ref(ScreenState::query);
    let orientation_seen = use_mut_ref(|| false);
    let motion_seen = use_mut_ref(|| false);
    let resize_debounce = use_mut_ref(Debounce::<Timeout>::default);

    let orientation_live = ctx.session.orientation.available;
    let motion_live = ctx.session.motion.available;
    let tilt_step = ctx.config.tilt_step;
    let sensitivity = ctx.config.motion_sensitivity;

    {
        let rotation = rotation.clone();
        let acceleration = acceleration.clone();
        let screen = screen.clone();
        let rotation_ref = rotation_ref.clone();
        let screen_ref = screen_ref.clone();
        let orientation_seen = orientation_seen.clone();
        let motion_seen = motion_seen.clone();
        let resize_debounce = resize_debounce.clone();
        use_effect_with(
            (orientation_live, motion_live, tilt_step, sensitivity),
            move |_| {
                let window = web_sys::window().expect("no global `window` exists");
                let mut listeners: Vec<Listener> = Vec::new();
                let mut attach = |res: crate::error::Result<Listener>| match res {
                    Ok(l) => listeners.push(l),
                    Err(e) => cwarn(&format!("sensor subscription failed: {e}")),
                };
                *orientation_seen.borrow_mut() = false;
                *motion_seen.borrow_mut() = false;

                // Rotation: the keyboard stays live until the sensor produces data
                if orientation_live {
                    let rotation = rotation.clone();
                    let screen = screen.clone();
                    let rotation_ref = rotation_ref.clone();
                    let screen_ref = screen_ref.clone();
                    let seen = orientation_seen.clone();
                    attach(Listener::new(
                        &window,
                        "deviceorientation",
                        move |e: DeviceOrientationEvent| {
                            let reading = OrientationReading::from(&e);
                            if !reading.has_data() {
                                return;
                            }
                            *seen.borrow_mut() = true;
                            let s = ScreenState::query();
                            let r = normalize_rotation(reading, s);
                            *rotation_ref.borrow_mut() = r;
                            rotation.set(r);
                            if screen_ref.borrow_mut().replace(s) {
                                screen.set(s);
                            }
                        },
                    ));
                }
                {
                    let rotation = rotation.clone();
                    let rotation_ref = rotation_ref.clone();
                    let seen = orientation_seen.clone();
                    attach(Listener::new(&window, "keydown", move |e: KeyboardEvent| {
                        if !fallback_active(orientation_live, *seen.borrow()) {
                            return;
                        }
                        let Some(key) = TiltKey::from_key(&e.key()) else {
                            return;
                        };
                        e.prevent_default();
                        let current = *rotation_ref.borrow();
                        let r = debug_tilt(current, key, e.ctrl_key(), tilt_step);
                        clog(&format!("debug tilt {:?} -> {:?}", key, r));
                        *rotation_ref.borrow_mut() = r;
                        rotation.set(r);
                    }));
                }

                // Acceleration: likewise for the mouse
                if motion_live {
                    let acceleration = acceleration.clone();
                    let seen = motion_seen.clone();
                    attach(Listener::new(
                        &window,
                        "devicemotion",
                        move |e: DeviceMotionEvent| {
                            let s = ScreenState::query();
                            if let Some(a) = remap_acceleration(MotionReading::from_event(&e), s.mode) {
                                *seen.borrow_mut() = true;
                                acceleration.set(a);
                            }
                        },
                    ));
                }
                {
                    let acceleration = acceleration.clone();
                    let seen = motion_seen.clone();
                    attach(Listener::new(&window, "mousemove", move |e: MouseEvent| {
                        if !fallback_active(motion_live, *seen.borrow()) {
                            return;
                        }
                        acceleration.set(fallback_motion(
                            e.movement_x() as f64,
                            e.movement_y() as f64,
                            sensitivity,
                        ));
                    }));
                }

                {
                    let screen = screen.clone();
                    let screen_ref = screen_ref.clone();
                    let debounce = resize_debounce.clone();
                    attach(Listener::new(&window, "resize", move |_e: web_sys::Event| {
                        let screen = screen.clone();
                        let screen_ref = screen_ref.clone();
                        let check = Rc::downgrade(&debounce);
                        debounce.borrow_mut().schedule(move |generation| {
                            Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                                let Some(check) = check.upgrade() else {
                                    return;
                                };
                                if !check.borrow().is_current(generation) {
                                    return;
                                }
                                let s = ScreenState::query();
                                *screen_ref.borrow_mut() = s;
                                screen.set(s);
                            })
                        });
                    }));
                }

                // Cleanup; a pending resize timer is cancelled with the component
                move || drop(listeners)
            },
        );
    }

    let simulated = fallback_active(orientation_live, *orientation_seen.borrow())
        || fallback_active(motion_live, *motion_seen.borrow());

    // Tilt indicator: a dot that rolls toward the lowered edge
    let half = INDICATOR_PX / 2.0;
    let (dx, dy) = indicator_offset(*rotation, half);
    let dot_x = half + dx;
    let dot_y = half + dy;

    html! {
        <div style="margin:12px; display:flex; gap:16px; flex-wrap:wrap; align-items:flex-start;">
            <ReadoutPanel
                rotation={*rotation}
                acceleration={*acceleration}
                screen={*screen}
                {simulated}
            />
            <div style={format!("position:relative; width:{0}px; height:{0}px; border:1px solid #30363d; border-radius:50%; background:#0e1116;", INDICATOR_PX)}>
                <div style={format!("position:absolute; left:{:.1}px; top:{:.1}px; width:12px; height:12px; margin:-6px 0 0 -6px; border-radius:50%; background:#58a6ff;", dot_x, dot_y)}></div>
            </div>
        </div>
    }
}
