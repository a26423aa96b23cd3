use super::app::use_session;
use crate::config::PlaygroundConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let ctx = use_session();
    if !props.show {
        return html! {};
    }
    let cfg = (*ctx.config).clone();

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Each control emits an edited copy of the current config
    let edit = |f: fn(&mut PlaygroundConfig)| {
        let update = ctx.update_config.clone();
        let base = cfg.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = base.clone();
            f(&mut next);
            update.emit(next);
        })
    };
    let tilt_down = edit(|c| c.tilt_step = (c.tilt_step - 1.0).max(1.0));
    let tilt_up = edit(|c| c.tilt_step = (c.tilt_step + 1.0).min(45.0));
    let swipe_slower = edit(|c| c.swipe.max_time_ms += 50.0);
    let swipe_faster = edit(|c| c.swipe.max_time_ms = (c.swipe.max_time_ms - 50.0).max(50.0));
    let toggle_debug = edit(|c| c.debug_log = !c.debug_log);
    let reset = {
        let update = ctx.update_config.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Reset all settings to their defaults?")
                    .unwrap_or(false)
                {
                    update.emit(PlaygroundConfig::default());
                }
            } else {
                update.emit(PlaygroundConfig::default());
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{ format!("Keyboard tilt step: {:.0}°", cfg.tilt_step) }</span>
                    <button onclick={tilt_down}>{"-"}</button>
                    <button onclick={tilt_up}>{"+"}</button>
                </div>
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{ format!("Max swipe time: {:.0} ms", cfg.swipe.max_time_ms) }</span>
                    <button onclick={swipe_faster}>{"-"}</button>
                    <button onclick={swipe_slower}>{"+"}</button>
                </div>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.debug_log} onclick={toggle_debug} />
                    <span>{"Debug logging"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset Settings"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings are kept in this browser's local storage."}</div>
        </div>
    </div>}
}
