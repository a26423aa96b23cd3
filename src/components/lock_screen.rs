use super::app::use_session;
use yew::prelude::*;

#[function_component(LockScreen)]
pub fn lock_screen() -> Html {
    let ctx = use_session();
    if !ctx.session.lock_status() {
        return html! {};
    }
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.87); z-index:100;">
            <div style="border:2px solid #30363d; padding:24px 32px; border-radius:12px; text-align:center; min-width:240px;">
                <h2 style="margin:0 0 8px 0; color:#58a6ff;">{"Loading…"}</h2>
                <p style="margin:0; font-size:12px; opacity:0.7;">
                    { if ctx.session.layout_lock { "Preparing layout" } else { "Preparing page" } }
                </p>
            </div>
        </div>
    }
}
