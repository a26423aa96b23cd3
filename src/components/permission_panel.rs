use super::app::use_session;
use crate::model::{Permission, SensorKind, SessionAction};
use crate::sensors::request_permission;
use crate::util::{clog, cwarn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn status_label(p: Permission) -> (&'static str, &'static str) {
    match (p.is_checked, p.available) {
        (false, _) => ("not checked", "#8b949e"),
        (true, true) => ("available", "#3fb950"),
        (true, false) => ("unavailable", "#f85149"),
    }
}

#[function_component(PermissionPanel)]
pub fn permission_panel() -> Html {
    let ctx = use_session();

    let check = |kind: SensorKind| {
        let session = ctx.session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            spawn_local(async move {
                let available = match request_permission(kind).await {
                    Ok(v) => v,
                    Err(e) => {
                        cwarn(&format!("{}: {e}", kind.constructor_name()));
                        false
                    }
                };
                clog(&format!("{:?} available={available}", kind));
                session.dispatch(SessionAction::SetPermission { kind, available });
            });
        })
    };

    let row = |label: &'static str, kind: SensorKind| {
        let (text, color) = status_label(ctx.session.permission(kind));
        html! {
            <div style="display:flex; align-items:center; gap:8px;">
                <span style="flex:1; font-weight:500;">{ label }</span>
                <span style={format!("color:{}; min-width:90px; text-align:right;", color)}>{ text }</span>
                <button onclick={check(kind)}>{"Check"}</button>
            </div>
        }
    };

    html! {
        <div style="margin:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            { row("Orientation sensor", SensorKind::Orientation) }
            { row("Motion sensor", SensorKind::Motion) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_ignores_available_flag() {
        let p = Permission {
            is_checked: false,
            available: true,
        };
        assert_eq!(status_label(p).0, "not checked");
        assert_eq!(status_label(Permission::checked(false)).0, "unavailable");
    }
}
