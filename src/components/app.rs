use std::rc::Rc;

use super::{
    lock_screen::LockScreen, password_gate::PasswordGate, permission_panel::PermissionPanel,
    sensor_view::SensorView, settings_modal::SettingsModal, swipe_pages::SwipePages,
};
use crate::config::PlaygroundConfig;
use crate::model::{SessionAction, SessionState};
use crate::util::{cwarn, set_debug_logging};
use yew::prelude::*;

// Session-wide state handed to every page instead of page-global singletons.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: UseReducerHandle<SessionState>,
    pub config: Rc<PlaygroundConfig>,
    pub update_config: Callback<PlaygroundConfig>,
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext is provided by App")
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| Rc::new(PlaygroundConfig::load_or_default()));
    let session = {
        let pw = config.easy_password.clone();
        use_reducer(move || SessionState::new(pw))
    };
    let show_settings = use_state(|| false);

    // Layout is ready once mounted
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.dispatch(SessionAction::SetLayoutLock(false));
            || ()
        });
    }
    {
        let debug = config.debug_log;
        use_effect_with(debug, move |on| {
            set_debug_logging(*on);
            || ()
        });
    }

    let update_config = {
        let config = config.clone();
        Callback::from(move |cfg: PlaygroundConfig| {
            if let Err(e) = cfg.save() {
                cwarn(&format!("config not saved: {e}"));
            }
            config.set(Rc::new(cfg));
        })
    };

    let ctx = SessionContext {
        session: session.clone(),
        config: (*config).clone(),
        update_config,
    };

    let open_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(true))
    };
    let close_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(false))
    };

    html! {
        <ContextProvider<SessionContext> context={ctx}>
            <div id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:8px 14px; background:#161b22; border-bottom:1px solid #30363d;">
                <span style="font-weight:600;">{"Sensor Playground"}</span>
                <button onclick={open_settings}>{"Settings"}</button>
            </div>
            <PasswordGate>
                <PermissionPanel />
                <SensorView />
                <SwipePages />
            </PasswordGate>
            <SettingsModal show={*show_settings} on_close={close_settings} />
            <LockScreen />
        </ContextProvider<SessionContext>>
    }
}
