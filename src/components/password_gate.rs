use super::app::use_session;
use crate::model::SessionAction;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PasswordGateProps {
    #[prop_or_default]
    pub children: Html,
}

/// Cosmetic gate in front of the demo pages. Not a security boundary.
#[function_component(PasswordGate)]
pub fn password_gate(props: &PasswordGateProps) -> Html {
    let ctx = use_session();
    let attempt = use_state(String::new);
    let tried = use_state(|| false);

    // The gate is the first page shown; it has nothing to load
    {
        let session = ctx.session.clone();
        use_effect_with((), move |_| {
            session.dispatch(SessionAction::SetPageLock(false));
            || ()
        });
    }

    if ctx.session.easy_authenticated {
        return props.children.clone();
    }

    let oninput = {
        let attempt = attempt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            attempt.set(input.value());
        })
    };
    let onsubmit = {
        let attempt = attempt.clone();
        let tried = tried.clone();
        let session = ctx.session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session.dispatch(SessionAction::SubmitPassword((*attempt).clone()));
            tried.set(true);
        })
    };

    html! {
        <form {onsubmit} style="margin:48px auto; max-width:320px; display:flex; flex-direction:column; gap:10px;">
            <label for="easy-password">{"Password"}</label>
            <input id="easy-password" type="password" value={(*attempt).clone()} {oninput} />
            <button type="submit">{"Enter"}</button>
            if *tried {
                <span style="color:#f85149; font-size:12px;">{"Wrong password"}</span>
            }
        </form>
    }
}
