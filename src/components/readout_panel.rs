use crate::model::{Acceleration, Rotation};
use crate::state::ScreenState;
use crate::util::{format_accel, format_degrees};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReadoutPanelProps {
    pub rotation: Rotation,
    pub acceleration: Acceleration,
    pub screen: ScreenState,
    /// True when values come from keyboard/mouse instead of real sensors.
    pub simulated: bool,
}

#[function_component]
pub fn ReadoutPanel(props: &ReadoutPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:110px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |label: &str, value: String, color: &str| {
        html! {
            <div style={row_style}>
                <span style={format!("{} color:{};", label_style, color)}>{ label.to_string() }</span>
                <span style={format!("{} color:{};", value_style, color)}>{ value }</span>
            </div>
        }
    };
    let r = props.rotation;
    let a = props.acceleration;
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            { row("α heading", format_degrees(r.alpha), "#d4af37") }
            { row("β front/back", format_degrees(r.beta), "#d4af37") }
            { row("γ left/right", format_degrees(r.gamma), "#d4af37") }
            { row("x", format_accel(a.x), "#58a6ff") }
            { row("y", format_accel(a.y), "#58a6ff") }
            { row("z", format_accel(a.z), "#58a6ff") }
            { row("screen", format!("{} {}°", props.screen.mode.label(), props.screen.angle.degrees()), "#8b949e") }
            <div style="font-size:11px; opacity:0.7;">
                { if props.simulated { "Simulated: arrow keys tilt (ctrl for β), mouse moves accelerate" } else if r.absolute { "Sensor (absolute)" } else { "Sensor" } }
            </div>
        </div>
    }
}
