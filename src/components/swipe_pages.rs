use super::app::use_session;
use crate::model::SwipeDirection;
use crate::state::SwipeTracker;
use crate::util::clog;
use yew::prelude::*;

/// Page index after a swipe: left advances, right goes back. Clamped to the ends.
pub fn next_page(current: usize, count: usize, dir: SwipeDirection) -> usize {
    match dir {
        SwipeDirection::Left => (current + 1).min(count.saturating_sub(1)),
        SwipeDirection::Right => current.saturating_sub(1),
    }
}

#[function_component(SwipePages)]
pub fn swipe_pages() -> Html {
    let ctx = use_session();
    let thresholds = ctx.config.swipe;
    let page_count = ctx.config.page_count.max(1);
    let page = use_state(|| 0_usize);
    let tracker = use_mut_ref(move || SwipeTracker::new(thresholds));

    {
        let tracker = tracker.clone();
        use_effect_with(thresholds, move |th| {
            tracker.borrow_mut().thresholds = *th;
            || ()
        });
    }

    let on_swipe = {
        let page = page.clone();
        Callback::from(move |dir: SwipeDirection| {
            clog(&format!("swipe {}", dir.as_str()));
            page.set(next_page(*page, page_count, dir));
        })
    };
    let finish = {
        let on_swipe = on_swipe.clone();
        move |dir: Option<SwipeDirection>| {
            if let Some(d) = dir {
                on_swipe.emit(d);
            }
        }
    };

    // Mouse
    let onmousedown = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            tracker
                .borrow_mut()
                .start(e.client_x() as f64, e.client_y() as f64, js_sys::Date::now());
        })
    };
    let onmousemove = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            tracker
                .borrow_mut()
                .move_to(e.client_x() as f64, e.client_y() as f64);
        })
    };
    let onmouseup = {
        let tracker = tracker.clone();
        let finish = finish.clone();
        Callback::from(move |_e: MouseEvent| {
            let dir = tracker.borrow_mut().end(js_sys::Date::now());
            finish(dir);
        })
    };
    let onmouseleave = {
        let tracker = tracker.clone();
        let finish = finish.clone();
        Callback::from(move |_e: MouseEvent| {
            let dir = tracker.borrow_mut().leave(js_sys::Date::now());
            finish(dir);
        })
    };
    // Touch
    let ontouchstart = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                tracker.borrow_mut().start(
                    t0.client_x() as f64,
                    t0.client_y() as f64,
                    js_sys::Date::now(),
                );
            }
        })
    };
    let ontouchmove = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                tracker
                    .borrow_mut()
                    .move_to(t0.client_x() as f64, t0.client_y() as f64);
            }
        })
    };
    let ontouchend = {
        let tracker = tracker.clone();
        let finish = finish.clone();
        Callback::from(move |_e: TouchEvent| {
            let dir = tracker.borrow_mut().end(js_sys::Date::now());
            finish(dir);
        })
    };
    let ontouchcancel = {
        let tracker = tracker.clone();
        Callback::from(move |_e: TouchEvent| {
            let dir = tracker.borrow_mut().leave(js_sys::Date::now());
            finish(dir);
        })
    };

    let offset = *page as f64 * 100.0;
    let slides = (0..page_count).map(|i| {
        let hue = (i * 360 / page_count) as u32;
        html! {
            <div key={i} style={format!("flex:0 0 100%; height:100%; display:flex; align-items:center; justify-content:center; font-size:28px; background:hsl({}, 35%, 18%);", hue)}>
                { format!("Page {}", i + 1) }
            </div>
        }
    });
    let dots = (0..page_count).map(|i| {
        let color = if i == *page { "#58a6ff" } else { "#30363d" };
        html! { <span key={i} style={format!("width:8px; height:8px; border-radius:50%; background:{};", color)}></span> }
    });

    html! {
        <div style="margin:12px;">
            <div
                style="position:relative; height:180px; overflow:hidden; border:1px solid #30363d; border-radius:8px; user-select:none; touch-action:pan-y;"
                {onmousedown} {onmousemove} {onmouseup} {onmouseleave}
                {ontouchstart} {ontouchmove} {ontouchend} {ontouchcancel}
            >
                <div style={format!("display:flex; height:100%; transform:translateX(-{:.0}%); transition:transform 0.25s ease;", offset)}>
                    { for slides }
                </div>
            </div>
            <div style="display:flex; gap:6px; justify-content:center; margin-top:8px;">
                { for dots }
            </div>
        </div>
    }
}
