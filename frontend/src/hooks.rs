use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::timeline::{self, Player, Step, Timeline, TimelineError, TimeoutScheduler};

pub type Script<C> = fn() -> Result<Timeline<C>, TimelineError>;

/// Runs `script` into a reducer while `active` is true.
///
/// The player is torn down when the component unmounts or `active` turns
/// false; turning it back on starts a fresh player from the top.
#[hook]
pub fn use_scripted_demo<R, C>(name: &'static str, script: Script<C>, active: bool) -> UseReducerHandle<R>
where
    R: Reducible<Action = Step<C>> + Default + 'static,
    C: Clone + 'static,
{
    let state = use_reducer(R::default);
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |active| {
                let player = if *active {
                    match script() {
                        Ok(timeline) => {
                            let rate = config::playback_rate();
                            let pause_ms = timeline::scale_ms(config::LOOP_PAUSE_MS, rate);
                            Some(Player::start(
                                TimeoutScheduler,
                                Rc::new(timeline.scaled(rate)),
                                pause_ms,
                                move |step: &Step<C>| dispatcher.dispatch(step.clone()),
                                move |loops| log::debug!("{} demo looped {} times", name, loops),
                            ))
                        }
                        Err(e) => {
                            log::error!("{} demo script is invalid: {}", name, e);
                            None
                        }
                    }
                } else {
                    None
                };
                move || {
                    if let Some(player) = player {
                        player.stop();
                    }
                }
            },
            active,
        );
    }
    state
}

/// Whether at least `threshold` of the referenced element is on screen.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<web_sys::Element>() {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                            let in_view = in_view.clone();
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    in_view.set(entry.is_intersecting());
                                }
                            }
                        });
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(threshold));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(e) => {
                                gloo_console::warn!("IntersectionObserver unavailable:", e);
                                in_view.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            node,
        );
    }
    *in_view
}
