use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REDUCED_MOTION_QUERY, REVEAL_THRESHOLD};
use crate::reveal::machine::{RevealMachine, RevealState, RevealStyle};

/// Whether the visitor asked for reduced motion. Read once per page mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub fn sample() -> Self {
        let reduced = web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false);
        Self { reduced }
    }
}

#[hook]
pub fn use_motion() -> MotionPreference {
    use_context::<MotionPreference>().unwrap_or_default()
}

pub enum RevealAction {
    Visible(f64),
    Start,
    Settle,
}

impl Reducible for RevealMachine {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RevealAction::Visible(ratio) => next.on_visibility(ratio).is_some(),
            RevealAction::Start => next.start().is_some(),
            RevealAction::Settle => next.settle(),
        };
        if changed {
            debug!("Reveal {:?} -> {:?}", self.state(), next.state());
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Keeps the observer and its callback alive together.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    fn disconnect(self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    dispatcher: UseReducerDispatcher<RevealMachine>,
) -> Result<Observation, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if entry.is_intersecting() && ratio >= REVEAL_THRESHOLD {
                    // One trigger per section; stop watching right away.
                    observer.unobserve(&entry.target());
                    dispatcher.dispatch(RevealAction::Visible(ratio));
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Moves a machine from `Revealing` to `Shown` once its transition is over.
/// The timer is dropped, and so cancelled, if the section unmounts first.
#[hook]
fn use_settle(machine: UseReducerHandle<RevealMachine>) {
    let dispatcher = machine.dispatcher();
    let settle_after = machine.settle_after();
    use_effect_with_deps(
        move |state| {
            let mut timeout = None;
            if *state == RevealState::Revealing {
                if settle_after.is_zero() {
                    dispatcher.dispatch(RevealAction::Settle);
                } else {
                    timeout = Some(Timeout::new(millis(settle_after), move || {
                        dispatcher.dispatch(RevealAction::Settle)
                    }));
                }
            }
            move || drop(timeout)
        },
        machine.state(),
    );
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Number of `RevealItem` children. Zero animates the section as a whole.
    #[prop_or_default]
    pub stagger: usize,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that plays its entrance once, the first time a fifth of it
/// scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let motion = use_motion();
    let stagger = props.stagger;
    let machine =
        use_reducer(move || RevealMachine::section(motion.reduced).with_stagger(stagger));
    let node = use_node_ref();

    {
        let node = node.clone();
        let dispatcher = machine.dispatcher();
        let reduced = motion.reduced;
        use_effect_with_deps(
            move |_| {
                let mut observation = None;
                if reduced {
                    dispatcher.dispatch(RevealAction::Start);
                } else {
                    let observed = node
                        .cast::<Element>()
                        .ok_or_else(|| JsValue::from_str("section is not mounted"))
                        .and_then(|element| observe_once(&element, dispatcher.clone()));
                    match observed {
                        Ok(o) => observation = Some(o),
                        Err(e) => {
                            warn!("Cannot observe section, showing it now: {:?}", e);
                            dispatcher.dispatch(RevealAction::Start);
                        }
                    }
                }
                move || {
                    if let Some(o) = observation {
                        o.disconnect();
                    }
                }
            },
            (),
        );
    }
    use_settle(machine.clone());

    let style = (stagger == 0).then(|| machine.style(None).to_css());

    html! {
        <section id={props.id.clone()} class={props.class.clone()} style={style} ref={node}>
            <ContextProvider<RevealMachine> context={(*machine).clone()}>
                { for props.children.iter() }
            </ContextProvider<RevealMachine>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    /// Position among the section's staggered children.
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let style = use_context::<RevealMachine>()
        .map_or_else(RevealStyle::settled, |m| m.style(Some(props.index)))
        .to_css();

    html! {
        <div id={props.id.clone()} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroRevealProps {
    pub duration_ms: u64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Above-the-fold block: animates on mount instead of on scroll, from a
/// nearly opaque starting point.
#[function_component(HeroReveal)]
pub fn hero_reveal(props: &HeroRevealProps) -> Html {
    let motion = use_motion();
    let duration = Duration::from_millis(props.duration_ms);
    let machine = use_reducer(move || RevealMachine::hero(motion.reduced, duration));

    {
        let dispatcher = machine.dispatcher();
        use_effect_with_deps(
            move |_| {
                // Let the starting style paint before switching to the end state.
                let timeout = Timeout::new(0, move || dispatcher.dispatch(RevealAction::Start));
                move || drop(timeout)
            },
            (),
        );
    }
    use_settle(machine.clone());

    html! {
        <div class={props.class.clone()} style={machine.style(None).to_css()}>
            { for props.children.iter() }
        </div>
    }
}
