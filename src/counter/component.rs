use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::counter::animator::CounterAnimator;
use crate::counter::state::CounterSpec;
use crate::counter::web::{AnimationFrames, IntersectionWatch};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
    #[prop_or(config::DEFAULT_COUNTER_DURATION_MS)]
    pub duration_ms: i64,
    #[prop_or_default]
    pub suffix: String,
}

/// A number that counts up from zero the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let spec = CounterSpec::new(props.target)
        .with_duration(props.duration_ms)
        .with_suffix(props.suffix.clone());
    let text = {
        let initial = spec.render(0);
        use_state_eq(move || initial)
    };

    {
        let node = node.clone();
        let text = text.clone();
        use_effect_with_deps(
            move |spec: &CounterSpec| {
                let on_render: Rc<dyn Fn(String)> = Rc::new(move |value: String| text.set(value));
                let animator = match node.cast::<Element>() {
                    Some(element) => Some(CounterAnimator::mount(
                        spec.clone(),
                        AnimationFrames::new(),
                        IntersectionWatch::new(element),
                        on_render,
                    )),
                    None => {
                        warn!("counter to {} has no element to watch", spec.target);
                        None
                    }
                };
                // Unmount or new props: cancel the frame and stop observing.
                move || drop(animator)
            },
            spec,
        );
    }

    html! {
        <div ref={node} class="counter-value">
            { (*text).clone() }
        </div>
    }
}
