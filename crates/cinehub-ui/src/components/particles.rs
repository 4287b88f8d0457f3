use js_sys::Math;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FloatingParticlesProps {
    #[prop_or(30usize)]
    pub count: usize,
}

#[function_component(FloatingParticles)]
pub(crate) fn floating_particles(props: &FloatingParticlesProps) -> Html {
    // Seed positions once per count so re-renders don't reshuffle the sky.
    let seeds = use_memo(
        |count| {
            (0..*count)
                .map(|_| {
                    (
                        Math::random() * 100.0,
                        Math::random() * 100.0,
                        Math::random() * 8.0,
                    )
                })
                .collect::<Vec<_>>()
        },
        props.count,
    );

    html! {
        <div class="floating-particles" aria-hidden="true">
            {for seeds.iter().enumerate().map(|(n, (left, top, delay))| {
                let style = format!(
                    "left:{left:.1}%;top:{top:.1}%;animation-delay:{delay:.1}s;"
                );
                html! { <span key={n} class="particle" style={style} /> }
            })}
        </div>
    }
}
