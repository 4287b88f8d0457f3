use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SkeletonProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SkeletonCard)]
pub(crate) fn skeleton_card(props: &SkeletonProps) -> Html {
    html! {
        <div class={classes!("skeleton-card", props.class.clone())} aria-busy="true" aria-live="polite">
            <div class="skeleton skeleton-poster" />
            <div class="skeleton skeleton-line" />
            <div class="skeleton skeleton-line short" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SkeletonSetProps {
    #[prop_or(10usize)]
    pub count: usize,
}

#[function_component(SkeletonGrid)]
pub(crate) fn skeleton_grid(props: &SkeletonSetProps) -> Html {
    html! {
        <div class="movies-grid">
            {for (0..props.count).map(|n| html! { <SkeletonCard key={n} /> })}
        </div>
    }
}

#[function_component(SkeletonRail)]
pub(crate) fn skeleton_rail(props: &SkeletonSetProps) -> Html {
    html! {
        <div class="movies-rail">
            {for (0..props.count).map(|n| html! { <SkeletonCard key={n} /> })}
        </div>
    }
}
