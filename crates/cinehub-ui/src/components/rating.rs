use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StarRatingProps {
    #[prop_or(5u8)]
    pub max: u8,
    pub value: u8,
    #[prop_or_default]
    pub class: Classes,
    pub onchange: Callback<u8>,
}

#[function_component(StarRating)]
pub(crate) fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class={classes!("stars-selector", props.class.clone())}>
            {for (1..=props.max).map(|star| {
                let onchange = {
                    let onchange = props.onchange.clone();
                    Callback::from(move |_| onchange.emit(star))
                };
                let active = star <= props.value;
                html! {
                    <button
                        type="button"
                        class={classes!("star", active.then_some("active"))}
                        onclick={onchange}
                    >{"⭐"}</button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StarDisplayProps {
    pub value: u8,
}

#[function_component(StarDisplay)]
pub(crate) fn star_display(props: &StarDisplayProps) -> Html {
    html! {
        <span class="review-rating">{"⭐".repeat(usize::from(props.value))}</span>
    }
}
