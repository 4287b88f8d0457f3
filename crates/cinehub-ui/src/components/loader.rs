use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CinematicLoaderProps {
    pub message: AttrValue,
}

#[function_component(CinematicLoader)]
pub(crate) fn cinematic_loader(props: &CinematicLoaderProps) -> Html {
    html! {
        <div class="cinematic-loader">
            <div class="spinner" />
            <p class="muted">{props.message.clone()}</p>
        </div>
    }
}
