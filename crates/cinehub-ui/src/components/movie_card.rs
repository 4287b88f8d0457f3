use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie_id: u64,
    pub title: AttrValue,
    pub poster_url: AttrValue,
    #[prop_or_default]
    pub rating: Option<f64>,
    #[prop_or_default]
    pub meta: Option<AttrValue>,
    #[prop_or_default]
    pub rank: Option<usize>,
    #[prop_or_default]
    pub class: Classes,
    pub on_open: Callback<u64>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let on_click = {
        let on_open = props.on_open.clone();
        let movie_id = props.movie_id;
        Callback::from(move |_| on_open.emit(movie_id))
    };

    html! {
        <div class={classes!("movie-card", props.class.clone())} onclick={on_click}>
            {props.rank.map(|rank| html! {
                <div class="movie-rank">{format!("#{rank}")}</div>
            }).unwrap_or_default()}
            { for props.children.iter() }
            <img src={props.poster_url.clone()} alt={props.title.clone()} class="movie-poster" loading="lazy" />
            <div class="movie-info">
                <h3 class="movie-title">{props.title.clone()}</h3>
                {props.rating.map(|rating| html! {
                    <p class="movie-rating">{format!("★ {rating:.1}")}</p>
                }).unwrap_or_default()}
                {props.meta.clone().map(|meta| html! {
                    <p class="movie-meta">{meta}</p>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
