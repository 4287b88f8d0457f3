use crate::core::images;
use crate::features::home::state::{
    TICKER_REPEATS, TickerDirection, advance_offset, initial_offset,
};
use cinehub_models::MovieSummary;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

const TICK_MS: u32 = 20;

enum LaneAction {
    Reset(TickerDirection, usize),
    Tick(TickerDirection, usize),
}

#[derive(PartialEq)]
struct LaneOffset(f64);

impl Reducible for LaneOffset {
    type Action = LaneAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LaneAction::Reset(direction, count) => Rc::new(Self(initial_offset(direction, count))),
            LaneAction::Tick(direction, count) => {
                Rc::new(Self(advance_offset(self.0, direction, count)))
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TickerLaneProps {
    pub items: Vec<MovieSummary>,
    pub direction: TickerDirection,
    pub on_open: Callback<u64>,
}

#[function_component(TickerLane)]
pub(crate) fn ticker_lane(props: &TickerLaneProps) -> Html {
    let offset = use_reducer(|| LaneOffset(0.0));

    {
        let offset = offset.clone();
        let direction = props.direction;
        let count = props.items.len();
        use_effect_with_deps(
            move |(direction, count)| {
                let direction = *direction;
                let count = *count;
                offset.dispatch(LaneAction::Reset(direction, count));
                let interval = Interval::new(TICK_MS, move || {
                    offset.dispatch(LaneAction::Tick(direction, count));
                });
                move || drop(interval)
            },
            (direction, count),
        );
    }

    let style = format!("transform: translateX({}px);", offset.0);
    html! {
        <div class="ticker-container">
            <div class="ticker-track" style={style}>
                {for (0..TICKER_REPEATS).flat_map(|repeat| {
                    props.items.iter().map(move |movie| (repeat, movie))
                }).map(|(repeat, movie)| {
                    let on_open = {
                        let on_open = props.on_open.clone();
                        let movie_id = movie.id;
                        Callback::from(move |_| on_open.emit(movie_id))
                    };
                    html! {
                        <div key={format!("{}-{repeat}", movie.id)} class="ticker-item" onclick={on_open}>
                            <img
                                src={images::thumb_url(movie.poster_path.as_deref())}
                                alt={movie.title.clone()}
                                class="ticker-poster"
                                loading="lazy"
                            />
                            <div class="ticker-info">
                                <h4 class="ticker-title">{movie.title.clone()}</h4>
                                <p class="ticker-rating">{format!("⭐ {:.1}", movie.vote_average)}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
