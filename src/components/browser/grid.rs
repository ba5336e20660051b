//! Grid component: renders the projected view model.
//!
//! The grid is a pure function of the store signal; every store change
//! re-runs the projection and the view follows.

use leptos::prelude::*;
use treegrid_core::{GridView, ViewModel};

use super::entry::EntryCard;
use crate::app::AppContext;
use crate::commands::{self, Command};

stylance::import_crate_style!(css, "src/components/browser/grid.module.css");

#[component]
pub fn Grid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let model = Signal::derive(move || ctx.store.with(|store| store.project()));

    view! {
        <div class=css::container>
            {move || match model.get() {
                ViewModel::NothingToShow => {
                    view! { <p class=css::placeholder>"Nothing to show here."</p> }.into_any()
                }
                ViewModel::Grid(GridView { back, entries }) => {
                    view! {
                        <div class=css::grid>
                            {back.map(|target| view! { <BackCard target=target /> })}
                            <For
                                each=move || entries.clone()
                                key=|entry| entry.path.clone()
                                children=move |entry| view! { <EntryCard entry=entry /> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Back-navigation card, shown for every non-root directory.
#[component]
fn BackCard(target: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_back = move |_: leptos::ev::MouseEvent| {
        commands::dispatch(ctx, Command::Navigate(target.clone()));
    };

    view! {
        <button class=css::backCard on:click=on_back>
            <span class=css::backIcon>"←"</span>
            <span class=css::backLabel>"Back"</span>
        </button>
    }
}
