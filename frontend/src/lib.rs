//! Marketing site for BetterChat. Everything on the page is static except the
//! product demos, which replay scripted timelines in a loop.

pub mod components;
pub mod config;
pub mod demos;
pub mod hooks;
pub mod pages;
pub mod timeline;

use yew::prelude::*;
use yew_router::prelude::*;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
