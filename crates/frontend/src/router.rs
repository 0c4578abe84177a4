//! Route table and the router-backed [`Navigator`]

use crate::pages::{DashboardPage, LoginPage};
use cachorro_core::{Navigator, Route};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::{Navigator as HistoryNavigator, Redirect, Routable, use_navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Dashboard => Self::Dashboard,
        }
    }
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Dashboard => Self::Dashboard,
            AppRoute::Login | AppRoute::NotFound => Self::Login,
        }
    }
}

/// Pushes routes onto the browser history
pub struct RouterNavigator {
    history: HistoryNavigator,
}

impl RouterNavigator {
    pub fn new(history: HistoryNavigator) -> Self {
        Self { history }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigating");
        self.history.push(&AppRoute::from(route));
    }
}

/// Hook to get a [`Navigator`] for the flows
#[hook]
pub fn use_route_navigator() -> Rc<dyn Navigator> {
    let history = use_navigator()
        .expect("Router navigator not found. Make sure the page is rendered inside a BrowserRouter");
    Rc::new(RouterNavigator::new(history))
}

pub fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Login => html! { <LoginPage /> },
        AppRoute::Dashboard => html! { <DashboardPage /> },
        AppRoute::NotFound => html! { <Redirect<AppRoute> to={AppRoute::Login} /> },
    }
}
