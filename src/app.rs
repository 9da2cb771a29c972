//! Root application component with routing and context providers.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::{Api, ApiClient, BrowserTransport};
use crate::pages::{
    home::HomePage, login::LoginPage, my_page::MyPage, not_found::NotFoundPage, notifications::NotificationsPage,
    product_detail::ProductDetailPage, product_register::ProductRegisterPage, products::ProductsPage,
    signup::SignupPage,
};
use crate::session::Session;
use crate::state::cache::CacheState;

/// Build-time config, falling back to defaults when an override is malformed.
pub fn load_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|e| {
        warn!("ignoring build configuration: {e}");
        ClientConfig::default()
    })
}

/// Root application component.
///
/// Resolves the session from storage before anything renders, then provides
/// the API client, session, auth signal, and cache versions as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let session = Session::browser(&config);
    session.start();

    let api: Api = ApiClient::new(&config, session.clone(), BrowserTransport::new(config.request_timeout_ms));
    let auth = RwSignal::from(session.state());
    let cache = RwSignal::new(CacheState::default());

    provide_context(api);
    provide_context(session);
    provide_context(auth);
    provide_context(cache);

    view! {
        <Title text="UP-PICK"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=(StaticSegment("products"), StaticSegment("register")) view=ProductRegisterPage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route path=StaticSegment("my-page") view=MyPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </Routes>
            </main>
        </Router>
    }
}
