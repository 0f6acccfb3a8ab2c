//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::ClientConfig;
use crate::hooks::AppContext;
use crate::hooks::query::CacheRevision;
use crate::net::transport::{UnavailableTransport, default_transport};
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::session::storage::BrowserStorage;
use crate::state::toasts::{SignalNotifier, ToastQueue};
use crate::util::redirect::Redirector;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the request pipeline once and provides it to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastQueue::default());
    let revision = CacheRevision::new();
    let ctx = build_context(toasts);
    ctx.cache.set_change_listener(move || revision.bump());
    let home = ctx.config().home_path.clone();

    provide_context(ctx);
    provide_context(toasts);
    provide_context(revision);

    view! {
        <Stylesheet id="leptos" href="/pkg/rentdesk.css"/>
        <Title text="RentDesk"/>

        <Router>
            <RedirectBinder/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=move || view! { <Redirect path=home.clone()/> }/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

fn build_context(toasts: RwSignal<ToastQueue>) -> AppContext {
    let config = ClientConfig::load().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid client configuration, using defaults: {e}");
        ClientConfig::default()
    });
    let transport = default_transport(&config).unwrap_or_else(|e| {
        leptos::logging::warn!("HTTP transport unavailable: {e}");
        Arc::new(UnavailableTransport)
    });
    AppContext::new(
        config,
        transport,
        Arc::new(BrowserStorage),
        Redirector::new(),
        Arc::new(SignalNotifier::new(toasts)),
    )
}

/// Hands the router's navigate function to the shared redirector so
/// non-view code can navigate in-app.
#[component]
fn RedirectBinder() -> impl IntoView {
    let ctx = crate::hooks::use_app_context();
    let navigate = StoredValue::new_local(use_navigate());
    ctx.redirect.set_redirect_function(move |path| {
        if navigate.try_with_value(|nav| nav(path, NavigateOptions::default())).is_none() {
            leptos::logging::warn!("router gone, dropping navigation to {path}");
        }
    });
}
