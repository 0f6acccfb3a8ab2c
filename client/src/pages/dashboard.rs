//! Dashboard listing the subscription's properties and tenants.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Lists are keyed by the logged-in
//! user's subscription id and refetch whenever a mutation invalidates them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::hooks::query::{QueryState, use_query};
use crate::hooks::{properties, tenants, use_app_context};
use crate::net::types::{Property, Tenant, TenantInput};
use crate::session::UserProfile;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    install_unauth_redirect(&ctx, Signal::derive(move || location.pathname.get()));

    // Storage is only readable after hydration; read it in an effect so the
    // server and client render the same first frame.
    let user = RwSignal::new(None::<UserProfile>);
    let ctx_user = ctx.clone();
    Effect::new(move || user.set(ctx_user.session.user()));

    let subscription_id = move || user.get().and_then(|u| u.subscription_id());
    let property_list = use_query::<Vec<Property>, _>(move || subscription_id().map(|id| properties::list_query(&id)));
    let tenant_list = use_query::<Vec<Tenant>, _>(move || subscription_id().map(|id| tenants::list_query(&id)));

    let greeting = move || user.get().map(|u| u.display_name()).unwrap_or_default();

    let ctx_logout = ctx.clone();
    let on_logout = move |_| crate::hooks::auth::logout(&ctx_logout);

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let ctx_add = ctx.clone();
    let on_add_tenant = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = tenant_input(&first_name.get(), &last_name.get(), subscription_id()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx_add.clone();
            leptos::task::spawn_local(async move {
                if tenants::add(&ctx, &input).await.is_ok() {
                    let _ = first_name.try_set(String::new());
                    let _ = last_name.try_set(String::new());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx_add, input);
        }
    };

    let ctx_rows = ctx.clone();
    let delete_property = Callback::new(move |id: String| spawn_delete(&ctx_rows, Entity::Property, id));
    let ctx_rows = ctx.clone();
    let delete_tenant = Callback::new(move |id: String| spawn_delete(&ctx_rows, Entity::Tenant, id));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <span class="dashboard-header__user">{greeting}</span>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>

            <section class="dashboard-section">
                <h2>"Properties"</h2>
                {move || list_status(&property_list.get())}
                <ul class="dashboard-list">
                    <For
                        each=move || property_list.get().data().cloned().unwrap_or_default()
                        key=|p| p.id.clone()
                        children=move |p| {
                            let id = p.id.clone();
                            view! {
                                <li class="dashboard-list__item">
                                    <span>{p.name}</span>
                                    <span class="dashboard-list__meta">{p.address.unwrap_or_default()}</span>
                                    <button class="btn btn--danger" on:click=move |_| delete_property.run(id.clone())>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <section class="dashboard-section">
                <h2>"Tenants"</h2>
                {move || list_status(&tenant_list.get())}
                <ul class="dashboard-list">
                    <For
                        each=move || tenant_list.get().data().cloned().unwrap_or_default()
                        key=|t| t.id.clone()
                        children=move |t| {
                            let id = t.id.clone();
                            view! {
                                <li class="dashboard-list__item">
                                    <span>{t.full_name()}</span>
                                    <span class="dashboard-list__meta">{t.email.unwrap_or_default()}</span>
                                    <button class="btn btn--danger" on:click=move |_| delete_tenant.run(id.clone())>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <form class="dashboard-form" on:submit=on_add_tenant>
                    <input
                        class="dashboard-input"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="dashboard-input"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Add tenant"</button>
                </form>
            </section>
        </div>
    }
}

#[derive(Clone, Copy)]
enum Entity {
    Property,
    Tenant,
}

fn spawn_delete(ctx: &crate::hooks::AppContext, entity: Entity, id: String) {
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let _ = match entity {
                Entity::Property => properties::delete(&ctx, &id).await,
                Entity::Tenant => tenants::delete(&ctx, &id).await,
            };
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, entity, id);
    }
}

/// Status line above a list. Nothing after a 401, which already notified.
fn list_status<T>(state: &QueryState<Vec<T>>) -> Option<String> {
    match state {
        QueryState::Idle => None,
        QueryState::Loading => Some("Loading...".to_owned()),
        QueryState::Failed(err) => err.user_message("Could not load this list."),
        QueryState::Ready(items) if items.is_empty() => Some("Nothing here yet.".to_owned()),
        QueryState::Ready(_) => None,
    }
}

/// Build the add-tenant body; both names and a subscription are required.
fn tenant_input(first: &str, last: &str, subscription_id: Option<String>) -> Option<TenantInput> {
    let (first, last) = (first.trim(), last.trim());
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some(TenantInput {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        subscription_id: Some(subscription_id?),
        ..TenantInput::default()
    })
}
