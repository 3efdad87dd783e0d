//! Data-loading hooks shared by the screens.

use std::future::Future;

use shared::{ClientError, Pager, RemoteResource, models::Page};
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, UseStateHandle, hook, use_effect_with, use_state};

/// Run `fetch` on mount and whenever `deps` change.
///
/// Each run resets the resource to `Loading`. Responses are applied in
/// arrival order, so a slow earlier request can overwrite a later one.
#[hook]
pub fn use_remote_resource<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<RemoteResource<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let resource = use_state(RemoteResource::default);
    {
        let resource = resource.clone();
        use_effect_with(deps, move |deps| {
            resource.set(RemoteResource::Loading);
            let request = fetch(deps.clone());
            spawn_local(async move {
                let result = request.await;
                if let Err(error) = &result {
                    log::warn!("request failed: {error}");
                }
                resource.set(RemoteResource::from(result));
            });
            || ()
        });
    }
    resource
}

/// A paginated collection: the current page's resource plus its cursor.
///
/// The cursor's page count follows whatever the last response reported.
#[hook]
pub fn use_paginated<T, F, Fut>(
    token: Option<String>,
    fetch: F,
) -> (UseStateHandle<RemoteResource<Page<T>>>, UseStateHandle<Pager>)
where
    T: 'static,
    F: FnOnce(Option<String>, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ClientError>> + 'static,
{
    let pager = use_state(Pager::new);
    let resource = use_remote_resource((token, pager.current()), move |(token, page)| {
        fetch(token, page)
    });

    {
        let pager = pager.clone();
        let total_pages = resource.data().map(|page| page.total_pages);
        use_effect_with(total_pages, move |total_pages| {
            if let Some(total_pages) = *total_pages {
                let updated = (*pager).with_total_pages(total_pages);
                if updated != *pager {
                    pager.set(updated);
                }
            }
            || ()
        });
    }

    (resource, pager)
}

/// Callback for [`PaginationControls`](crate::components::PaginationControls)
/// that moves `pager` to the requested page.
pub fn page_callback(pager: &UseStateHandle<Pager>) -> Callback<u32> {
    let pager = pager.clone();
    Callback::from(move |page: u32| {
        let mut next = *pager;
        next.go_to(page);
        pager.set(next);
    })
}
