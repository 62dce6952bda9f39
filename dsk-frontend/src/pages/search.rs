use leptos::*;
use leptos_router::*;

use dsk_boundary::{EntitySummary, SearchResponse};
use dsk_frontend_api::{PublicApi, SearchQuery};

use crate::components::format_count;

#[component]
pub fn Search(public_api: PublicApi) -> impl IntoView {
    // -- signals -- //

    let response = create_rw_signal(None::<SearchResponse>);
    let error = create_rw_signal(None::<String>);

    // -- actions -- //

    let search_action = create_action(move |query: &SearchQuery| {
        let query = query.clone();
        async move {
            match public_api.search(&query).await {
                Ok(res) => {
                    response.update(|r| *r = Some(res));
                    error.update(|e| *e = None);
                }
                Err(err) => {
                    log::error!("Search failed: {err}");
                    error.update(|e| *e = Some(format!("{err}")));
                }
            }
        }
    });

    // -- query params -- //

    let params = use_query_map();
    let query = Signal::derive(move || {
        params.with(|p| SearchQuery {
            text: p.get("q").cloned(),
            schema: p.get("filter:schema").cloned(),
            category: p.get("filter:category").cloned(),
            country: p.get("filter:country").cloned(),
        })
    });

    // -- effects -- //

    create_effect(move |_| {
        search_action.dispatch(query.get());
    });

    view! {
      <section>
        <div class="container mx-auto max-w-4xl p-6">
          { move || error.get().map(|err| view! { <p class="text-red-600">{ err }</p> }) }
          { move || response.get().map(|res| view! {
              <div class="mb-4 flex justify-start">
                <p class="border-b border-gray-300 py-2 text-gray-500">
                  "Found "
                  <span class="font-bold">{ format_count(res.total) }</span>
                  " results"
                </p>
              </div>
              <ul>
                { res.results.into_iter().map(|entity| view! {
                    <li class="mb-3"><EntitySummaryItem entity /></li>
                  }).collect_view()
                }
              </ul>
            })
          }
        </div>
      </section>
    }
}

#[component]
fn EntitySummaryItem(entity: EntitySummary) -> impl IntoView {
    view! {
      <div class="text-lg font-bold hover:text-gray-600">{ entity.name }</div>
      <span class="mr-1 rounded bg-gray-100 p-1 text-xs text-gray-500">{ entity.schema }</span>
    }
}
