use leptos::*;
use leptos_router::*;

use dsk_boundary::{Metadata, Statistics};
use dsk_frontend_api::{PublicApi, SearchQuery};

use crate::{components::*, pages::Page};

#[component]
pub fn Home(
    public_api: PublicApi,
    #[prop(into)] metadata: Signal<Option<Metadata>>,
) -> impl IntoView {
    // -- signals -- //

    let statistics = create_rw_signal(None::<Statistics>);

    // -- actions -- //

    let fetch_statistics = create_action(move |_: &()| async move {
        match public_api.statistics().await {
            Ok(stats) => {
                statistics.update(|s| *s = Some(stats));
            }
            Err(err) => {
                log::error!("Unable to fetch statistics: {err}");
            }
        }
    });

    // for now, always load
    fetch_statistics.dispatch(());

    // -- derived state -- //

    let schemata = Signal::derive(move || {
        statistics.with(|stats| {
            stats.as_ref().map_or(StatisticState::Loading, |s| {
                StatisticState::Loaded(s.schemata.clone())
            })
        })
    });
    let categories = Signal::derive(move || {
        statistics.with(|stats| {
            stats.as_ref().map_or(StatisticState::Loading, |s| {
                StatisticState::Loaded(s.categories.clone())
            })
        })
    });
    let countries = Signal::derive(move || {
        statistics.with(|stats| {
            stats.as_ref().map_or(StatisticState::Loading, |s| {
                StatisticState::Loaded(s.countries.clone())
            })
        })
    });

    let things_headline = move || {
        statistics.with(|stats| {
            stats.as_ref().map_or_else(
                || "Search entities".to_string(),
                |s| format!("Search {} entities", format_count(s.things)),
            )
        })
    };
    let collections_headline = move || {
        statistics.with(|stats| {
            stats.as_ref().map_or_else(
                || "from sources".to_string(),
                |s| format!("from {} sources", format_count(s.collections)),
            )
        })
    };
    let countries_headline = move || {
        statistics.with(|stats| {
            stats.as_ref().map_or_else(
                || "in countries".to_string(),
                |s| format!("in {} countries", s.countries.len()),
            )
        })
    };

    let placeholder = Signal::derive(move || {
        metadata.with(|meta| {
            meta.as_ref().map_or_else(
                || "Search".to_string(),
                |m| format!("Try searching: {}", m.app.samples.join(", ")),
            )
        })
    });

    // -- callbacks -- //

    let navigate = use_navigate();
    let on_search = Callback::new(move |text: String| {
        let query = SearchQuery::text(text);
        let url = format!("{}?{}", Page::Search.path(), query.query_string());
        navigate(&url, NavigateOptions::default());
    });

    // -- render overrides -- //

    let schema_name = Callback::new(move |name: String| {
        let query = SearchQuery {
            schema: Some(name.clone()),
            ..SearchQuery::default()
        };
        linked_name(filter_href(&name, &query), name)
    });

    let category_name = Callback::new(move |name: String| {
        let label = metadata
            .with(|meta| meta.as_ref().and_then(|m| m.categories.get(&name).cloned()))
            .unwrap_or_else(|| name.clone());
        let query = SearchQuery {
            category: Some(name.clone()),
            ..SearchQuery::default()
        };
        linked_name(filter_href(&name, &query), label)
    });

    let country_name = Callback::new(move |code: String| {
        let label = metadata
            .with(|meta| meta.as_ref().and_then(|m| m.countries.get(&code).cloned()))
            .unwrap_or_else(|| code.clone());
        let query = SearchQuery {
            country: Some(code.clone()),
            ..SearchQuery::default()
        };
        linked_name(filter_href(&code, &query), label)
    });

    let schema_overrides = RenderOverrides {
        name: Some(schema_name),
        ..RenderOverrides::default()
    };
    let category_overrides = RenderOverrides {
        name: Some(category_name),
        ..RenderOverrides::default()
    };
    let country_overrides = RenderOverrides {
        name: Some(country_name),
        ..RenderOverrides::default()
    };

    view! {
      <section>
        <div class="container mx-auto max-w-5xl p-6">
          <div class="mx-auto mb-8 max-w-2xl">
            <SearchBox placeholder on_search />
          </div>
          <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
            <Statistic
              headline=things_headline
              state=schemata
              overrides=schema_overrides
            />
            <Statistic
              headline=collections_headline
              state=categories
              overrides=category_overrides
            />
            <Statistic
              headline=countries_headline
              state=countries
              overrides=country_overrides
            />
          </div>
        </div>
      </section>
    }
}

/// Filter link target for a real entry name. The synthetic aggregate
/// row has no meaningful filter, so it stays plain text.
fn filter_href(name: &str, query: &SearchQuery) -> Option<String> {
    (name != OTHER_LABEL).then(|| format!("{}?{}", Page::Search.path(), query.query_string()))
}

fn linked_name(href: Option<String>, label: String) -> View {
    match href {
        Some(href) => {
            view! { <A href=href class="hover:text-gray-600".to_string()>{ label }</A> }.into_view()
        }
        None => view! { <span>{ label }</span> }.into_view(),
    }
}
