use leptos::*;

/// Controlled search input with a submit button. Enter or the button
/// submits the trimmed value, Escape clears the field.
#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: Signal<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    let (value, set_value) = create_signal(String::new());

    view! {
      <form
        class="flex w-full gap-2"
        autocomplete="off"
        on:submit=move |ev| {
          ev.prevent_default();
          on_search.call(value.get_untracked().trim().to_string());
        }
      >
        <input
          type="search"
          class="w-full rounded bg-gray-50 px-4 py-3 text-gray-700 outline-none"
          placeholder=placeholder
          prop:value=value
          on:input=move |ev| set_value.update(|v| *v = event_target_value(&ev))
          on:keyup=move |ev| {
            ev.stop_propagation();
            let target = event_target::<web_sys::HtmlInputElement>(&ev);
            if ev.key() == "Escape" {
              target.set_value("");
              set_value.update(String::clear);
            }
          }
        />
        <button
          type="submit"
          class="rounded bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-500"
        >
          "Search"
        </button>
      </form>
    }
}
