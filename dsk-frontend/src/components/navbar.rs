use leptos::*;
use leptos_router::*;

use crate::pages::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="container relative mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href=Page::Home.path()>"DocuSeek"</A>
          </div>

          // Menu items
          <div class="hidden space-x-6 md:flex">
            <MenuItem page=Page::Home label="Home" />
            <MenuItem page=Page::Search label="Search" />
          </div>
        </div>
      </nav>
    }
}

// TODO: Highlight active item.
#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
