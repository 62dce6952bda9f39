use leptos::*;

use dsk_boundary::StatisticSet;

/// How many real entries a statistic panel displays at most.
pub const DISPLAY_LIMIT: usize = 15;

/// Number of placeholder rows rendered while loading.
pub const SKELETON_ROWS: usize = 10;

/// Label of the synthetic row summarizing entries beyond the limit.
pub const OTHER_LABEL: &str = "and other";

/// Lifecycle of a statistic panel: either the data has not arrived yet
/// or it is fully available. While `Loading` there is no data to
/// misread, by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatisticState {
    #[default]
    Loading,
    Loaded(StatisticSet),
}

impl StatisticState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A (name, count) pair selected for display; either a real entry or
/// the synthetic aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Placeholder,
    Entry(DisplayEntry),
}

/// Selects the `limit` highest-count entries in descending order.
///
/// Returns the selected entries and the number of *excluded keys*.
/// Note that the remainder deliberately counts the excluded entries
/// themselves, not the sum of their counts.
///
/// The sort is stable and the input map is key-ordered, so ties come
/// out in a fixed order for a given input.
pub fn select_top_entries(
    statistic: &StatisticSet,
    limit: usize,
) -> (Vec<DisplayEntry>, usize) {
    let mut entries: Vec<DisplayEntry> = statistic
        .iter()
        .map(|(name, count)| DisplayEntry {
            name: name.clone(),
            count: *count,
        })
        .collect();
    entries.sort_by_key(|entry| entry.count);
    let remainder = entries.len().saturating_sub(limit);
    entries.drain(..remainder);
    entries.reverse();
    (entries, remainder)
}

/// Computes the rows a panel displays for the given state: a fixed
/// number of placeholders while loading, otherwise the ranked entries
/// plus the "and other" aggregate when some were cut off.
pub fn display_rows(state: &StatisticState, limit: usize) -> Vec<DisplayRow> {
    match state {
        StatisticState::Loading => (0..SKELETON_ROWS).map(|_| DisplayRow::Placeholder).collect(),
        StatisticState::Loaded(statistic) => {
            let (top, remainder) = select_top_entries(statistic, limit);
            let mut rows: Vec<DisplayRow> = top.into_iter().map(DisplayRow::Entry).collect();
            if remainder > 0 {
                rows.push(DisplayRow::Entry(DisplayEntry {
                    name: OTHER_LABEL.to_string(),
                    count: remainder as u64,
                }));
            }
            rows
        }
    }
}

/// Groups digits of a count for display, e.g. `1234567` -> `1,234,567`.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub type NameRenderer = Callback<String, View>;
pub type CountRenderer = Callback<u64, View>;
pub type RowRenderer = Callback<RowContext, View>;

/// Everything a row renderer needs: the entry itself and the resolved
/// sub-renderers for its name and count cells.
#[derive(Clone)]
pub struct RowContext {
    pub entry: DisplayEntry,
    pub name: NameRenderer,
    pub count: CountRenderer,
}

/// Per-panel renderer overrides. Unset fields fall back to the
/// defaults supplied by the component.
#[derive(Clone, Copy, Default)]
pub struct RenderOverrides {
    pub name: Option<NameRenderer>,
    pub count: Option<CountRenderer>,
    pub row: Option<RowRenderer>,
}

impl RenderOverrides {
    fn resolve(self) -> (NameRenderer, CountRenderer, RowRenderer) {
        (
            self.name.unwrap_or_else(|| Callback::new(default_name)),
            self.count.unwrap_or_else(|| Callback::new(default_count)),
            self.row.unwrap_or_else(|| Callback::new(default_row)),
        )
    }
}

fn default_name(name: String) -> View {
    view! { <span>{ name }</span> }.into_view()
}

fn default_count(count: u64) -> View {
    view! { <span class="text-gray-500">{ format_count(count) }</span> }.into_view()
}

fn default_row(ctx: RowContext) -> View {
    let RowContext { entry, name, count } = ctx;
    view! {
      <li class="flex items-center justify-between py-1">
        { name.call(entry.name.clone()) }
        { count.call(entry.count) }
      </li>
    }
    .into_view()
}

fn render_rows(
    rows: Vec<DisplayRow>,
    name: NameRenderer,
    count: CountRenderer,
    row: RowRenderer,
) -> Vec<View> {
    rows.into_iter()
        .map(|display_row| match display_row {
            DisplayRow::Placeholder => view! {
              <li class="py-2">
                <span class="block h-4 animate-pulse rounded bg-gray-200"></span>
              </li>
            }
            .into_view(),
            DisplayRow::Entry(entry) => row.call(RowContext { entry, name, count }),
        })
        .collect()
}

const fn heading_class(is_loading: bool) -> &'static str {
    if is_loading {
        "mb-3 animate-pulse text-base font-semibold text-gray-400"
    } else {
        "mb-3 text-base font-semibold text-gray-900"
    }
}

/// A titled panel listing the highest-count entries of one statistic.
///
/// Shows at most [`DISPLAY_LIMIT`] real rows plus one "and other" row,
/// or [`SKELETON_ROWS`] placeholders while the data is loading.
#[component]
pub fn Statistic<H>(
    headline: H,
    #[prop(into)] state: Signal<StatisticState>,
    #[prop(optional)] overrides: RenderOverrides,
) -> impl IntoView
where
    H: IntoView + 'static,
{
    let (name, count, row) = overrides.resolve();

    view! {
      <div class="rounded-lg bg-white p-5 shadow">
        <h5 class=move || heading_class(state.with(StatisticState::is_loading))>
          { headline }
        </h5>
        <ul class="divide-y divide-gray-100">
          { move || state.with(|s| render_rows(display_rows(s, DISPLAY_LIMIT), name, count, row)) }
        </ul>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;

    fn statistic_set(entries: &[(&str, u64)]) -> StatisticSet {
        entries
            .iter()
            .map(|(name, count)| ((*name).to_string(), *count))
            .collect()
    }

    fn seventeen_entries() -> StatisticSet {
        (0..17u64).map(|i| (format!("k{i:02}"), i + 1)).collect()
    }

    #[test]
    fn returns_all_entries_descending_when_under_limit() {
        let set = statistic_set(&[("a", 5), ("b", 20), ("c", 1)]);
        let (top, remainder) = select_top_entries(&set, DISPLAY_LIMIT);
        assert_eq!(remainder, 0);
        let pairs: Vec<_> = top.iter().map(|e| (e.name.as_str(), e.count)).collect();
        assert_eq!(pairs, vec![("b", 20), ("a", 5), ("c", 1)]);
    }

    #[test]
    fn caps_at_limit_and_reports_excluded_key_count() {
        let set = seventeen_entries();
        let (top, remainder) = select_top_entries(&set, DISPLAY_LIMIT);
        assert_eq!(top.len(), 15);
        assert_eq!(remainder, 2);
        assert_eq!(top.first().map(|e| e.count), Some(17));
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn ties_break_deterministically() {
        let set = statistic_set(&[("a", 5), ("b", 5), ("c", 5)]);
        let first = select_top_entries(&set, DISPLAY_LIMIT);
        let second = select_top_entries(&set, DISPLAY_LIMIT);
        assert_eq!(first, second);
        let names: Vec<_> = first.0.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn empty_set_yields_no_rows() {
        let rows = display_rows(&StatisticState::Loaded(StatisticSet::new()), DISPLAY_LIMIT);
        assert!(rows.is_empty());
    }

    #[test]
    fn appends_synthetic_other_row() {
        let rows = display_rows(&StatisticState::Loaded(seventeen_entries()), DISPLAY_LIMIT);
        assert_eq!(rows.len(), 16);
        match rows.last().unwrap() {
            DisplayRow::Entry(entry) => {
                assert_eq!(entry.name, OTHER_LABEL);
                assert_eq!(entry.count, 2);
            }
            DisplayRow::Placeholder => panic!("expected the aggregate row"),
        }
    }

    #[test]
    fn no_other_row_at_or_below_limit() {
        let set: StatisticSet = (0..15u64).map(|i| (format!("k{i:02}"), i + 1)).collect();
        let rows = display_rows(&StatisticState::Loaded(set), DISPLAY_LIMIT);
        assert_eq!(rows.len(), 15);
        assert!(!matches!(
            rows.last().unwrap(),
            DisplayRow::Entry(DisplayEntry { name, .. }) if name == OTHER_LABEL
        ));
    }

    #[test]
    fn loading_renders_exactly_ten_placeholders() {
        let rows = display_rows(&StatisticState::Loading, DISPLAY_LIMIT);
        assert_eq!(rows.len(), SKELETON_ROWS);
        assert!(rows.iter().all(|r| *r == DisplayRow::Placeholder));
    }

    #[test]
    fn format_count_groups_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn custom_name_renderer_applies_to_every_row() {
        let runtime = create_runtime();
        let name_calls = Rc::new(Cell::new(0));
        let counted = Rc::new(RefCell::new(Vec::new()));
        let names = Rc::clone(&name_calls);
        let counts = Rc::clone(&counted);
        let overrides = RenderOverrides {
            name: Some(Callback::new(move |_name: String| {
                names.set(names.get() + 1);
                ().into_view()
            })),
            count: Some(Callback::new(move |count: u64| {
                counts.borrow_mut().push(count);
                ().into_view()
            })),
            ..RenderOverrides::default()
        };
        let (name, count, row) = overrides.resolve();
        let rows = display_rows(&StatisticState::Loaded(seventeen_entries()), DISPLAY_LIMIT);
        let views = render_rows(rows, name, count, row);
        assert_eq!(views.len(), 16);
        assert_eq!(name_calls.get(), 16);
        // the count cell of every row is still rendered, untouched by
        // the name override: top 15 counts descending plus the
        // aggregate's excluded-key count
        let mut expected: Vec<u64> = (3..=17u64).rev().collect();
        expected.push(2);
        assert_eq!(*counted.borrow(), expected);
        runtime.dispose();
    }

    #[test]
    fn placeholders_never_invoke_renderers() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let overrides = RenderOverrides {
            row: Some(Callback::new(move |_ctx: RowContext| {
                seen.set(seen.get() + 1);
                ().into_view()
            })),
            ..RenderOverrides::default()
        };
        let (name, count, row) = overrides.resolve();
        let rows = display_rows(&StatisticState::Loading, DISPLAY_LIMIT);
        let views = render_rows(rows, name, count, row);
        assert_eq!(views.len(), SKELETON_ROWS);
        assert_eq!(calls.get(), 0);
        runtime.dispose();
    }
}
