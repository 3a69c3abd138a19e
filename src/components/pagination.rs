//! Pagination Component
//!
//! Page buttons with first/last boundaries, one sibling on each side of the
//! current page and ellipses for the gaps.

use leptos::prelude::*;

const BOUNDARY_COUNT: i64 = 1;
const SIBLING_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

fn pages(start: i64, end: i64) -> impl Iterator<Item = PageItem> {
    (start.max(1)..=end).map(|p| PageItem::Page(p as u32))
}

/// Layout of the page buttons for `current` of `count` pages
pub fn pagination_items(current: u32, count: u32) -> Vec<PageItem> {
    let (page, count) = (i64::from(current), i64::from(count));
    let (boundary, sibling) = (BOUNDARY_COUNT, SIBLING_COUNT);

    let start_end = boundary.min(count);
    let end_start = (count - boundary + 1).max(boundary + 1);

    let siblings_start = (page - sibling).min(count - boundary - sibling * 2 - 1).max(boundary + 2);
    let siblings_end = (page + sibling)
        .max(boundary + sibling * 2 + 2)
        .min(if end_start <= count { end_start - 2 } else { count - 1 });

    let mut items: Vec<PageItem> = pages(1, start_end).collect();

    if siblings_start > boundary + 2 {
        items.push(PageItem::Ellipsis);
    } else if boundary + 1 < count - boundary {
        items.push(PageItem::Page((boundary + 1) as u32));
    }

    items.extend(pages(siblings_start, siblings_end));

    if siblings_end < count - boundary - 1 {
        items.push(PageItem::Ellipsis);
    } else if count - boundary > boundary {
        items.push(PageItem::Page((count - boundary) as u32));
    }

    items.extend(pages(end_start, count));
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] page_count: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="pagination">
            <button
                class="page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                let current = page.get();
                pagination_items(current, page_count.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(p) => view! {
                            <button
                                class="page-btn"
                                class:active=p == current
                                on:click=move |_| on_change.run(p)
                            >
                                {p}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || page.get() >= page_count.get()
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_first_page() {
        assert_eq!(
            pagination_items(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(
            pagination_items(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            pagination_items(10, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_few_pages_have_no_gaps() {
        assert_eq!(pagination_items(4, 7), (1..=7).map(Page).collect::<Vec<_>>());
        assert_eq!(pagination_items(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(pagination_items(1, 1), vec![Page(1)]);
        assert!(pagination_items(1, 0).is_empty());
    }
}
