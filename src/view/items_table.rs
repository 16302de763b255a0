//! Products & items table.

use crate::domain::LineItem;

use super::format::format_grouped;
use super::html::Html;

/// Column headers; `true` marks right-aligned numeric columns.
const COLUMNS: [(&str, bool); 10] = [
    ("Category", false),
    ("Product", false),
    ("Description", false),
    ("Quantity", true),
    ("Unit", true),
    ("Price", true),
    ("Total Cost", true),
    ("Guarantee", false),
    ("Delivery", false),
    ("Published", false),
];

/// Render one row per item, in input order. An empty slice renders an
/// empty body.
pub fn render_items_table(html: &mut Html, items: &[LineItem]) {
    html.el("div", &[("class", "items-table")], |h| {
        h.el("table", &[], |h| {
            h.el("thead", &[], |h| {
                h.el("tr", &[], |h| {
                    for (title, numeric) in COLUMNS {
                        let class = if numeric { "num" } else { "" };
                        h.el_text("th", &[("class", class)], title);
                    }
                });
            });
            h.el("tbody", &[], |h| {
                for (index, item) in items.iter().enumerate() {
                    render_row(h, index, item);
                }
            });
        });
    });
}

fn render_row(html: &mut Html, index: usize, item: &LineItem) {
    let index = index.to_string();
    html.el("tr", &[("class", "item-row"), ("data-index", &index)], |h| {
        h.el("td", &[], |h| {
            h.el_text("span", &[("class", "badge badge-outline")], &item.category);
        });
        h.el_text("td", &[("class", "product")], &item.product);
        h.el_text("td", &[("class", "description")], &item.description);
        h.el_text("td", &[("class", "num")], &item.quantity.to_string());
        h.el_text("td", &[("class", "num muted")], &item.measurement);
        h.el_text("td", &[("class", "num")], &format_grouped(item.price));
        h.el_text("td", &[("class", "num total")], &format_grouped(item.cost));
        h.el_text(
            "td",
            &[],
            &format!("{} {}", item.guarantee_term, item.guarantee_term_type),
        );
        h.el_text("td", &[("class", "muted")], &item.delivery_term);
        h.el_text("td", &[], &item.published_month);
    });
}

/// Standalone table markup.
pub fn items_table(items: &[LineItem]) -> String {
    let mut html = Html::new();
    render_items_table(&mut html, items);
    html.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample::sample_lot;

    fn body_rows(markup: &str) -> Vec<&str> {
        markup
            .split("<tr class=\"item-row\"")
            .skip(1)
            .collect()
    }

    #[test]
    fn one_row_per_item_in_input_order() {
        let items = sample_lot().items;
        let markup = items_table(&items);

        let rows = body_rows(&markup);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Patient Monitoring System"));
        assert!(rows[1].contains("Hematology Analyzer"));
        assert!(rows[0].contains("data-index=\"0\""));
        assert!(rows[1].contains("data-index=\"1\""));
    }

    #[test]
    fn empty_items_render_empty_body() {
        let markup = items_table(&[]);
        assert!(markup.contains("<tbody></tbody>"));
        assert!(body_rows(&markup).is_empty());
        assert_eq!(markup.matches("<th ").count(), COLUMNS.len());
    }

    #[test]
    fn prices_are_grouped_and_cost_is_shown_verbatim() {
        let mut items = sample_lot().items;
        items.truncate(1);
        let markup = items_table(&items);

        assert!(markup.contains(r#"<td class="num">2,500,000</td>"#));
        assert!(markup.contains(r#"<td class="num total">125,000,000</td>"#));
        assert!(markup.contains(r#"<td class="num">50</td>"#));
        assert!(markup.contains("<td>24 Months</td>"));
    }

    #[test]
    fn inconsistent_cost_is_not_recomputed() {
        let mut items = sample_lot().items;
        items.truncate(1);
        items[0].cost = 7_777.0;
        let markup = items_table(&items);

        assert!(markup.contains(r#"<td class="num total">7,777</td>"#));
        assert!(!markup.contains("125,000,000"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let mut items = sample_lot().items;
        items.truncate(1);
        items[0].product = "<script>alert(1)</script>".to_string();
        let markup = items_table(&items);

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }
}
