//! Tender lot detail page.
//!
//! The page is a pure function of a [`TenderLot`] and a [`ViewState`]. The
//! four collapsible sections keep their open flags in the query string, and
//! each section header links to the same page with only its own flag flipped.

use serde::Deserialize;
use url::Url;

use crate::domain::{DocumentKind, TenderLot};

use super::format::{format_date, format_days, format_money, format_percent};
use super::html::Html;
use super::items_table::render_items_table;

const STYLES: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc;color:#0f172a}\
.page{max-width:80rem;margin:0 auto;padding:2rem;display:grid;gap:1.5rem}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.5rem;padding:1.5rem}\
.hero{border-width:2px}\
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr))}\
.info-label,.muted{color:#64748b;font-size:.875rem}\
.info-value{font-weight:500}\
.badge{border-radius:9999px;padding:.125rem .625rem;font-size:.75rem;font-weight:600}\
.badge-success{background:#16a34a;color:#fff}\
.badge-destructive{background:#dc2626;color:#fff}\
.badge-warning{background:#f59e0b;color:#fff}\
.badge-secondary{background:#e2e8f0}\
.badge-outline{border:1px solid #cbd5e1}\
.budget{font-size:1.875rem;font-weight:700}\
.section-toggle{display:flex;justify-content:space-between;text-decoration:none;color:inherit}\
.section[data-state=open] .icon-chevron{transform:rotate(180deg)}\
.items-table{overflow:auto}\
table{width:100%;border-collapse:collapse}\
th,td{padding:.5rem;border-bottom:1px solid #e2e8f0;text-align:left}\
.num{text-align:right}\
.total{font-weight:700}";

/// Icon stand-ins for info labels and headings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Calendar,
    Money,
    Building,
    Location,
    Phone,
    Document,
    Download,
    Package,
    Payment,
    Clock,
    Award,
    ExternalLink,
    Chevron,
}

impl LabelKind {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Money => "money",
            Self::Building => "building",
            Self::Location => "location",
            Self::Phone => "phone",
            Self::Document => "document",
            Self::Download => "download",
            Self::Package => "package",
            Self::Payment => "payment",
            Self::Clock => "clock",
            Self::Award => "award",
            Self::ExternalLink => "external-link",
            Self::Chevron => "chevron",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Calendar => "📅",
            Self::Money => "$",
            Self::Building => "🏢",
            Self::Location => "📍",
            Self::Phone => "☎",
            Self::Document => "📄",
            Self::Download => "⬇",
            Self::Package => "📦",
            Self::Payment => "💳",
            Self::Clock => "⏱",
            Self::Award => "🏅",
            Self::ExternalLink => "↗",
            Self::Chevron => "⌄",
        }
    }

    fn render(self, html: &mut Html) {
        let class = format!("icon icon-{}", self.slug());
        html.el_text("span", &[("class", &class)], self.glyph());
    }
}

/// The four collapsible sections of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    LotDetails,
    Publisher,
    AdditionalInfo,
    TechnicalDescription,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Self::LotDetails,
        Self::Publisher,
        Self::AdditionalInfo,
        Self::TechnicalDescription,
    ];

    /// Query-string key holding this section's open flag.
    pub fn key(self) -> &'static str {
        match self {
            Self::LotDetails => "details",
            Self::Publisher => "publisher",
            Self::AdditionalInfo => "addon",
            Self::TechnicalDescription => "tech",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::LotDetails => "Lot Details",
            Self::Publisher => "Publisher & Contacts",
            Self::AdditionalInfo => "Additional Information",
            Self::TechnicalDescription => "Technical Description",
        }
    }

    fn label_kind(self) -> LabelKind {
        match self {
            Self::LotDetails => LabelKind::Package,
            Self::Publisher => LabelKind::Building,
            Self::AdditionalInfo | Self::TechnicalDescription => LabelKind::Document,
        }
    }
}

/// Open/closed flag per collapsible section, scoped to one page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub details: bool,
    pub publisher: bool,
    pub addon: bool,
    pub tech: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            details: true,
            publisher: true,
            addon: false,
            tech: false,
        }
    }
}

impl ViewState {
    pub fn is_open(&self, section: Section) -> bool {
        match section {
            Section::LotDetails => self.details,
            Section::Publisher => self.publisher,
            Section::AdditionalInfo => self.addon,
            Section::TechnicalDescription => self.tech,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::LotDetails => &mut self.details,
            Section::Publisher => &mut self.publisher,
            Section::AdditionalInfo => &mut self.addon,
            Section::TechnicalDescription => &mut self.tech,
        };
        *flag = !*flag;
    }

    pub fn toggled(mut self, section: Section) -> Self {
        self.toggle(section);
        self
    }

    pub fn query_string(&self) -> String {
        Section::ALL
            .iter()
            .map(|&s| format!("{}={}", s.key(), self.is_open(s)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode `segment` so it stays a single path segment (`#`, `?`,
/// `/`, `%` and spaces included).
fn encode_path_segment(segment: &str) -> String {
    let Ok(mut scratch) = Url::parse("http://localhost/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = scratch.path_segments_mut() {
        segments.clear().push(segment);
    }
    scratch.path().trim_start_matches('/').to_string()
}

struct InfoItem {
    kind: LabelKind,
    label: &'static str,
    value: String,
}

impl InfoItem {
    fn new(kind: LabelKind, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            label,
            value: value.into(),
        }
    }
}

fn render_info_grid(html: &mut Html, items: &[InfoItem]) {
    html.el("div", &[("class", "grid")], |h| {
        for item in items {
            h.el("div", &[("class", "info-item")], |h| {
                item.kind.render(h);
                h.el("div", &[], |h| {
                    h.el_text("p", &[("class", "info-label")], item.label);
                    h.el_text("p", &[("class", "info-value")], &item.value);
                });
            });
        }
    });
}

/// Renders one lot under a given view state.
pub struct LotPage<'a> {
    lot: &'a TenderLot,
    state: ViewState,
    files_base_url: &'a str,
}

impl<'a> LotPage<'a> {
    pub fn new(lot: &'a TenderLot, state: ViewState, files_base_url: &'a str) -> Self {
        Self {
            lot,
            state,
            files_base_url,
        }
    }

    /// Full HTML document.
    pub fn render(&self) -> String {
        let mut html = Html::new();
        html.raw("<!DOCTYPE html>");
        html.el("html", &[("lang", "en")], |h| {
            h.el("head", &[], |h| {
                h.raw("<meta charset=\"utf-8\">");
                h.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
                h.el_text("title", &[], &format!("Lot {}", self.lot.display_no));
                h.el("style", &[], |h| {
                    h.raw(STYLES);
                });
            });
            h.el("body", &[], |h| {
                h.el("main", &[("class", "page")], |h| self.render_body(h));
            });
        });
        html.into_string()
    }

    fn render_body(&self, html: &mut Html) {
        self.render_hero(html);
        for section in Section::ALL {
            self.render_section(html, section);
        }
        self.render_files(html);
        self.render_items(html);
        self.render_footer(html);
    }

    fn render_hero(&self, html: &mut Html) {
        let lot = self.lot;
        let badge_class = format!("badge badge-{}", lot.badge().as_str());

        html.el("section", &[("class", "card hero"), ("id", "summary")], |h| {
            h.el("header", &[("class", "hero-header")], |h| {
                h.el("div", &[], |h| {
                    h.el_text("h1", &[], &lot.display_no);
                    h.el_text("span", &[("class", &badge_class)], &lot.status);
                    h.el_text("p", &[("class", "muted")], &lot.lot_type);
                });
                h.el("div", &[("class", "budget-box")], |h| {
                    h.el_text("p", &[("class", "muted")], "Total Budget");
                    h.el_text(
                        "p",
                        &[("class", "budget")],
                        &format_money(lot.start_cost, &lot.currency),
                    );
                });
            });
            render_info_grid(
                h,
                &[
                    InfoItem::new(LabelKind::Calendar, "Start Date", format_date(lot.start_date)),
                    InfoItem::new(LabelKind::Calendar, "End Date", format_date(lot.end_date)),
                    InfoItem::new(
                        LabelKind::Clock,
                        "Active Days",
                        format_days(lot.term_online_days),
                    ),
                    InfoItem::new(LabelKind::Award, "Evaluation Method", lot.valuation.as_str()),
                ],
            );
        });
    }

    fn render_section(&self, html: &mut Html, section: Section) {
        let open = self.state.is_open(section);
        let id = format!("section-{}", section.key());
        let href = format!(
            "?{}#{}",
            self.state.toggled(section).query_string(),
            id
        );
        let expanded = open.to_string();

        html.el(
            "section",
            &[
                ("class", "card section"),
                ("id", &id),
                ("data-state", if open { "open" } else { "closed" }),
            ],
            |h| {
                h.el(
                    "a",
                    &[
                        ("class", "section-toggle"),
                        ("href", &href),
                        ("aria-expanded", &expanded),
                    ],
                    |h| {
                        h.el("h2", &[], |h| {
                            section.label_kind().render(h);
                            h.text(section.title());
                        });
                        LabelKind::Chevron.render(h);
                    },
                );
                // Collapsed sections render no content at all.
                if open {
                    let content_id = format!("content-{}", section.key());
                    h.el(
                        "div",
                        &[("class", "section-content"), ("id", &content_id)],
                        |h| self.render_section_content(h, section),
                    );
                }
            },
        );
    }

    fn render_section_content(&self, html: &mut Html, section: Section) {
        let lot = self.lot;
        match section {
            Section::LotDetails => render_info_grid(
                html,
                &[
                    InfoItem::new(
                        LabelKind::Money,
                        "Pledge Required",
                        format!("{} ({}%)", lot.pledge_name, lot.pledge_value),
                    ),
                    InfoItem::new(LabelKind::Payment, "Payment Method", lot.payment_type.as_str()),
                    InfoItem::new(
                        LabelKind::Clock,
                        "Payment Term",
                        format_days(lot.term_payment_days),
                    ),
                    InfoItem::new(
                        LabelKind::Money,
                        "Advance Payment",
                        format_percent(lot.advance_payment_perc),
                    ),
                    InfoItem::new(
                        LabelKind::Document,
                        "Financing Source",
                        lot.financing_source.as_str(),
                    ),
                    InfoItem::new(
                        LabelKind::Award,
                        "Price Coefficient",
                        format_percent(lot.cost_coef),
                    ),
                    InfoItem::new(
                        LabelKind::Award,
                        "Technical Coefficient",
                        format_percent(lot.tech_coef),
                    ),
                ],
            ),
            Section::Publisher => {
                html.el("div", &[("class", "publisher")], |h| {
                    h.el_text("p", &[("class", "info-label")], "Publishing Organization");
                    h.el_text("p", &[("class", "publisher-name")], &lot.publisher);
                    h.el("p", &[("class", "muted")], |h| {
                        LabelKind::Phone.render(h);
                        h.text(&lot.contacts);
                    });
                });
                html.raw("<hr>");
                render_info_grid(
                    html,
                    &[
                        InfoItem::new(LabelKind::Location, "Region", lot.delivering_region.as_str()),
                        InfoItem::new(
                            LabelKind::Location,
                            "District",
                            lot.delivering_district.as_str(),
                        ),
                        InfoItem::new(
                            LabelKind::Location,
                            "Delivery Address",
                            lot.delivering_address.as_str(),
                        ),
                        InfoItem::new(
                            LabelKind::Phone,
                            "Delivery Phone",
                            lot.delivering_phone.as_str(),
                        ),
                    ],
                );
            }
            Section::AdditionalInfo => {
                html.el_text("p", &[("class", "muted")], &lot.addon_description);
            }
            Section::TechnicalDescription => {
                html.el_text("p", &[("class", "muted")], &lot.technical_description);
            }
        }
    }

    fn render_files(&self, html: &mut Html) {
        html.el("section", &[("class", "card"), ("id", "files")], |h| {
            h.el("h2", &[], |h| {
                LabelKind::Download.render(h);
                h.text("Documents & Files");
            });
            h.el("div", &[("class", "grid")], |h| {
                for (kind, name) in self.lot.files.published() {
                    self.render_file_download(h, kind, name);
                }
            });
        });
    }

    fn render_file_download(&self, html: &mut Html, kind: DocumentKind, name: &str) {
        let href = format!("{}/{}", self.files_base_url, encode_path_segment(name));
        html.el(
            "a",
            &[
                ("class", "file-download"),
                ("href", &href),
                ("title", kind.label()),
                ("download", ""),
            ],
            |h| {
                LabelKind::Document.render(h);
                h.text(name);
                LabelKind::Download.render(h);
            },
        );
    }

    fn render_items(&self, html: &mut Html) {
        html.el("section", &[("class", "card"), ("id", "items")], |h| {
            h.el_text("h2", &[], "Products & Items");
            h.el_text(
                "p",
                &[("class", "muted")],
                "Detailed list of all products included in this tender lot",
            );
            render_items_table(h, &self.lot.items);
        });
    }

    fn render_footer(&self, html: &mut Html) {
        html.el("footer", &[("class", "card footer")], |h| {
            h.el("div", &[], |h| {
                h.el_text("p", &[("class", "info-value")], "View Original Announcement");
                h.el_text(
                    "p",
                    &[("class", "muted")],
                    "Visit the official tender platform for more details",
                );
            });
            h.el(
                "a",
                &[
                    ("class", "button external"),
                    ("href", &self.lot.link),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                |h| {
                    h.text("Open on UZEX ");
                    LabelKind::ExternalLink.render(h);
                },
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample::sample_lot;

    fn render(lot: &TenderLot, state: ViewState) -> String {
        LotPage::new(lot, state, "/files").render()
    }

    fn open_sections(markup: &str) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| markup.contains(&format!("id=\"content-{}\"", s.key())))
            .collect()
    }

    #[test]
    fn default_state_opens_details_and_publisher() {
        let state = ViewState::default();
        assert!(state.is_open(Section::LotDetails));
        assert!(state.is_open(Section::Publisher));
        assert!(!state.is_open(Section::AdditionalInfo));
        assert!(!state.is_open(Section::TechnicalDescription));

        let markup = render(&sample_lot(), state);
        assert_eq!(
            open_sections(&markup),
            vec![Section::LotDetails, Section::Publisher]
        );
        assert!(!markup.contains("ISO 13485"));
    }

    #[test]
    fn toggling_one_section_leaves_the_others_alone() {
        let lot = sample_lot();
        let base = ViewState::default();

        for section in Section::ALL {
            let toggled = base.toggled(section);
            let before = open_sections(&render(&lot, base));
            let after = open_sections(&render(&lot, toggled));

            for other in Section::ALL {
                let was = before.contains(&other);
                let is = after.contains(&other);
                if other == section {
                    assert_ne!(was, is, "{other:?} should flip");
                } else {
                    assert_eq!(was, is, "{other:?} should not change");
                }
            }
        }
    }

    #[test]
    fn toggle_links_flip_only_their_own_flag() {
        let markup = render(&sample_lot(), ViewState::default());

        assert!(markup.contains(
            "href=\"?details=false&amp;publisher=true&amp;addon=false&amp;tech=false#section-details\""
        ));
        assert!(markup.contains(
            "href=\"?details=true&amp;publisher=true&amp;addon=true&amp;tech=false#section-addon\""
        ));
    }

    #[test]
    fn query_string_round_trips_through_toggle() {
        let mut state = ViewState::default();
        state.toggle(Section::TechnicalDescription);
        assert_eq!(
            state.query_string(),
            "details=true&publisher=true&addon=false&tech=true"
        );
        state.toggle(Section::TechnicalDescription);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn hero_shows_badge_budget_and_dates() {
        let markup = render(&sample_lot(), ViewState::default());

        assert!(markup.contains(r#"<span class="badge badge-success">Active</span>"#));
        assert!(markup.contains("150,000,000 UZS"));
        assert!(markup.contains("1/15/2024"));
        assert!(markup.contains("2/28/2024"));
        assert!(markup.contains("45 days"));
        assert!(markup.contains("Lowest Price"));
    }

    #[test]
    fn badge_follows_status_classification() {
        let mut lot = sample_lot();
        lot.status = "CLOSED".to_string();
        let markup = render(&lot, ViewState::default());
        assert!(markup.contains(r#"<span class="badge badge-destructive">CLOSED</span>"#));

        lot.status = "Archived".to_string();
        let markup = render(&lot, ViewState::default());
        assert!(markup.contains(r#"<span class="badge badge-secondary">Archived</span>"#));
    }

    #[test]
    fn lot_details_interpolate_percentages_and_days() {
        let markup = render(&sample_lot(), ViewState::default());

        assert!(markup.contains("Required (5%)"));
        assert!(markup.contains("30 days"));
        assert!(markup.contains("80%"));
        assert!(markup.contains("20%"));
    }

    #[test]
    fn one_download_per_non_empty_file() {
        let mut lot = sample_lot();
        let markup = render(&lot, ViewState::default());
        assert_eq!(markup.matches("class=\"file-download\"").count(), 5);

        lot.files.tech_doc_file = Some(String::new());
        lot.files.expertise_file = None;
        let markup = render(&lot, ViewState::default());
        assert_eq!(markup.matches("class=\"file-download\"").count(), 3);
        assert!(markup.contains("href=\"/files/technical_specs.pdf\""));
        assert!(!markup.contains("technical_documentation.pdf"));
        assert!(!markup.contains("expertise_conclusion.pdf"));
    }

    #[test]
    fn download_names_are_encoded_as_one_path_segment() {
        let mut lot = sample_lot();
        lot.files.tech_file = Some("spec #1?v=2.pdf".to_string());
        lot.files.contract_file = Some("drafts/100%.pdf".to_string());
        let markup = render(&lot, ViewState::default());

        assert!(markup.contains(r#"href="/files/spec%20%231%3Fv=2.pdf""#));
        assert!(markup.contains(r#"href="/files/drafts%2F100%25.pdf""#));
        // Visible label keeps the original name
        assert!(markup.contains("spec #1?v=2.pdf"));
    }

    #[test]
    fn plain_file_names_are_unchanged() {
        assert_eq!(encode_path_segment("technical_specs.pdf"), "technical_specs.pdf");
    }

    #[test]
    fn external_link_opens_in_new_context() {
        let markup = render(&sample_lot(), ViewState::default());
        assert!(markup.contains(
            r#"href="https://uzex.uz/tender/lot/001234" target="_blank" rel="noopener noreferrer""#
        ));
    }

    #[test]
    fn page_embeds_items_table() {
        let markup = render(&sample_lot(), ViewState::default());
        assert_eq!(markup.matches("<tr class=\"item-row\"").count(), 2);
        assert!(markup.starts_with("<!DOCTYPE html>"));
    }
}
