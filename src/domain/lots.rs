use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::BadgeVariant;

/// One product/quantity/price entry within a lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub category: String,
    pub product: String,
    pub measurement: String,
    pub quantity: u64,
    pub price: f64,
    /// Authoritative total as supplied; never recomputed for display.
    pub cost: f64,
    pub description: String,
    pub published_month: String,
    pub guarantee_term: u32,
    pub guarantee_term_type: String,
    pub delivery_term: String,
}

impl LineItem {
    /// quantity × price, used only to flag inconsistent records.
    pub fn expected_cost(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn cost_matches_quantity(&self) -> bool {
        (self.expected_cost() - self.cost).abs() < 0.005
    }
}

/// Kinds of documents attached to a lot, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    TechnicalSpec,
    TechnicalDocumentation,
    ContractProject,
    Contract,
    ExpertiseConclusion,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        Self::TechnicalSpec,
        Self::TechnicalDocumentation,
        Self::ContractProject,
        Self::Contract,
        Self::ExpertiseConclusion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TechnicalSpec => "Technical specification",
            Self::TechnicalDocumentation => "Technical documentation",
            Self::ContractProject => "Contract project",
            Self::Contract => "Contract",
            Self::ExpertiseConclusion => "Expertise conclusion",
        }
    }
}

/// Named document file references; `None` or "" means not published
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentFiles {
    #[serde(default)]
    pub tech_file: Option<String>,
    #[serde(default)]
    pub tech_doc_file: Option<String>,
    #[serde(default)]
    pub contract_pro_file: Option<String>,
    #[serde(default)]
    pub contract_file: Option<String>,
    #[serde(default)]
    pub expertise_file: Option<String>,
}

impl DocumentFiles {
    pub fn get(&self, kind: DocumentKind) -> Option<&str> {
        let file = match kind {
            DocumentKind::TechnicalSpec => &self.tech_file,
            DocumentKind::TechnicalDocumentation => &self.tech_doc_file,
            DocumentKind::ContractProject => &self.contract_pro_file,
            DocumentKind::Contract => &self.contract_file,
            DocumentKind::ExpertiseConclusion => &self.expertise_file,
        };
        file.as_deref().filter(|name| !name.is_empty())
    }

    /// Non-empty references in fixed display order.
    pub fn published(&self) -> Vec<(DocumentKind, &str)> {
        DocumentKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|name| (kind, name)))
            .collect()
    }
}

/// A single tender's publishable unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenderLot {
    pub display_no: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub lot_type: String,
    pub start_cost: f64,
    pub currency: String,
    pub valuation: String,

    // Terms
    pub pledge_name: String,
    pub pledge_value: u32,
    pub term_payment_days: u32,
    pub advance_payment_perc: u32,
    pub term_online_days: u32,
    pub payment_type: String,
    pub financing_source: String,
    pub cost_coef: u32,
    pub tech_coef: u32,

    // Publisher and delivery
    pub publisher: String,
    pub contacts: String,
    pub delivering_region: String,
    pub delivering_district: String,
    pub delivering_address: String,
    pub delivering_phone: String,

    pub addon_description: String,
    pub technical_description: String,

    #[serde(default)]
    pub files: DocumentFiles,
    pub link: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotValidationError {
    #[error("display number must not be empty")]
    EmptyDisplayNo,

    #[error("link '{link}' is not an absolute http(s) URL")]
    InvalidLink { link: String },
}

impl TenderLot {
    pub fn validate(&self) -> Result<(), LotValidationError> {
        if self.display_no.trim().is_empty() {
            return Err(LotValidationError::EmptyDisplayNo);
        }

        let link_ok = url::Url::parse(&self.link)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !link_ok {
            return Err(LotValidationError::InvalidLink {
                link: self.link.clone(),
            });
        }

        Ok(())
    }

    /// Indices of items whose stored cost differs from quantity × price.
    pub fn inconsistent_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.cost_matches_quantity())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn badge(&self) -> BadgeVariant {
        BadgeVariant::for_status(&self.status)
    }
}

/// List-endpoint projection of a lot
#[derive(Debug, Clone, Serialize)]
pub struct LotSummary {
    pub display_no: String,
    pub status: String,
    pub badge: BadgeVariant,
    pub start_cost: f64,
    pub currency: String,
    pub item_count: usize,
}

impl From<&TenderLot> for LotSummary {
    fn from(lot: &TenderLot) -> Self {
        Self {
            display_no: lot.display_no.clone(),
            status: lot.status.clone(),
            badge: lot.badge(),
            start_cost: lot.start_cost,
            currency: lot.currency.clone(),
            item_count: lot.items.len(),
        }
    }
}
