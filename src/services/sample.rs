//! Built-in lot served when no `LOTS_FILE` is configured.

use chrono::NaiveDate;

use crate::domain::{DocumentFiles, LineItem, TenderLot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn sample_lot() -> TenderLot {
    TenderLot {
        display_no: "LOT-2024-001234".to_string(),
        start_date: date(2024, 1, 15),
        end_date: date(2024, 2, 28),
        status: "Active".to_string(),
        lot_type: "Open Tender".to_string(),
        start_cost: 150_000_000.0,
        currency: "UZS".to_string(),
        valuation: "Lowest Price".to_string(),
        pledge_name: "Required".to_string(),
        pledge_value: 5,
        term_payment_days: 30,
        advance_payment_perc: 30,
        term_online_days: 45,
        payment_type: "Bank Transfer".to_string(),
        financing_source: "State Budget".to_string(),
        cost_coef: 80,
        tech_coef: 20,
        publisher: "Ministry of Health of the Republic of Uzbekistan".to_string(),
        contacts: "+998 71 244 16 30".to_string(),
        delivering_region: "Tashkent City".to_string(),
        delivering_district: "Yunusabad District".to_string(),
        delivering_address: "12 Farobiy Street, Building 5".to_string(),
        delivering_phone: "+998 71 123 45 67".to_string(),
        addon_description: "Additional requirements include certification from the Ministry of \
            Health and compliance with international medical equipment standards. All products \
            must have a minimum 2-year warranty."
            .to_string(),
        technical_description: "Medical equipment must meet ISO 13485 standards. Installation \
            and training services must be provided within 30 days of delivery. All documentation \
            must be in Uzbek and Russian languages."
            .to_string(),
        files: DocumentFiles {
            tech_file: Some("technical_specs.pdf".to_string()),
            tech_doc_file: Some("technical_documentation.pdf".to_string()),
            contract_pro_file: Some("contract_project.pdf".to_string()),
            contract_file: Some("contract_template.pdf".to_string()),
            expertise_file: Some("expertise_conclusion.pdf".to_string()),
        },
        link: "https://uzex.uz/tender/lot/001234".to_string(),
        items: vec![
            LineItem {
                category: "Medical Equipment".to_string(),
                product: "Patient Monitoring System".to_string(),
                measurement: "Unit".to_string(),
                quantity: 50,
                price: 2_500_000.0,
                cost: 125_000_000.0,
                description: "Multi-parameter patient monitoring system with ECG, SpO2, NIBP, \
                    temperature monitoring"
                    .to_string(),
                published_month: "January 2024".to_string(),
                guarantee_term: 24,
                guarantee_term_type: "Months".to_string(),
                delivery_term: "60 days from contract signing".to_string(),
            },
            LineItem {
                category: "Laboratory Equipment".to_string(),
                product: "Hematology Analyzer".to_string(),
                measurement: "Unit".to_string(),
                quantity: 10,
                price: 2_500_000.0,
                cost: 25_000_000.0,
                description: "Automated hematology analyzer with 23 parameters, throughput 60 \
                    samples/hour"
                    .to_string(),
                published_month: "January 2024".to_string(),
                guarantee_term: 36,
                guarantee_term_type: "Months".to_string(),
                delivery_term: "90 days from contract signing".to_string(),
            },
        ],
    }
}
