//! Builders for result-file fixtures.
//!
//! `ResultCsvBuilder` writes properly quoted CSV so tests can focus on
//! values instead of escaping. `record_row` plays the part of the scraper's
//! CSV writer for round-trip tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use scrapejobs::results::{
    canonical_header, About, AboutOption, Address, Image, LinkSource, Owner, Review,
};
use scrapejobs::{JobData, ResultRecord};

/// Builder for CSV result documents.
pub struct ResultCsvBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultCsvBuilder {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Starts from the full canonical header in writer order.
    pub fn canonical() -> Self {
        Self::new(&canonical_header())
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn owned_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn build(&self) -> String {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer
            .write_record(&self.header)
            .expect("Failed to write header");
        for row in &self.rows {
            writer.write_record(row).expect("Failed to write row");
        }
        let bytes = writer.into_inner().expect("Failed to flush csv");
        String::from_utf8(bytes).expect("csv output is utf-8")
    }
}

fn value<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).expect("Failed to encode json cell")
}

/// Empty arrays and objects become `null`, as the scraper's writer emits
/// them for nil slices and maps.
fn nil_empty(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match value {
        Value::Array(items) if items.is_empty() => Value::Null,
        Value::Object(map) if map.is_empty() => Value::Null,
        Value::Array(items) => Value::Array(items.into_iter().map(nil_empty).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, nil_empty(v))).collect()),
        other => other,
    }
}

/// Cells for `record` in canonical header order.
pub fn record_row(record: &ResultRecord) -> Vec<String> {
    cells(record, false)
}

/// Like [`record_row`], but with empty collections written as `null`.
pub fn writer_row(record: &ResultRecord) -> Vec<String> {
    cells(record, true)
}

fn cells(record: &ResultRecord, nil: bool) -> Vec<String> {
    let json = |cell: serde_json::Value| {
        if nil {
            nil_empty(cell).to_string()
        } else {
            cell.to_string()
        }
    };
    vec![
        record.id.clone(),
        record.link.clone(),
        record.title.clone(),
        record.category.clone(),
        record.address.clone(),
        json(value(&record.open_hours)),
        json(value(&record.popular_times)),
        record.website.clone(),
        record.phone.clone(),
        record.plus_code.clone(),
        record.review_count.to_string(),
        record.review_rating.to_string(),
        json(value(&record.reviews_per_rating)),
        record.latitude.to_string(),
        record.longitude.to_string(),
        record.cid.clone(),
        record.status.clone(),
        record.description.clone(),
        record.reviews_link.clone(),
        record.thumbnail.clone(),
        record.timezone.clone(),
        record.price_range.clone(),
        record.data_id.clone(),
        json(value(&record.images)),
        json(value(&record.reservations)),
        json(value(&record.order_online)),
        json(value(&record.menu)),
        json(value(&record.owner)),
        json(value(&record.complete_address)),
        json(value(&record.about)),
        json(value(&record.user_reviews)),
        json(value(&record.user_reviews_extended)),
        record.emails.join(","),
    ]
}

/// A record with every attribute populated.
pub fn full_record(id: &str) -> ResultRecord {
    let review = Review {
        name: "Maria P.".to_string(),
        profile_picture: "https://lh3.example/p.jpg".to_string(),
        rating: 5,
        description: "Great \"freddo\", friendly staff, quick service".to_string(),
        images: vec!["https://lh3.example/r1.jpg".to_string()],
        when: "2 weeks ago".to_string(),
    };

    ResultRecord {
        id: id.to_string(),
        link: "https://www.google.com/maps/place/Cafe+X".to_string(),
        title: "Cafe X, Syntagma".to_string(),
        category: "Coffee shop".to_string(),
        address: "Ermou 12, Athina 105 63".to_string(),
        open_hours: BTreeMap::from([
            ("Monday".to_string(), vec!["7 AM-9 PM".to_string()]),
            (
                "Sunday".to_string(),
                vec!["9 AM-1 PM".to_string(), "5-9 PM".to_string()],
            ),
        ]),
        popular_times: BTreeMap::from([(
            "Monday".to_string(),
            BTreeMap::from([(8, 35), (9, 70), (10, 100)]),
        )]),
        website: "https://cafex.example".to_string(),
        phone: "+30 21 0000 0000".to_string(),
        plus_code: "HJ8W+2C Athens".to_string(),
        review_count: 1287,
        review_rating: 4.6,
        reviews_per_rating: BTreeMap::from([(1, 20), (2, 11), (3, 40), (4, 210), (5, 1006)]),
        latitude: 37.9755648,
        longitude: 23.7348324,
        cid: "1234567890123456789".to_string(),
        status: "Open".to_string(),
        description: "Specialty coffee\nand pastries".to_string(),
        reviews_link: "https://search.example/reviews?cid=1".to_string(),
        thumbnail: "https://lh5.example/thumb.jpg".to_string(),
        timezone: "Europe/Athens".to_string(),
        price_range: "€1–10".to_string(),
        data_id: "0x14a1bd3d:0x112210f1".to_string(),
        images: vec![Image {
            title: "All".to_string(),
            image: "https://lh5.example/all.jpg".to_string(),
        }],
        reservations: vec![LinkSource {
            link: "https://book.example/cafex".to_string(),
            source: "book.example".to_string(),
        }],
        order_online: vec![
            LinkSource {
                link: "https://food.example/cafex".to_string(),
                source: "food.example".to_string(),
            },
            LinkSource {
                link: "https://eat.example/cafex".to_string(),
                source: "eat.example".to_string(),
            },
        ],
        menu: LinkSource {
            link: "https://cafex.example/menu".to_string(),
            source: "cafex.example".to_string(),
        },
        owner: Owner {
            id: "1099".to_string(),
            name: "Cafe X (Owner)".to_string(),
            link: "https://www.google.com/maps/contrib/1099".to_string(),
        },
        complete_address: Address {
            borough: "Syntagma".to_string(),
            street: "Ermou 12".to_string(),
            city: "Athina".to_string(),
            postal_code: "105 63".to_string(),
            state: String::new(),
            country: "GR".to_string(),
        },
        about: vec![About {
            id: "service_options".to_string(),
            name: "Service options".to_string(),
            options: vec![
                AboutOption {
                    name: "Takeaway".to_string(),
                    enabled: true,
                },
                AboutOption {
                    name: "Delivery".to_string(),
                    enabled: false,
                },
            ],
        }],
        user_reviews: vec![review.clone()],
        user_reviews_extended: vec![review.clone(), review],
        emails: vec!["hello@cafex.example".to_string(), "jobs@cafex.example".to_string()],
    }
}

/// Minimal valid scrape parameters.
pub fn job_data(keyword: &str) -> JobData {
    JobData {
        keywords: vec![keyword.to_string()],
        ..Default::default()
    }
}
