//! Typed shape of one row of a job's result file.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` as the type's default. The scraper writes empty
/// slices nested inside its JSON cells as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One place scraped by a job.
///
/// Every field has a zero value so a record decoded from a partial header
/// is still complete; see [`crate::results::columns`] for which column
/// fills which field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    #[serde(rename = "input_id")]
    pub id: String,
    pub link: String,
    pub title: String,
    pub category: String,
    pub address: String,
    /// Day name to opening ranges, e.g. `"Monday": ["9 AM-5 PM"]`.
    pub open_hours: BTreeMap<String, Vec<String>>,
    /// Day name to hour-of-day to relative traffic.
    pub popular_times: BTreeMap<String, BTreeMap<u8, u32>>,
    #[serde(rename = "web_site")]
    pub website: String,
    pub phone: String,
    pub plus_code: String,
    pub review_count: i64,
    pub review_rating: f64,
    /// Star rating (1-5) to number of reviews.
    pub reviews_per_rating: BTreeMap<u8, u64>,
    pub latitude: f64,
    pub longitude: f64,
    pub cid: String,
    pub status: String,
    pub description: String,
    pub reviews_link: String,
    pub thumbnail: String,
    pub timezone: String,
    pub price_range: String,
    pub data_id: String,
    pub images: Vec<Image>,
    pub reservations: Vec<LinkSource>,
    pub order_online: Vec<LinkSource>,
    pub menu: LinkSource,
    pub owner: Owner,
    pub complete_address: Address,
    pub about: Vec<About>,
    pub user_reviews: Vec<Review>,
    pub user_reviews_extended: Vec<Review>,
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSource {
    pub link: String,
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub borough: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

/// A titled group of amenity flags ("Accessibility", "Payments", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<AboutOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutOption {
    pub name: String,
    pub enabled: bool,
}

/// A user review. Keys are PascalCase in the stored JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Review {
    pub name: String,
    pub profile_picture: String,
    pub rating: i32,
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    pub when: String,
}
