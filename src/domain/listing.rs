// src/domain/listing.rs

use crate::apimo::models::{CityField, RawListing, Scalar};
use crate::domain::mappings::{self, ListingKind, TransactionKind};
use crate::domain::pricing::{self, BudgetCategory};
use serde::Serialize;
use serde_json::Value;

/// How many photos a listing card carries.
pub const MAX_PHOTOS: usize = 6;

/// A listing reshaped for the website: display labels, filter keys and
/// a trimmed photo set. Built per request, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    pub id: Option<Scalar>,
    pub reference: Option<Scalar>,

    pub titre: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub transaction: TransactionKind,
    pub type_label: String,
    pub ville: String,

    pub ville_filter: String,
    pub surface: Scalar,
    pub rooms: i64,
    pub bedrooms: i64,

    pub prix: String,
    pub prix_brut: i64,
    pub budget_cat: BudgetCategory,

    pub main_photo: Option<String>,
    pub photos: Vec<String>,

    pub description: String,
    pub dpe: Option<String>,
    pub ges: Option<String>,
    pub caracteristiques: Characteristics,

    pub url: String,
    pub actif: bool,
    pub date_creation: Option<Value>,
    pub date_maj: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Characteristics {
    pub surface: Option<String>,
    pub pieces: Option<String>,
    pub chambres: Option<String>,
    pub etage: Option<String>,
    pub annee: Option<Value>,
    pub exposition: Option<Value>,
}

impl NormalizedListing {
    /// Reshape one provider record. Never fails: unknown codes and missing
    /// fields fall back to defaults.
    pub fn from_raw(raw: &RawListing) -> Self {
        let category = raw.category.as_ref().and_then(Scalar::as_code);
        let transaction = TransactionKind::from_code(category);
        let type_label = mappings::type_label(raw.type_code.as_ref().and_then(Scalar::as_code));

        let city = resolve_city(raw);
        let price = raw.price.as_ref().and_then(|p| p.value());
        let surface = raw
            .area
            .as_ref()
            .and_then(|a| a.total())
            .filter(|s| s.is_truthy())
            .cloned();
        let rooms = truthy(raw.rooms.as_ref());
        let bedrooms = truthy(raw.bedrooms.as_ref());
        let floor = truthy(raw.floor.as_ref().and_then(|f| f.value()));

        let photos = select_photos(raw);
        let prix_brut = pricing::raw_price(price);

        NormalizedListing {
            id: raw.id.clone(),
            reference: truthy(raw.reference.as_ref()).or(raw.id.as_ref()).cloned(),
            titre: compose_title(type_label, surface.as_ref(), &city),
            kind: ListingKind::classify(type_label, transaction),
            transaction,
            type_label: type_label.to_string(),
            ville_filter: mappings::normalize_city(Some(city.as_str())),
            ville: city,
            surface: surface.clone().unwrap_or(Scalar::Int(0)),
            rooms: rooms.and_then(Scalar::parse_int).unwrap_or(0),
            bedrooms: bedrooms.and_then(Scalar::parse_int).unwrap_or(0),
            prix: pricing::format_price(price, transaction),
            prix_brut,
            budget_cat: BudgetCategory::for_price(prix_brut, transaction),
            main_photo: photos.first().cloned(),
            photos,
            description: raw
                .description
                .as_ref()
                .and_then(|d| d.text())
                .unwrap_or("")
                .to_string(),
            dpe: raw.dpe.as_ref().and_then(|r| r.letter()).map(str::to_string),
            ges: raw.ges.as_ref().and_then(|r| r.letter()).map(str::to_string),
            caracteristiques: Characteristics {
                surface: surface.as_ref().map(|s| format!("{s} m²")),
                pieces: rooms.map(|r| format!("{r} pièces")),
                chambres: bedrooms.map(|b| format!("{b} chambres")),
                etage: floor.map(|f| format!("Étage {f}")),
                annee: truthy_value(raw.construction_year.as_ref()),
                exposition: truthy_value(raw.orientation.as_ref()),
            },
            url: listing_slug(raw.id.as_ref()),
            actif: raw.status.as_ref().is_some_and(Scalar::is_one),
            date_creation: raw.created_at.clone(),
            date_maj: raw.updated_at.clone(),
        }
    }

    /// Only active listings with at least one photo go on the site.
    pub fn is_publishable(&self) -> bool {
        self.actif && self.main_photo.is_some()
    }
}

fn truthy(value: Option<&Scalar>) -> Option<&Scalar> {
    value.filter(|v| v.is_truthy())
}

fn truthy_value(value: Option<&Value>) -> Option<Value> {
    let v = value?;
    let keep = match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    keep.then(|| v.clone())
}

/// `city.name`, then `address.city`, then a bare `city` string.
fn resolve_city(raw: &RawListing) -> String {
    let named = match &raw.city {
        Some(CityField::Named { name }) => name.as_deref(),
        _ => None,
    };
    let address = raw.address.as_ref().and_then(|a| a.city.as_deref());
    let plain = match &raw.city {
        Some(CityField::Plain(s)) => Some(s.as_str()),
        _ => None,
    };

    [named, address, plain]
        .into_iter()
        .flatten()
        .find(|c| !c.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Up to `MAX_PHOTOS` urls in ascending rank order (no rank counts as 0).
fn select_photos(raw: &RawListing) -> Vec<String> {
    let Some(images) = raw.images.as_ref() else {
        return Vec::new();
    };

    let mut ranked: Vec<_> = images.iter().collect();
    ranked.sort_by(|a, b| a.rank().total_cmp(&b.rank()));

    ranked
        .into_iter()
        .take(MAX_PHOTOS)
        .filter_map(|img| img.best_url())
        .map(str::to_string)
        .collect()
}

fn compose_title(type_label: &str, surface: Option<&Scalar>, city: &str) -> String {
    let head = match surface {
        Some(s) => format!("{type_label} {s} m²"),
        None => type_label.to_string(),
    };
    format!("{head} – {city}").trim().to_string()
}

fn listing_slug(id: Option<&Scalar>) -> String {
    let id = id.map(|i| i.to_string()).unwrap_or_default();
    format!("bien-{id}.html")
}
