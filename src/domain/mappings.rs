// src/domain/mappings.rs

use serde::Serialize;

/// Label used when the provider sends a type code we don't know.
pub const DEFAULT_TYPE_LABEL: &str = "Bien";

/// Filter key for listings without a city.
pub const UNKNOWN_CITY: &str = "autre";

const TYPE_LABELS: [(i64, &str); 10] = [
    (1, "Appartement"),
    (2, "Maison"),
    (3, "Terrain"),
    (4, "Commerce"),
    (5, "Bureau"),
    (6, "Garage"),
    (7, "Immeuble"),
    (8, "Viager"),
    (9, "Parking"),
    (10, "Divers"),
];

// Scanned top to bottom, first substring hit wins.
const CITY_FILTERS: [(&str, &str); 9] = [
    ("le cannet", "cannet"),
    ("cannes", "cannes"),
    ("mougins", "mougins"),
    ("mandelieu", "mandelieu"),
    ("mandelieu-la-napoule", "mandelieu"),
    ("vallauris", "vallauris"),
    ("antibes", "antibes"),
    ("nice", "nice"),
    ("grasse", "grasse"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Vente,
    Location,
    Viager,
}

impl TransactionKind {
    /// Provider category code; anything unknown is a sale.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(2) => TransactionKind::Location,
            Some(3) => TransactionKind::Viager,
            _ => TransactionKind::Vente,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Vente => "vente",
            TransactionKind::Location => "location",
            TransactionKind::Viager => "viager",
        }
    }

    pub fn is_rental(self) -> bool {
        self == TransactionKind::Location
    }
}

/// Top-level listing category shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Viager,
    Commercial,
    Location,
    Vente,
}

impl ListingKind {
    /// The type label wins over the transaction: a "Commerce" for rent is
    /// still `commercial`.
    pub fn classify(type_label: &str, transaction: TransactionKind) -> Self {
        let label = type_label.to_lowercase();
        if label.contains("viager") {
            ListingKind::Viager
        } else if label.contains("commerce") || label.contains("bureau") {
            ListingKind::Commercial
        } else if transaction.is_rental() {
            ListingKind::Location
        } else {
            ListingKind::Vente
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingKind::Viager => "viager",
            ListingKind::Commercial => "commercial",
            ListingKind::Location => "location",
            ListingKind::Vente => "vente",
        }
    }
}

pub fn type_label(code: Option<i64>) -> &'static str {
    code.and_then(|c| TYPE_LABELS.iter().find(|(k, _)| *k == c))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_TYPE_LABEL)
}

/// Map a raw city name to its filter key.
///
/// Known cities match by substring ("Mandelieu-la-Napoule" -> "mandelieu");
/// anything else becomes a lowercase slug with whitespace runs as hyphens.
pub fn normalize_city(city: Option<&str>) -> String {
    let Some(city) = city.filter(|c| !c.is_empty()) else {
        return UNKNOWN_CITY.to_string();
    };

    let lower = city.trim().to_lowercase();
    if let Some((_, key)) = CITY_FILTERS.iter().find(|(needle, _)| lower.contains(needle)) {
        return key.to_string();
    }

    let slug = lower.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        UNKNOWN_CITY.to_string()
    } else {
        slug
    }
}
