// src/domain/catalog.rs

use crate::apimo::RawListing;
use crate::domain::listing::NormalizedListing;
use serde::Serialize;
use std::collections::BTreeSet;

/// The payload of the listings endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub biens: Vec<NormalizedListing>,
    pub total: usize,
    pub filtres: Facets,
    pub last_update: String,
}

/// Distinct filter values present in the published listings, sorted.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Facets {
    pub villes: Vec<String>,
    pub types: Vec<String>,
    pub transactions: Vec<String>,
    pub budgets: Vec<String>,
}

impl Catalog {
    pub fn build(raw: &[RawListing], last_update: String) -> Self {
        let biens: Vec<NormalizedListing> = raw
            .iter()
            .map(NormalizedListing::from_raw)
            .filter(NormalizedListing::is_publishable)
            .collect();

        let filtres = Facets::from_listings(&biens);

        Catalog {
            total: biens.len(),
            biens,
            filtres,
            last_update,
        }
    }
}

impl Facets {
    pub fn from_listings(biens: &[NormalizedListing]) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            values
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        }

        Facets {
            villes: distinct(biens.iter().map(|b| b.ville_filter.as_str())),
            types: distinct(biens.iter().map(|b| b.kind.as_str())),
            transactions: distinct(biens.iter().map(|b| b.transaction.as_str())),
            budgets: distinct(biens.iter().map(|b| b.budget_cat.as_str())),
        }
    }
}
