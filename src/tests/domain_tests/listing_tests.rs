use crate::domain::listing::{NormalizedListing, MAX_PHOTOS};
use crate::domain::mappings::{ListingKind, TransactionKind};
use crate::tests::utils::raw;
use serde_json::json;

#[test]
fn rental_apartment_in_le_cannet() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "id": 101,
        "type": 1,
        "category": 2,
        "price": { "value": 950 },
        "city": { "name": "Le Cannet" },
        "images": [
            { "rank": 2, "url": "b" },
            { "rank": 1, "url": "a" }
        ],
        "status": 1
    })));

    assert_eq!(bien.kind, ListingKind::Location);
    assert_eq!(bien.transaction, TransactionKind::Location);
    assert_eq!(bien.type_label, "Appartement");
    assert_eq!(bien.ville, "Le Cannet");
    assert_eq!(bien.ville_filter, "cannet");
    assert_eq!(bien.prix, "950 €/mois");
    assert_eq!(bien.prix_brut, 950);
    assert_eq!(bien.budget_cat.as_str(), "800-1500");
    assert_eq!(bien.photos, vec!["a", "b"]);
    assert_eq!(bien.main_photo.as_deref(), Some("a"));
    assert!(bien.actif);
    assert_eq!(bien.url, "bien-101.html");
    assert_eq!(bien.titre, "Appartement – Le Cannet");
}

#[test]
fn unknown_codes_never_fail() {
    let bien = NormalizedListing::from_raw(&raw(json!({ "type": 99, "category": "7" })));

    assert_eq!(bien.type_label, "Bien");
    assert_eq!(bien.transaction, TransactionKind::Vente);
    assert_eq!(bien.kind, ListingKind::Vente);
    assert_eq!(bien.ville_filter, "autre");
    assert_eq!(bien.prix, "Nous contacter");
    assert_eq!(bien.budget_cat.as_str(), "0-200k");
    assert!(bien.main_photo.is_none());
    assert!(!bien.actif);
    assert!(!bien.is_publishable());
}

#[test]
fn flat_fields_are_used_when_nested_ones_are_absent() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "id": "X7",
        "type": "2",
        "category": 1,
        "price": "2500000",
        "area": 180,
        "address": { "city": "Mougins" },
        "status": 1
    })));

    assert_eq!(bien.prix, "2,50 M€");
    assert_eq!(bien.budget_cat.as_str(), "1M+");
    assert_eq!(bien.ville, "Mougins");
    assert_eq!(bien.ville_filter, "mougins");
    assert_eq!(bien.titre, "Maison 180 m² – Mougins");
    assert_eq!(bien.caracteristiques.surface.as_deref(), Some("180 m²"));
    assert_eq!(bien.url, "bien-X7.html");
}

#[test]
fn nested_city_wins_over_address() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "city": { "name": "Antibes" },
        "address": { "city": "Nice" }
    })));
    assert_eq!(bien.ville, "Antibes");
    assert_eq!(bien.ville_filter, "antibes");
}

#[test]
fn photos_are_rank_ordered_and_capped() {
    let images: Vec<_> = [5, 3, 9, 1, 7, 8, 2]
        .iter()
        .map(|r| json!({ "rank": r, "url": format!("p{r}") }))
        .chain([json!({ "url": "norank" })])
        .collect();

    let bien = NormalizedListing::from_raw(&raw(json!({ "images": images })));

    assert_eq!(bien.photos.len(), MAX_PHOTOS);
    assert_eq!(bien.photos, vec!["norank", "p1", "p2", "p3", "p5", "p7"]);
    assert_eq!(bien.main_photo.as_deref(), Some("norank"));
}

#[test]
fn photo_url_falls_back_to_thumbnail_then_src() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "images": [
            { "rank": 1, "url": "", "thumb_url": "thumb" },
            { "rank": 2, "src": "source" },
            { "rank": 3 }
        ]
    })));
    assert_eq!(bien.photos, vec!["thumb", "source"]);
}

#[test]
fn characteristics_are_null_when_missing() {
    let bien = NormalizedListing::from_raw(&raw(json!({ "id": 1 })));
    let c = &bien.caracteristiques;
    assert!(c.surface.is_none());
    assert!(c.pieces.is_none());
    assert!(c.chambres.is_none());
    assert!(c.etage.is_none());
    assert!(c.annee.is_none());
    assert!(c.exposition.is_none());
    assert_eq!(bien.rooms, 0);
    assert_eq!(bien.bedrooms, 0);
}

#[test]
fn characteristics_are_formatted_when_present() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "id": 8,
        "reference": "AGS-8",
        "area": { "total": 72.5 },
        "rooms": 3,
        "bedrooms": 2,
        "floor": 4,
        "construction_year": 1975,
        "orientation": "Sud",
        "description": { "fr": "Bel appartement" },
        "dpe": { "letter": "C" },
        "ges": "B"
    })));

    let c = &bien.caracteristiques;
    assert_eq!(c.surface.as_deref(), Some("72.5 m²"));
    assert_eq!(c.pieces.as_deref(), Some("3 pièces"));
    assert_eq!(c.chambres.as_deref(), Some("2 chambres"));
    assert_eq!(c.etage.as_deref(), Some("Étage 4"));
    assert_eq!(c.annee, Some(json!(1975)));
    assert_eq!(c.exposition, Some(json!("Sud")));
    assert_eq!(bien.description, "Bel appartement");
    assert_eq!(bien.dpe.as_deref(), Some("C"));
    assert_eq!(bien.ges.as_deref(), Some("B"));
    assert_eq!(bien.rooms, 3);
    assert_eq!(bien.bedrooms, 2);
}

#[test]
fn reference_falls_back_to_id() {
    let bien = NormalizedListing::from_raw(&raw(json!({ "id": 55 })));
    let json = serde_json::to_value(&bien).unwrap();
    assert_eq!(json["reference"], json!(55));
    assert_eq!(json["id"], json!(55));
}

#[test]
fn status_must_be_exactly_one() {
    for status in [json!(0), json!(2), json!("1"), json!(null)] {
        let bien = NormalizedListing::from_raw(&raw(json!({ "status": status.clone() })));
        assert!(!bien.actif, "status {status} should not be active");
    }
}

#[test]
fn serializes_with_front_end_field_names() {
    let bien = NormalizedListing::from_raw(&raw(json!({
        "id": 3,
        "type": 8,
        "category": 3,
        "price": { "value": 180000 },
        "city": { "name": "Grasse" },
        "images": [{ "url": "a" }],
        "status": 1,
        "created_at": "2024-05-01 10:00:00",
        "updated_at": "2024-06-01 10:00:00"
    })));
    let json = serde_json::to_value(&bien).unwrap();

    assert_eq!(json["type"], "viager");
    assert_eq!(json["transaction"], "viager");
    assert_eq!(json["typeLabel"], "Viager");
    assert_eq!(json["villeFilter"], "grasse");
    assert_eq!(json["budgetCat"], "0-200k");
    assert_eq!(json["prixBrut"], 180000);
    assert_eq!(json["mainPhoto"], "a");
    assert_eq!(json["surface"], 0);
    assert_eq!(json["dpe"], json!(null));
    assert_eq!(json["caracteristiques"]["etage"], json!(null));
    assert_eq!(json["dateCreation"], "2024-05-01 10:00:00");
    assert_eq!(json["dateMaj"], "2024-06-01 10:00:00");
    assert_eq!(json["actif"], true);
}
