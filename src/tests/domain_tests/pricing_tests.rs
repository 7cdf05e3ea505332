use crate::apimo::models::Scalar;
use crate::domain::mappings::TransactionKind;
use crate::domain::pricing::{format_price, group_thousands, raw_price, BudgetCategory};

const NNBSP: char = '\u{202f}';

#[test]
fn missing_or_zero_price_is_on_request() {
    assert_eq!(format_price(None, TransactionKind::Vente), "Nous contacter");
    assert_eq!(
        format_price(Some(&Scalar::Int(0)), TransactionKind::Vente),
        "Nous contacter"
    );
    assert_eq!(
        format_price(Some(&Scalar::Text(String::new())), TransactionKind::Location),
        "Nous contacter"
    );
    assert_eq!(
        format_price(Some(&Scalar::Text("sur demande".into())), TransactionKind::Vente),
        "Nous contacter"
    );
}

#[test]
fn rental_price_is_per_month() {
    assert_eq!(
        format_price(Some(&Scalar::Int(950)), TransactionKind::Location),
        "950 €/mois"
    );
    assert_eq!(
        format_price(Some(&Scalar::Int(1_250)), TransactionKind::Location),
        format!("1{NNBSP}250 €/mois")
    );
    // Rentals never switch to millions.
    assert_eq!(
        format_price(Some(&Scalar::Int(2_000_000)), TransactionKind::Location),
        format!("2{NNBSP}000{NNBSP}000 €/mois")
    );
}

#[test]
fn sale_price_is_grouped() {
    assert_eq!(
        format_price(Some(&Scalar::Int(450_000)), TransactionKind::Vente),
        format!("450{NNBSP}000 €")
    );
    assert_eq!(
        format_price(Some(&Scalar::Text("999999.90".into())), TransactionKind::Viager),
        format!("999{NNBSP}999 €")
    );
}

#[test]
fn sale_price_above_a_million_is_in_millions() {
    assert_eq!(
        format_price(Some(&Scalar::Int(2_500_000)), TransactionKind::Vente),
        "2,50 M€"
    );
    assert_eq!(
        format_price(Some(&Scalar::Int(1_000_000)), TransactionKind::Vente),
        "1,00 M€"
    );
    assert_eq!(
        format_price(Some(&Scalar::Float(12_345_678.0)), TransactionKind::Vente),
        "12,35 M€"
    );
}

#[test]
fn millions_round_exact_halves_up() {
    let sale = |n| format_price(Some(&Scalar::Int(n)), TransactionKind::Vente);
    assert_eq!(sale(1_125_000), "1,13 M€");
    assert_eq!(sale(3_625_000), "3,63 M€");
    assert_eq!(sale(2_375_000), "2,38 M€");
    assert_eq!(sale(1_875_000), "1,88 M€");
    // Not representable exactly, the stored value sits just below the half.
    assert_eq!(sale(1_005_000), "1,00 M€");
    assert_eq!(sale(1_250_000), "1,25 M€");
}

#[test]
fn zero_as_text_is_on_request() {
    assert_eq!(
        format_price(Some(&Scalar::Text("0".into())), TransactionKind::Vente),
        "Nous contacter"
    );
    assert_eq!(raw_price(Some(&Scalar::Text("0".into()))), 0);
}

#[test]
fn grouping_handles_small_and_negative_values() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), format!("1{NNBSP}000"));
    assert_eq!(group_thousands(-12_500), format!("-12{NNBSP}500"));
}

#[test]
fn raw_price_defaults_to_zero() {
    assert_eq!(raw_price(None), 0);
    assert_eq!(raw_price(Some(&Scalar::Text("abc".into()))), 0);
    assert_eq!(raw_price(Some(&Scalar::Text(" 1200 €".into()))), 1200);
    assert_eq!(raw_price(Some(&Scalar::Float(950.7))), 950);
}

#[test]
fn rental_buckets_have_inclusive_upper_bounds() {
    let cat = |n| BudgetCategory::for_price(n, TransactionKind::Location).as_str();
    assert_eq!(cat(0), "0-800");
    assert_eq!(cat(800), "0-800");
    assert_eq!(cat(801), "800-1500");
    assert_eq!(cat(1_500), "800-1500");
    assert_eq!(cat(1_501), "1500+");
}

#[test]
fn sale_buckets_have_inclusive_upper_bounds() {
    let cat = |n| BudgetCategory::for_price(n, TransactionKind::Vente).as_str();
    assert_eq!(cat(150_000), "0-200k");
    assert_eq!(cat(200_000), "0-200k");
    assert_eq!(cat(200_001), "200k-500k");
    assert_eq!(cat(500_000), "200k-500k");
    assert_eq!(cat(1_000_000), "500k-1M");
    assert_eq!(cat(1_000_001), "1M+");
    assert_eq!(cat(1_500_000), "1M+");
    assert_eq!(
        BudgetCategory::for_price(1_500_000, TransactionKind::Viager).as_str(),
        "1M+"
    );
}

#[test]
fn budget_serializes_as_its_label() {
    let json = serde_json::to_value(BudgetCategory::SaleUpTo1M).unwrap();
    assert_eq!(json, "500k-1M");
}
