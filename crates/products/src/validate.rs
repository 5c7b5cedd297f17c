//! Schema validation for externally supplied product data.
//!
//! Raw request bodies enter as [`ProductInput`] and leave as normalized, fully
//! typed records. Each field goes through two phases: coercion to the
//! canonical type, then the rule check. The phases stay separate so "price
//! must be a number" and "price must be greater than zero" remain distinct
//! violations.
//!
//! Validation failure short-circuits the operation: callers never issue a
//! storage call with an invalid body, and every violated field is reported in
//! one pass.

use serde_json::Value;

use catalogd_core::Violation;

use crate::product::{NewProduct, ProductPatch};

/// Minimum length of `title`, in characters.
pub const MIN_TITLE_LEN: usize = 5;
/// Minimum length of `description`, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// An unvalidated request body.
///
/// The only component that reads the wrapped JSON is this module; everything
/// downstream sees [`NewProduct`] or [`ProductPatch`]. Unknown extra fields
/// are ignored (only known fields are ever looked up).
#[derive(Debug, Clone)]
pub struct ProductInput(Value);

impl ProductInput {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    fn require_object(&self) -> Result<(), Vec<Violation>> {
        if self.0.is_object() {
            Ok(())
        } else {
            Err(vec![Violation::new("", "request body must be a JSON object")])
        }
    }
}

/// Full-mode validation, used for creation: `title`, `description` and
/// `price` are required, `featured` defaults to `false` when absent.
pub fn validate_full(input: &ProductInput) -> Result<NewProduct, Vec<Violation>> {
    input.require_object()?;

    let mut violations = Vec::new();

    let title = required_field(input, "title", &mut violations, validate_title);
    let description = required_field(input, "description", &mut violations, validate_description);
    let price = required_field(input, "price", &mut violations, validate_price);

    let featured = match input.field("featured") {
        Some(value) => collect(coerce_featured(value), &mut violations),
        None => Some(false),
    };

    match (title, description, price, featured) {
        (Some(title), Some(description), Some(price), Some(featured)) if violations.is_empty() => {
            Ok(NewProduct {
                title,
                description,
                price,
                featured,
            })
        }
        _ => Err(violations),
    }
}

/// Partial-mode validation, used for update: every field is optional, but any
/// field present must satisfy the same rule as in full mode. Absent fields
/// stay `None` in the patch.
pub fn validate_partial(input: &ProductInput) -> Result<ProductPatch, Vec<Violation>> {
    input.require_object()?;

    let mut violations = Vec::new();

    let patch = ProductPatch {
        title: input
            .field("title")
            .and_then(|v| collect(validate_title(v), &mut violations)),
        description: input
            .field("description")
            .and_then(|v| collect(validate_description(v), &mut violations)),
        price: input
            .field("price")
            .and_then(|v| collect(validate_price(v), &mut violations)),
        featured: input
            .field("featured")
            .and_then(|v| collect(coerce_featured(v), &mut violations)),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(violations)
    }
}

fn required_field<T>(
    input: &ProductInput,
    name: &'static str,
    violations: &mut Vec<Violation>,
    validate: impl FnOnce(&Value) -> Result<T, Violation>,
) -> Option<T> {
    match input.field(name) {
        Some(value) => collect(validate(value), violations),
        None => {
            violations.push(Violation::new(name, format!("{name} is required")));
            None
        }
    }
}

fn collect<T>(result: Result<T, Violation>, violations: &mut Vec<Violation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

fn validate_title(value: &Value) -> Result<String, Violation> {
    let title = coerce_text("title", value)?;
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(Violation::new(
            "title",
            format!("title must be at least {MIN_TITLE_LEN} characters"),
        ));
    }
    Ok(title)
}

fn validate_description(value: &Value) -> Result<String, Violation> {
    let description = coerce_text("description", value)?;
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(Violation::new(
            "description",
            format!("description must be at least {MIN_DESCRIPTION_LEN} characters"),
        ));
    }
    Ok(description)
}

fn validate_price(value: &Value) -> Result<f64, Violation> {
    let price = coerce_price(value)?;
    if price <= 0.0 {
        return Err(Violation::new("price", "price must be greater than zero"));
    }
    Ok(price)
}

fn coerce_text(field: &'static str, value: &Value) -> Result<String, Violation> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(Violation::new(field, format!("{field} must be a string"))),
    }
}

/// Numeric coercion: JSON numbers pass through; numeric strings convert.
/// Anything that does not parse to a finite number is rejected here, before
/// the positivity check runs.
fn coerce_price(value: &Value) -> Result<f64, Violation> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(Violation::new("price", "price must be a number")),
    }
}

/// Boolean coercion: JSON booleans pass through; the usual boolean-like
/// string/number spellings convert. Everything else is a coercion failure.
fn coerce_featured(value: &Value) -> Result<bool, Violation> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Violation::new("featured", "featured must be a boolean")),
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(Violation::new("featured", "featured must be a boolean")),
        },
        _ => Err(Violation::new("featured", "featured must be a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(body: Value) -> ProductInput {
        ProductInput::new(body)
    }

    fn paths(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn full_mode_accepts_complete_input() {
        let record = validate_full(&input(json!({
            "title": "Pencil set",
            "description": "Box of 12 pencils",
            "price": 7.5,
            "featured": true,
        })))
        .unwrap();

        assert_eq!(record.title, "Pencil set");
        assert_eq!(record.description, "Box of 12 pencils");
        assert_eq!(record.price, 7.5);
        assert!(record.featured);
    }

    #[test]
    fn full_mode_defaults_featured_to_false() {
        let record = validate_full(&input(json!({
            "title": "Pencil set",
            "description": "Box of 12 pencils",
            "price": 7.5,
        })))
        .unwrap();

        assert!(!record.featured);
    }

    #[test]
    fn full_mode_coerces_numeric_strings() {
        let record = validate_full(&input(json!({
            "title": "Pencil set",
            "description": "Box of 12 pencils",
            "price": "7.5",
        })))
        .unwrap();

        assert_eq!(record.price, 7.5);
    }

    #[test]
    fn full_mode_rejects_non_numeric_price_strings() {
        for bad in ["abc", "", "NaN", "inf", "7,5"] {
            let violations = validate_full(&input(json!({
                "title": "Pencil set",
                "description": "Box of 12 pencils",
                "price": bad,
            })))
            .unwrap_err();

            assert_eq!(paths(&violations), vec!["price"], "price {bad:?} should fail coercion");
            assert_eq!(violations[0].message, "price must be a number");
        }
    }

    #[test]
    fn full_mode_rejects_non_positive_prices() {
        for bad in [json!(0), json!(-5), json!("-0.01")] {
            let violations = validate_full(&input(json!({
                "title": "Pencil set",
                "description": "Box of 12 pencils",
                "price": bad,
            })))
            .unwrap_err();

            assert_eq!(paths(&violations), vec!["price"]);
            assert_eq!(violations[0].message, "price must be greater than zero");
        }
    }

    #[test]
    fn full_mode_rejects_short_title() {
        let violations = validate_full(&input(json!({
            "title": "ab",
            "description": "Box of 12 pencils",
            "price": 7.5,
        })))
        .unwrap_err();

        assert_eq!(paths(&violations), vec!["title"]);
    }

    #[test]
    fn full_mode_rejects_short_description() {
        let violations = validate_full(&input(json!({
            "title": "Pencil set",
            "description": "too short",
            "price": 7.5,
        })))
        .unwrap_err();

        assert_eq!(paths(&violations), vec!["description"]);
    }

    #[test]
    fn full_mode_reports_every_violated_field_at_once() {
        // Short title, short description, and a missing (required) price.
        let violations = validate_full(&input(json!({
            "title": "ab",
            "description": "too short",
        })))
        .unwrap_err();

        assert_eq!(paths(&violations), vec!["title", "description", "price"]);
    }

    #[test]
    fn full_mode_requires_all_core_fields() {
        let violations = validate_full(&input(json!({}))).unwrap_err();
        assert_eq!(paths(&violations), vec!["title", "description", "price"]);
        assert!(violations.iter().all(|v| v.message.ends_with("is required")));
    }

    #[test]
    fn full_mode_ignores_unknown_fields() {
        let record = validate_full(&input(json!({
            "title": "Pencil set",
            "description": "Box of 12 pencils",
            "price": 7.5,
            "sku": "XYZ-1",
            "stock": 10,
        })))
        .unwrap();

        assert_eq!(record.title, "Pencil set");
    }

    #[test]
    fn full_mode_rejects_non_object_bodies() {
        for body in [json!("hello"), json!(7), json!([1, 2, 3]), json!(null)] {
            let violations = validate_full(&input(body)).unwrap_err();
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].path, "");
        }
    }

    #[test]
    fn full_mode_rejects_null_fields() {
        let violations = validate_full(&input(json!({
            "title": null,
            "description": "Box of 12 pencils",
            "price": 7.5,
        })))
        .unwrap_err();

        assert_eq!(paths(&violations), vec!["title"]);
        assert_eq!(violations[0].message, "title must be a string");
    }

    #[test]
    fn featured_coerces_boolean_like_values() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!("true"), true),
            (json!("false"), false),
            (json!("1"), true),
            (json!("0"), false),
            (json!(1), true),
            (json!(0), false),
        ] {
            let record = validate_full(&input(json!({
                "title": "Pencil set",
                "description": "Box of 12 pencils",
                "price": 7.5,
                "featured": raw,
            })))
            .unwrap();
            assert_eq!(record.featured, expected);
        }
    }

    #[test]
    fn featured_rejects_non_boolean_like_values() {
        for bad in [json!("yes"), json!(2), json!([true]), json!(0.5)] {
            let violations = validate_full(&input(json!({
                "title": "Pencil set",
                "description": "Box of 12 pencils",
                "price": 7.5,
                "featured": bad,
            })))
            .unwrap_err();

            assert_eq!(paths(&violations), vec!["featured"]);
        }
    }

    #[test]
    fn partial_mode_accepts_empty_object() {
        let patch = validate_partial(&input(json!({}))).unwrap();
        assert_eq!(patch, ProductPatch::default());
    }

    #[test]
    fn partial_mode_checks_only_present_fields() {
        let patch = validate_partial(&input(json!({ "price": 9.99 }))).unwrap();
        assert_eq!(patch.price, Some(9.99));
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, None);
        assert_eq!(patch.featured, None);
    }

    #[test]
    fn partial_mode_applies_full_field_rules() {
        let violations = validate_partial(&input(json!({ "price": -5 }))).unwrap_err();
        assert_eq!(paths(&violations), vec!["price"]);
        assert_eq!(violations[0].message, "price must be greater than zero");

        let violations = validate_partial(&input(json!({ "title": "ab", "featured": "maybe" }))).unwrap_err();
        assert_eq!(paths(&violations), vec!["title", "featured"]);
    }

    #[test]
    fn partial_mode_coerces_present_fields() {
        let patch = validate_partial(&input(json!({ "price": "12.5", "featured": "1" }))).unwrap();
        assert_eq!(patch.price, Some(12.5));
        assert_eq!(patch.featured, Some(true));
    }

    #[test]
    fn partial_mode_rejects_non_object_bodies() {
        let violations = validate_partial(&input(json!("nope"))).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any structurally valid input normalizes to exactly
            /// the supplied values.
            #[test]
            fn valid_inputs_always_normalize(
                title in "[A-Za-z0-9 ]{5,40}",
                description in "[A-Za-z0-9 ]{10,80}",
                price in 0.01f64..1_000_000.0,
                featured in proptest::bool::ANY,
            ) {
                let record = validate_full(&ProductInput::new(serde_json::json!({
                    "title": title.clone(),
                    "description": description.clone(),
                    "price": price,
                    "featured": featured,
                }))).unwrap();

                prop_assert_eq!(record.title, title);
                prop_assert_eq!(record.description, description);
                prop_assert_eq!(record.price, price);
                prop_assert_eq!(record.featured, featured);
            }

            /// Property: a non-positive price always fails, naming `price`.
            #[test]
            fn non_positive_prices_always_fail(
                price in -1_000_000.0f64..=0.0,
            ) {
                let violations = validate_full(&ProductInput::new(serde_json::json!({
                    "title": "Pencil set",
                    "description": "Box of 12 pencils",
                    "price": price,
                }))).unwrap_err();

                prop_assert!(violations.iter().any(|v| v.path == "price"));
            }

            /// Property: a too-short title always fails, naming `title`.
            #[test]
            fn short_titles_always_fail(
                title in "[A-Za-z0-9]{0,4}",
            ) {
                let violations = validate_full(&ProductInput::new(serde_json::json!({
                    "title": title,
                    "description": "Box of 12 pencils",
                    "price": 7.5,
                }))).unwrap_err();

                prop_assert!(violations.iter().any(|v| v.path == "title"));
            }

            /// Property: partial mode never invents fields that were absent.
            #[test]
            fn partial_mode_never_invents_fields(
                price in 0.01f64..1_000_000.0,
            ) {
                let patch = validate_partial(&ProductInput::new(serde_json::json!({
                    "price": price,
                }))).unwrap();

                prop_assert_eq!(patch.title, None);
                prop_assert_eq!(patch.description, None);
                prop_assert_eq!(patch.featured, None);
                prop_assert_eq!(patch.price, Some(price));
            }
        }
    }
}
