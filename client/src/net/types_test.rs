use serde_json::json;

use super::*;

#[test]
fn tenant_decodes_camel_case_and_numeric_id() {
    let tenant: Tenant = serde_json::from_value(json!({
        "id": 17,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "rentAmount": 1250.5,
        "leaseStart": "2024-01-01"
    }))
    .unwrap();
    assert_eq!(tenant.id, "17");
    assert_eq!(tenant.full_name(), "Ada Lovelace");
    assert_eq!(tenant.rent_amount, Some(1250.5));
    assert_eq!(tenant.extra.get("leaseStart"), Some(&json!("2024-01-01")));
}

#[test]
fn tenant_input_omits_unset_fields() {
    let input = TenantInput {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: Some("ada@example.com".to_owned()),
        ..TenantInput::default()
    };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" })
    );
}

#[test]
fn property_keeps_unknown_fields() {
    let raw = json!({ "id": "p1", "name": "Maple Court", "units": 12, "yearBuilt": 1998 });
    let property: Property = serde_json::from_value(raw).unwrap();
    assert_eq!(property.units, Some(12));
    assert_eq!(property.extra.get("yearBuilt"), Some(&json!(1998)));
    assert_eq!(property.address, None);
}

#[test]
fn signup_input_serializes_camel_case() {
    let input = SignupInput {
        first_name: "Ada".to_owned(),
        last_name: "L".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        phone: None,
    };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "firstName": "Ada", "lastName": "L", "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn payment_requires_amount() {
    let missing: Result<Payment, _> = serde_json::from_value(json!({ "id": "x", "tenantId": "t1" }));
    assert!(missing.is_err());
}
