use componentry::forms::{ComponentForm, ComponentUpdateForm, VariantUpdateForm};
use componentry::models;
use serde_valid::Validate;

#[test]
fn deserialize_component_form_with_variants() {
    let body_str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/mock_data/component.json"
    ));
    let form = serde_json::from_str::<ComponentForm>(body_str).unwrap();
    assert!(form.validate().is_ok());

    let component: models::Component = form.into();
    assert_eq!(component.description, "");
    let variants = &component.variants.0;
    assert_eq!(variants.len(), 2);

    // Omitted fields take their defaults.
    assert_eq!(variants[0].author, "Anonymous");
    assert_eq!(variants[0].deployed_link, "");
    assert_eq!(variants[0].package_commands, None);

    // Supplied fields survive untouched.
    assert_eq!(variants[1].author, "ada");
    assert_eq!(
        variants[1].package_commands.as_deref(),
        Some("npm install @acme/buttons")
    );

    // Generated ids are distinct within the parent array.
    assert_ne!(variants[0].id, variants[1].id);
}

#[test]
fn component_form_rejects_empty_required_fields() {
    let form = serde_json::from_str::<ComponentForm>(r#"{"name": "", "category": "Buttons"}"#)
        .unwrap();
    assert!(form.validate().is_err());

    let form = serde_json::from_str::<ComponentForm>(
        r#"{"name": "Button", "category": "Buttons", "variants": [{"name": "Solid", "code": ""}]}"#,
    )
    .unwrap();
    assert!(form.validate().is_err());
}

#[test]
fn update_form_distinguishes_absent_from_empty() {
    let form = serde_json::from_str::<ComponentUpdateForm>(r#"{"description": ""}"#).unwrap();
    assert!(form.validate().is_ok());
    assert_eq!(form.name, None);
    assert_eq!(form.description, Some(String::new()));

    // No fields at all is a valid (if empty) update.
    let form = serde_json::from_str::<ComponentUpdateForm>("{}").unwrap();
    assert!(form.validate().is_ok());

    // An empty name is not the same as an omitted one.
    let form = serde_json::from_str::<ComponentUpdateForm>(r#"{"name": ""}"#).unwrap();
    assert!(form.validate().is_err());
}

#[test]
fn variant_update_merges_only_supplied_fields() {
    let body_str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/mock_data/variant_update.json"
    ));
    let form = serde_json::from_str::<VariantUpdateForm>(body_str).unwrap();
    assert!(form.validate().is_ok());

    let mut variant = models::Variant {
        id: uuid::Uuid::new_v4(),
        name: "Solid".to_string(),
        description: "old text".to_string(),
        code: "<button/>".to_string(),
        author: "ada".to_string(),
        deployed_link: "https://example.com/demo/v1".to_string(),
        package_commands: None,
        image_url: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let before = variant.updated_at;

    form.apply_to(&mut variant);

    assert_eq!(variant.description, "");
    assert_eq!(variant.deployed_link, "https://example.com/demo/v2");
    assert_eq!(
        variant.image_url.as_deref(),
        Some("https://example.com/preview.png")
    );
    assert_eq!(variant.name, "Solid");
    assert_eq!(variant.code, "<button/>");
    assert!(variant.updated_at >= before);
}

#[test]
fn empty_author_keeps_the_stored_value() {
    let form = serde_json::from_str::<VariantUpdateForm>(r#"{"author": ""}"#).unwrap();
    let mut variant = models::Variant {
        id: uuid::Uuid::new_v4(),
        name: "Solid".to_string(),
        description: String::new(),
        code: "<button/>".to_string(),
        author: "ada".to_string(),
        deployed_link: String::new(),
        package_commands: None,
        image_url: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    form.apply_to(&mut variant);
    assert_eq!(variant.author, "ada");
}
