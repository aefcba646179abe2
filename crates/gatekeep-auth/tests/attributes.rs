use std::collections::HashMap;

use gatekeep_auth::attributes::{EMAIL_VERIFIED, attribute, to_attribute_list};

#[test]
fn maps_names_and_values() {
    let mut attrs = HashMap::new();
    attrs.insert("name".to_string(), "Jo Smith".to_string());
    attrs.insert("locale".to_string(), "en_GB".to_string());

    let list = to_attribute_list(&attrs).unwrap();
    assert_eq!(list.len(), 2);

    let locale = list.iter().find(|a| a.name() == "locale").unwrap();
    assert_eq!(locale.value(), Some("en_GB"));
}

#[test]
fn empty_map_gives_empty_list() {
    let list = to_attribute_list(&HashMap::new()).unwrap();
    assert!(list.is_empty());
}

#[test]
fn email_verified_mark_has_the_admin_update_shape() {
    let attr = attribute(EMAIL_VERIFIED, "true").unwrap();
    assert_eq!(attr.name(), "email_verified");
    assert_eq!(attr.value(), Some("true"));
}
