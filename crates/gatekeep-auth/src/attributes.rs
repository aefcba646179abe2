use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::types::AttributeType;

use crate::error::AuthError;

/// Attribute name Cognito uses to mark an email address verified.
pub const EMAIL_VERIFIED: &str = "email_verified";

/// Build a single SDK attribute.
pub fn attribute(name: &str, value: &str) -> Result<AttributeType, AuthError> {
    AttributeType::builder()
        .name(name)
        .value(value)
        .build()
        .map_err(|e| AuthError::Attribute(e.to_string()))
}

/// Convert a name → value map into the SDK's attribute list.
pub fn to_attribute_list(
    attributes: &HashMap<String, String>,
) -> Result<Vec<AttributeType>, AuthError> {
    let mut list = Vec::with_capacity(attributes.len());
    for (name, value) in attributes {
        list.push(attribute(name, value)?);
    }
    Ok(list)
}
