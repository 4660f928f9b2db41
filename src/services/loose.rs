// Conversion of dynamically-typed manifest values into component specs

use toml::Value;

use crate::models::component::{ComponentSpec, VersionComponent};
use crate::services::parser;
use crate::utils::error::{Result, SemverxError};

/// Interpret a manifest value as one version slot.
///
/// Accepted shapes:
/// - an integer: `1`
/// - a `[integer, descriptor]` pair: `[4, "experimental"]`
/// - a component table: `{ value = 2, state = "legacy" }`
/// - a component string: `"1.stable"`
///
/// Anything else is an `InvalidComponent` error carrying the offending value.
pub fn component_spec_from_value(value: &Value) -> Result<ComponentSpec> {
    match value {
        Value::Integer(number) => Ok(ComponentSpec::Value(*number)),
        Value::String(text) => parser::parse_component(text).map(ComponentSpec::Component),
        Value::Array(items) => pair_from_items(value, items),
        Value::Table(_) => value
            .clone()
            .try_into::<VersionComponent>()
            .map(ComponentSpec::Component)
            .map_err(|_| invalid(value)),
        _ => Err(invalid(value)),
    }
}

fn pair_from_items(value: &Value, items: &[Value]) -> Result<ComponentSpec> {
    let [first, descriptor] = items else {
        return Err(invalid(value));
    };

    let Value::Integer(number) = first else {
        return Err(invalid(value));
    };

    // A descriptor that is not text gets the same treatment as an unknown word
    let descriptor = descriptor.as_str().unwrap_or_default();
    Ok(ComponentSpec::Pair(*number, descriptor.to_string()))
}

fn invalid(value: &Value) -> SemverxError {
    SemverxError::InvalidComponent(value.to_string())
}
