use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Untrusted client filter payload: field name mapped to either a bare scalar
/// (implicit `eq`) or an `{operator, value}` object. `serde_json::Map` keeps
/// keys sorted, so parsing is deterministic for identical input.
pub type FilterPayload = Map<String, Value>;

/// Filter operator vocabulary for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,        // equals (default)
    Ne,        // not equals
    Like,      // like (case-sensitive, caller places wildcards)
    Ilike,     // ilike (case-insensitive, PostgreSQL)
    In,        // in list
    NotIn,     // not in list
    Gt,        // greater than
    Gte,       // greater than or equal
    Lt,        // less than
    Lte,       // less than or equal
    IsNull,    // is null (no value)
    IsNotNull, // is not null (no value)
    Between,   // inclusive range, exactly two values
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "like" => Ok(FilterOperator::Like),
            "ilike" => Ok(FilterOperator::Ilike),
            "in" => Ok(FilterOperator::In),
            "not_in" => Ok(FilterOperator::NotIn),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "is_null" => Ok(FilterOperator::IsNull),
            "is_not_null" => Ok(FilterOperator::IsNotNull),
            "between" => Ok(FilterOperator::Between),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Like => "like",
            FilterOperator::Ilike => "ilike",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::IsNull => "is_null",
            FilterOperator::IsNotNull => "is_not_null",
            FilterOperator::Between => "between",
        };
        f.write_str(s)
    }
}

/// A single scalar filter value. Typed so downstream binding does not have to
/// re-guess what the client sent.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterScalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FilterScalar {
    pub fn from_json(value: &Value) -> Option<FilterScalar> {
        match value {
            Value::String(s) => Some(FilterScalar::String(s.clone())),
            Value::Bool(b) => Some(FilterScalar::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(FilterScalar::Int(i))
                } else {
                    n.as_f64().map(FilterScalar::Float)
                }
            }
            _ => None,
        }
    }

    /// Best-effort typed parse for values arriving as query-string text.
    pub fn from_text(value: &str) -> FilterScalar {
        if let Ok(i) = value.parse::<i64>() {
            return FilterScalar::Int(i);
        }
        if let Ok(f) = value.parse::<f64>() {
            return FilterScalar::Float(f);
        }
        match value {
            "true" => FilterScalar::Bool(true),
            "false" => FilterScalar::Bool(false),
            _ => FilterScalar::String(value.to_string()),
        }
    }
}

/// Value shape attached to a condition. The parser guarantees the shape agrees
/// with the operator arity, so the applier can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    None,
    Scalar(FilterScalar),
    List(Vec<FilterScalar>),
    Range(FilterScalar, FilterScalar),
}

/// Normalized, alias-qualified predicate ready to be bound onto a query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    /// Qualified as `alias.column` so conditions from different entities never
    /// collide when aliases are joined.
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// What to do with a malformed filter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Drop the offending entry and keep the rest of the query.
    #[default]
    Lenient,
    /// Reject the whole payload with a typed error.
    Strict,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("unknown filter operator '{operator}' for field '{field}'")]
    UnknownOperator { field: String, operator: String },

    #[error("invalid value shape for operator '{operator}' on field '{field}'")]
    InvalidShape { field: String, operator: FilterOperator },
}

/// Per-entity allow-list of filterable/sortable columns. Parsing and sort
/// resolution both require one, so no untrusted field name can reach query
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct FilterSchema {
    /// Table alias used to qualify every emitted condition.
    pub alias: &'static str,
    pub columns: &'static [&'static str],
    pub default_sort: &'static str,
    /// Primary-key column appended as the sort tie-break.
    pub primary_key: &'static str,
}

impl FilterSchema {
    pub const fn new(
        alias: &'static str,
        columns: &'static [&'static str],
        default_sort: &'static str,
        primary_key: &'static str,
    ) -> Self {
        Self {
            alias,
            columns,
            default_sort,
            primary_key,
        }
    }

    pub fn allows(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }

    pub fn qualify(&self, column: &str) -> String {
        format!("{}.{}", self.alias, column)
    }

    /// Resolve a requested sort column against the allow-list, falling back to
    /// the schema default. Returns the column actually used so callers can echo
    /// it back in pagination metadata.
    pub fn resolve_sort<'a>(&self, requested: &'a str) -> &'a str {
        if self.allows(requested) {
            requested
        } else {
            self.default_sort
        }
    }
}

/// Convert an untrusted filter payload into alias-qualified conditions.
///
/// Pure function of its inputs; conditions come out in the payload's key
/// iteration order. Under [`FilterPolicy::Lenient`] a malformed entry narrows
/// the result set less than intended instead of failing the request; under
/// [`FilterPolicy::Strict`] the first malformed entry aborts parsing.
///
/// An empty `in`/`not_in` list drops the condition under both policies:
/// "no constraint" rather than an always-false clause.
pub fn parse_filters(
    payload: &FilterPayload,
    schema: &FilterSchema,
    policy: FilterPolicy,
) -> Result<Vec<FilterCondition>, FilterError> {
    let mut conditions = Vec::with_capacity(payload.len());

    for (key, raw) in payload {
        match parse_entry(key, raw, schema) {
            Ok(Some(condition)) => conditions.push(condition),
            Ok(None) => {}
            Err(err) => match policy {
                FilterPolicy::Lenient => {
                    debug!("dropping malformed filter entry: {err}");
                }
                FilterPolicy::Strict => return Err(err),
            },
        }
    }

    Ok(conditions)
}

/// Parse one payload entry. `Ok(None)` means "legitimately no condition"
/// (empty `in` list); `Err` means the entry is malformed.
fn parse_entry(
    key: &str,
    raw: &Value,
    schema: &FilterSchema,
) -> Result<Option<FilterCondition>, FilterError> {
    if !schema.allows(key) {
        return Err(FilterError::UnknownField(key.to_string()));
    }

    let field = schema.qualify(key);

    if let Value::Object(entry) = raw {
        let operator_str = entry
            .get("operator")
            .and_then(Value::as_str)
            .ok_or_else(|| FilterError::UnknownOperator {
                field: key.to_string(),
                operator: String::new(),
            })?;
        let operator =
            operator_str
                .parse::<FilterOperator>()
                .map_err(|_| FilterError::UnknownOperator {
                    field: key.to_string(),
                    operator: operator_str.to_string(),
                })?;

        let value = parse_value(key, operator, entry.get("value"))?;
        match value {
            Some(value) => Ok(Some(FilterCondition {
                field,
                operator,
                value,
            })),
            None => Ok(None),
        }
    } else {
        // Bare scalar means equality.
        let scalar = FilterScalar::from_json(raw).ok_or(FilterError::InvalidShape {
            field: key.to_string(),
            operator: FilterOperator::Eq,
        })?;
        Ok(Some(FilterCondition {
            field,
            operator: FilterOperator::Eq,
            value: FilterValue::Scalar(scalar),
        }))
    }
}

fn parse_value(
    key: &str,
    operator: FilterOperator,
    raw: Option<&Value>,
) -> Result<Option<FilterValue>, FilterError> {
    let shape_err = || FilterError::InvalidShape {
        field: key.to_string(),
        operator,
    };

    match operator {
        FilterOperator::IsNull | FilterOperator::IsNotNull => {
            // Any supplied value is ignored.
            Ok(Some(FilterValue::None))
        }
        FilterOperator::Like | FilterOperator::Ilike => {
            let raw = raw.ok_or_else(shape_err)?;
            match FilterScalar::from_json(raw) {
                Some(scalar @ FilterScalar::String(_)) => {
                    Ok(Some(FilterValue::Scalar(scalar)))
                }
                _ => Err(shape_err()),
            }
        }
        FilterOperator::Eq
        | FilterOperator::Ne
        | FilterOperator::Gt
        | FilterOperator::Gte
        | FilterOperator::Lt
        | FilterOperator::Lte => {
            let raw = raw.ok_or_else(shape_err)?;
            let scalar = FilterScalar::from_json(raw).ok_or_else(shape_err)?;
            Ok(Some(FilterValue::Scalar(scalar)))
        }
        FilterOperator::In | FilterOperator::NotIn => {
            let raw = raw.ok_or_else(shape_err)?;
            let items = raw.as_array().ok_or_else(shape_err)?;
            let scalars = items
                .iter()
                .map(FilterScalar::from_json)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(shape_err)?;
            if scalars.is_empty() {
                // Caller error by convention: no constraint at all.
                debug!("empty '{operator}' list for field '{key}', dropping condition");
                return Ok(None);
            }
            Ok(Some(FilterValue::List(scalars)))
        }
        FilterOperator::Between => {
            let raw = raw.ok_or_else(shape_err)?;
            let items = raw.as_array().ok_or_else(shape_err)?;
            if items.len() != 2 {
                return Err(shape_err());
            }
            let low = FilterScalar::from_json(&items[0]).ok_or_else(shape_err)?;
            let high = FilterScalar::from_json(&items[1]).ok_or_else(shape_err)?;
            Ok(Some(FilterValue::Range(low, high)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: FilterSchema = FilterSchema::new(
        "users",
        &["id", "username", "email", "status", "created_at"],
        "created_at",
        "id",
    );

    fn obj(value: Value) -> FilterPayload {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload must be a JSON object"),
        }
    }

    #[test]
    fn bare_scalar_becomes_eq() {
        let payload = obj(json!({"status": "active"}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();

        assert_eq!(
            conditions,
            vec![FilterCondition {
                field: "users.status".to_string(),
                operator: FilterOperator::Eq,
                value: FilterValue::Scalar(FilterScalar::String("active".to_string())),
            }]
        );
    }

    #[test]
    fn explicit_operator_is_parsed() {
        let payload = obj(json!({"username": {"operator": "like", "value": "%john%"}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();

        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].field, "users.username");
        assert_eq!(conditions[0].operator, FilterOperator::Like);
    }

    #[test]
    fn empty_payload_yields_no_conditions() {
        let payload = FilterPayload::new();
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Strict).unwrap();
        assert!(conditions.is_empty());
    }

    #[test]
    fn unknown_operator_drops_only_that_entry() {
        let payload = obj(json!({
            "status": "active",
            "username": {"operator": "regex", "value": "jo.*"},
        }));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();

        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].field, "users.status");
    }

    #[test]
    fn unknown_operator_is_rejected_when_strict() {
        let payload = obj(json!({"username": {"operator": "regex", "value": "jo.*"}}));
        let err = parse_filters(&payload, &SCHEMA, FilterPolicy::Strict).unwrap_err();

        assert_eq!(
            err,
            FilterError::UnknownOperator {
                field: "username".to_string(),
                operator: "regex".to_string(),
            }
        );
    }

    #[test]
    fn unknown_field_is_dropped_or_rejected() {
        let payload = obj(json!({"password_hash": "x"}));

        let lenient = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        assert!(lenient.is_empty());

        let strict = parse_filters(&payload, &SCHEMA, FilterPolicy::Strict).unwrap_err();
        assert_eq!(strict, FilterError::UnknownField("password_hash".to_string()));
    }

    #[test]
    fn in_requires_non_empty_array() {
        let payload = obj(json!({"status": {"operator": "in", "value": ["active", "locked"]}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        assert_eq!(
            conditions[0].value,
            FilterValue::List(vec![
                FilterScalar::String("active".to_string()),
                FilterScalar::String("locked".to_string()),
            ])
        );

        // Empty list drops the condition under both policies.
        let empty = obj(json!({"status": {"operator": "in", "value": []}}));
        assert!(parse_filters(&empty, &SCHEMA, FilterPolicy::Lenient)
            .unwrap()
            .is_empty());
        assert!(parse_filters(&empty, &SCHEMA, FilterPolicy::Strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn in_with_scalar_value_is_malformed() {
        let payload = obj(json!({"status": {"operator": "in", "value": "active"}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        assert!(conditions.is_empty());
    }

    #[test]
    fn between_requires_exactly_two_values() {
        let payload = obj(json!({"created_at": {"operator": "between", "value": [10, 20]}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        assert_eq!(
            conditions[0].value,
            FilterValue::Range(FilterScalar::Int(10), FilterScalar::Int(20))
        );

        let bad = obj(json!({"created_at": {"operator": "between", "value": [10]}}));
        assert!(parse_filters(&bad, &SCHEMA, FilterPolicy::Lenient)
            .unwrap()
            .is_empty());
        assert!(parse_filters(&bad, &SCHEMA, FilterPolicy::Strict).is_err());
    }

    #[test]
    fn is_null_ignores_supplied_value() {
        let payload = obj(json!({"email": {"operator": "is_null", "value": "ignored"}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Strict).unwrap();
        assert_eq!(conditions[0].value, FilterValue::None);
    }

    #[test]
    fn like_requires_string_value() {
        let payload = obj(json!({"username": {"operator": "like", "value": 42}}));
        assert!(parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let payload = obj(json!({
            "username": {"operator": "ilike", "value": "%a%"},
            "status": "active",
            "created_at": {"operator": "gte", "value": "2026-01-01"},
        }));

        let first = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        let second = parse_filters(&payload, &SCHEMA, FilterPolicy::Lenient).unwrap();
        assert_eq!(first, second);
        // serde_json::Map iterates keys in sorted order.
        let fields: Vec<&str> = first.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["users.created_at", "users.status", "users.username"]);
    }

    #[test]
    fn typed_scalars_are_preserved() {
        let payload = obj(json!({"id": {"operator": "gt", "value": 7}}));
        let conditions = parse_filters(&payload, &SCHEMA, FilterPolicy::Strict).unwrap();
        assert_eq!(
            conditions[0].value,
            FilterValue::Scalar(FilterScalar::Int(7))
        );
    }

    #[test]
    fn from_text_coerces_numbers_and_bools() {
        assert_eq!(FilterScalar::from_text("42"), FilterScalar::Int(42));
        assert_eq!(FilterScalar::from_text("4.5"), FilterScalar::Float(4.5));
        assert_eq!(FilterScalar::from_text("true"), FilterScalar::Bool(true));
        assert_eq!(
            FilterScalar::from_text("active"),
            FilterScalar::String("active".to_string())
        );
    }

    #[test]
    fn resolve_sort_falls_back_to_default() {
        assert_eq!(SCHEMA.resolve_sort("username"), "username");
        assert_eq!(SCHEMA.resolve_sort("password_hash; DROP TABLE"), "created_at");
    }
}
