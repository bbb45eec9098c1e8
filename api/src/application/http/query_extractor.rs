use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use serde_json::Value;
use shopkit_core::domain::common::filter::{FilterPayload, FilterScalar};
use shopkit_core::domain::common::pagination::{PageQuery, SortOrder};

/// Extractor producing the normalized list-request options for a handler.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     PageQueryExtractor(query): PageQueryExtractor,
/// ) -> Result<Response, ApiError> {
///     // query.page, query.limit, query.sort_by, query.sort_order, query.filters
/// }
/// ```
///
/// Never rejects: invalid pagination inputs fall back to their defaults and
/// unparseable filter wire data yields an empty payload, keeping list
/// endpoints resilient to malformed optional input.
#[derive(Debug, Clone)]
pub struct PageQueryExtractor(pub PageQuery);

impl<S> FromRequestParts<S> for PageQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(PageQueryExtractor(page_query_from_map(&query_map)))
    }
}

/// Build a [`PageQuery`] from decoded query parameters.
///
/// Filters are accepted in two wire encodings:
/// - a JSON blob: `filters={"status":"active"}`
/// - bracket syntax: `filters[status]=active`,
///   `filters[name][operator]=like&filters[name][value]=%john%`
///   (comma-separated values for `in`/`not_in`/`between`)
pub fn page_query_from_map(query_map: &HashMap<String, String>) -> PageQuery {
    let page = query_map.get("page").and_then(|v| v.parse::<u64>().ok());
    let limit = query_map.get("limit").and_then(|v| v.parse::<u64>().ok());
    let sort_by = query_map.get("sort_by").cloned();
    let sort_order = query_map
        .get("sort_order")
        .and_then(|v| v.parse::<SortOrder>().ok());

    PageQuery::new(page, limit, sort_by, sort_order, filters_from_map(query_map))
}

fn filters_from_map(query_map: &HashMap<String, String>) -> FilterPayload {
    // JSON blob form takes precedence when it decodes to an object.
    if let Some(blob) = query_map.get("filters")
        && let Ok(Value::Object(payload)) = serde_json::from_str::<Value>(blob)
    {
        return payload;
    }

    let mut payload = FilterPayload::new();
    let mut operators: HashMap<String, String> = HashMap::new();
    let mut raw_values: HashMap<String, String> = HashMap::new();

    for (key, value) in query_map {
        let Some(filter_key) = key.strip_prefix("filters[") else {
            continue;
        };
        let Some(end_bracket) = filter_key.find(']') else {
            continue;
        };
        let field = filter_key[..end_bracket].to_string();
        let remaining = &filter_key[end_bracket + 1..];

        match remaining {
            // filters[field]=value (implicit eq)
            "" => {
                payload.insert(field, text_value(value));
            }
            "[operator]" => {
                operators.insert(field, value.clone());
            }
            "[value]" => {
                raw_values.insert(field, value.clone());
            }
            _ => {}
        }
    }

    for (field, operator) in operators {
        let mut entry = serde_json::Map::new();
        entry.insert("operator".to_string(), Value::String(operator.clone()));
        if let Some(raw) = raw_values.get(&field) {
            let value = match operator.as_str() {
                "in" | "not_in" | "between" => Value::Array(
                    raw.split(',').map(|part| text_value(part.trim())).collect(),
                ),
                _ => text_value(raw),
            };
            entry.insert("value".to_string(), value);
        }
        payload.insert(field, Value::Object(entry));
    }

    payload
}

/// Coerce query-string text into a typed JSON scalar so numeric and boolean
/// comparisons bind with the right database type.
fn text_value(text: &str) -> Value {
    match FilterScalar::from_text(text) {
        FilterScalar::Int(i) => Value::from(i),
        FilterScalar::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(text.to_string())),
        FilterScalar::Bool(b) => Value::from(b),
        FilterScalar::String(s) => Value::String(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_query_is_empty() {
        let query = page_query_from_map(&HashMap::new());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort_by, "created_at");
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn invalid_pagination_inputs_fall_back() {
        let query = page_query_from_map(&map(&[
            ("page", "abc"),
            ("limit", "-5"),
            ("sort_order", "desc"),
        ]));
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn bracket_scalar_filter_is_implicit_eq() {
        let query = page_query_from_map(&map(&[("filters[status]", "active")]));
        assert_eq!(query.filters.get("status"), Some(&json!("active")));
    }

    #[test]
    fn bracket_operator_value_pair_builds_entry() {
        let query = page_query_from_map(&map(&[
            ("filters[name][operator]", "like"),
            ("filters[name][value]", "%john%"),
        ]));
        assert_eq!(
            query.filters.get("name"),
            Some(&json!({"operator": "like", "value": "%john%"}))
        );
    }

    #[test]
    fn list_operators_split_on_commas() {
        let query = page_query_from_map(&map(&[
            ("filters[status][operator]", "in"),
            ("filters[status][value]", "active, locked"),
        ]));
        assert_eq!(
            query.filters.get("status"),
            Some(&json!({"operator": "in", "value": ["active", "locked"]}))
        );
    }

    #[test]
    fn between_values_are_typed() {
        let query = page_query_from_map(&map(&[
            ("filters[price_cents][operator]", "between"),
            ("filters[price_cents][value]", "1000,5000"),
        ]));
        assert_eq!(
            query.filters.get("price_cents"),
            Some(&json!({"operator": "between", "value": [1000, 5000]}))
        );
    }

    #[test]
    fn json_blob_form_is_accepted() {
        let query = page_query_from_map(&map(&[(
            "filters",
            r#"{"status":"active","stock":{"operator":"gte","value":5}}"#,
        )]));
        assert_eq!(query.filters.get("status"), Some(&json!("active")));
        assert_eq!(
            query.filters.get("stock"),
            Some(&json!({"operator": "gte", "value": 5}))
        );
    }

    #[test]
    fn malformed_json_blob_yields_empty_filters() {
        let query = page_query_from_map(&map(&[("filters", "{not json")]));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn operator_without_value_passes_through_for_null_checks() {
        let query = page_query_from_map(&map(&[("filters[email][operator]", "is_null")]));
        assert_eq!(
            query.filters.get("email"),
            Some(&json!({"operator": "is_null"}))
        );
    }

    #[test]
    fn pagination_and_sort_are_read_together() {
        let query = page_query_from_map(&map(&[
            ("page", "2"),
            ("limit", "5"),
            ("sort_by", "created_at"),
            ("sort_order", "ASC"),
            ("filters[name][operator]", "like"),
            ("filters[name][value]", "%john%"),
        ]));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 5);
        assert_eq!(query.sort_by, "created_at");
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.filters.len(), 1);
    }
}
