//! Binds normalized filter conditions and sort options onto sea-orm selects.
//!
//! Field names only ever come from a [`FilterSchema`] allow-list and values are
//! always bound parameters, so no untrusted string reaches the SQL text.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Alias, Expr, SimpleExpr};
use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Value,
};

use crate::domain::common::filter::{
    FilterCondition, FilterOperator, FilterScalar, FilterSchema, FilterValue,
};
use crate::domain::common::pagination::{PageQuery, SortOrder};

impl From<FilterScalar> for Value {
    fn from(scalar: FilterScalar) -> Self {
        match scalar {
            FilterScalar::String(s) => Value::from(s),
            FilterScalar::Int(i) => Value::from(i),
            FilterScalar::Float(f) => Value::from(f),
            FilterScalar::Bool(b) => Value::from(b),
        }
    }
}

/// Column reference for an `alias.column` qualified field.
fn column_expr(field: &str) -> Expr {
    match field.split_once('.') {
        Some((alias, column)) => Expr::col((Alias::new(alias), Alias::new(column))),
        None => Expr::col(Alias::new(field)),
    }
}

/// Translate one condition into a bound SQL expression.
///
/// Returns `None` for value shapes the parser never emits, keeping the
/// function total instead of panicking on a bad hand-built condition.
pub fn condition_expr(condition: &FilterCondition) -> Option<SimpleExpr> {
    let col = column_expr(&condition.field);

    match (condition.operator, &condition.value) {
        (FilterOperator::Eq, FilterValue::Scalar(v)) => Some(col.eq(Value::from(v.clone()))),
        (FilterOperator::Ne, FilterValue::Scalar(v)) => Some(col.ne(Value::from(v.clone()))),
        (FilterOperator::Gt, FilterValue::Scalar(v)) => Some(col.gt(Value::from(v.clone()))),
        (FilterOperator::Gte, FilterValue::Scalar(v)) => Some(col.gte(Value::from(v.clone()))),
        (FilterOperator::Lt, FilterValue::Scalar(v)) => Some(col.lt(Value::from(v.clone()))),
        (FilterOperator::Lte, FilterValue::Scalar(v)) => Some(col.lte(Value::from(v.clone()))),
        (FilterOperator::Like, FilterValue::Scalar(FilterScalar::String(pattern))) => {
            Some(col.like(pattern.as_str()))
        }
        (FilterOperator::Ilike, FilterValue::Scalar(FilterScalar::String(pattern))) => {
            Some(col.ilike(pattern.as_str()))
        }
        (FilterOperator::In, FilterValue::List(values)) if !values.is_empty() => {
            Some(col.is_in(values.iter().cloned().map(Value::from)))
        }
        (FilterOperator::NotIn, FilterValue::List(values)) if !values.is_empty() => {
            Some(col.is_not_in(values.iter().cloned().map(Value::from)))
        }
        (FilterOperator::Between, FilterValue::Range(low, high)) => {
            Some(col.between(Value::from(low.clone()), Value::from(high.clone())))
        }
        (FilterOperator::IsNull, _) => Some(col.is_null()),
        (FilterOperator::IsNotNull, _) => Some(col.is_not_null()),
        _ => None,
    }
}

/// Apply all conditions to the select, combined with AND. Builder in, builder
/// out; the input select is not shared, so no aliasing across requests.
pub fn apply_filters<E>(select: Select<E>, conditions: &[FilterCondition]) -> Select<E>
where
    E: EntityTrait,
{
    if conditions.is_empty() {
        return select;
    }

    let mut all = Condition::all();
    for condition in conditions {
        if let Some(expr) = condition_expr(condition) {
            all = all.add(expr);
        }
    }

    select.filter(all)
}

/// Apply the requested sort, resolved against the schema allow-list, plus an
/// unconditional primary-key tie-break so equal sort keys keep a stable order
/// across pages.
pub fn apply_sort<E>(
    select: Select<E>,
    schema: &FilterSchema,
    sort_by: &str,
    sort_order: SortOrder,
) -> Select<E>
where
    E: EntityTrait,
{
    let column = schema.resolve_sort(sort_by);
    let order = match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    let sorted = select.order_by(
        SimpleExpr::from(column_expr(&schema.qualify(column))),
        order,
    );

    if column == schema.primary_key {
        sorted
    } else {
        sorted.order_by(
            SimpleExpr::from(column_expr(&schema.qualify(schema.primary_key))),
            Order::Asc,
        )
    }
}

/// One COUNT plus one bounded/offset fetch for the requested page.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    query: &PageQuery,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let total = select.clone().count(db).await?;
    let items = select
        .limit(query.limit)
        .offset(query.offset())
        .all(db)
        .await?;

    Ok((items, total))
}
