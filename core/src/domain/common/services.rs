use crate::domain::common::filter::FilterPolicy;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::ports::UserRepository;

/// Aggregate service backing every HTTP handler. Trait implementations live in
/// each domain's `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    pub user_repository: U,
    pub product_repository: P,
    pub filter_policy: FilterPolicy,
}

impl<U, P> Service<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    pub fn new(user_repository: U, product_repository: P, filter_policy: FilterPolicy) -> Self {
        Self {
            user_repository,
            product_repository,
            filter_policy,
        }
    }
}
