use async_trait::async_trait;
use std::sync::Arc;
use strategos_types::errors::ApplicationError;

use crate::{config::Config, uow::UnitOfWork};

/// A marker trait for Query structs.
/// Queries read the state of the system, or compute an answer from their input.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that read stored data through a Unit of Work.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}

/// A trait for handlers whose answer depends only on the query and the
/// engine configuration. No storage is touched, so these keep working when
/// the history store is down.
pub trait ComputeHandler<Q: Query> {
    fn handle(&self, query: Q, config: &Arc<Config>) -> Result<Q::Output, ApplicationError>;
}
