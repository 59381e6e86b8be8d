use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use contracts::host::HostError;
use futures::future::{select, Either, LocalBoxFuture};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("commit did not finish within {0} ms")]
    TimedOut(u32),
}

pub type CommitFuture = LocalBoxFuture<'static, Result<(), CommitError>>;

/// Sends the selected items to the document and closes the picker.
pub type CommitHandler<T> = Rc<dyn Fn(Vec<T>) -> CommitFuture>;

/// Runs `handler` on `items`, failing with [`CommitError::TimedOut`] if
/// `deadline` resolves first.
pub async fn run_commit<T, D>(
    handler: &CommitHandler<T>,
    items: Vec<T>,
    deadline: D,
    timeout_ms: u32,
) -> Result<(), CommitError>
where
    D: Future<Output = ()>,
{
    let send = handler(items);
    let deadline = pin!(deadline);
    match select(send, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(CommitError::TimedOut(timeout_ms)),
    }
}
