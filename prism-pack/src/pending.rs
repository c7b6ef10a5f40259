use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, Ready};
use tokio::task::JoinHandle;

use crate::{ResourcePackError, ResourcePackRequest};

type Outcome = Result<ResourcePackRequest, ResourcePackError>;

/// A request whose hash is still being computed.
///
/// Resolves once with the built request or the first failure. Dropping it
/// does not cancel the background task.
#[must_use = "a pending request does nothing unless awaited"]
pub struct PendingRequest {
    state: State,
}

enum State {
    Ready(Ready<Outcome>),
    Running(JoinHandle<Outcome>),
}

impl PendingRequest {
    pub(crate) fn ready(outcome: Outcome) -> Self {
        Self {
            state: State::Ready(future::ready(outcome)),
        }
    }

    pub(crate) fn running(task: JoinHandle<Outcome>) -> Self {
        Self {
            state: State::Running(task),
        }
    }
}

impl Future for PendingRequest {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome> {
        match &mut self.get_mut().state {
            State::Ready(ready) => Pin::new(ready).poll(cx),
            State::Running(task) => Pin::new(task)
                .poll(cx)
                .map(|joined| joined.map_err(ResourcePackError::Task).and_then(|outcome| outcome)),
        }
    }
}
