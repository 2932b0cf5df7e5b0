//! Shell operations beyond HTTP and render.
//!
//! Each operation is sent to the shell as is and resolved exactly once.

pub mod storage;
pub mod timer;

use crux_core::{capability::Operation, command, Command, Request};
use std::{future::Future, marker::PhantomData};

/// Request builder for a single shell operation
#[must_use]
pub struct RequestBuilder<Op, Effect, Event> {
    operation: Op,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Op, Effect, Event> RequestBuilder<Op, Effect, Event>
where
    Op: Operation,
    Effect: Send + From<Request<Op>> + 'static,
    Event: Send + 'static,
{
    pub(crate) fn new(operation: Op) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(self) -> command::RequestBuilder<Effect, Event, impl Future<Output = Op::Output>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
