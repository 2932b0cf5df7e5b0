//! One-shot timer command definitions.

use crux_core::capability::Operation;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    /// Fire `Elapsed { id }` once after `millis` milliseconds
    Start { id: u32, millis: u64 },
    /// Drop the pending timer `id`, its start and this cancel both answer `Cancelled`
    Cancel { id: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed { id: u32 },
    Cancelled { id: u32 },
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn start(id: u32, millis: u64) -> RequestBuilder<TimerOperation, Effect, Event> {
        RequestBuilder::new(TimerOperation::Start { id, millis })
    }

    pub fn cancel(id: u32) -> RequestBuilder<TimerOperation, Effect, Event> {
        RequestBuilder::new(TimerOperation::Cancel { id })
    }
}
