//! Key-value storage command definitions.
//!
//! The shell owns the persistent store (browser `localStorage`, a file on
//! disk, ...); the Core only names keys and values.

use crux_core::capability::Operation;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;

// Operations that the Shell needs to perform on its persistent store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Read { key: String },
    Write { key: String, value: String },
}

// The output from storage operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    Value(Option<String>),
    Written,
    Error { message: String },
}

impl Operation for StorageOperation {
    type Output = StorageOutput;
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read the value stored under `key`
    pub fn read(key: impl Into<String>) -> RequestBuilder<StorageOperation, Effect, Event> {
        RequestBuilder::new(StorageOperation::Read { key: key.into() })
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn write(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> RequestBuilder<StorageOperation, Effect, Event> {
        RequestBuilder::new(StorageOperation::Write {
            key: key.into(),
            value: value.into(),
        })
    }
}
