//! Thread-blocking adapter over the async implementations.
//!
//! Blocking clients own a current-thread runtime and drive the same futures
//! and streams the async clients return. They must not be used from inside
//! another tokio runtime.

use std::future::Future;

use futures::stream::{BoxStream, StreamExt};
use tokio::runtime::{Builder, Runtime};

use crate::LexdraftError;

pub struct BlockingRuntime {
    runtime: Runtime,
}

impl BlockingRuntime {
    pub fn new() -> Result<Self, LexdraftError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(LexdraftError::Runtime)?;
        Ok(Self { runtime })
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Wraps a stream so that each `next` blocks until the following item is
    /// ready. Dropping the iterator drops the stream.
    pub fn iter<'a, T>(
        &'a self,
        stream: BoxStream<'a, Result<T, LexdraftError>>,
    ) -> BlockingStream<'a, T> {
        BlockingStream {
            runtime: &self.runtime,
            stream,
        }
    }
}

impl std::fmt::Debug for BlockingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingRuntime").finish_non_exhaustive()
    }
}

pub struct BlockingStream<'a, T> {
    runtime: &'a Runtime,
    stream: BoxStream<'a, Result<T, LexdraftError>>,
}

impl<T> Iterator for BlockingStream<'_, T> {
    type Item = Result<T, LexdraftError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.stream.next())
    }
}
