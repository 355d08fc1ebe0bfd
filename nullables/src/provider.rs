//! Scripted balance provider.

use async_trait::async_trait;
use cinder_provider::{BalanceProvider, ProviderError};
use cinder_types::{ChainAddress, TokenBalance};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns pre-scripted results, one per `fetch` call, in push order.
/// Once the script runs out, fetches return an empty list.
#[derive(Default)]
pub struct NullBalanceProvider {
    script: Mutex<VecDeque<Result<Vec<TokenBalance>, ProviderError>>>,
    fetch_count: AtomicUsize,
}

impl NullBalanceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next unanswered `fetch`.
    pub fn push_result(&self, result: Result<Vec<TokenBalance>, ProviderError>) {
        self.script.lock().unwrap().push_back(result);
    }

    /// How many times `fetch` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceProvider for NullBalanceProvider {
    async fn fetch(&self, _owner: &ChainAddress) -> Result<Vec<TokenBalance>, ProviderError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
