//! Scripted transfer submitter.

use async_trait::async_trait;
use cinder_burner::{TransferError, TransferSubmitter, TxHash};
use cinder_types::{ChainAddress, TokenAmount};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded `transfer` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedTransfer {
    pub token: ChainAddress,
    pub to: ChainAddress,
    pub value: TokenAmount,
}

/// Records every submitted transfer in call order and succeeds with a
/// synthetic tx hash, except for tokens scripted to fail.
#[derive(Default)]
pub struct NullSubmitter {
    failures: Mutex<HashMap<ChainAddress, TransferError>>,
    submitted: Mutex<Vec<SubmittedTransfer>>,
    sequence: AtomicUsize,
}

impl NullSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every transfer of `token` fail with `error`.
    pub fn fail_token(&self, token: ChainAddress, error: TransferError) {
        self.failures.lock().unwrap().insert(token, error);
    }

    /// All transfers submitted so far, in submission order.
    pub fn submitted(&self) -> Vec<SubmittedTransfer> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferSubmitter for NullSubmitter {
    async fn transfer(
        &self,
        token: &ChainAddress,
        to: &ChainAddress,
        value: TokenAmount,
    ) -> Result<TxHash, TransferError> {
        self.submitted.lock().unwrap().push(SubmittedTransfer {
            token: token.clone(),
            to: to.clone(),
            value,
        });

        if let Some(error) = self.failures.lock().unwrap().get(token) {
            return Err(error.clone());
        }

        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(TxHash(format!("0x{n:064x}")))
    }
}
