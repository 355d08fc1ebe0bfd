//! Selection state for discovered tokens.

use crate::error::SelectionError;
use cinder_types::{ChainAddress, TokenBalance};
use std::collections::HashSet;

/// Tracks which discovered tokens are currently chosen for burning.
///
/// Invariant: the selection is always a subset of the most recent balance
/// list's addresses. Every refresh goes through [`replace_all`], which
/// resets the selection to "everything currently known", so stale addresses
/// never survive a refresh.
///
/// [`replace_all`]: SelectionStore::replace_all
#[derive(Debug, Default)]
pub struct SelectionStore {
    /// Known addresses in balance-list order. Order matters: burn batches
    /// submit in this order.
    known: Vec<ChainAddress>,
    selected: HashSet<ChainAddress>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a fresh balance list and select every address in it.
    pub fn replace_all(&mut self, tokens: &[TokenBalance]) {
        self.known = tokens.iter().map(|t| t.address.clone()).collect();
        self.selected = self.known.iter().cloned().collect();
    }

    /// Flip membership of `address`. Errors if the address is not in the
    /// current balance list; callers must only toggle known tokens.
    pub fn toggle(&mut self, address: &ChainAddress) -> Result<(), SelectionError> {
        if !self.known.contains(address) {
            return Err(SelectionError::UnknownToken(address.clone()));
        }
        if !self.selected.remove(address) {
            self.selected.insert(address.clone());
        }
        Ok(())
    }

    /// Select the full known set.
    pub fn select_all(&mut self) {
        self.selected = self.known.iter().cloned().collect();
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, address: &ChainAddress) -> bool {
        self.selected.contains(address)
    }

    /// Selected addresses in balance-list order.
    pub fn selected(&self) -> Vec<ChainAddress> {
        self.known
            .iter()
            .filter(|a| self.selected.contains(*a))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_types::TokenAmount;
    use proptest::prelude::*;

    fn token(n: u8) -> TokenBalance {
        TokenBalance {
            address: ChainAddress::parse(&format!("0x{:040x}", n)).unwrap(),
            symbol: format!("T{n}"),
            balance: TokenAmount::new(100),
            decimals: 18,
        }
    }

    fn addr(n: u8) -> ChainAddress {
        ChainAddress::parse(&format!("0x{:040x}", n)).unwrap()
    }

    #[test]
    fn replace_all_selects_everything() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(1), token(2), token(3)]);
        assert_eq!(store.selected_count(), 3);
        assert!(store.is_selected(&addr(1)));
        assert!(store.is_selected(&addr(3)));
    }

    #[test]
    fn replace_all_discards_manual_selection() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(1), token(2)]);
        store.toggle(&addr(1)).unwrap();
        assert!(!store.is_selected(&addr(1)));

        // A refresh resets to all-selected, even for previously deselected
        // addresses.
        store.replace_all(&[token(1), token(2)]);
        assert!(store.is_selected(&addr(1)));
    }

    #[test]
    fn replace_all_drops_stale_addresses() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(1), token(2)]);
        store.replace_all(&[token(2)]);
        assert!(!store.is_selected(&addr(1)));
        assert_eq!(store.known_count(), 1);
        assert!(store.toggle(&addr(1)).is_err());
    }

    #[test]
    fn toggle_unknown_address_errors_and_changes_nothing() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(1)]);
        let err = store.toggle(&addr(9)).unwrap_err();
        assert_eq!(err, SelectionError::UnknownToken(addr(9)));
        assert_eq!(store.selected_count(), 1);
    }

    #[test]
    fn select_all_after_deselect_restores_full_set() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(1), token(2)]);
        store.toggle(&addr(2)).unwrap();
        store.select_all();
        assert!(store.is_selected(&addr(2)));
        assert_eq!(store.selected_count(), 2);

        store.deselect_all();
        assert_eq!(store.selected_count(), 0);
        assert_eq!(store.known_count(), 2);
    }

    #[test]
    fn selected_preserves_balance_list_order() {
        let mut store = SelectionStore::new();
        store.replace_all(&[token(3), token(1), token(2)]);
        assert_eq!(store.selected(), vec![addr(3), addr(1), addr(2)]);
    }

    proptest! {
        #[test]
        fn toggle_is_its_own_inverse(count in 1usize..10, pick in 0usize..10) {
            let tokens: Vec<TokenBalance> = (0..count as u8).map(token).collect();
            let mut store = SelectionStore::new();
            store.replace_all(&tokens);

            let target = addr((pick % count) as u8);
            let before = store.is_selected(&target);
            store.toggle(&target).unwrap();
            store.toggle(&target).unwrap();
            prop_assert_eq!(store.is_selected(&target), before);
        }
    }
}
