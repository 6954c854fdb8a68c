use std::sync::atomic::{AtomicUsize, Ordering};

use crate::canvas::ItemId;

static NEXT_ITEM: AtomicUsize = AtomicUsize::new(1);

/// Hand out a canvas item id, unique across every canvas for the life of the process.
pub fn next_item_id() -> ItemId {
    NEXT_ITEM.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase() {
        let first = next_item_id();
        let second = next_item_id();
        assert!(second > first);
    }
}
