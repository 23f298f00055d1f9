use super::model::Transaction;

/// Unconfirmed transactions waiting for the next mined block, in arrival order.
#[derive(Debug, Default)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue a transaction for the next block.
    pub fn add(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Take every pending transaction, leaving the pool empty.
    /// Anything added afterwards accumulates for the following block.
    pub fn drain_for_block(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionPool;
    use crate::transaction::Transaction;

    #[test]
    fn drain_keeps_insertion_order_and_empties_pool() {
        let mut pool = TransactionPool::new();
        pool.add(Transaction::new("t1", "x", 1.0));
        pool.add(Transaction::new("t2", "x", 2.0));
        pool.add(Transaction::new("t3", "x", 3.0));

        let drained = pool.drain_for_block();
        let senders: Vec<_> = drained.iter().map(|t| t.sender.as_str()).collect();
        assert_eq!(senders, ["t1", "t2", "t3"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut pool = TransactionPool::new();
        let tx = Transaction::new("Alice", "Bob", 10.0);
        pool.add(tx.clone());
        pool.add(tx);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn additions_after_drain_go_to_next_block() {
        let mut pool = TransactionPool::new();
        pool.add(Transaction::new("a", "b", 1.0));
        let first = pool.drain_for_block();
        pool.add(Transaction::new("c", "d", 2.0));

        assert_eq!(first.len(), 1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().next().map(|t| t.sender.as_str()), Some("c"));
    }
}
