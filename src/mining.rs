//! Block assembly on top of the best branch

use crate::chain::BlockChain;
use crate::config::AssemblyOrder;
use crate::economic::total_fees;
use crate::error::Result;
use crate::handler::{GreedyFee, TxHandler};
use crate::types::*;
use crate::utxo::UtxoPool;
use tracing::debug;

/// CreateNewBlock: chain × key → ℬ
///
/// 1. Snapshot the best branch's UTXO pool
/// 2. Run the pending pool through the epoch handler in the configured order
/// 3. Prepend a coinbase paying the configured reward to `coinbase_pubkey`
/// 4. Parent = best block
///
/// The pending pool is only read; included transactions leave it once the
/// block becomes the best tip.
pub fn create_new_block(chain: &BlockChain, coinbase_pubkey: ByteString) -> Result<Block> {
    let snapshot = chain.best_utxo_pool();
    let candidates = chain.transaction_pool().transactions();
    let transactions = select_transactions(chain, &snapshot, &candidates)?;

    let height = chain.max_height() + 1;
    debug!(
        height,
        txs = transactions.len(),
        fees = %total_fees(&transactions, &snapshot),
        "assembled block"
    );
    let coinbase = Transaction::coinbase(chain.config().coinbase_reward, coinbase_pubkey, height);

    Ok(Block::new(Some(chain.best_block().hash()), coinbase, transactions))
}

fn select_transactions(
    chain: &BlockChain,
    snapshot: &UtxoPool,
    candidates: &[Transaction],
) -> Result<Vec<Transaction>> {
    match chain.config().assembly_order {
        AssemblyOrder::Admission => Ok(TxHandler::new(snapshot.clone()).handle_txs(candidates)),
        AssemblyOrder::FeeAscending => {
            let by_fee = TxHandler::new(snapshot.clone()).handle_txs_with(&GreedyFee, candidates)?;
            // re-admit in fee order so the block applies cleanly in that order
            Ok(TxHandler::new(snapshot.clone()).handle_txs(&by_fee))
        }
    }
}
