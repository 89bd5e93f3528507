//! End-to-end: submit, assemble, accept, fork

mod common;

use common::*;
use utxo_chain::mining::create_new_block;
use utxo_chain::*;

#[test]
fn test_submit_assemble_accept() {
    init_tracing();
    let genesis = genesis_paying(&[30]);
    let cb = genesis.coinbase.hash();
    let mut chain = BlockChain::new(genesis);

    let pay_bob = signed_tx(&key(1), &[OutPoint::new(cb, 0)], &[20, 9], 2);
    let bob_pays_carol = signed_tx(&key(2), &[OutPoint::new(pay_bob.hash(), 0)], &[20], 3);
    chain.submit_transaction(bob_pays_carol.clone());
    chain.submit_transaction(pay_bob.clone());

    // the child was submitted first, so it cannot be admitted in this block
    let block = create_new_block(&chain, pubkey(9)).unwrap();
    assert_eq!(block.transactions, vec![pay_bob.clone()]);
    assert!(chain.add_block(block));
    assert_eq!(chain.transaction_pool().transactions(), vec![bob_pays_carol.clone()]);

    let block = create_new_block(&chain, pubkey(9)).unwrap();
    assert_eq!(block.transactions, vec![bob_pays_carol]);
    assert!(chain.add_block(block));
    assert!(chain.transaction_pool().is_empty());

    let pool = chain.best_utxo_pool();
    assert_eq!(pool.balance_of(&pubkey(3)), 20);
    assert_eq!(pool.balance_of(&pubkey(2)), 9);
    assert_eq!(pool.balance_of(&pubkey(9)), 2 * COINBASE_REWARD as i128);
    assert_eq!(chain.max_height(), 3);
}

#[test]
fn test_competing_branch_overtakes() {
    let genesis = genesis_paying(&[10]);
    let mut chain = BlockChain::new(genesis.clone());

    let a2 = child_block(&genesis, 2, 1, vec![]);
    let b2 = child_block(&genesis, 3, 2, vec![]);
    assert!(chain.add_block(a2.clone()));
    assert!(chain.add_block(b2.clone()));
    assert_eq!(chain.best_block(), &a2);

    let b3 = child_block(&b2, 4, 2, vec![]);
    assert!(chain.add_block(b3.clone()));
    assert_eq!(chain.best_block(), &b3);

    // the next assembled block builds on the new tip
    let next = create_new_block(&chain, pubkey(1)).unwrap();
    assert_eq!(next.prev_block_hash, Some(b3.hash()));
    assert!(chain.add_block(next));
    assert_eq!(chain.max_height(), 4);
}

#[test]
fn test_fee_ascending_assembly_from_config() {
    let genesis = genesis_paying(&[10, 10, 10]);
    let cb = genesis.coinbase.hash();
    let config = ChainConfig::from_json(r#"{ "assembly_order": "fee_ascending" }"#).unwrap();
    let mut chain = BlockChain::with_config(genesis, config);

    let fee5 = signed_tx(&key(1), &[OutPoint::new(cb, 0)], &[5], 2);
    let fee1 = signed_tx(&key(1), &[OutPoint::new(cb, 1)], &[9], 2);
    let fee3 = signed_tx(&key(1), &[OutPoint::new(cb, 2)], &[7], 2);
    for tx in [&fee5, &fee1, &fee3] {
        chain.submit_transaction(tx.clone());
    }

    let block = create_new_block(&chain, pubkey(4)).unwrap();
    assert_eq!(block.transactions, vec![fee1, fee3, fee5]);
    assert!(chain.add_block(block));
}

#[test]
fn test_shared_chain_assembly() {
    let genesis = genesis_paying(&[10]);
    let cb = genesis.coinbase.hash();
    let shared = SharedBlockChain::new(BlockChain::new(genesis));

    shared.submit_transaction(signed_tx(&key(1), &[OutPoint::new(cb, 0)], &[10], 2));
    assert_eq!(shared.pending_transactions().len(), 1);

    let block = shared.read(|chain| create_new_block(chain, pubkey(1))).unwrap();
    assert_eq!(shared.process_block(block), ValidationResult::Valid);
    assert!(shared.pending_transactions().is_empty());
    assert_eq!(shared.best_utxo_pool().balance_of(&pubkey(2)), 10);
}

#[test]
fn test_side_branch_block_keeps_pending_transaction() {
    let genesis = genesis_paying(&[10]);
    let cb = OutPoint::new(genesis.coinbase.hash(), 0);
    let mut chain = BlockChain::new(genesis.clone());
    let tip = extend(&mut chain, &genesis, 2, 100);
    assert_eq!(chain.max_height(), 3);

    let pay = signed_tx(&key(1), &[cb], &[10], 2);
    chain.submit_transaction(pay.clone());

    // accepted at height 2, below the best tip
    assert!(chain.add_block(child_block(&genesis, 7, 3, vec![pay.clone()])));
    assert_eq!(chain.best_block(), &tip);
    assert_eq!(chain.transaction_pool().transactions(), vec![pay.clone()]);
    assert!(chain.best_utxo_pool().contains(&cb));

    let block = create_new_block(&chain, pubkey(9)).unwrap();
    assert_eq!(block.transactions, vec![pay]);
    assert!(chain.add_block(block));
    assert!(chain.transaction_pool().is_empty());
    assert!(!chain.best_utxo_pool().contains(&cb));
}
