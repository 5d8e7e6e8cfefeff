//! # Concurrency Integration Tests
//!
//! The shared ledger serializes every mutating call behind one exclusive
//! lock. Hammering it from many threads must yield the same books as some
//! sequential ordering of the calls: distinct ids, one debit per
//! subscription, no lost or duplicated records.

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::integration::{TestBed, PROVIDER};
    use rand::{Rng, SeedableRng};
    use shared_types::Principal;

    fn random_principals(count: usize, seed: u64) -> Vec<Principal> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut principal = [0u8; 20];
                rng.fill(&mut principal);
                principal
            })
            .collect()
    }

    #[test]
    fn test_parallel_subscribes_debit_exactly_once() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();

        let subscribers = random_principals(16, 42);
        for sub in &subscribers {
            bed.fund(*sub, 1_000, 1_000);
        }

        let handles: Vec<_> = subscribers
            .iter()
            .map(|sub| {
                let ledger = bed.ledger.clone();
                let sub = *sub;
                thread::spawn(move || ledger.subscribe(sub, service_id, 30).unwrap())
            })
            .collect();
        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), subscribers.len());
        assert_eq!(bed.ledger.subscription_count(), subscribers.len());

        // Each subscriber paid for exactly one 30-day subscription.
        for sub in &subscribers {
            assert_eq!(bed.balance_of(*sub), 970);
        }
        assert_eq!(bed.balance_of(PROVIDER), 30 * subscribers.len() as u128);
    }

    #[test]
    fn test_parallel_cancel_and_verify_settle_consistently() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();

        let subscribers = random_principals(8, 7);
        let mut ids = Vec::new();
        for sub in &subscribers {
            bed.fund(*sub, 100, 100);
            ids.push(bed.ledger.subscribe(*sub, service_id, 30).unwrap());
        }

        // Half the subscribers cancel while other threads keep verifying.
        let handles: Vec<_> = subscribers
            .iter()
            .zip(&ids)
            .enumerate()
            .map(|(i, (sub, id))| {
                let ledger = bed.ledger.clone();
                let (sub, id) = (*sub, *id);
                thread::spawn(move || {
                    if i % 2 == 0 {
                        ledger.cancel_subscription(sub, id).unwrap();
                    }
                    ledger.verify_access(id)
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // After the dust settles the split is exact.
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(bed.ledger.verify_access(*id), i % 2 != 0);
        }
    }

    #[test]
    fn test_failed_subscribes_never_leak_ids() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();

        let funded = random_principals(4, 1);
        let broke = random_principals(4, 2);
        for sub in &funded {
            bed.fund(*sub, 1_000, 1_000);
        }

        let handles: Vec<_> = funded
            .iter()
            .map(|s| (*s, true))
            .chain(broke.iter().map(|s| (*s, false)))
            .map(|(sub, _expected_ok)| {
                let ledger = bed.ledger.clone();
                thread::spawn(move || ledger.subscribe(sub, service_id, 30))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, funded.len());
        // Rejected attempts left no records behind; ids are dense from 0.
        assert_eq!(bed.ledger.subscription_count(), funded.len());
        for id in 0..funded.len() as u64 {
            assert!(bed.ledger.subscription(id).is_some());
        }
    }
}
