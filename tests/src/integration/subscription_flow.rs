//! # Subscription Flow Integration Tests
//!
//! End-to-end flows across the service registry, the subscription ledger,
//! and the token adapter: list → approve → subscribe → verify → cancel,
//! plus the payment failure paths.

#[cfg(test)]
mod tests {
    use crate::integration::{TestBed, PROVIDER, USER};
    use sc_02_subscription_ledger::{LedgerError, PaymentError, SubscriptionState};
    use shared_types::Principal;

    #[test]
    fn test_provider_lists_service() {
        let bed = TestBed::deploy();

        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();

        assert_eq!(service_id, 0);
        assert_eq!(bed.ledger.owner_of(service_id).unwrap(), PROVIDER);
    }

    #[test]
    fn test_user_subscribes_to_service() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 50);

        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();

        let sub = bed.ledger.subscription(sub_id).unwrap();
        assert_eq!(sub.subscriber(), USER);
        assert_eq!(
            bed.ledger.subscription_state(sub_id),
            Some(SubscriptionState::Active)
        );
        // Charge went to the provider: 30 days at 1 unit/day.
        assert_eq!(bed.balance_of(USER), 970);
        assert_eq!(bed.balance_of(PROVIDER), 30);
        assert_eq!(bed.allowance_of(USER), 20);
    }

    #[test]
    fn test_user_cancels_subscription() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 50);
        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();

        bed.ledger.cancel_subscription(USER, sub_id).unwrap();

        assert_eq!(
            bed.ledger.subscription_state(sub_id),
            Some(SubscriptionState::Canceled)
        );
        assert!(!bed.ledger.verify_access(sub_id));
        // No refund on cancellation.
        assert_eq!(bed.balance_of(USER), 970);
    }

    #[test]
    fn test_verify_active_subscription_access() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 50);

        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();

        assert!(bed.ledger.verify_access(sub_id));
    }

    #[test]
    fn test_subscribe_fails_with_insufficient_approval() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        // Plenty of balance, but only 10 units delegated against a charge of 30.
        bed.fund(USER, 1_000, 10);

        let err = bed.ledger.subscribe(USER, service_id, 30).unwrap_err();

        assert_eq!(
            err,
            LedgerError::Payment(PaymentError::NotAuthorized {
                required: 30,
                approved: 10,
            })
        );
        // No subscription id 0 exists for that attempt, nothing moved.
        assert_eq!(bed.ledger.subscription_count(), 0);
        assert!(bed.ledger.subscription(0).is_none());
        assert_eq!(bed.balance_of(USER), 1_000);
        assert_eq!(bed.balance_of(PROVIDER), 0);
    }

    #[test]
    fn test_subscribe_fails_with_insufficient_balance() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        // Generous allowance over a nearly empty account.
        bed.fund(USER, 5, 100);

        let err = bed.ledger.subscribe(USER, service_id, 30).unwrap_err();

        assert_eq!(
            err,
            LedgerError::Payment(PaymentError::InsufficientFunds {
                required: 30,
                available: 5,
            })
        );
        assert_eq!(bed.ledger.subscription_count(), 0);
        assert_eq!(bed.balance_of(USER), 5);
    }

    #[test]
    fn test_drained_allowance_blocks_resubscribe() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 30);

        bed.ledger.subscribe(USER, service_id, 30).unwrap();
        assert_eq!(bed.allowance_of(USER), 0);

        let err = bed.ledger.subscribe(USER, service_id, 30).unwrap_err();
        assert_eq!(
            err,
            LedgerError::Payment(PaymentError::NotAuthorized {
                required: 30,
                approved: 0,
            })
        );
        assert_eq!(bed.ledger.subscription_count(), 1);
    }

    #[test]
    fn test_ids_increase_in_call_order() {
        let bed = TestBed::deploy();
        bed.fund(USER, 1_000, 1_000);

        let streaming = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        let news = bed.ledger.list_service(PROVIDER, "News Feed").unwrap();
        assert_eq!((streaming, news), (0, 1));

        let first = bed.ledger.subscribe(USER, streaming, 7).unwrap();
        let second = bed.ledger.subscribe(USER, news, 7).unwrap();
        let third = bed.ledger.subscribe(USER, streaming, 7).unwrap();
        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(bed.ledger.subscriptions_of(USER), vec![0, 1, 2]);
    }

    #[test]
    fn test_cancel_requires_the_subscriber() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 50);
        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();

        let intruder: Principal = [0x99; 20];
        assert_eq!(
            bed.ledger.cancel_subscription(intruder, sub_id),
            Err(LedgerError::NotSubscriber { id: sub_id })
        );
        // Access is unchanged by the failed attempt.
        assert!(bed.ledger.verify_access(sub_id));
    }

    #[test]
    fn test_cancel_twice_matches_single_cancel() {
        let bed = TestBed::deploy();
        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        bed.fund(USER, 1_000, 50);
        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();

        bed.ledger.cancel_subscription(USER, sub_id).unwrap();
        bed.ledger.cancel_subscription(USER, sub_id).unwrap();

        assert_eq!(
            bed.ledger.subscription_state(sub_id),
            Some(SubscriptionState::Canceled)
        );
        assert!(!bed.ledger.verify_access(sub_id));
    }

    // The registry subsystem stands alone: driving it directly yields the
    // same catalog the ledger facade builds.
    #[test]
    fn test_registry_crate_matches_ledger_facade() {
        use sc_01_service_registry::ServiceRegistry;

        let mut registry = ServiceRegistry::new();
        let bed = TestBed::deploy();

        for name in ["Streaming Service", "News Feed", "Cloud Backup"] {
            let direct = registry.list_service(PROVIDER, name).unwrap();
            let via_ledger = bed.ledger.list_service(PROVIDER, name).unwrap();
            assert_eq!(direct, via_ledger);
        }
        assert_eq!(registry.len(), bed.ledger.service_count());
        assert_eq!(
            registry.owner_of(2).unwrap(),
            bed.ledger.owner_of(2).unwrap()
        );
    }

    #[test]
    fn test_verify_access_is_a_predicate_not_a_lookup() {
        let bed = TestBed::deploy();

        assert!(!bed.ledger.verify_access(0));
        assert!(!bed.ledger.verify_access(u64::MAX));
    }

    // The full scenario from the original deployment checklist: list the
    // service, fund and approve, subscribe for a month, then revoke.
    #[test]
    fn test_streaming_service_scenario() {
        let bed = TestBed::deploy();

        let service_id = bed.ledger.list_service(PROVIDER, "Streaming Service").unwrap();
        assert_eq!(service_id, 0);

        bed.fund(USER, 1_000, 50);
        let sub_id = bed.ledger.subscribe(USER, service_id, 30).unwrap();
        assert_eq!(sub_id, 0);
        assert!(bed.ledger.verify_access(sub_id));

        bed.ledger.cancel_subscription(USER, sub_id).unwrap();
        assert!(!bed.ledger.verify_access(sub_id));
    }
}
