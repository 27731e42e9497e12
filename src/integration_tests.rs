#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::DateTime;
    use rust_decimal::Decimal;
    use crate::actor_framework::FrameworkError;
    use crate::clients::{Clock, CoffeeClient, OrderClient};
    use crate::coffee_actor::CatalogError;
    use crate::domain::{Coffee, Order};
    use crate::mock_framework::{create_mock_client, expect_create, expect_get};
    use crate::order_actor::OrderError;

    fn latte() -> Coffee {
        Coffee::new("c003", "Latte", "Latte", Decimal::new(75, 0), "Espresso with steamed milk")
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        // 1. Setup Mocks
        let (coffee_client_inner, mut coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);

        let now = DateTime::parse_from_rfc3339("2025-03-03T15:30:45+07:00").unwrap();
        let coffee_client = CoffeeClient::new(coffee_client_inner);
        let clock: Clock = Arc::new(move || now);
        let order_client = OrderClient::with_clock(order_client_inner, coffee_client, clock);

        // 2. Execute Order Creation in background
        let order_task = tokio::spawn(async move {
            order_client.create_order("c003".to_string(), 2).await
        });

        // 3. Verify Interactions

        // Expect Coffee Get
        let (coffee_id, responder) = expect_get(&mut coffee_rx).await.expect("Expected Coffee Get");
        assert_eq!(coffee_id, "c003");
        responder.send(Ok(Some(latte()))).unwrap();

        // Expect Order Create
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.coffee_id, "c003");
        assert_eq!(payload.quantity, 2);
        assert_eq!(payload.created_at, now);
        let recorded = Order::new("order_1", payload.coffee_id, payload.quantity, payload.created_at);
        responder.send(Ok(recorded.clone())).unwrap();

        // 4. Verify Result
        let result = order_task.await.unwrap();
        assert_eq!(result, Ok(recorded));
    }

    #[tokio::test]
    async fn test_unknown_coffee_never_reaches_ledger() {
        let (coffee_client_inner, mut coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, CoffeeClient::new(coffee_client_inner));

        let order_task = tokio::spawn(async move {
            order_client.create_order("bogus".to_string(), 1).await
        });

        let (_, responder) = expect_get(&mut coffee_rx).await.expect("Expected Coffee Get");
        responder.send(Ok(None)).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(OrderError::CoffeeNotFound("bogus".to_string())));
        assert!(order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected_before_any_lookup() {
        let (coffee_client_inner, mut coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, CoffeeClient::new(coffee_client_inner));

        for quantity in [0, -1] {
            let result = order_client.create_order("c001".to_string(), quantity).await;
            assert!(matches!(result, Err(OrderError::InvalidArgument(_))), "quantity {quantity}");
        }
        assert!(coffee_rx.try_recv().is_err());
        assert!(order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_quantity_beyond_u32_reaches_ledger_unchanged() {
        let (coffee_client_inner, mut coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, CoffeeClient::new(coffee_client_inner));

        let order_task = tokio::spawn(async move {
            order_client.create_order("c003".to_string(), 5_000_000_000).await
        });

        let (_, responder) = expect_get(&mut coffee_rx).await.expect("Expected Coffee Get");
        responder.send(Ok(Some(latte()))).unwrap();

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.quantity, 5_000_000_000);
        let recorded = Order::new("order_big", payload.coffee_id, payload.quantity, payload.created_at);
        responder.send(Ok(recorded.clone())).unwrap();

        assert_eq!(order_task.await.unwrap(), Ok(recorded));
    }

    #[tokio::test]
    async fn test_catalog_failure_surfaces_as_communication_error() {
        let (coffee_client_inner, mut coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, _order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, CoffeeClient::new(coffee_client_inner));

        let order_task = tokio::spawn(async move {
            order_client.create_order("c001".to_string(), 1).await
        });

        let (_, responder) = expect_get(&mut coffee_rx).await.expect("Expected Coffee Get");
        drop(responder);

        let result = order_task.await.unwrap();
        let expected = CatalogError::ActorCommunicationError(FrameworkError::ActorDropped.to_string());
        assert_eq!(result, Err(OrderError::ActorCommunicationError(expected.to_string())));
    }

    #[tokio::test]
    async fn test_get_order_maps_missing_to_not_found() {
        let (coffee_client_inner, _coffee_rx) = create_mock_client::<Coffee>(10);
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner, CoffeeClient::new(coffee_client_inner));

        let lookup = tokio::spawn(async move { order_client.get_order("o-missing".to_string()).await });

        let (id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(id, "o-missing");
        responder.send(Ok(None)).unwrap();

        assert_eq!(lookup.await.unwrap(), Err(OrderError::NotFound("o-missing".to_string())));
    }
}
