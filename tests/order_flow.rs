use electrostore::{
    config::Database,
    di::DependenciesInject,
    domain::requests::{
        CreateOrderRequest, CreateProductRequest, CreateUserRequest, OrderItemRequest,
        UpdateOrderStatusRequest,
    },
    errors::{RepositoryError, ServiceError},
    model::OrderStatus,
};

fn deps() -> DependenciesInject {
    DependenciesInject::new(Database::new())
}

async fn seed_user(di: &DependenciesInject, email: &str) -> i32 {
    di.user_service
        .create_user(&CreateUserRequest {
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
        })
        .await
        .unwrap()
        .data
        .id
}

async fn seed_product(di: &DependenciesInject, name: &str, price: i64, stock: i32) -> i32 {
    di.product_service
        .command
        .create_product(&CreateProductRequest {
            name: name.to_string(),
            description: None,
            price,
            stock_quantity: stock,
            category_ids: vec![],
        })
        .await
        .unwrap()
        .data
        .id
}

async fn stock_and_version(di: &DependenciesInject, product_id: i32) -> (i32, i64) {
    let product = di
        .product_service
        .query
        .find_by_id(product_id)
        .await
        .unwrap()
        .data;
    (product.stock_quantity, product.version)
}

fn order_of(user_id: i32, items: Vec<(i32, i32)>) -> CreateOrderRequest {
    CreateOrderRequest {
        user_id,
        items: items
            .into_iter()
            .map(|(product_id, quantity)| OrderItemRequest {
                product_id,
                quantity,
            })
            .collect(),
    }
}

#[tokio::test]
async fn order_reserves_stock_and_snapshots_prices() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Keyboard", 2500, 10).await;

    let response = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(product_id, 3)]))
        .await
        .unwrap();

    assert_eq!(response.data.status, OrderStatus::Pending);
    assert_eq!(response.data.total_amount, 7500);
    assert_eq!(response.data.items.len(), 1);
    assert_eq!(response.data.items[0].price_at_purchase, 2500);

    let (stock, version) = stock_and_version(&di, product_id).await;
    assert_eq!(stock, 7);
    assert_eq!(version, 2);
}

#[tokio::test]
async fn insufficient_stock_rejects_the_order_untouched() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Mouse", 900, 2).await;

    let err = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(product_id, 5)]))
        .await
        .unwrap_err();

    match err {
        ServiceError::Repo(RepositoryError::InsufficientStock {
            product_id: p,
            requested,
            available,
        }) => {
            assert_eq!(p, product_id);
            assert_eq!(requested, 5);
            assert_eq!(available, 2);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    assert_eq!(stock_and_version(&di, product_id).await, (2, 1));
    assert!(
        di.order_service
            .query
            .find_by_user(user_id)
            .await
            .unwrap()
            .data
            .is_empty()
    );
}

#[tokio::test]
async fn failing_second_item_rolls_back_the_first() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let in_stock = seed_product(&di, "Monitor", 12000, 5).await;
    let sold_out = seed_product(&di, "Webcam", 4000, 0).await;

    let err = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(in_stock, 1), (sold_out, 1)]))
        .await
        .unwrap_err();

    match err {
        ServiceError::Repo(RepositoryError::InsufficientStock { product_id, .. }) => {
            assert_eq!(product_id, sold_out)
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    // The reservation staged for the first item must not have leaked.
    assert_eq!(stock_and_version(&di, in_stock).await, (5, 1));
    assert_eq!(stock_and_version(&di, sold_out).await, (0, 1));
}

#[tokio::test]
async fn repeated_product_lines_reserve_cumulatively() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Cable", 300, 5).await;

    let response = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(product_id, 2), (product_id, 2)]))
        .await
        .unwrap();

    assert_eq!(response.data.total_amount, 1200);

    let (stock, version) = stock_and_version(&di, product_id).await;
    assert_eq!(stock, 1);
    assert_eq!(version, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn two_competing_orders_exactly_one_wins() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "SSD", 8000, 5).await;

    let a = {
        let di = di.clone();
        let req = order_of(user_id, vec![(product_id, 3)]);
        tokio::spawn(async move { di.order_service.command.create_order(&req).await })
    };
    let b = {
        let di = di.clone();
        let req = order_of(user_id, vec![(product_id, 3)]);
        tokio::spawn(async move { di.order_service.command.create_order(&req).await })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);

    for result in &results {
        if let Err(err) = result {
            assert!(
                matches!(
                    err,
                    ServiceError::Repo(
                        RepositoryError::VersionConflict { .. }
                            | RepositoryError::InsufficientStock { .. }
                    )
                ),
                "loser failed with unexpected error: {err:?}"
            );
        }
    }

    let (stock, _) = stock_and_version(&di, product_id).await;
    assert_eq!(stock, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_buyers_never_oversell() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "GPU", 450_000, 5).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let di = di.clone();
        handles.push(tokio::spawn(async move {
            // Retry on version conflict the way a storefront caller would;
            // any other failure is final.
            loop {
                let req = order_of(user_id, vec![(product_id, 1)]);
                match di.order_service.command.create_order(&req).await {
                    Err(ServiceError::Repo(RepositoryError::VersionConflict { .. })) => continue,
                    other => return other.is_ok(),
                }
            }
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 5);
    let (stock, _) = stock_and_version(&di, product_id).await;
    assert_eq!(stock, 0);
}

#[tokio::test]
async fn cancellation_restores_stock_and_repeats_are_harmless() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Desk", 30000, 10).await;

    let order_id = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(product_id, 4)]))
        .await
        .unwrap()
        .data
        .id;
    assert_eq!(stock_and_version(&di, product_id).await, (6, 2));

    let cancelled = di
        .order_service
        .command
        .update_order_status(&UpdateOrderStatusRequest {
            order_id,
            status: OrderStatus::Cancelled,
        })
        .await
        .unwrap();
    assert_eq!(cancelled.data.status, OrderStatus::Cancelled);
    assert_eq!(stock_and_version(&di, product_id).await, (10, 3));

    // A second cancellation only rewrites the status; no double restock.
    di.order_service
        .command
        .update_order_status(&UpdateOrderStatusRequest {
            order_id,
            status: OrderStatus::Cancelled,
        })
        .await
        .unwrap();
    assert_eq!(stock_and_version(&di, product_id).await, (10, 3));
}

#[tokio::test]
async fn delivered_order_still_restocks_on_cancellation() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Chair", 15000, 3).await;

    let order_id = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(product_id, 2)]))
        .await
        .unwrap()
        .data
        .id;

    for status in [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        let updated = di
            .order_service
            .command
            .update_order_status(&UpdateOrderStatusRequest { order_id, status })
            .await
            .unwrap();
        assert_eq!(updated.data.status, status);
        // Forward transitions never touch stock.
        assert_eq!(stock_and_version(&di, product_id).await, (1, 2));
    }

    di.order_service
        .command
        .update_order_status(&UpdateOrderStatusRequest {
            order_id,
            status: OrderStatus::Cancelled,
        })
        .await
        .unwrap();
    assert_eq!(stock_and_version(&di, product_id).await, (3, 3));
}

#[tokio::test]
async fn order_for_unknown_user_or_product_is_rejected() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;
    let product_id = seed_product(&di, "Lamp", 2000, 5).await;

    let err = di
        .order_service
        .command
        .create_order(&order_of(999, vec![(product_id, 1)]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));

    let err = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![(999, 1)]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn empty_order_fails_validation() {
    let di = deps();
    let user_id = seed_user(&di, "ada@example.com").await;

    let err = di
        .order_service
        .command
        .create_order(&order_of(user_id, vec![]))
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert!(
                messages
                    .iter()
                    .any(|m| m.contains("at least one item")),
                "unexpected messages: {messages:?}"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn updating_a_missing_order_is_not_found() {
    let di = deps();

    let err = di
        .order_service
        .command
        .update_order_status(&UpdateOrderStatusRequest {
            order_id: 42,
            status: OrderStatus::Shipped,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}
