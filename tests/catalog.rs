use electrostore::{
    config::Database,
    di::DependenciesInject,
    domain::requests::{
        CreateCategoryRequest, CreateOrderRequest, CreateProductRequest, CreateReviewRequest,
        CreateUserRequest, OrderItemRequest,
    },
    errors::{RepositoryError, ServiceError},
};
use serde_json::json;

fn deps() -> DependenciesInject {
    DependenciesInject::new(Database::new())
}

async fn seed_user(di: &DependenciesInject, email: &str) -> i32 {
    di.user_service
        .create_user(&CreateUserRequest {
            full_name: "Grace Hopper".to_string(),
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

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let di = deps();
    seed_user(&di, "grace@example.com").await;

    let err = di
        .user_service
        .create_user(&CreateUserRequest {
            full_name: "Grace Impersonator".to_string(),
            email: "grace@example.com".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn invalid_email_fails_validation() {
    let di = deps();

    let err = di
        .user_service
        .create_user(&CreateUserRequest {
            full_name: "No Email".to_string(),
            email: "not-an-email".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let di = deps();
    di.category_service
        .create_category(&CreateCategoryRequest {
            name: "Peripherals".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let err = di
        .category_service
        .create_category(&CreateCategoryRequest {
            name: "Peripherals".to_string(),
            description: Some("again".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn product_with_unknown_category_is_rejected() {
    let di = deps();

    let err = di
        .product_service
        .command
        .create_product(&CreateProductRequest {
            name: "Orphan".to_string(),
            description: None,
            price: 100,
            stock_quantity: 1,
            category_ids: vec![77],
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn deleting_an_ordered_product_conflicts() {
    let di = deps();
    let user_id = seed_user(&di, "grace@example.com").await;
    let product_id = seed_product(&di, "Headset", 5000, 5).await;

    di.order_service
        .command
        .create_order(&CreateOrderRequest {
            user_id,
            items: vec![OrderItemRequest {
                product_id,
                quantity: 1,
            }],
        })
        .await
        .unwrap();

    let err = di
        .product_service
        .command
        .delete_product(product_id)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::Conflict(_))
    ));

    // Still listed, stock untouched by the failed delete.
    let product = di
        .product_service
        .query
        .find_by_id(product_id)
        .await
        .unwrap()
        .data;
    assert_eq!(product.stock_quantity, 4);
}

#[tokio::test]
async fn deleting_an_unordered_product_also_drops_its_stock_record() {
    let di = deps();
    let product_id = seed_product(&di, "Dock", 9000, 2).await;

    di.product_service
        .command
        .delete_product(product_id)
        .await
        .unwrap();

    let err = di
        .product_service
        .query
        .find_by_id(product_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn available_products_excludes_sold_out() {
    let di = deps();
    let stocked = seed_product(&di, "Charger", 1500, 3).await;
    seed_product(&di, "Adapter", 800, 0).await;

    let available = di
        .product_service
        .query
        .find_available()
        .await
        .unwrap()
        .data;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, stocked);
}

#[tokio::test]
async fn product_search_and_price_range() {
    let di = deps();
    seed_product(&di, "USB Hub", 2200, 4).await;
    seed_product(&di, "USB Cable", 600, 9).await;
    seed_product(&di, "Stand", 3100, 2).await;

    let hits = di
        .product_service
        .query
        .search_by_name("usb")
        .await
        .unwrap()
        .data;
    assert_eq!(hits.len(), 2);

    let cheap = di
        .product_service
        .query
        .find_by_price_range(0, 1000)
        .await
        .unwrap()
        .data;
    assert_eq!(cheap.len(), 1);
    assert_eq!(cheap[0].name, "USB Cable");

    let err = di
        .product_service
        .query
        .find_by_price_range(500, 100)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn one_review_per_user_and_product() {
    let di = deps();
    let user_id = seed_user(&di, "grace@example.com").await;
    let product_id = seed_product(&di, "Tablet", 60000, 3).await;

    di.review_service
        .create_review(&CreateReviewRequest {
            user_id,
            product_id,
            rating: 5,
            comment: Some("Solid".to_string()),
        })
        .await
        .unwrap();

    let err = di
        .review_service
        .create_review(&CreateReviewRequest {
            user_id,
            product_id,
            rating: 2,
            comment: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn review_rating_is_bounded() {
    let di = deps();
    let user_id = seed_user(&di, "grace@example.com").await;
    let product_id = seed_product(&di, "Phone", 90000, 3).await;

    let err = di
        .review_service
        .create_review(&CreateReviewRequest {
            user_id,
            product_id,
            rating: 6,
            comment: None,
        })
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert!(messages.iter().any(|m| m.contains("between 1 and 5")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn order_response_wire_shape_is_stable() {
    let di = deps();
    let user_id = seed_user(&di, "grace@example.com").await;
    let product_id = seed_product(&di, "Speaker", 4500, 5).await;

    let response = di
        .order_service
        .command
        .create_order(&CreateOrderRequest {
            user_id,
            items: vec![OrderItemRequest {
                product_id,
                quantity: 2,
            }],
        })
        .await
        .unwrap();

    let value = serde_json::to_value(&response.data).unwrap();
    assert_eq!(value["status"], json!("PENDING"));
    assert_eq!(value["total_amount"], json!(9000));
    assert_eq!(value["items"][0]["price_at_purchase"], json!(4500));
}
