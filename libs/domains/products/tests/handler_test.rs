//! Command-line handler tests
//!
//! Drive `handlers::run` end to end over the in-memory repository and check
//! the rendered output for every action.

use domain_products::{
    handlers, Action, InMemoryProductRepository, Product, ProductError, ProductRepository,
    ProductService, ProductStatus,
};

const PRODUCT_ID: &str = "681051e4-2936-4b4c-87a4-efaf7b8c02ba";

async fn service_with(product: Product) -> ProductService<InMemoryProductRepository> {
    let repo = InMemoryProductRepository::new();
    repo.save(&product).await.unwrap();
    ProductService::new(repo)
}

#[tokio::test]
async fn test_create_action() {
    let service = ProductService::new(InMemoryProductRepository::new());

    let output = handlers::run(&service, Action::Create, "", "Product 1", 19.99)
        .await
        .unwrap();

    let id = output
        .strip_prefix("Product ID ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap();
    assert_eq!(
        output,
        format!(
            "Product ID {} with the name Product 1 has been created with the price 19.99 and status disabled",
            id
        )
    );

    let stored = service.get(id).await.unwrap();
    assert_eq!(stored.name(), "Product 1");
}

#[tokio::test]
async fn test_enable_action() {
    let service = service_with(Product::from_parts(
        PRODUCT_ID,
        "Product 1",
        19.99,
        ProductStatus::Disabled,
    ))
    .await;

    let output = handlers::run(&service, Action::Enable, PRODUCT_ID, "", 0.0)
        .await
        .unwrap();

    assert_eq!(output, "Product Product 1 has been enabled");
    assert_eq!(
        service.get(PRODUCT_ID).await.unwrap().status(),
        ProductStatus::Enabled
    );
}

#[tokio::test]
async fn test_disable_action() {
    let service = service_with(Product::from_parts(
        PRODUCT_ID,
        "Product 1",
        0.0,
        ProductStatus::Enabled,
    ))
    .await;

    let output = handlers::run(&service, Action::Disable, PRODUCT_ID, "", 0.0)
        .await
        .unwrap();

    assert_eq!(output, "Product Product 1 has been disabled");
    assert_eq!(
        service.get(PRODUCT_ID).await.unwrap().status(),
        ProductStatus::Disabled
    );
}

#[tokio::test]
async fn test_get_action() {
    let service = service_with(Product::from_parts(
        PRODUCT_ID,
        "Product 1",
        19.99,
        ProductStatus::Enabled,
    ))
    .await;

    let output = handlers::run(&service, Action::from("describe"), PRODUCT_ID, "", 0.0)
        .await
        .unwrap();

    assert_eq!(
        output,
        format!(
            "Product ID: {}\nName: Product 1\nPrice: 19.99\nStatus: enabled",
            PRODUCT_ID
        )
    );
}

#[tokio::test]
async fn test_get_action_shows_stored_price_unrounded() {
    let service = service_with(Product::from_parts(
        PRODUCT_ID,
        "Product 1",
        19.999,
        ProductStatus::Enabled,
    ))
    .await;

    let output = handlers::run(&service, Action::Get, PRODUCT_ID, "", 0.0)
        .await
        .unwrap();

    assert!(output.contains("Price: 19.999\n"), "{output}");
}

#[tokio::test]
async fn test_errors_are_returned_unchanged() {
    let service = service_with(Product::from_parts(
        PRODUCT_ID,
        "Product 1",
        0.0,
        ProductStatus::Disabled,
    ))
    .await;

    let missing = handlers::run(&service, Action::Get, "missing", "", 0.0).await;
    assert_eq!(missing, Err(ProductError::NotFound("missing".to_string())));

    let enable = handlers::run(&service, Action::Enable, PRODUCT_ID, "", 0.0).await;
    assert_eq!(enable, Err(ProductError::EnableRequiresPositivePrice));

    let create = handlers::run(&service, Action::Create, "", "", 10.0).await;
    assert_eq!(create, Err(ProductError::EmptyName));
}
