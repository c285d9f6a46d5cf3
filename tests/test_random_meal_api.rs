use random_meal::{MealClient, MealError};

const MEAL_JSON: &str = r#"
{
    "meals": [
        {
            "idMeal": "52959",
            "strMeal": "Baked salmon with fennel & tomatoes",
            "strCategory": "Seafood",
            "strArea": "British",
            "strInstructions": "Heat oven to 180C/fan 160C/gas 4.\r\nTrim the fronds from the fennel and set aside.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
            "strYoutube": "https://www.youtube.com/watch?v=xvPR2Tfw5k0",
            "strIngredient1": "Fennel",
            "strIngredient2": "Parsley",
            "strIngredient3": "",
            "strIngredient4": null,
            "strMeasure1": "2 medium",
            "strMeasure2": "2 tbs chopped",
            "strMeasure3": " ",
            "strMeasure4": null
        }
    ]
}
"#;

#[tokio::test]
async fn test_random_meal_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MEAL_JSON)
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();
    let meal = client.random_meal().await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        meal.name.as_deref(),
        Some("Baked salmon with fennel & tomatoes")
    );
    assert_eq!(meal.ingredient(2), Some("Parsley"));
    assert_eq!(meal.measure(1), Some("2 medium"));
    assert_eq!(random_meal::parse_ingredients(&meal).len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();
    let err = client.random_meal().await.unwrap_err();

    match err {
        MealError::Network {
            status,
            ref status_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        ref other => panic!("expected network error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_empty_meals_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": []}"#)
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();
    let err = client.random_meal().await.unwrap_err();

    assert!(matches!(err, MealError::EmptyResult));
}

#[tokio::test]
async fn test_null_meals_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();

    assert!(matches!(
        client.random_meal().await,
        Err(MealError::EmptyResult)
    ));
}

#[tokio::test]
async fn test_null_meal_entry_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": [null]}"#)
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();

    assert!(matches!(
        client.random_meal().await,
        Err(MealError::EmptyResult)
    ));
}

#[tokio::test]
async fn test_null_body_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();

    assert!(matches!(
        client.random_meal().await,
        Err(MealError::EmptyResult)
    ));
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = MealClient::with_base_url(server.url()).unwrap();

    assert!(matches!(
        client.random_meal().await,
        Err(MealError::Request(_))
    ));
}

/// Hits the real TheMealDB endpoint.
/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn test_real_api() {
    let meal = random_meal::fetch_random_meal().await.unwrap();
    assert!(meal.name.is_some());

    let html = random_meal::random_meal_html().await.unwrap();
    assert!(html.contains("meal__card"));
}
