use cocktail_browser::{CocktailApi, DrinkSource};

#[tokio::test]
async fn test_lookup_by_id_found() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php?i=11007")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "drinks": [
                    {
                        "idDrink": "11007",
                        "strDrink": "Margarita",
                        "strCategory": "Ordinary Drink",
                        "strIngredient1": "Tequila",
                        "strMeasure1": "1 1/2 oz"
                    }
                ]
            }"#,
        )
        .create();

    let api = CocktailApi::with_base_url(server.url());
    let drink = api.drink_by_id("11007").await.unwrap();

    let drink = drink.expect("drink should resolve");
    assert_eq!(drink.id.as_deref(), Some("11007"));
    assert_eq!(drink.display_name(), "Margarita");
}

#[tokio::test]
async fn test_lookup_by_id_not_found_is_none_not_error() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php?i=99999999")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"drinks": null}"#)
        .create();

    let api = CocktailApi::with_base_url(server.url());
    let drink = api.drink_by_id("99999999").await.unwrap();

    assert!(drink.is_none());
}

#[tokio::test]
async fn test_lookup_id_is_url_encoded() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php?i=a%20b")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"drinks": null}"#)
        .create();

    let api = CocktailApi::with_base_url(server.url());
    let drink = api.drink_by_id(" a b ").await.unwrap();

    assert!(drink.is_none());
}
