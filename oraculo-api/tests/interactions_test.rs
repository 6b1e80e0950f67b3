mod common;

use actix_web::test;
use actix_web::test::TestRequest;
use common::setup_test_app;
use oraculo_api::storage::InteractionStore;

async fn seed(store: &impl InteractionStore, count: usize) -> anyhow::Result<()> {
    for i in 0..count {
        store.insert(&format!("pergunta {}", i), "resposta").await?;
    }
    Ok(())
}

#[actix_rt::test]
async fn test_default_page_has_ten_items() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 15).await?;

    let req = TestRequest::get().uri("/interacoes/").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    let items = body["interacoes"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["pergunta"], "pergunta 0");
    assert_eq!(items[0]["_id"].as_str().unwrap().len(), 24);

    Ok(())
}

#[actix_rt::test]
async fn test_skip_and_limit_select_a_slice() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 5).await?;

    let req = TestRequest::get()
        .uri("/interacoes/?skip=3&limit=10")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    let questions: Vec<&str> = body["interacoes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["pergunta"].as_str().unwrap())
        .collect();
    assert_eq!(questions, vec!["pergunta 3", "pergunta 4"]);

    Ok(())
}

#[actix_rt::test]
async fn test_limit_is_clamped_to_one_hundred() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 120).await?;

    let req = TestRequest::get()
        .uri("/interacoes?limit=1000")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["interacoes"].as_array().unwrap().len(), 100);

    Ok(())
}

#[actix_rt::test]
async fn test_zero_limit_is_an_empty_page() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 3).await?;

    let req = TestRequest::get().uri("/interacoes/?limit=0").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert!(body["interacoes"].as_array().unwrap().is_empty());

    Ok(())
}

#[actix_rt::test]
async fn test_feedback_fields_appear_in_listing() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 1).await?;
    test_app
        .store
        .update_feedback("pergunta 0", "resposta", true, Some("ótimo"))
        .await?;

    let req = TestRequest::get().uri("/interacoes/").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body["interacoes"][0]["feedback"], true);
    assert_eq!(body["interacoes"][0]["comentario"], "ótimo");

    Ok(())
}

#[actix_rt::test]
async fn test_feedback_without_comment_lists_null_comment() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed(&test_app.store, 2).await?;
    test_app
        .store
        .update_feedback("pergunta 0", "resposta", false, None)
        .await?;

    let req = TestRequest::get().uri("/interacoes/").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    let rated = body["interacoes"][0].as_object().unwrap();
    assert_eq!(rated["feedback"], false);
    assert!(rated.contains_key("comentario"));
    assert!(rated["comentario"].is_null());

    let unrated = body["interacoes"][1].as_object().unwrap();
    assert!(!unrated.contains_key("feedback"));
    assert!(!unrated.contains_key("comentario"));

    Ok(())
}
