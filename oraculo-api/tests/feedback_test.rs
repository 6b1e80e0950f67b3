mod common;

use actix_web::test;
use actix_web::test::TestRequest;
use common::setup_test_app;
use oraculo_api::storage::InteractionStore;
use serde_json::json;

#[actix_rt::test]
async fn test_feedback_for_unknown_pair_is_404() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    test_app.store.insert("What is 2+2?", "4").await?;

    let req = TestRequest::post()
        .uri("/feedback/")
        .set_json(json!({"pergunta": "What is 2+2?", "resposta": "5", "util": true}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body, json!({"detail": "Interação não encontrada."}));

    let stored = test_app.store.snapshot();
    assert!(stored[0].feedback.is_none());
    assert!(stored[0].comment.is_none());

    Ok(())
}

#[actix_rt::test]
async fn test_feedback_is_recorded_and_overwritten() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    test_app.store.insert("What is 2+2?", "4").await?;

    let req = TestRequest::post()
        .uri("/feedback/")
        .set_json(json!({
            "pergunta": "What is 2+2?",
            "resposta": "4",
            "util": true,
            "comentario": "certo"
        }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await)?;
    assert_eq!(body, json!({"message": "Feedback recebido com sucesso!"}));

    let stored = test_app.store.snapshot();
    assert_eq!(stored[0].feedback, Some(true));
    assert_eq!(stored[0].comment.as_deref(), Some("certo"));

    let req = TestRequest::post()
        .uri("/feedback")
        .set_json(json!({"pergunta": "What is 2+2?", "resposta": "4", "util": false}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let stored = test_app.store.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].feedback, Some(false));
    assert!(stored[0].comment.is_none());

    Ok(())
}

#[actix_rt::test]
async fn test_feedback_leaves_cache_untouched() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    test_app.store.insert("q", "a").await?;

    let req = TestRequest::post()
        .uri("/feedback/")
        .set_json(json!({"pergunta": "q", "resposta": "a", "util": true}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(test_app.cache.write_count(), 0);

    Ok(())
}
