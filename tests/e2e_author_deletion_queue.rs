// tests/e2e_author_deletion_queue.rs
use axum::http::{Method, StatusCode, header};
use documan::infrastructure::messaging::Disposition;

mod support;
use support::*;

/// 著者作成 → ドキュメント作成 → 削除要求 → コンシューマ処理 → ドキュメントは 404
#[tokio::test]
async fn queued_deletion_removes_author_documents() {
    let app = spawn_test_app();
    let author_id = app.create_author("John", "Doe").await["id"].as_i64().unwrap();
    let doc_id = app
        .create_document("Spring Boot Guide", "0123456789", Some(author_id))
        .await["id"]
        .as_i64()
        .unwrap();

    let resp = app
        .send(
            Method::DELETE,
            &format!("/api/authors/{author_id}/documents/delete"),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        body_text(resp).await,
        format!("Documents deletion for author {author_id} has been requested.")
    );

    // Nothing is removed until the consumer runs.
    assert!(app.store.has_document(doc_id));

    let dispositions = app.run_deletion_consumer().await;
    assert_eq!(dispositions, [Disposition::Ack]);

    let resp = app
        .send(Method::GET, &format!("/api/documents/{doc_id}"), None)
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app
        .send(Method::GET, &format!("/api/authors/{author_id}"), None)
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn published_message_carries_author_and_clock_time() {
    let app = spawn_test_app();
    let resp = app
        .send(Method::DELETE, "/api/authors/31/documents/delete", None)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let published = app.publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].author_id, 31);
    assert_eq!(published[0].requested_at, fixed_now());
}

/// 同じメッセージを二度処理しても安全であること
#[tokio::test]
async fn redelivered_message_is_acknowledged_without_changes() {
    let app = spawn_test_app();
    let author_id = app.store.seed_author("Jane", "Roe");
    app.store.seed_document("Owned by Jane", Some(author_id));
    let survivor = app.store.seed_author("Kept", "Author");

    app.send(
        Method::DELETE,
        &format!("/api/authors/{author_id}/documents/delete"),
        None,
    )
    .await;
    let message = app.publisher.published().remove(0);
    // simulate redelivery of the same stream entry
    app.publisher.drain();
    for _ in 0..2 {
        let payload = message.to_json().unwrap();
        let handler = documan::infrastructure::messaging::AuthorDeletionHandler::new(
            std::sync::Arc::clone(&app.services.author_commands),
        );
        assert_eq!(handler.handle(&payload).await, Disposition::Ack);
    }

    assert!(!app.store.has_author(author_id));
    assert!(app.store.has_author(survivor));
    assert_eq!(app.store.document_count(), 0);
}

#[tokio::test]
async fn request_for_unknown_author_is_accepted_then_dropped() {
    let app = spawn_test_app();
    app.store.seed_author("Only", "Author");

    let resp = app
        .send(Method::DELETE, "/api/authors/404/documents/delete", None)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let dispositions = app.run_deletion_consumer().await;
    assert_eq!(dispositions, [Disposition::Ack]);
    assert_eq!(app.store.author_count(), 1);
}

#[tokio::test]
async fn unavailable_queue_is_an_internal_error() {
    let app = spawn_test_app();
    let author_id = app.store.seed_author("John", "Doe");
    app.publisher.set_unavailable(true);

    let resp = app
        .send(
            Method::DELETE,
            &format!("/api/authors/{author_id}/documents/delete"),
            None,
        )
        .await;

    let json =
        assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .await;
    assert_eq!(json["message"], "an unexpected error occurred");
    assert!(app.store.has_author(author_id));
}

#[tokio::test]
async fn synchronous_delete_wins_race_and_queued_one_is_dropped() {
    let app = spawn_test_app();
    let author_id = app.store.seed_author("John", "Doe");
    app.store.seed_document("Race condition notes", Some(author_id));

    app.send(
        Method::DELETE,
        &format!("/api/authors/{author_id}/documents/delete"),
        None,
    )
    .await;
    let resp = app
        .send(Method::DELETE, &format!("/api/authors/{author_id}"), None)
        .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert_eq!(app.run_deletion_consumer().await, [Disposition::Ack]);
    assert_eq!(app.store.document_count(), 0);
}
