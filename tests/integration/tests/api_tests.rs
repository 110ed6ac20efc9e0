//! API Integration Tests
//!
//! These tests require:
//! - A running S3-compatible store (MinIO works)
//! - A running Redis instance
//! - Environment variables: S3_ENDPOINT_URL, S3_ACCESS_KEY_ID,
//!   S3_SECRET_ACCESS_KEY, S3_BUCKET, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashMap;
use std::collections::HashSet;

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TEST_ADMIN_TOKEN,
};
use reqwest::StatusCode;

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_empty_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();

    let response = server.get(&format!("/api/list?slug={slug}")).await.unwrap();
    let body: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.images.is_empty());
    assert!(!body.is_truncated);
    assert!(body.next_continuation_token.is_none());
}

#[tokio::test]
async fn test_list_rejects_invalid_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/list?slug=Bad%20Slug").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_pagination_walks_every_object_exactly_once() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    server.seed_event(&slug, 250).await.unwrap();

    let mut seen: HashSet<String> = HashSet::new();
    let mut token: Option<String> = None;

    loop {
        let path = match &token {
            Some(t) => format!("/api/list?slug={slug}&token={}", urlencode(t)),
            None => format!("/api/list?slug={slug}"),
        };
        let response = server.get(&path).await.unwrap();
        let page: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();

        assert!(page.images.len() <= 100, "page exceeded the page size");
        for img in &page.images {
            assert!(seen.insert(img.key.clone()), "duplicate key {}", img.key);
        }

        match page.next_continuation_token {
            Some(t) if page.is_truncated => token = Some(t),
            _ => break,
        }
    }

    assert_eq!(seen.len(), 250);

    server.cleanup_event(&slug).await;
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn test_upload_grant_then_image_appears_in_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();

    let response = server
        .post(
            "/api/upload",
            &UploadBody {
                slug: slug.clone(),
                filename: "party.png".to_string(),
                content_type: "image/png".to_string(),
            },
        )
        .await
        .unwrap();
    let grant: UploadGrantBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(grant.key, format!("{slug}/original/party.png"));

    // Upload through the signed URL, exactly as a browser would
    let put = server
        .client
        .put(&grant.signed_url)
        .header("Content-Type", "image/png")
        .header("Cache-Control", "public, max-age=31536000, immutable")
        .body(png_fixture(8, 8))
        .send()
        .await
        .unwrap();
    assert!(put.status().is_success(), "presigned PUT failed: {}", put.status());

    let response = server.get(&format!("/api/list?slug={slug}")).await.unwrap();
    let body: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.images.len(), 1);
    assert_eq!(body.images[0].key, grant.key);
    assert!(body.images[0].size > 0);

    server.cleanup_event(&slug).await;
}

#[tokio::test]
async fn test_upload_rejects_gif() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/upload",
            &UploadBody {
                slug: unique_slug(),
                filename: "anim.gif".to_string(),
                content_type: "image/gif".to_string(),
            },
        )
        .await
        .unwrap();

    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "UNSUPPORTED_CONTENT_TYPE");
}

#[tokio::test]
async fn test_upload_sanitizes_filename() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();

    let response = server
        .post(
            "/api/upload",
            &UploadBody {
                slug: slug.clone(),
                filename: "../secret/mi foto.png".to_string(),
                content_type: "image/png".to_string(),
            },
        )
        .await
        .unwrap();
    let grant: UploadGrantBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(grant.key, format!("{slug}/original/mi_foto.png"));
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reactions_default_to_zero() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    let key = format!("{slug}/original/unseen.png");

    let response = server
        .get(&format!("/api/reactions?keys={}", urlencode(&key)))
        .await
        .unwrap();
    let counts: HashMap<String, CountsBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let c = counts.get(&key).expect("key missing from response");
    assert_eq!((c.heart, c.laugh, c.sparkle, c.crown), (0, 0, 0, 0));
}

#[tokio::test]
async fn test_react_increments_and_reads_back() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    let key = format!("{slug}/original/a.png");

    let response = server
        .post(
            "/api/reactions",
            &ReactBody {
                key: key.clone(),
                kind: "heart".to_string(),
            },
        )
        .await
        .unwrap();
    let body: ReactResponseBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.new_value, 1);

    let response = server
        .get(&format!("/api/reactions?keys={}", urlencode(&key)))
        .await
        .unwrap();
    let counts: HashMap<String, CountsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts[&key].heart, 1);

    server.cleanup_event(&slug).await;
}

#[tokio::test]
async fn test_concurrent_reactions_are_never_lost() {
    if !check_test_env() {
        return;
    }

    const CONCURRENCY: u64 = 20;

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    let key = format!("{slug}/original/popular.png");

    let base_url = server.base_url();
    let mut handles = Vec::new();
    for _ in 0..CONCURRENCY {
        let client = server.client.clone();
        let url = format!("{base_url}/api/reactions");
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(&url)
                .json(&ReactBody {
                    key,
                    kind: "sparkle".to_string(),
                })
                .send()
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let response = server
        .get(&format!("/api/reactions?keys={}", urlencode(&key)))
        .await
        .unwrap();
    let counts: HashMap<String, CountsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts[&key].sparkle, CONCURRENCY);

    server.cleanup_event(&slug).await;
}

#[tokio::test]
async fn test_react_rejects_unknown_kind() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();

    let response = server
        .post(
            "/api/reactions",
            &ReactBody {
                key: format!("{slug}/original/a.png"),
                kind: "thumbsup".to_string(),
            },
        )
        .await
        .unwrap();

    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_REACTION_TYPE");
}

// ============================================================================
// Ranking
// ============================================================================

#[tokio::test]
async fn test_ranking_orders_by_total_score() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    let key_a = format!("{slug}/original/a.png");
    let key_b = format!("{slug}/original/b.png");

    for _ in 0..5 {
        let r = server
            .post("/api/reactions", &ReactBody { key: key_a.clone(), kind: "heart".to_string() })
            .await
            .unwrap();
        assert_status(r, StatusCode::OK).await.unwrap();
    }
    for _ in 0..2 {
        let r = server
            .post("/api/reactions", &ReactBody { key: key_b.clone(), kind: "laugh".to_string() })
            .await
            .unwrap();
        assert_status(r, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/ranking?slug={slug}&limit=10"))
        .await
        .unwrap();
    let body: RankingBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.ranking.len(), 2);
    assert_eq!(body.ranking[0].key, key_a);
    assert_eq!(body.ranking[0].score, 5);
    assert_eq!(body.ranking[1].key, key_b);
    assert_eq!(body.ranking[1].score, 2);

    server.cleanup_event(&slug).await;
}

// ============================================================================
// Purge
// ============================================================================

#[tokio::test]
async fn test_purge_rejects_wrong_token_and_deletes_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    server.seed_event(&slug, 3).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/purge?slug={slug}"), "wrong-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Everything still there
    let response = server.get(&format!("/api/list?slug={slug}")).await.unwrap();
    let body: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.images.len(), 3);

    server.cleanup_event(&slug).await;
}

#[tokio::test]
async fn test_purge_removes_objects_and_counters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    server.seed_event(&slug, 3).await.unwrap();

    let key = format!("{slug}/original/img-0000.png");
    let r = server
        .post("/api/reactions", &ReactBody { key: key.clone(), kind: "crown".to_string() })
        .await
        .unwrap();
    assert_status(r, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/purge?slug={slug}"), TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    let body: PurgeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let response = server.get(&format!("/api/list?slug={slug}")).await.unwrap();
    let listing: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.images.is_empty());

    // Counters reset too
    let response = server
        .get(&format!("/api/reactions?keys={}", urlencode(&key)))
        .await
        .unwrap();
    let counts: HashMap<String, CountsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts[&key].crown, 0);

    let response = server
        .get(&format!("/api/ranking?slug={slug}"))
        .await
        .unwrap();
    let ranking: RankingBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ranking.ranking.is_empty());
}

#[tokio::test]
#[ignore = "seeds 1500 objects; run explicitly against a local store"]
async fn test_purge_spans_multiple_delete_batches() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    server.seed_event(&slug, 1500).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/purge?slug={slug}"), TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    let body: PurgeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let response = server.get(&format!("/api/list?slug={slug}")).await.unwrap();
    let listing: ListingBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.images.is_empty());
    assert!(!listing.is_truncated);
}

// ============================================================================
// Thumbnails
// ============================================================================

#[tokio::test]
async fn test_thumbnail_renders_webp_with_immutable_caching() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    let key = format!("{slug}/original/photo.png");
    server.seed_object(&key, png_fixture(64, 64)).await.unwrap();

    let response = server
        .get(&format!("/api/thumb?key={}&w=32", urlencode(&key)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/webp"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "public, max-age=31536000, immutable"
    );

    let bytes = response.bytes().await.unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.width(), 32);

    server.cleanup_event(&slug).await;
}

// ============================================================================
// Stats
// ============================================================================

#[tokio::test]
async fn test_stats_requires_admin_and_aggregates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let slug = unique_slug();
    server.seed_event(&slug, 4).await.unwrap();

    let r = server
        .post(
            "/api/reactions",
            &ReactBody {
                key: format!("{slug}/original/img-0001.png"),
                kind: "heart".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(r, StatusCode::OK).await.unwrap();

    // No credential
    let response = server.get(&format!("/api/stats?slug={slug}")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/stats?slug={slug}"), TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.image_count, 4);
    assert!(stats.total_bytes > 0);
    assert!(stats.latest.is_some());
    assert_eq!(stats.total_reactions, 1);

    server.cleanup_event(&slug).await;
}

/// Percent-encode a query value (only the characters our keys can contain)
fn urlencode(value: &str) -> String {
    value.replace('/', "%2F")
}
