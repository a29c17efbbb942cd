//! End-to-end tests for the request client and API facade against a mock
//! backend.

use httpmock::prelude::*;
use serde_json::json;
use social_client::ApiClient;
use social_core::config::{ClientConfig, PaginationStyle};
use social_core::models::{CreateOrderItem, PageQuery};
use social_core::{SessionStore, SocialError};
use social_infrastructure::MemorySessionStore;
use std::sync::Arc;
use std::time::Duration;

fn client_for(server: &MockServer) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let config = ClientConfig::with_base_url(server.base_url());
    let client = ApiClient::new(config, store.clone()).unwrap();
    (client, store)
}

#[tokio::test(flavor = "current_thread")]
async fn login_persists_session_and_authorizes_next_call() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/wechat/login")
            .json_body(json!({"openId": "o-123"}));
        then.status(200).json_body(json!({
            "code": 200,
            "data": {
                "token": "tok-abc",
                "user": {"id": 7, "openId": "o-123", "nickname": "小明"}
            }
        }));
    });
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/me")
            .header("authorization", "Bearer tok-abc");
        then.status(200)
            .json_body(json!({"code": 200, "data": {"id": 7, "nickname": "小明"}}));
    });

    let (client, store) = client_for(&server);
    let result = client.wechat_login("o-123").await.unwrap();
    assert_eq!(result.token, "tok-abc");
    assert_eq!(store.token().as_deref(), Some("tok-abc"));
    assert_eq!(store.user_cache().unwrap().nickname, "小明");

    let profile = client.me().await.unwrap();
    assert_eq!(profile.id, 7);

    login.assert();
    me.assert();
}

#[tokio::test(flavor = "current_thread")]
async fn empty_open_id_is_rejected_locally() {
    let server = MockServer::start();
    let (client, _store) = client_for(&server);
    let err = client.wechat_login("   ").await.unwrap_err();
    assert!(matches!(err, SocialError::InvalidInput(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn business_code_1001_clears_the_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/points/balance");
        then.status(200)
            .json_body(json!({"code": 1001, "message": "登录异常"}));
    });

    let (client, store) = client_for(&server);
    store.set_token("stale").unwrap();
    store
        .set_user_cache(&social_core::models::UserProfile::default())
        .unwrap();

    let err = client.points_balance().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(store.token().is_none());
    assert!(store.user_cache().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn http_401_clears_the_session_regardless_of_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users/me");
        then.status(401).body("gateway says no");
    });

    let (client, store) = client_for(&server);
    store.set_token("stale").unwrap();

    let err = client.me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(store.token().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn forbidden_keeps_the_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/users");
        then.status(403).json_body(json!({"message": "无权限"}));
    });

    let (client, store) = client_for(&server);
    store.set_token("user-token").unwrap();

    let err = client
        .admin_list_users(&PageQuery::first())
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(store.token().as_deref(), Some("user-token"));
}

#[tokio::test(flavor = "current_thread")]
async fn timeout_rejects_without_retrying() {
    let server = MockServer::start();
    let slow = server.mock(|when, then| {
        when.method(GET).path("/api/tasks");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({"code": 200, "data": []}));
    });

    let store = Arc::new(MemorySessionStore::new());
    let mut config = ClientConfig::with_base_url(server.base_url());
    config.timeout_ms = 50;
    let client = ApiClient::new(config, store).unwrap();

    let err = client.tasks().await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(slow.hits(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn list_endpoints_accept_both_response_shapes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/goods")
            .query_param("offset", "0")
            .query_param("limit", "50");
        then.status(200).json_body(json!({
            "code": 200,
            "data": [{"id": 1, "name": "贴纸", "pointsPrice": 100, "stock": 3, "status": 1}]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/redeem/orders");
        then.status(200).json_body(json!({
            "code": 200,
            "data": {"items": [{"id": 5, "orderNo": "R-5", "status": "CREATED", "totalPoints": 100}]}
        }));
    });

    let (client, _store) = client_for(&server);
    let goods = client.list_goods(&PageQuery::first()).await.unwrap();
    assert_eq!(goods.len(), 1);
    assert_eq!(goods[0].name, "贴纸");

    let orders = client.redeem_orders(&PageQuery::first()).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_no, "R-5");
}

#[tokio::test(flavor = "current_thread")]
async fn cursor_pagination_sends_cursor_parameter() {
    let server = MockServer::start();
    let listed = server.mock(|when, then| {
        when.method(GET)
            .path("/api/points/ledgers")
            .query_param("cursor", "abc")
            .query_param("limit", "20");
        then.status(200).json_body(json!({"code": 200, "data": []}));
    });

    let store = Arc::new(MemorySessionStore::new());
    let mut config = ClientConfig::with_base_url(server.base_url());
    config.pagination = PaginationStyle::CursorLimit;
    let client = ApiClient::new(config, store).unwrap();

    let page = PageQuery::new(0, 20).with_cursor("abc");
    let ledgers = client.points_ledgers(&page).await.unwrap();
    assert!(ledgers.is_empty());
    listed.assert();
}

#[tokio::test(flavor = "current_thread")]
async fn business_failure_surfaces_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/redeem/orders");
        then.status(200)
            .json_body(json!({"code": 201, "message": "积分不足"}));
    });

    let (client, _store) = client_for(&server);
    let items = vec![CreateOrderItem {
        goods_id: 1,
        quantity: 1,
        points_price: 9999,
    }];
    let err = client.create_redeem_order(items).await.unwrap_err();
    assert!(
        matches!(err, SocialError::Business { code: 201, ref message } if message == "积分不足")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn update_me_refreshes_the_cached_profile() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/me")
            .json_body(json!({"nickname": "新名字", "avatarUrl": "https://a/b.png"}));
        then.status(200).json_body(json!({
            "code": 200,
            "data": {"id": 7, "nickname": "新名字", "avatarUrl": "https://a/b.png"}
        }));
    });

    let (client, store) = client_for(&server);
    store.set_token("tok").unwrap();

    let updated = client
        .update_me(&social_core::models::UpdateProfileRequest {
            nickname: "新名字".to_string(),
            avatar_url: "https://a/b.png".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.nickname, "新名字");
    assert_eq!(store.user_cache().unwrap().nickname, "新名字");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_crud_round_trip() {
    let server = MockServer::start();
    let created = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/goods")
            .header("authorization", "Bearer admin-tok");
        then.status(200).json_body(json!({
            "code": 200,
            "data": {"id": 11, "name": "奖杯", "pointsPrice": 500, "stock": 2, "status": 1}
        }));
    });
    let deleted = server.mock(|when, then| {
        when.method(DELETE).path("/admin/goods/11");
        then.status(200).json_body(json!({"code": 200}));
    });

    let (client, store) = client_for(&server);
    store.set_token("admin-tok").unwrap();

    let input = social_core::models::GoodsInput {
        name: "奖杯".to_string(),
        points_price: 500,
        stock: 2,
        status: 1,
        ..Default::default()
    };
    let goods = client.admin_create_goods(&input).await.unwrap();
    assert_eq!(goods.id, 11);

    client.admin_delete_goods(11).await.unwrap();
    created.assert();
    deleted.assert();
}

#[tokio::test(flavor = "current_thread")]
async fn unwrapped_body_passes_through_without_envelope() {
    // Legacy endpoints answer without the {code, message, data} wrapper
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/vip/status");
        then.status(200)
            .json_body(json!({"isVip": true, "expireAt": "2027-01-01T00:00:00Z", "status": "ACTIVE"}));
    });

    let (client, _store) = client_for(&server);
    let status = client.vip_status().await.unwrap();
    assert!(status.is_vip);
    assert_eq!(status.status, "ACTIVE");
}
