use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ProfileId, ProfileName, ProfileSkin};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- blocked servers ---

#[tokio::test]
async fn blocked_servers_is_plain_text() {
    let resp = app().oneshot(get_request("/blockedservers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[http::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    let body = body_bytes(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|l| l.len() == 40));
}

// --- availability ---

#[tokio::test]
async fn taken_username_returns_200() {
    let resp = app().oneshot(get_request("/available/minecraft/Notch")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn free_username_returns_204() {
    let resp = app().oneshot(get_request("/available/minecraft/nobody_here")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn invalid_username_returns_400() {
    let resp = app().oneshot(get_request("/available/minecraft/bad%21name")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- name lookup ---

#[tokio::test]
async fn name_lookup_is_case_insensitive() {
    let resp = app().oneshot(get_request("/users/profiles/minecraft/notch")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileId = body_json(resp).await;
    assert_eq!(profile.name, "Notch");
    assert_eq!(profile.id, "069a79f444e94726a5befca90e38aaf5");
}

#[tokio::test]
async fn unknown_name_returns_404() {
    let resp = app().oneshot(get_request("/users/profiles/minecraft/nobody_here")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn legacy_unknown_name_returns_204() {
    let resp = app()
        .oneshot(get_request("/user/profile/agent/minecraft/name/nobody_here"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn legacy_name_lookup() {
    let resp = app()
        .oneshot(get_request("/user/profile/agent/minecraft/name/jeb_"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileId = body_json(resp).await;
    assert_eq!(profile.id, "853c80ef3c3749fdaa49938b674adae6");
}

// --- bulk lookup ---

#[tokio::test]
async fn bulk_lookup_omits_unknown_names() {
    let resp = app()
        .oneshot(json_request("POST", "/profiles/minecraft", r#"["Notch","nobody_here","jeb_"]"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let profiles: Vec<ProfileId> = body_json(resp).await;
    let mut names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Notch", "jeb_"]);
}

#[tokio::test]
async fn bulk_lookup_rejects_empty_batch() {
    let resp = app()
        .oneshot(json_request("POST", "/profiles/minecraft", "[]"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bulk_lookup_rejects_more_than_ten_names() {
    let names: Vec<String> = (0..11).map(|i| format!("player{i}")).collect();
    let body = serde_json::to_string(&names).unwrap();
    let resp = app()
        .oneshot(json_request("POST", "/profiles/minecraft", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bulk_lookup_rejects_invalid_names() {
    let resp = app()
        .oneshot(json_request("POST", "/profiles/minecraft", r#"["not a name"]"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- id lookups ---

#[tokio::test]
async fn name_by_uuid_accepts_dashed_and_undashed() {
    for uri in [
        "/user/profile/cdb5aee80f904fdda63ba16d38cd6b3b",
        "/user/profile/cdb5aee8-0f90-4fdd-a63b-a16d38cd6b3b",
    ] {
        let resp = app().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let profile: ProfileId = body_json(resp).await;
        assert_eq!(profile.name, "lukethehacker23");
    }
}

#[tokio::test]
async fn unknown_uuid_returns_204() {
    let resp = app()
        .oneshot(get_request("/user/profile/00000000000000000000000000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn malformed_uuid_returns_400() {
    let resp = app().oneshot(get_request("/user/profile/a")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn name_history_oldest_first() {
    let resp = app()
        .oneshot(get_request("/user/profile/9b6d2c1e7a414f3e8c550d1e2f3a4b5c/names"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let history: Vec<ProfileName> = body_json(resp).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].name, "TIC59000");
    assert!(history[0].changed_to_at.is_none());
    assert_eq!(history[1].name, "Distractic");
    assert_eq!(history[1].changed_to_at, Some(1423059429000));
}

// --- skin ---

#[tokio::test]
async fn signed_skin_carries_signature() {
    let resp = app()
        .oneshot(get_request(
            "/session/minecraft/profile/f1bfcbddc68b49bfaac9fb9d8ce5293d?unsigned=false",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let skin: ProfileSkin = body_json(resp).await;
    assert_eq!(skin.name, "123lmfao4");
    assert_eq!(skin.properties.len(), 1);
    assert_eq!(skin.properties[0].name, "textures");
    assert!(skin.properties[0].signature.is_some());
}

#[tokio::test]
async fn unsigned_skin_has_no_signature() {
    let resp = app()
        .oneshot(get_request("/session/minecraft/profile/f1bfcbddc68b49bfaac9fb9d8ce5293d"))
        .await
        .unwrap();

    let skin: ProfileSkin = body_json(resp).await;
    assert!(skin.properties[0].signature.is_none());
}

#[tokio::test]
async fn unknown_skin_returns_204() {
    let resp = app()
        .oneshot(get_request(
            "/session/minecraft/profile/00000000000000000000000000000000?unsigned=false",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
