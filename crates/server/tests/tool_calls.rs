mod common;

use common::{
    API_PATH_PATH, CLIENT_PATH, MockApi, MockResponse, USER_INFO_PATH, pick_unused_port,
    single_text, tools_for,
};
use cyber_mcp_server::tools::GetUserInfoArgs;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};
use std::time::Duration;

fn user_args(client_id: &str) -> Parameters<GetUserInfoArgs> {
    Parameters(GetUserInfoArgs {
        client_id: client_id.to_string(),
    })
}

#[tokio::test]
async fn get_user_info_returns_users_list() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(
        USER_INFO_PATH,
        MockResponse::json(&json!({"OutBlock_1": [{"id": "test26", "name": "Alice"}]})),
    );
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let result = tools.get_user_info(user_args("test26")).await;
    let (text, is_error) = single_text(&result);
    assert!(!is_error);
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, json!({"users": [{"id": "test26", "name": "Alice"}]}));

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].query_pairs(),
        vec![("clientId".to_string(), "test26".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn get_client_without_out_block_returns_empty_list() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(CLIENT_PATH, MockResponse::json(&json!({})));
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let (text, is_error) = single_text(&tools.get_client().await);
    assert!(!is_error);
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, json!({"clients": []}));

    // No parameters are forwarded for this tool.
    assert_eq!(api.requests()[0].query, None);
    Ok(())
}

#[tokio::test]
async fn null_out_block_is_an_empty_list() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(API_PATH_PATH, MockResponse::json(&json!({"OutBlock_1": null})));
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let (text, is_error) = single_text(&tools.get_api_path().await);
    assert!(!is_error);
    assert_eq!(serde_json::from_str::<Value>(&text)?, json!({"paths": []}));
    Ok(())
}

#[tokio::test]
async fn get_api_path_server_error_is_reported_in_envelope() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(API_PATH_PATH, MockResponse::status(500));
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let (text, is_error) = single_text(&tools.get_api_path().await);
    assert!(is_error);
    assert!(text.starts_with("Error fetching api paths: "), "{text}");
    assert!(text.contains("500"), "{text}");
    assert!(text.contains(API_PATH_PATH), "{text}");
    Ok(())
}

#[tokio::test]
async fn slow_server_yields_timeout_envelope() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(
        CLIENT_PATH,
        MockResponse::json(&json!({"OutBlock_1": []})).with_delay(Duration::from_secs(3)),
    );
    let tools = tools_for(api.base_url(), "key-1", 150);

    let (text, is_error) = single_text(&tools.get_client().await);
    assert!(is_error);
    assert!(text.starts_with("Error fetching clients: "), "{text}");
    assert!(text.contains("aborted"), "{text}");
    assert!(text.contains("timed out"), "{text}");
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_reported_in_envelope() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(USER_INFO_PATH, MockResponse::raw(200, "<html>oops</html>"));
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let (text, is_error) = single_text(&tools.get_user_info(user_args("x")).await);
    assert!(is_error);
    assert!(text.starts_with("Error fetching user info: "), "{text}");
    Ok(())
}

#[tokio::test]
async fn unreachable_api_is_reported_for_every_tool() -> anyhow::Result<()> {
    let port = pick_unused_port()?;
    let tools = tools_for(&format!("http://127.0.0.1:{port}"), "key-1", 2000);

    let outcomes = [
        ("user info", tools.get_user_info(user_args("test26")).await),
        ("clients", tools.get_client().await),
        ("api paths", tools.get_api_path().await),
    ];
    for (subject, result) in outcomes {
        let (text, is_error) = single_text(&result);
        assert!(is_error, "{subject}: {text}");
        assert!(text.contains("Error"), "{text}");
        assert!(text.contains(subject), "{text}");
        assert!(!text.contains("clientId=test26"), "query must be redacted: {text}");
    }
    Ok(())
}

#[tokio::test]
async fn auth_key_header_follows_configuration() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(CLIENT_PATH, MockResponse::json(&json!({})));
    api.respond(API_PATH_PATH, MockResponse::json(&json!({})));

    tools_for(api.base_url(), "abc123", 2000).get_client().await;
    tools_for(api.base_url(), "", 2000).get_api_path().await;

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header("AUTH_KEY"), Some("abc123"));
    assert_eq!(requests[1].header("AUTH_KEY"), None);
    for r in &requests {
        assert_eq!(r.header("content-type"), Some("application/json"));
    }
    Ok(())
}

#[tokio::test]
async fn identical_calls_yield_identical_envelopes() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(
        USER_INFO_PATH,
        MockResponse::json(&json!({"OutBlock_1": [{"id": "a"}, {"id": "b"}]})),
    );
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let first = serde_json::to_value(tools.get_user_info(user_args("a")).await)?;
    for _ in 0..3 {
        let again = serde_json::to_value(tools.get_user_info(user_args("a")).await)?;
        assert_eq!(first, again);
    }
    // Nothing is cached: every call reaches the API.
    assert_eq!(api.requests().len(), 4);
    Ok(())
}

#[tokio::test]
async fn concurrent_calls_do_not_interfere() -> anyhow::Result<()> {
    let api = MockApi::start().await?;
    api.respond(USER_INFO_PATH, MockResponse::json(&json!({"OutBlock_1": [1]})));
    api.respond(CLIENT_PATH, MockResponse::json(&json!({"OutBlock_1": [2]})));
    api.respond(API_PATH_PATH, MockResponse::status(503));
    let tools = tools_for(api.base_url(), "key-1", 2000);

    let (users, clients, paths) = tokio::join!(
        tools.get_user_info(user_args("u")),
        tools.get_client(),
        tools.get_api_path(),
    );

    let (text, is_error) = single_text(&users);
    assert!(!is_error);
    assert_eq!(serde_json::from_str::<Value>(&text)?, json!({"users": [1]}));

    let (text, is_error) = single_text(&clients);
    assert!(!is_error);
    assert_eq!(serde_json::from_str::<Value>(&text)?, json!({"clients": [2]}));

    let (text, is_error) = single_text(&paths);
    assert!(is_error);
    assert!(text.contains("503"), "{text}");
    Ok(())
}
