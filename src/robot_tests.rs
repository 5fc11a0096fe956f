#[cfg(test)]
mod tests {
    use crate::robot::Robot;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_card_to_token_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/open-apis/bot/v2/hook/test-token"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({"msg_type": "interactive"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "success"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api_url = format!("{}/open-apis/bot/v2/hook/", server.uri());
        let robot = Robot::new(&api_url, "test-token");

        let card = json!({"msg_type": "interactive", "card": {}});
        let response = robot.send(&card).await.unwrap();

        assert_eq!(response["code"], 0);
        assert_eq!(response["msg"], "success");
    }

    #[tokio::test]
    async fn test_send_passes_error_bodies_through() {
        // Feishu reports a bad token in the JSON body, not the status line.
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"code": 19001, "msg": "param invalid: incoming webhook access token invalid"})),
            )
            .mount(&server)
            .await;

        let robot = Robot::new(&format!("{}/hook/", server.uri()), "bad-token");
        let response = robot.send(&json!({"msg_type": "interactive"})).await.unwrap();

        assert_eq!(response["code"], 19001);
    }

    #[tokio::test]
    async fn test_send_fails_when_endpoint_is_unreachable() {
        let robot = Robot::new("http://127.0.0.1:1/hook/", "token");
        let result = robot.send(&json!({"msg_type": "interactive"})).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to reach the Feishu webhook"));
    }

    #[tokio::test]
    async fn test_send_fails_on_non_json_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let robot = Robot::new(&format!("{}/hook/", server.uri()), "token");
        let result = robot.send(&json!({"msg_type": "interactive"})).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("non-JSON response"));
    }
}
