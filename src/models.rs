use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItemsResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateItemParams {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateItemResponse {
    pub msg: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_params_from_query_shape() {
        let params: LoginParams =
            serde_json::from_str(r#"{"username":"admin","password":"1234"}"#).unwrap();
        assert_eq!(params.username, "admin");
        assert_eq!(params.password, "1234");
    }

    #[test]
    fn test_token_response_serialization() {
        let body = serde_json::to_value(TokenResponse {
            access_token: "abc123".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"access_token": "abc123"}));
    }

    #[test]
    fn test_items_response_serialization() {
        let body = serde_json::to_value(ItemsResponse {
            items: vec!["item1".to_string(), "item2".to_string(), "item3".to_string()],
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"items": ["item1", "item2", "item3"]}));
    }

    #[test]
    fn test_create_item_response_serialization() {
        let body = serde_json::to_value(CreateItemResponse {
            msg: "Item created".to_string(),
            name: "".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"msg": "Item created", "name": ""}));
    }

    #[test]
    fn test_status_response_serialization() {
        let body = serde_json::to_value(StatusResponse {
            status: "ok".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }
}
