//! Request/response behaviour of `ApiClient` against a mock catalog service.

use api::{
    ApiClient, ApiError, Category, ImageUpload, PlantDraft, PlantId, Role, SignupOutcome,
    SignupRequest, SoilType, TemperatureRange, Token, WateringFrequency,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLANT_ID: &str = "65f1c0ffee65f1c0ffee65f1";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri())
}

fn token() -> Token {
    Token::new("tok-123").unwrap()
}

fn draft() -> PlantDraft {
    PlantDraft {
        name: "Fern".into(),
        scientific_name: "Nephrolepis exaltata".into(),
        category: Category::Shade,
        origin: "Tropics".into(),
        description: "Loves humidity".into(),
        watering_frequency: WateringFrequency::Weekly,
        soil_type: SoilType::Peaty,
        temperature_range: TemperatureRange {
            min: 16.0,
            max: 24.0,
        },
    }
}

fn plant_json() -> serde_json::Value {
    json!({
        "_id": PLANT_ID,
        "name": "Fern",
        "scientificName": "Nephrolepis exaltata",
        "category": "shade",
        "origin": "Tropics",
        "description": "Loves humidity",
        "wateringFrequency": "weekly",
        "soilType": "peaty",
        "temperatureRange": { "min": 16, "max": 24 },
        "Image": { "secure_url": "https://img.example/fern.jpg" }
    })
}

#[tokio::test]
async fn test_login_sentinel_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "a@gmail.com", "password": "Secret1!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "login successfully",
            "token": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server)
        .login(" a@gmail.com ", "Secret1!")
        .await
        .unwrap();
    assert_eq!(token.as_str(), "abc");
}

#[tokio::test]
async fn test_login_other_message_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "invalid password",
            "token": "abc"
        })))
        .mount(&server)
        .await;

    let err = client(&server).login("a@gmail.com", "nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 200, .. }));
    assert_eq!(err.user_message("Invalid credentials"), "invalid password");
}

#[tokio::test]
async fn test_login_error_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = client(&server).login("a@gmail.com", "nope").await.unwrap_err();
    assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
}

#[tokio::test]
async fn test_signup_conflict_and_success() {
    let server = MockServer::start().await;
    let request = SignupRequest {
        user_name: "green_1".into(),
        email: "taken@gmail.com".into(),
        password: "Secret1!".into(),
    };

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(json!({
            "userName": "green_1",
            "email": "taken@gmail.com",
            "password": "Secret1!"
        })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "user already exist" })),
        )
        .mount(&server)
        .await;

    let outcome = client(&server).signup(&request).await.unwrap();
    assert_eq!(outcome, SignupOutcome::AlreadyExists);

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "success",
            "token": "fresh"
        })))
        .mount(&server)
        .await;

    match client(&server).signup(&request).await.unwrap() {
        SignupOutcome::Created { token, .. } => assert_eq!(token.unwrap().as_str(), "fresh"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_password_reset_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reset-password"))
        .and(body_json(json!({
            "email": "a@gmail.com",
            "newPassword": "Newpass1!",
            "confirmPassword": "Newpass1!"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "password updated" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ack = client(&server)
        .reset_password("a@gmail.com", "Newpass1!", "Newpass1!")
        .await
        .unwrap();
    assert_eq!(ack.message_or("done"), "password updated");
}

#[tokio::test]
async fn test_verify_otp_rejection_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .and(body_json(json!({ "email": "a@gmail.com", "otp": "123456" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Invalid OTP"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .verify_otp("a@gmail.com", "123456")
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Verification failed"), "Invalid OTP");
}

#[tokio::test]
async fn test_verify_email_uses_path_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/verify-email/link-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "email verified" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ack = client(&server).verify_email("link-abc").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("email verified"));
}

#[tokio::test]
async fn test_profile_uses_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "_id": "u1",
                "userName": "admin_1",
                "email": "admin@gmail.com",
                "role": "admin",
                "isVerified": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client(&server).profile(&token()).await.unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert!(profile.is_admin());
}

#[tokio::test]
async fn test_list_plants_sends_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plant"))
        .and(header("token", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [plant_json()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let plants = client(&server).list_plants(&token()).await.unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].id.as_str(), PLANT_ID);
    assert_eq!(plants[0].category, Category::Shade);
}

#[tokio::test]
async fn test_list_plants_drops_malformed_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "_id": "not-hex", "name": "Odd" }, plant_json()]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/plant/not-hex"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/plant/{PLANT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let plants = api.list_plants(&token()).await.unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Fern");

    for plant in &plants {
        api.delete_plant(&token(), &plant.id).await.unwrap();
    }
}

#[tokio::test]
async fn test_list_plants_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plant"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "jwt expired" })))
        .mount(&server)
        .await;

    let err = client(&server).list_plants(&token()).await.unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(err.user_message("Failed"), "Session expired. Please login again");
}

#[tokio::test]
async fn test_list_plants_rejects_non_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "plants": [] }
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_plants(&token()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(ref m) if m == "Invalid data format received"));
}

#[tokio::test]
async fn test_get_plant_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/plant/{PLANT_ID}")))
        .and(header("token", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": plant_json()
        })))
        .mount(&server)
        .await;

    let id = PlantId::parse(PLANT_ID).unwrap();
    let plant = client(&server).get_plant(&token(), &id).await.unwrap();
    assert_eq!(plant.to_draft(), draft());
}

#[tokio::test]
async fn test_add_plant_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plant/add-plant"))
        .and(header("token", "tok-123"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "plant added"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = ImageUpload {
        file_name: "fern.png".into(),
        content_type: Some("image/png".into()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };
    let ack = client(&server)
        .add_plant(&token(), &draft(), Some(&image))
        .await
        .unwrap();
    assert_eq!(ack.message_or("added"), "plant added");
}

#[tokio::test]
async fn test_add_plant_duplicate_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plant/add-plant"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "plant already exist" })),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .add_plant(&token(), &draft(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn test_update_without_image_sends_json() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/plant/{PLANT_ID}")))
        .and(header("token", "tok-123"))
        .and(body_json(json!({
            "name": "Fern",
            "scientificName": "Nephrolepis exaltata",
            "category": "shade",
            "origin": "Tropics",
            "description": "Loves humidity",
            "wateringFrequency": "weekly",
            "soilType": "peaty",
            "temperatureRange": { "min": 16.0, "max": 24.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let id = PlantId::parse(PLANT_ID).unwrap();
    client(&server)
        .update_plant(&token(), &id, &draft(), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_with_image_sends_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/plant/{PLANT_ID}")))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let id = PlantId::parse(PLANT_ID).unwrap();
    let image = ImageUpload {
        file_name: "fern.jpg".into(),
        content_type: None,
        bytes: vec![1, 2, 3],
    };
    client(&server)
        .update_plant(&token(), &id, &draft(), Some(&image))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_flagged_failure_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/plant/{PLANT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "plant not found"
        })))
        .mount(&server)
        .await;

    let id = PlantId::parse(PLANT_ID).unwrap();
    let err = client(&server).delete_plant(&token(), &id).await.unwrap_err();
    assert_eq!(err.user_message("Failed to delete plant"), "plant not found");
}
