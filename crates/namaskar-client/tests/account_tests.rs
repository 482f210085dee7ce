//! Account client tests

use namaskar_client::{AccountClient, ClientError, GENERIC_FAILURE_MESSAGE};
use namaskar_conf::ClientSettings;
use namaskar_forms::{AccountFormError, OtpRequest, PasswordResetForm, SignInForm, SignUpForm};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AccountClient {
	let settings = ClientSettings::new(&server.uri()).unwrap();
	AccountClient::new(&settings).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_sign_in_returns_session_data() {
	// Arrange
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/auth/sign-in"))
		.and(body_json(json!({ "email": "asha@example.org", "password": "secret1" })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"success": true,
			"message": "Welcome back",
			"accessToken": "t0k3n",
			"is_admin": false,
		})))
		.expect(1)
		.mount(&server)
		.await;

	// Act
	let envelope = client(&server)
		.sign_in(&SignInForm::new("asha@example.org ", " secret1 "))
		.await
		.unwrap();

	// Assert
	assert_eq!(envelope.message.as_deref(), Some("Welcome back"));
	assert_eq!(
		envelope.field::<String>("accessToken").unwrap().as_deref(),
		Some("t0k3n")
	);
	assert_eq!(envelope.field::<bool>("is_admin").unwrap(), Some(false));
}

#[rstest]
#[tokio::test]
async fn test_sign_in_guard_skips_request() {
	// Arrange
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200))
		.expect(0)
		.mount(&server)
		.await;

	// Act
	let err = client(&server)
		.sign_in(&SignInForm::new("asha@example.org", ""))
		.await
		.unwrap_err();

	// Assert
	assert!(matches!(
		err,
		ClientError::Invalid(AccountFormError::MissingCredentials)
	));
	assert_eq!(
		err.user_message(GENERIC_FAILURE_MESSAGE),
		"Please fill all the fields!"
	);
}

#[rstest]
#[tokio::test]
async fn test_sign_up_rejection_surfaces_server_message() {
	// Arrange
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/auth/sign-up"))
		.and(body_json(json!({
			"name": "Asha",
			"email": "asha@example.org",
			"password": "secret1",
		})))
		.respond_with(ResponseTemplate::new(400).set_body_json(json!({
			"success": false,
			"message": "User already exists",
		})))
		.mount(&server)
		.await;

	// Act
	let err = client(&server)
		.sign_up(&SignUpForm::new(" Asha ", "asha@example.org", "secret1"))
		.await
		.unwrap_err();

	// Assert
	assert_eq!(err.status(), Some(400));
	assert_eq!(
		err.user_message(GENERIC_FAILURE_MESSAGE),
		"User already exists"
	);
}

#[rstest]
#[tokio::test]
async fn test_send_otp_posts_email() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/auth/send-otp"))
		.and(body_json(json!({ "email": "asha@example.org" })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"success": true,
			"message": "OTP sent",
		})))
		.expect(1)
		.mount(&server)
		.await;

	let envelope = client(&server)
		.send_otp(&OtpRequest::new("asha@example.org"))
		.await
		.unwrap();

	assert_eq!(envelope.message.as_deref(), Some("OTP sent"));
}

#[rstest]
#[tokio::test]
async fn test_reset_password_sends_otp_and_password_only() {
	// Arrange
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/auth/forgot-password"))
		.and(body_json(json!({ "otp": "482913", "password": "newpass1" })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
		.expect(1)
		.mount(&server)
		.await;
	let form = PasswordResetForm::new("482913", "newpass1", "newpass1");

	// Act
	let result = client(&server).reset_password(&form).await;

	// Assert
	assert!(result.is_ok());
}

#[rstest]
#[case(PasswordResetForm::new("482913", "newpass1", "newpass2"), "Passwords do not match")]
#[case(PasswordResetForm::new("482913", "abc", "abc"), "Password must be at least 6 characters long")]
#[tokio::test]
async fn test_reset_password_guards(#[case] form: PasswordResetForm, #[case] message: &str) {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200))
		.expect(0)
		.mount(&server)
		.await;

	let err = client(&server).reset_password(&form).await.unwrap_err();

	assert_eq!(err.user_message(GENERIC_FAILURE_MESSAGE), message);
}

#[rstest]
#[tokio::test]
async fn test_logout_sends_token() {
	// Arrange
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/auth/logout"))
		.and(header("authorization", "t0k3n"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"success": true,
			"message": "Logged out",
		})))
		.expect(1)
		.mount(&server)
		.await;

	// Act
	let envelope = client(&server).logout("t0k3n").await.unwrap();

	// Assert
	assert_eq!(envelope.message.as_deref(), Some("Logged out"));
}

#[rstest]
#[tokio::test]
async fn test_non_json_failure_falls_back_to_generic_message() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
		.mount(&server)
		.await;

	let err = client(&server).logout("t0k3n").await.unwrap_err();

	assert_eq!(err.status(), Some(502));
	assert_eq!(
		err.user_message(GENERIC_FAILURE_MESSAGE),
		GENERIC_FAILURE_MESSAGE
	);
}
