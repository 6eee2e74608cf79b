use super::*;

// =============================================================
// Login replies
// =============================================================

#[test]
fn login_reply_with_token_authenticates() {
    let reply: LoginReply =
        serde_json::from_str(r#"{"token":"abc","username":"bob"}"#).unwrap();
    assert_eq!(
        reply.outcome(),
        LoginOutcome::Authenticated {
            token: "abc".to_owned(),
            username: "bob".to_owned(),
        }
    );
}

#[test]
fn login_navigates_to_username_path() {
    let outcome = LoginOutcome::Authenticated {
        token: "abc".to_owned(),
        username: "bob".to_owned(),
    };
    assert_eq!(outcome.navigation_target().as_deref(), Some("/bob"));
}

#[test]
fn login_reply_without_token_is_rejected() {
    let reply: LoginReply =
        serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
    let outcome = reply.outcome();
    assert_eq!(
        outcome,
        LoginOutcome::Rejected {
            message: "Login failed: Invalid credentials".to_owned(),
        }
    );
    assert_eq!(outcome.navigation_target(), None);
}

#[test]
fn login_reply_with_no_fields_still_rejects() {
    let reply: LoginReply = serde_json::from_str("{}").unwrap();
    assert_eq!(
        reply.outcome(),
        LoginOutcome::Rejected {
            message: "Login failed: unknown error".to_owned(),
        }
    );
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest {
        email: "bob@example.com".to_owned(),
        password: "hunter2".to_owned(),
    })
    .unwrap();
    assert_eq!(body["email"], "bob@example.com");
    assert_eq!(body["password"], "hunter2");
}

// =============================================================
// Signup replies
// =============================================================

#[test]
fn signup_reply_with_message_registers() {
    let reply: SignupReply =
        serde_json::from_str(r#"{"message":"Signup successful"}"#).unwrap();
    assert_eq!(reply.outcome(), SignupOutcome::Registered);
}

#[test]
fn signup_reply_with_error_is_rejected() {
    let reply: SignupReply =
        serde_json::from_str(r#"{"error":"Email already exists"}"#).unwrap();
    assert_eq!(
        reply.outcome(),
        SignupOutcome::Rejected {
            message: "Signup failed: Email already exists".to_owned(),
        }
    );
}

#[test]
fn signup_request_uses_wire_field_name_for_confirmation() {
    let body = serde_json::to_value(SignupRequest {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter2".to_owned(),
        confirm_password: "hunter2".to_owned(),
    })
    .unwrap();
    assert_eq!(body["confirmPassword"], "hunter2");
    assert!(body.get("confirm_password").is_none());
}

// =============================================================
// Upload replies
// =============================================================

#[test]
fn upload_reply_with_message_triggers_refetch_path() {
    let reply: UploadReply =
        serde_json::from_str(r#"{"message":"File uploaded and processed successfully"}"#)
            .unwrap();
    assert_eq!(reply.outcome(), UploadOutcome::Uploaded);
}

#[test]
fn upload_reply_with_error_is_rejected_without_refetch() {
    let reply: UploadReply = serde_json::from_str(r#"{"error":"too large"}"#).unwrap();
    assert_eq!(
        reply.outcome(),
        UploadOutcome::Rejected {
            message: "Upload failed: too large".to_owned(),
        }
    );
}

// =============================================================
// File listings
// =============================================================

#[test]
fn audio_file_listing_preserves_order() {
    let files: Vec<AudioFile> =
        serde_json::from_str(r#"[{"name":"a.mp3"},{"name":"b.wav"}]"#).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.mp3", "b.wav"]);
}

#[test]
fn audio_file_listing_tolerates_extra_fields() {
    let files: Vec<AudioFile> =
        serde_json::from_str(r#"[{"id":7,"name":"x.flac","path":"/srv/x.flac"}]"#).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, Some(7));
    assert_eq!(files[0].name, "x.flac");
}

#[test]
fn empty_listing_parses_to_empty_vec() {
    let files: Vec<AudioFile> = serde_json::from_str("[]").unwrap();
    assert!(files.is_empty());
}
