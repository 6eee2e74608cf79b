use serde::{Deserialize, Serialize};

pub mod session;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Dialog text shown after a signup the server accepted.
pub const SIGNUP_OK_DIALOG: &str = "Signup successful. Please login.";

/// Dialog text shown after an upload the server accepted.
pub const UPLOAD_OK_DIALOG: &str = "File uploaded successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Body of a `/api/login` response. The server sends either `token` and
/// `username`, or `error` — never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReply {
    pub token: Option<String>,
    pub username: Option<String>,
    pub error: Option<String>,
}

/// Body of a `/api/signup` response: `message` on success, `error` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Body of a `/api/upload` response: `message` on success, `error` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

/// One entry of the `/api/audio-files` listing. The server sends more
/// fields than the client renders; only the name is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioFile {
    pub id: Option<u64>,
    pub name: String,
}

/// What the client does with a parsed login reply.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Persist the token, then navigate to the user's dashboard.
    Authenticated { token: String, username: String },
    /// Show `message` in a blocking dialog. No navigation.
    Rejected { message: String },
}

impl LoginReply {
    /// A reply carrying a token authenticates; anything else is rejected
    /// with the server's error text.
    pub fn outcome(self) -> LoginOutcome {
        match self.token {
            Some(token) => LoginOutcome::Authenticated {
                token,
                username: self.username.unwrap_or_default(),
            },
            None => LoginOutcome::Rejected {
                message: format!(
                    "Login failed: {}",
                    self.error.as_deref().unwrap_or("unknown error")
                ),
            },
        }
    }
}

impl LoginOutcome {
    /// Path the browser navigates to, if this outcome navigates at all.
    pub fn navigation_target(&self) -> Option<String> {
        match self {
            LoginOutcome::Authenticated { username, .. } => Some(format!("/{username}")),
            LoginOutcome::Rejected { .. } => None,
        }
    }
}

/// What the client does with a parsed signup reply.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// Show the fixed confirmation dialog, then navigate to the login page.
    Registered,
    /// Show `message` in a blocking dialog. No navigation.
    Rejected { message: String },
}

impl SignupReply {
    pub fn outcome(self) -> SignupOutcome {
        match self.message {
            Some(_) => SignupOutcome::Registered,
            None => SignupOutcome::Rejected {
                message: format!(
                    "Signup failed: {}",
                    self.error.as_deref().unwrap_or("unknown error")
                ),
            },
        }
    }
}

/// What the client does with a parsed upload reply.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Show the fixed confirmation dialog, then refetch the file list.
    Uploaded,
    /// Show `message` in a blocking dialog. No refetch.
    Rejected { message: String },
}

impl UploadReply {
    pub fn outcome(self) -> UploadOutcome {
        match self.message {
            Some(_) => UploadOutcome::Uploaded,
            None => UploadOutcome::Rejected {
                message: format!(
                    "Upload failed: {}",
                    self.error.as_deref().unwrap_or("unknown error")
                ),
            },
        }
    }
}

#[cfg(feature = "frontend")]
pub mod frontend;

#[cfg(feature = "frontend")]
pub use frontend::*;
