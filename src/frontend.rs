use leptos::*;
use wasm_bindgen::prelude::*;
use gloo_net::http::Request;
use gloo_file::{File, FileList};
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{use_navigate, use_params_map, Redirect, Route, Router, Routes, A};
use web_sys::FormData;

use std::rc::Rc;

use crate::session::{Session, TokenStore, TOKEN_KEY};
use crate::{
    AudioFile, LoginOutcome, LoginReply, LoginRequest, SignupOutcome, SignupReply,
    SignupRequest, UploadOutcome, UploadReply, SIGNUP_OK_DIALOG, UPLOAD_OK_DIALOG,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::new(Rc::new(BrowserStore)));

    view! {
        <div class="app">
            <StyleProvider />
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/login" /> } />
                    <Route path="/login" view=LoginPage />
                    <Route path="/signup" view=SignupPage />
                    <Route path="/:username" view=DashboardPage />
                </Routes>
            </Router>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        let session = session.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match login_user(&request).await {
                Ok(reply) => match reply.outcome() {
                    LoginOutcome::Authenticated { token, username } => {
                        session.remember(&token);
                        navigate(&format!("/{}", username), Default::default());
                    }
                    LoginOutcome::Rejected { message } => dialog(&message),
                },
                Err(e) => dialog(&format!("Login failed: {}", e)),
            }
        });
    };

    view! {
        <Title text="login | wavedrop" />
        <div class="page login-page">
            <div class="panel">
                <h1 class="brand">"wavedrop"</h1>
                <p class="tagline">"share your audio, anywhere"</p>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label class="field-label" for="email">"email"</label>
                        <input
                            id="email"
                            type="email"
                            class="text-input"
                            prop:value=move || email.get()
                            on:input=move |e| set_email.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label" for="password">"password"</label>
                        <input
                            id="password"
                            type="password"
                            class="text-input"
                            prop:value=move || password.get()
                            on:input=move |e| set_password.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <button type="submit" class="submit-btn">"log in"</button>
                </form>

                <p class="page-link">
                    "No account yet? " <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());

    // The confirmation field rides along unchecked; the server compares the
    // two passwords.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = SignupRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match signup_user(&request).await {
                Ok(reply) => match reply.outcome() {
                    SignupOutcome::Registered => {
                        dialog(SIGNUP_OK_DIALOG);
                        navigate("/login", Default::default());
                    }
                    SignupOutcome::Rejected { message } => dialog(&message),
                },
                Err(e) => dialog(&format!("Signup failed: {}", e)),
            }
        });
    };

    view! {
        <Title text="sign up | wavedrop" />
        <div class="page signup-page">
            <div class="panel">
                <h1 class="brand">"wavedrop"</h1>
                <p class="tagline">"create an account"</p>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label class="field-label" for="username">"username"</label>
                        <input
                            id="username"
                            type="text"
                            class="text-input"
                            prop:value=move || username.get()
                            on:input=move |e| set_username.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label" for="email">"email"</label>
                        <input
                            id="email"
                            type="email"
                            class="text-input"
                            prop:value=move || email.get()
                            on:input=move |e| set_email.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label" for="password">"password"</label>
                        <input
                            id="password"
                            type="password"
                            class="text-input"
                            prop:value=move || password.get()
                            on:input=move |e| set_password.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <div class="form-field">
                        <label class="field-label" for="confirmPassword">"confirm password"</label>
                        <input
                            id="confirmPassword"
                            type="password"
                            class="text-input"
                            prop:value=move || confirm_password.get()
                            on:input=move |e| set_confirm_password.set(event_target_value(&e))
                            required
                        />
                    </div>

                    <button type="submit" class="submit-btn">"sign up"</button>
                </form>

                <p class="page-link">
                    "Already registered? " <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();
    let username =
        move || params.with(|map| map.get("username").cloned().unwrap_or_default());

    let (files, set_files) = create_signal(Vec::<AudioFile>::new());

    let list_session = session.clone();
    let load_files = move || {
        let session = list_session.clone();
        spawn_local(async move {
            match fetch_audio_files(&session).await {
                Ok(list) => set_files.set(list),
                Err(e) => log::error!("Failed to load audio files: {}", e),
            }
        });
    };

    // The upload form is present, so request the listing right away.
    {
        let load_files = load_files.clone();
        create_effect(move |_| load_files());
    }

    let file_input_ref = create_node_ref::<leptos::html::Input>();

    let upload_session = session.clone();
    let refetch = load_files.clone();
    let on_upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut selected = None;
        if let Some(input) = file_input_ref.get_untracked() {
            if let Some(file_list) = input.files() {
                // Only the first file of the selection is sent.
                selected = FileList::from(file_list).first().cloned();
            }
        }
        let Some(file) = selected else {
            return;
        };

        let session = upload_session.clone();
        let refetch = refetch.clone();
        spawn_local(async move {
            match upload_file(&session, &file).await {
                Ok(reply) => match reply.outcome() {
                    UploadOutcome::Uploaded => {
                        dialog(UPLOAD_OK_DIALOG);
                        refetch();
                    }
                    UploadOutcome::Rejected { message } => dialog(&message),
                },
                Err(e) => dialog(&format!("Upload failed: {}", e)),
            }
        });
    };

    view! {
        <Title text="dashboard | wavedrop" />
        <div class="page dashboard-page">
            <div class="panel">
                <h1 class="brand">{username}</h1>
                <p class="tagline">"your audio library"</p>

                <form class="upload-form" on:submit=on_upload>
                    <input type="file" class="file-input" node_ref=file_input_ref />
                    <button type="submit" class="submit-btn">"upload"</button>
                </form>

                <ul class="file-list">
                    <For
                        each=move || files.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        let:entry
                    >
                        <li class="file-item">{entry.1.name.clone()}</li>
                    </For>
                </ul>
            </div>
        </div>
    }
}

/// Blocking alert dialog, the only user-visible error surface.
fn dialog(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// localStorage-backed token store used by the real client.
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
}

async fn login_user(request: &LoginRequest) -> Result<LoginReply, String> {
    let body = serde_json::to_string(request)
        .map_err(|e| format!("Serialization error: {:?}", e))?;

    let response = Request::post("/api/login")
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Request body error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Login request failed: {:?}", e))?;

    response
        .json::<LoginReply>()
        .await
        .map_err(|e| format!("Failed to parse login response: {:?}", e))
}

async fn signup_user(request: &SignupRequest) -> Result<SignupReply, String> {
    let body = serde_json::to_string(request)
        .map_err(|e| format!("Serialization error: {:?}", e))?;

    let response = Request::post("/api/signup")
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Request body error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Signup request failed: {:?}", e))?;

    response
        .json::<SignupReply>()
        .await
        .map_err(|e| format!("Failed to parse signup response: {:?}", e))
}

async fn upload_file(session: &Session, file: &File) -> Result<UploadReply, String> {
    let form_data = FormData::new().map_err(|_| "Failed to create FormData")?;
    form_data
        .append_with_blob("file", &file.as_ref())
        .map_err(|_| "Failed to append file to FormData")?;

    let response = Request::post("/api/upload")
        .header("Authorization", &session.auth_header())
        .body(form_data)
        .map_err(|e| format!("Failed to set body: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Upload request failed: {:?}", e))?;

    response
        .json::<UploadReply>()
        .await
        .map_err(|e| format!("Failed to parse upload response: {:?}", e))
}

async fn fetch_audio_files(session: &Session) -> Result<Vec<AudioFile>, String> {
    let response = Request::get("/api/audio-files")
        .header("Authorization", &session.auth_header())
        .send()
        .await
        .map_err(|e| format!("Listing request failed: {:?}", e))?;

    response
        .json::<Vec<AudioFile>>()
        .await
        .map_err(|e| format!("Failed to parse listing response: {:?}", e))
}

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(|| view! { <App /> });
}

// CSS-in-Rust: styles live in a const string injected by StyleProvider.
const MAIN_STYLES: &str = r#"
@import url("https://fonts.googleapis.com/css2?family=DM+Mono:ital,wght@0,300;0,400;0,500&display=swap");

body {
    font-family: "DM Mono", monospace;
    letter-spacing: -0.05ch;
    background-color: #16161e;
    color: #c0caf5;
    margin: 0;
    padding: 0;
}

.app {
    max-width: 720px;
    margin: 0 auto;
}

.page {
    display: flex;
    justify-content: center;
    padding: 60px 20px;
}

.panel {
    width: 100%;
    max-width: 440px;
    border: 2px solid #3b4261;
    padding: 30px;
    background-color: #16161e;
}

.brand {
    color: #c0caf5;
    margin: 0;
    font-size: 2.2rem;
    font-weight: 500;
}

.tagline {
    color: #787c99;
    font-size: 1rem;
    margin: 8px 0 25px 0;
}

.form-field {
    margin-bottom: 18px;
}

.field-label {
    display: block;
    color: #c0caf5;
    font-size: 14px;
    margin-bottom: 6px;
    text-transform: lowercase;
}

.text-input {
    width: 100%;
    background-color: #16161e;
    border: 2px solid #3b4261;
    color: #c0caf5;
    padding: 10px 12px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    box-sizing: border-box;
    transition: border-color 0.2s ease-out;
}

.text-input:focus {
    outline: none;
    border-color: #7aa2f7;
}

.submit-btn {
    width: 100%;
    background-color: #16161e;
    border: 2px solid #3b4261;
    color: #c0caf5;
    padding: 12px 16px;
    margin-top: 8px;
    font-family: "DM Mono", monospace;
    font-size: 15px;
    cursor: pointer;
    transition: border-color 0.2s ease-out;
}

.submit-btn:hover {
    border-color: #9ece6a;
}

.page-link {
    margin-top: 20px;
    color: #787c99;
    font-size: 14px;
}

.page-link a {
    color: #7aa2f7;
    text-decoration: none;
}

.page-link a:hover {
    text-decoration: underline;
}

.upload-form {
    display: flex;
    gap: 12px;
    align-items: center;
    margin-bottom: 25px;
}

.file-input {
    flex: 1;
    color: #787c99;
    font-family: "DM Mono", monospace;
    font-size: 13px;
}

.upload-form .submit-btn {
    width: auto;
    margin-top: 0;
    padding: 8px 18px;
}

.file-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.file-item {
    border: 2px solid #3b4261;
    padding: 12px 14px;
    margin-bottom: 10px;
    color: #c0caf5;
    font-size: 14px;
    word-break: break-word;
    transition: border-color 0.2s ease-out;
}

.file-item:hover {
    border-color: #bb9af7;
}

@media (max-width: 600px) {
    .page {
        padding: 30px 12px;
    }

    .panel {
        padding: 20px;
    }
}
"#;

// CSS-in-Rust: Component that injects styles
#[component]
fn StyleProvider() -> impl IntoView {
    view! {
        <style>{MAIN_STYLES}</style>
    }
}
