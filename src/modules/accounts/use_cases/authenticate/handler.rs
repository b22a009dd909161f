use crate::modules::accounts::core::session::Session;
use crate::modules::accounts::use_cases::authenticate::command::{LoginForm, SignUpForm};
use crate::shared::infrastructure::navigation::Route;
use crate::shared::infrastructure::submission::{Outcome, SubmissionPipeline};

/// Log in and sign up forms. Credentials are not checked against anything;
/// a well formed form always opens a session.
pub struct AuthenticationHandler {
    pipeline: SubmissionPipeline,
}

impl AuthenticationHandler {
    pub fn new(pipeline: SubmissionPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn log_in(&self, form: LoginForm) -> Outcome<Session> {
        self.pipeline
            .submit(
                form,
                LoginForm::validate,
                |form| async move {
                    let session = Session::open(&form.email, form.remember_me);
                    tracing::info!(user_id = %session.user_id, "logged in");
                    Ok(session)
                },
                Route::dashboard(),
            )
            .await
    }

    pub async fn sign_up(&self, form: SignUpForm) -> Outcome<Session> {
        self.pipeline
            .submit(
                form,
                SignUpForm::validate,
                |form| async move {
                    let session = Session::open(&form.email, false);
                    tracing::info!(user_id = %session.user_id, name = %form.name, "signed up");
                    Ok(session)
                },
                Route::dashboard(),
            )
            .await
    }
}
