use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use business::domain::auth::model::UserProfile;
use business::domain::auth::registration::{RegistrationFlow, RegistrationForm, RegistrationStep};
use business::domain::auth::use_cases::get_current_user::GetCurrentUserUseCase;
use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use business::domain::catalog::mood::MoodDetector;
use business::domain::catalog::zodiac::ZodiacSign;

use crate::commands::error::{CommandError, IntoCommandError};

const TOTAL_STEPS: u8 = 3;

pub struct AuthCommands {
    login_use_case: Arc<dyn LoginUseCase>,
    register_use_case: Arc<dyn RegisterUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    get_current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
}

impl AuthCommands {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        register_use_case: Arc<dyn RegisterUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        get_current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
    ) -> Self {
        Self {
            login_use_case,
            register_use_case,
            logout_use_case,
            get_current_user_use_case,
        }
    }

    pub async fn login(&self, email: String, password: String) -> Result<String, CommandError> {
        let user = self
            .login_use_case
            .execute(LoginParams { email, password })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(format!("Welcome back, {}!", user.full_name))
    }

    /// Walks the three sign-up steps, reporting each one, then submits.
    pub async fn register(
        &self,
        form: RegistrationForm,
        mood_detector: &dyn MoodDetector,
    ) -> Result<String, CommandError> {
        let today = Utc::now().date_naive();
        let mut flow = RegistrationFlow::new(form);
        let mut output = Vec::new();

        flow.advance(today)
            .map_err(IntoCommandError::into_command_error)?;
        output.push(step_line(RegistrationStep::Identity, "account details look good"));

        let birth_date = flow
            .form()
            .validate_birth_date(today)
            .map_err(IntoCommandError::into_command_error)?;
        flow.advance(today)
            .map_err(IntoCommandError::into_command_error)?;
        output.push(step_line(
            RegistrationStep::BirthDate,
            &format!("born under {}", ZodiacSign::for_date(birth_date)),
        ));

        let mood = mood_detector.detect().await;
        let mood_message = match &mood {
            Some(mood) => format!("mood captured: {}", mood),
            None => "mood capture skipped".to_string(),
        };
        flow.set_mood(mood);
        output.push(step_line(RegistrationStep::MoodCapture, &mood_message));

        let user = self
            .register_use_case
            .execute(RegisterParams {
                form: flow.into_form(),
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        output.push(format!("Welcome to Zodiac Brew, {}!", user.full_name));
        Ok(output.join("\n"))
    }

    pub async fn logout(&self) -> Result<String, CommandError> {
        self.logout_use_case.execute().await;
        Ok("Signed out.".to_string())
    }

    pub async fn whoami(&self) -> Result<String, CommandError> {
        Ok(match self.get_current_user_use_case.execute().await {
            Some(user) => render_profile(&user),
            None => "Not signed in.".to_string(),
        })
    }
}

fn step_line(step: RegistrationStep, message: &str) -> String {
    format!("Step {} of {}: {}", step.number(), TOTAL_STEPS, message)
}

/// The API returns birth dates either as `YYYY-MM-DD` or as a full timestamp.
fn birth_date_of(user: &UserProfile) -> Option<NaiveDate> {
    let raw = user.date_of_birth.as_deref()?;
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn render_profile(user: &UserProfile) -> String {
    let mut lines = vec![format!("{} <{}>", user.full_name, user.email)];
    if let Some(birth_date) = birth_date_of(user) {
        let sign = ZodiacSign::for_date(birth_date);
        lines.push(format!("Born {} ({}, {})", birth_date, sign, sign.element()));
    }
    lines.push(format!("Previous orders: {}", user.previous_orders.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::UserId;

    fn user(date_of_birth: Option<&str>) -> UserProfile {
        UserProfile {
            id: UserId::new("u1"),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            date_of_birth: date_of_birth.map(str::to_string),
            previous_orders: vec![],
        }
    }

    #[test]
    fn should_read_birth_date_from_timestamp() {
        let profile = user(Some("1994-08-05T00:00:00.000Z"));

        assert_eq!(
            birth_date_of(&profile),
            NaiveDate::from_ymd_opt(1994, 8, 5)
        );
    }

    #[test]
    fn should_render_sign_when_birth_date_is_known() {
        let output = render_profile(&user(Some("1994-08-05")));

        assert!(output.starts_with("Asha Rao <asha@example.com>"));
        assert!(output.contains("Leo"));
        assert!(output.ends_with("Previous orders: 0"));
    }

    #[test]
    fn should_skip_birth_line_for_unreadable_dates() {
        let output = render_profile(&user(Some("soon")));

        assert!(!output.contains("Born"));
    }

    #[test]
    fn should_number_steps_out_of_three() {
        assert_eq!(
            step_line(RegistrationStep::BirthDate, "born under Leo"),
            "Step 2 of 3: born under Leo"
        );
    }
}
