use chrono::{Datelike, NaiveDate};

use crate::domain::catalog::mood::Mood;
use crate::domain::errors::ValidationError;

use super::model::RegistrationRequest;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_AGE_YEARS: i32 = 18;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Full years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Raw sign-up input as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub mood: Option<Mood>,
}

impl RegistrationForm {
    pub fn validate_identity(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }

    pub fn validate_birth_date(&self, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        let raw = self.date_of_birth.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingBirthDate);
        }
        let birth_date = NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthDate)?;
        if birth_date > today {
            return Err(ValidationError::InvalidBirthDate);
        }
        if age_on(birth_date, today) < MIN_AGE_YEARS {
            return Err(ValidationError::Underage);
        }
        Ok(birth_date)
    }

    /// Runs every step's checks and produces the payload for the API.
    pub fn validate(&self, today: NaiveDate) -> Result<RegistrationRequest, ValidationError> {
        self.validate_identity()?;
        let date_of_birth = self.validate_birth_date(today)?;
        Ok(RegistrationRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            date_of_birth,
            mood: self.mood.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationStep {
    Identity,
    BirthDate,
    /// Optional facial mood capture; never blocks submission.
    MoodCapture,
}

impl RegistrationStep {
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::Identity => 1,
            RegistrationStep::BirthDate => 2,
            RegistrationStep::MoodCapture => 3,
        }
    }
}

/// Three-step sign-up wizard. Moving forward requires the current step to be valid.
#[derive(Debug, Clone)]
pub struct RegistrationFlow {
    form: RegistrationForm,
    step: RegistrationStep,
}

impl RegistrationFlow {
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            step: RegistrationStep::Identity,
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn set_mood(&mut self, mood: Option<Mood>) {
        self.form.mood = mood;
    }

    fn validate_current(&self, today: NaiveDate) -> Result<(), ValidationError> {
        match self.step {
            RegistrationStep::Identity => self.form.validate_identity(),
            RegistrationStep::BirthDate => self.form.validate_birth_date(today).map(|_| ()),
            RegistrationStep::MoodCapture => Ok(()),
        }
    }

    /// Validates the current step and moves to the next one.
    /// The last step stays where it is.
    pub fn advance(&mut self, today: NaiveDate) -> Result<RegistrationStep, ValidationError> {
        self.validate_current(today)?;
        self.step = match self.step {
            RegistrationStep::Identity => RegistrationStep::BirthDate,
            RegistrationStep::BirthDate | RegistrationStep::MoodCapture => {
                RegistrationStep::MoodCapture
            }
        };
        Ok(self.step)
    }

    pub fn finish(&self, today: NaiveDate) -> Result<RegistrationRequest, ValidationError> {
        self.form.validate(today)
    }

    pub fn into_form(self) -> RegistrationForm {
        self.form
    }
}
