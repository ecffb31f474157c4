use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::UserProfile;
use crate::domain::auth::registration::RegistrationForm;

pub struct RegisterParams {
    pub form: RegistrationForm,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<UserProfile, AuthError>;
}
