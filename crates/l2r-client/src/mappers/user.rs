//! User mapper

use l2r_core::{AuthResponse, DomainError, User, UserId, UserType};

use super::decode_error;
use crate::models::{AuthResponseModel, LoginBody, RegisterBody, UserModel};

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let user_type: UserType = model
            .user_type
            .parse()
            .map_err(|e| decode_error("userType", e))?;

        Ok(User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            user_type,
            phone: model.phone,
            created_at: model.created_at,
            rating: model.rating,
            total_deliveries: model.total_deliveries,
        })
    }
}

/// Convert `{token, user}`
pub fn auth_response_from_wire(model: AuthResponseModel) -> Result<AuthResponse, DomainError> {
    Ok(AuthResponse {
        token: model.token,
        user: User::try_from(model.user)?,
    })
}

impl<'a> RegisterBody<'a> {
    pub fn from_registration(registration: &'a l2r_core::Registration) -> Self {
        Self {
            name: &registration.name,
            email: &registration.email,
            password: &registration.password,
            user_type: registration.user_type.as_str(),
            phone: registration.phone.as_deref(),
        }
    }
}

impl<'a> LoginBody<'a> {
    pub fn from_credentials(credentials: &'a l2r_core::Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}
