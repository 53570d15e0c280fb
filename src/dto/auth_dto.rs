use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::validation::non_empty;

// Payload crudo de registro, antes de resolver el rol
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: Option<String>,
    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub organisation_name: Option<String>,
    pub organisation_id: Option<Uuid>,
}

/// Registro resuelto a su variante de rol
///
/// Las dos variantes comparten el paso de creación de usuario y divergen
/// en cómo se resuelve la organización.
#[derive(Debug)]
pub enum SignupRequest {
    Manager {
        name: String,
        email: String,
        password: String,
        organisation_name: Option<String>,
    },
    Dispatcher {
        name: String,
        email: String,
        password: String,
        organisation_id: Uuid,
    },
}

impl TryFrom<SignupPayload> for SignupRequest {
    type Error = AppError;

    fn try_from(payload: SignupPayload) -> Result<Self, AppError> {
        let name = non_empty(payload.name.as_ref());
        let email = non_empty(payload.email.as_ref());
        let password = payload.password.as_ref().filter(|p| !p.is_empty());
        let role = non_empty(payload.role.as_ref());

        let (Some(name), Some(email), Some(password), Some(role)) =
            (name, email, password.cloned(), role)
        else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: name, email, password, role".to_string(),
            ));
        };

        payload.validate()?;

        let role = UserRole::parse(&role)
            .ok_or_else(|| AppError::BadRequest("Rol inválido".to_string()))?;

        let email = email.to_lowercase();

        match role {
            UserRole::Manager => Ok(SignupRequest::Manager {
                name,
                email,
                password,
                organisation_name: non_empty(payload.organisation_name.as_ref()),
            }),
            UserRole::Dispatcher => {
                let organisation_id = payload.organisation_id.ok_or_else(|| {
                    AppError::BadRequest(
                        "organisationId es requerido para dispatchers".to_string(),
                    )
                })?;
                Ok(SignupRequest::Dispatcher {
                    name,
                    email,
                    password,
                    organisation_id,
                })
            }
        }
    }
}

// Usuario sin hash de contraseña
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    pub user: UserResponse,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Usuario autenticado con su contexto de tenancy resuelto
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub access_code: Option<String>,
    pub organisation_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    pub message: String,
    // En producción el código viaja por email; se devuelve aquí para
    // mantener el contrato del cliente actual.
    pub reset_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetCodeRequest {
    pub email: Option<String>,
    pub reset_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResetCodeResponse {
    pub message: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
    pub reset_token: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(role: &str) -> SignupPayload {
        SignupPayload {
            name: Some("Alice".to_string()),
            email: Some("alice@x.com".to_string()),
            password: Some("pw12345".to_string()),
            role: Some(role.to_string()),
            organisation_name: Some("Acme".to_string()),
            organisation_id: None,
        }
    }

    #[test]
    fn test_signup_payload_resolves_manager() {
        let request = SignupRequest::try_from(payload("manager")).unwrap();
        match request {
            SignupRequest::Manager {
                name,
                email,
                organisation_name,
                ..
            } => {
                assert_eq!(name, "Alice");
                assert_eq!(email, "alice@x.com");
                assert_eq!(organisation_name.as_deref(), Some("Acme"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_signup_role_is_case_insensitive() {
        assert!(SignupRequest::try_from(payload("Manager")).is_ok());
        assert!(SignupRequest::try_from(payload("MANAGER")).is_ok());
    }

    #[test]
    fn test_signup_rejects_unknown_role() {
        let err = SignupRequest::try_from(payload("admin")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_signup_rejects_missing_fields() {
        let mut incomplete = payload("manager");
        incomplete.email = None;
        assert!(SignupRequest::try_from(incomplete).is_err());

        let mut blank = payload("manager");
        blank.name = Some("   ".to_string());
        assert!(SignupRequest::try_from(blank).is_err());
    }

    #[test]
    fn test_dispatcher_requires_organisation_id() {
        let mut dispatcher = payload("dispatcher");
        dispatcher.organisation_id = None;
        assert!(SignupRequest::try_from(dispatcher).is_err());

        let mut with_org = payload("dispatcher");
        let org_id = Uuid::new_v4();
        with_org.organisation_id = Some(org_id);
        match SignupRequest::try_from(with_org).unwrap() {
            SignupRequest::Dispatcher {
                organisation_id, ..
            } => assert_eq!(organisation_id, org_id),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_signup_lowercases_email() {
        let mut mixed = payload("manager");
        mixed.email = Some("Alice@X.com".to_string());
        match SignupRequest::try_from(mixed).unwrap() {
            SignupRequest::Manager { email, .. } => assert_eq!(email, "alice@x.com"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
