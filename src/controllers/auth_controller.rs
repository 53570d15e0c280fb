use bcrypt::{hash, verify, DEFAULT_COST};
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{
    ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse, LoginUser,
    MessageResponse, ResetPasswordRequest, SignupPayload, SignupRequest, SignupResponse,
    UserResponse, VerifyResetCodeRequest, VerifyResetCodeResponse,
};
use crate::models::user::{User, UserRole};
use crate::repositories::organisation_repository::OrganisationRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::non_empty;

/// Minutos de vigencia de un código de restablecimiento
const RESET_TOKEN_MINUTES: i64 = 15;

const DEFAULT_ORGANISATION_NAME: &str = "My Organisation";

fn random_six_digit_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Solo el hash del código toca la base de datos
fn hash_reset_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

pub struct AuthController {
    pool: PgPool,
    users: UserRepository,
    organisations: OrganisationRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            organisations: OrganisationRepository::new(pool.clone()),
            jwt: JwtConfig::from(config),
            pool,
        }
    }

    /// Registro de cuenta. Usuario y fila de organización se crean en una
    /// sola transacción: o se insertan ambos o ninguno.
    pub async fn signup(&self, payload: SignupPayload) -> Result<SignupResponse, AppError> {
        let request = SignupRequest::try_from(payload)?;

        let mut tx = self.pool.begin().await?;

        let response = match request {
            SignupRequest::Manager {
                name,
                email,
                password,
                organisation_name,
            } => {
                let user = self
                    .create_user(&mut tx, &name, &email, &password, UserRole::Manager)
                    .await?;
                self.register_manager(&mut tx, &user, organisation_name).await?
            }
            SignupRequest::Dispatcher {
                name,
                email,
                password,
                organisation_id,
            } => {
                let user = self
                    .create_user(&mut tx, &name, &email, &password, UserRole::Dispatcher)
                    .await?;
                self.register_dispatcher(&mut tx, &user, organisation_id).await?
            }
        };

        tx.commit().await?;

        Ok(response)
    }

    /// Paso de creación de cuenta compartido por ambos roles
    async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let password_hash = hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        self.users
            .insert_tx(tx, name.trim(), email, &password_hash, role.as_str())
            .await
    }

    async fn register_manager(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &User,
        organisation_name: Option<String>,
    ) -> Result<SignupResponse, AppError> {
        let name = organisation_name.unwrap_or_else(|| DEFAULT_ORGANISATION_NAME.to_string());

        // Reintentar hasta obtener un código libre
        let access_code = loop {
            let candidate = random_six_digit_code();
            if !self.organisations.access_code_exists_tx(tx, &candidate).await? {
                break candidate;
            }
        };

        self.organisations
            .insert_tx(tx, &name, &access_code, user.id, &user.role)
            .await?;

        Ok(SignupResponse {
            message: "Manager registrado exitosamente".to_string(),
            access_code: Some(access_code),
            user: UserResponse::from(user),
        })
    }

    /// Un dispatcher se une copiando nombre y código de la organización
    /// del manager que referencia
    async fn register_dispatcher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &User,
        organisation_id: Uuid,
    ) -> Result<SignupResponse, AppError> {
        let manager_org = self
            .organisations
            .find_manager_by_id_tx(tx, organisation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organización no encontrada".to_string()))?;

        self.organisations
            .insert_tx(tx, &manager_org.name, &manager_org.access_code, user.id, &user.role)
            .await?;

        Ok(SignupResponse {
            message: "Dispatcher registrado exitosamente".to_string(),
            access_code: None,
            user: UserResponse::from(user),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let email = non_empty(request.email.as_ref());
        let password = request.password.filter(|p| !p.is_empty());

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::BadRequest(
                "Email y contraseña son requeridos".to_string(),
            ));
        };

        // Misma respuesta para cuenta inexistente y contraseña incorrecta
        let user = self
            .users
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let own_org = self.organisations.find_by_user(user.id).await?;
        let access_code = own_org.as_ref().map(|org| org.access_code.clone());

        // Resolver el organisation_id canónico (la fila del manager) para
        // que todos los usuarios que comparten código vean los mismos datos
        let mut organisation_id = own_org.as_ref().map(|org| org.id);
        if let Some(code) = &access_code {
            if let Some(manager_org) =
                self.organisations.find_manager_by_access_code(code).await?
            {
                organisation_id = Some(manager_org.id);
            }
        }

        let token = generate_token(
            user.id,
            &user.role,
            access_code.clone(),
            organisation_id,
            &self.jwt,
        )?;

        Ok(LoginResponse {
            token,
            user: LoginUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
                access_code,
                organisation_id,
            },
        })
    }

    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, AppError> {
        let Some(email) = non_empty(request.email.as_ref()) else {
            return Err(AppError::BadRequest("El email es requerido".to_string()));
        };

        let user = self
            .users
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No existe una cuenta con este email".to_string())
            })?;

        let reset_token = random_six_digit_code();
        let expiry = chrono::Utc::now() + chrono::Duration::minutes(RESET_TOKEN_MINUTES);

        self.users
            .set_reset_token(&user.email, &hash_reset_token(&reset_token), expiry)
            .await?;

        // En producción el código viaja por email
        tracing::info!("🔑 Código de restablecimiento generado para {}", user.email);

        Ok(ForgotPasswordResponse {
            message: "Código de restablecimiento enviado a tu email".to_string(),
            reset_token,
        })
    }

    pub async fn verify_reset_code(
        &self,
        request: VerifyResetCodeRequest,
    ) -> Result<VerifyResetCodeResponse, AppError> {
        let email = non_empty(request.email.as_ref());
        let reset_token = non_empty(request.reset_token.as_ref());

        let (Some(email), Some(reset_token)) = (email, reset_token) else {
            return Err(AppError::BadRequest(
                "Email y código de restablecimiento son requeridos".to_string(),
            ));
        };

        let user = self
            .users
            .find_by_reset_token(&email.to_lowercase(), &hash_reset_token(&reset_token))
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Código de restablecimiento inválido o expirado".to_string(),
                )
            })?;

        Ok(VerifyResetCodeResponse {
            message: "Código verificado correctamente".to_string(),
            email: user.email,
        })
    }

    /// El código se consume en la misma sentencia que actualiza la
    /// contraseña: hash y expiración se limpian juntos.
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let email = non_empty(request.email.as_ref());
        let reset_token = non_empty(request.reset_token.as_ref());
        let new_password = request.new_password.filter(|p| !p.is_empty());
        let confirm_password = request.confirm_password.filter(|p| !p.is_empty());

        let (Some(email), Some(reset_token), Some(new_password), Some(confirm_password)) =
            (email, reset_token, new_password, confirm_password)
        else {
            return Err(AppError::BadRequest(
                "Todos los campos son requeridos".to_string(),
            ));
        };

        if new_password != confirm_password {
            return Err(AppError::BadRequest(
                "Las contraseñas no coinciden".to_string(),
            ));
        }

        if new_password.len() < 8 {
            return Err(AppError::BadRequest(
                "La contraseña debe tener al menos 8 caracteres".to_string(),
            ));
        }

        let password_hash = hash(&new_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let updated = self
            .users
            .reset_password(
                &email.to_lowercase(),
                &hash_reset_token(&reset_token),
                &password_hash,
            )
            .await?;

        if !updated {
            return Err(AppError::BadRequest(
                "Código de restablecimiento inválido o expirado".to_string(),
            ));
        }

        Ok(MessageResponse {
            message: "Contraseña restablecida. Inicia sesión con tu nueva contraseña."
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_is_six_digits() {
        for _ in 0..100 {
            let code = random_six_digit_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.chars().next(), Some('0'));
        }
    }

    #[test]
    fn test_reset_token_is_hashed_at_rest() {
        let token = "123456";
        let hashed = hash_reset_token(token);
        assert_ne!(hashed, token);
        assert_eq!(hashed.len(), 64);
        // Determinista: la verificación recalcula el mismo hash
        assert_eq!(hashed, hash_reset_token(token));
        assert_ne!(hashed, hash_reset_token("654321"));
    }
}
