//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar
//! los JWT tokens que transportan el contexto de tenancy.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del JWT token
///
/// `organisation_id` es el id canónico del tenant (la fila de organización
/// del manager); `access_code` es el código compartido entre manager y
/// dispatchers. Ambos pueden faltar si el usuario no tiene organización.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub role: String,
    pub access_code: Option<String>,
    pub organisation_id: Option<String>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expires_in,
        }
    }
}

/// Generar JWT token para un usuario
pub fn generate_token(
    user_id: Uuid,
    role: &str,
    access_code: Option<String>,
    organisation_id: Option<Uuid>,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        access_code,
        organisation_id: organisation_id.map(|id| id.to_string()),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Jwt("Token expirado".to_string())
            }
            _ => AppError::Jwt("Token inválido".to_string()),
        })?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization debe comenzar con 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "secreto-de-prueba".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let org_id = Uuid::new_v4();

        let token = generate_token(
            user_id,
            "manager",
            Some("123456".to_string()),
            Some(org_id),
            &config,
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "manager");
        assert_eq!(claims.access_code.as_deref(), Some("123456"));
        assert_eq!(claims.organisation_id, Some(org_id.to_string()));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let config = test_config();
        let token =
            generate_token(Uuid::new_v4(), "dispatcher", None, None, &config).unwrap();

        let other = JwtConfig {
            secret: "otro-secreto".to_string(),
            expiration: 3600,
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let now = chrono::Utc::now();

        // exp más allá del leeway por defecto de la validación
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            role: "manager".to_string(),
            access_code: None,
            organisation_id: None,
            exp: (now.timestamp() - 600) as usize,
            iat: (now.timestamp() - 1200) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_ref()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        match err {
            AppError::Jwt(msg) => assert_eq!(msg, "Token expirado"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc").unwrap(), "abc");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }

    #[test]
    fn test_claims_without_organisation() {
        let config = test_config();
        let token =
            generate_token(Uuid::new_v4(), "dispatcher", None, None, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert!(claims.access_code.is_none());
        assert!(claims.organisation_id.is_none());
    }
}
