//! Middleware de autenticación JWT
//!
//! Este módulo maneja la verificación del bearer token y la inyección
//! del contexto de tenancy en las requests autenticadas.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::user::UserRole,
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, JwtConfig},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
    pub access_code: Option<String>,
    pub organisation_id: Option<Uuid>,
}

impl AuthenticatedUser {
    /// El id canónico del tenant, o 403 si el token no lo trae.
    /// Ninguna consulta de recursos se ejecuta sin este filtro.
    pub fn require_organisation(&self) -> Result<Uuid, AppError> {
        self.organisation_id
            .ok_or_else(|| AppError::Forbidden("Sin contexto de organización".to_string()))
    }
}

/// Middleware de autenticación JWT
///
/// Solo verifica firma y expiración; no toca la base de datos.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;
    let role = UserRole::parse(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Token inválido".to_string()))?;
    let organisation_id = match claims.organisation_id {
        Some(raw) => Some(
            Uuid::parse_str(&raw)
                .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?,
        ),
        None => None,
    };

    let authenticated_user = AuthenticatedUser {
        user_id,
        role,
        access_code: claims.access_code,
        organisation_id,
    };

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Middleware de autorización por roles de flota
pub async fn require_fleet_role(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("No autenticado".to_string()))?;

    if !matches!(user.role, UserRole::Manager | UserRole::Dispatcher) {
        return Err(AppError::Forbidden("Permisos insuficientes".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_organisation() {
        let org_id = Uuid::new_v4();
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Dispatcher,
            access_code: Some("123456".to_string()),
            organisation_id: Some(org_id),
        };
        assert_eq!(user.require_organisation().unwrap(), org_id);

        let without_org = AuthenticatedUser {
            organisation_id: None,
            ..user
        };
        assert!(matches!(
            without_org.require_organisation(),
            Err(AppError::Forbidden(_))
        ));
    }
}
