use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleetflow_backend::config::environment::EnvironmentConfig;
use fleetflow_backend::database;
use fleetflow_backend::routes;
use fleetflow_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 FleetFlow API - Gestión de Flotas");
    info!("====================================");

    // La configuración aborta el arranque si falta JWT_SECRET
    let config = EnvironmentConfig::default();

    // Inicializar base de datos; aborta si falta DATABASE_URL
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(e);
    }
    info!("✅ Base de datos conectada y migraciones al día");

    // Crear router de la API
    let port = config.port;
    let state = AppState::new(pool, config);
    let app = routes::create_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /ping - Health check");
    info!("🔐 Auth:");
    info!("   POST /auth/signup - Registrar manager o dispatcher");
    info!("   POST /auth/login - Login");
    info!("   POST /auth/forgot-password - Solicitar código de restablecimiento");
    info!("   POST /auth/verify-reset-code - Verificar código");
    info!("   POST /auth/reset-password - Restablecer contraseña");
    info!("🚚 Vehículos:");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   POST /vehicles - Crear vehículo");
    info!("   PATCH /vehicles/:id/status - Cambiar estado");
    info!("👤 Conductores:");
    info!("   GET  /drivers - Listar conductores");
    info!("   POST /drivers - Dar de alta conductor");
    info!("   PATCH /drivers/:id/status - Cambiar estado");
    info!("🗺  Viajes:");
    info!("   GET  /trips - Listar viajes");
    info!("   POST /trips - Crear viaje (nace en Draft)");
    info!("   PATCH /trips/:id/status - Cambiar estado");
    info!("🔧 Mantenimiento:");
    info!("   GET  /maintenance - Listar registros");
    info!("   POST /maintenance - Abrir registro (vehículo a In Shop)");
    info!("   PATCH /maintenance/:id/status - Cambiar estado");
    info!("💶 Gastos:");
    info!("   GET  /expenses - Listar gastos");
    info!("   POST /expenses - Registrar gasto");
    info!("   DELETE /expenses/:id - Eliminar gasto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
