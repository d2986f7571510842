use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;

use fleet_visibility::config::database::DatabaseConfig;
use fleet_visibility::config::environment::EnvironmentConfig;
use fleet_visibility::middleware::{cors_middleware, cors_middleware_with_origins};
use fleet_visibility::repositories::directory_repository::load_directory;
use fleet_visibility::repositories::schedule_repository::ScheduleRepository;
use fleet_visibility::routes::create_app_router;
use fleet_visibility::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚐 Fleet Visibility - Vehicle Dashboard & Pick-up Lorry Whereabout");
    info!("==================================================================");
    info!("🕒 Timezone: {}", config.timezone.name());
    info!("🧭 Fallback policy: {:?}", config.fallback_policy);

    // Inicializar base de datos
    let pool = match DatabaseConfig::new(&config.database_url).create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Asegurar el schema y sembrar la tabla si está vacía
    let repository = ScheduleRepository::new(pool.clone());
    repository
        .ensure_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Error preparando pickup_schedule: {}", e))?;

    if repository
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Error leyendo pickup_schedule: {}", e))?
        == 0
    {
        let seed_path = Path::new(&config.schedule_seed_csv);
        if seed_path.exists() {
            let inserted = repository
                .seed_from_csv(seed_path)
                .await
                .map_err(|e| anyhow::anyhow!("Error sembrando pickup_schedule: {}", e))?;
            info!("📅 pickup_schedule sembrada: {} slots", inserted);
        } else {
            info!("📅 pickup_schedule vacía y sin seed ({})", config.schedule_seed_csv);
        }
    }

    // Cargar el directorio una vez al arranque; fuente estática por proceso
    let directory = load_directory(Path::new(&config.directory_csv))
        .map_err(|e| anyhow::anyhow!("Error cargando el directorio: {}", e))?;
    info!("🚚 Directorio cargado: {} vehículos", directory.len());

    // Crear router de la aplicación
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let host = config.host.clone();
    let port = config.port;
    let state = AppState::new(pool, config, directory);
    let app = create_app_router().layer(cors).with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Dashboard");
    info!("   GET  /health - Health check");
    info!("📋 Directorio:");
    info!("   GET  /api/directory - Listado filtrado");
    info!("   GET  /api/directory/facets - Opciones de filtro");
    info!("   GET  /api/directory/stats - KPIs");
    info!("   GET  /api/directory/:vehicle_id - Detalle");
    info!("📍 Whereabout:");
    info!("   GET  /api/whereabout/now - Hora local actual");
    info!("   GET  /api/whereabout/form/:vehicle_id - Slot editable");
    info!("   POST /api/whereabout/update - Actualizar whereabout");
    info!("   GET  /api/whereabout/available-now - Disponibles ahora");
    info!("   GET  /api/whereabout/schedule - Schedule del día");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

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
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
