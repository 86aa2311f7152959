//! gRPC service implementations.
//!
//! Every handler follows the same shape: authenticate the bearer token
//! carried in the request, validate required fields, perform one storage
//! operation, map the row through `convert`, respond. All failures are
//! translated to a `tonic::Status` at this boundary.

pub mod convert;
pub mod validation;

mod registration;
mod routine;
mod session;
mod trainee;
mod workout;

pub use registration::RegistrationGrpcService;
pub use routine::RoutineGrpcService;
pub use session::SessionGrpcService;
pub use trainee::TraineeGrpcService;
pub use workout::WorkoutGrpcService;

use std::net::SocketAddr;

use sqlx::PgPool;
use tonic::transport::Server;
use tracing::info;

use crate::auth::TokenAuthenticator;
use crate::proto::gym::v1::registration_service_server::RegistrationServiceServer;
use crate::proto::gym::v1::routine_service_server::RoutineServiceServer;
use crate::proto::gym::v1::session_service_server::SessionServiceServer;
use crate::proto::gym::v1::trainee_service_server::TraineeServiceServer;
use crate::proto::gym::v1::workout_service_server::WorkoutServiceServer;

/// Process-wide dependencies, passed explicitly to every service: the shared
/// connection pool and the token gate (signing key + revocation list).
#[derive(Debug, Clone)]
pub struct AppContext {
    pub db: PgPool,
    pub auth: TokenAuthenticator,
}

impl AppContext {
    pub fn new(db: PgPool, jwt_secret: &str) -> Self {
        Self {
            db,
            auth: TokenAuthenticator::new(jwt_secret),
        }
    }
}

/// Serve all five services on one listener until ctrl-c.
pub async fn serve(ctx: AppContext, addr: SocketAddr) -> anyhow::Result<()> {
    Server::builder()
        .add_service(SessionServiceServer::new(SessionGrpcService::new(&ctx)))
        .add_service(TraineeServiceServer::new(TraineeGrpcService::new(&ctx)))
        .add_service(WorkoutServiceServer::new(WorkoutGrpcService::new(&ctx)))
        .add_service(RoutineServiceServer::new(RoutineGrpcService::new(&ctx)))
        .add_service(RegistrationServiceServer::new(RegistrationGrpcService::new(
            &ctx,
        )))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
