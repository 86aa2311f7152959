use tonic::{Request, Response, Status};

use crate::auth::password::verify_password;
use crate::auth::TokenAuthenticator;
use crate::error::ServiceError;
use crate::grpc::convert::trainee_to_profile;
use crate::grpc::validation::require_fields;
use crate::grpc::AppContext;
use crate::proto::gym::v1 as pb;
use crate::services::TraineeService;

/// Session lifecycle. Sessions are pure tokens; logout only touches the
/// revocation list.
#[derive(Debug, Clone)]
pub struct SessionGrpcService {
    trainees: TraineeService,
    auth: TokenAuthenticator,
}

impl SessionGrpcService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            trainees: TraineeService::new(ctx.db.clone()),
            auth: ctx.auth.clone(),
        }
    }
}

#[tonic::async_trait]
impl pb::session_service_server::SessionService for SessionGrpcService {
    async fn create_session(
        &self,
        request: Request<pb::CreateSessionRequest>,
    ) -> Result<Response<pb::CreateSessionResponse>, Status> {
        let req = request.into_inner();
        require_fields(&[
            ("email", !req.email.is_empty()),
            ("password", !req.password.is_empty()),
        ])?;

        // An unknown email and a wrong password are indistinguishable to the
        // caller.
        let trainee = self
            .trainees
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(&req.password, &trainee.password_hash)? {
            return Err(ServiceError::InvalidCredentials.into());
        }

        let token = self.auth.issue(trainee.id, &trainee.email)?;

        Ok(Response::new(pb::CreateSessionResponse {
            token,
            trainee: Some(trainee_to_profile(trainee)),
        }))
    }

    async fn delete_session(
        &self,
        request: Request<pb::DeleteSessionRequest>,
    ) -> Result<Response<pb::DeleteSessionResponse>, Status> {
        let req = request.into_inner();
        require_fields(&[("token", !req.token.is_empty())])?;

        self.auth.revoke(&req.token);

        Ok(Response::new(pb::DeleteSessionResponse { ok: true }))
    }

    async fn check_session(
        &self,
        request: Request<pb::CheckSessionRequest>,
    ) -> Result<Response<pb::CheckSessionResponse>, Status> {
        let req = request.into_inner();
        let session = self.auth.authenticate(&req.token)?;

        let trainee = self.trainees.get(session.trainee_id).await?;

        Ok(Response::new(pb::CheckSessionResponse {
            authenticated: true,
            trainee: Some(trainee_to_profile(trainee)),
        }))
    }
}
