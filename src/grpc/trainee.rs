use tonic::{Request, Response, Status};

use crate::auth::TokenAuthenticator;
use crate::grpc::convert::{parse_id, trainee_to_profile};
use crate::grpc::validation::{page_window, patch_field, require_fields};
use crate::grpc::AppContext;
use crate::models::{CreateTrainee, UpdateTrainee};
use crate::proto::gym::v1 as pb;
use crate::services::TraineeService;

#[derive(Debug, Clone)]
pub struct TraineeGrpcService {
    trainees: TraineeService,
    auth: TokenAuthenticator,
}

impl TraineeGrpcService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            trainees: TraineeService::new(ctx.db.clone()),
            auth: ctx.auth.clone(),
        }
    }
}

#[tonic::async_trait]
impl pb::trainee_service_server::TraineeService for TraineeGrpcService {
    async fn list_trainees(
        &self,
        request: Request<pb::ListTraineesRequest>,
    ) -> Result<Response<pb::ListTraineesResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;

        let (limit, offset) = page_window(req.page, req.page_size);
        let (trainees, total) = self.trainees.list(limit, offset).await?;

        Ok(Response::new(pb::ListTraineesResponse {
            trainees: trainees.into_iter().map(trainee_to_profile).collect(),
            total,
        }))
    }

    async fn create_trainee(
        &self,
        request: Request<pb::CreateTraineeRequest>,
    ) -> Result<Response<pb::TraineeProfile>, Status> {
        let req = request.into_inner();
        // Registration is open; no token here.
        require_fields(&[
            ("name", !req.name.is_empty()),
            ("email", !req.email.is_empty()),
            ("password", !req.password.is_empty()),
        ])?;

        let trainee = self
            .trainees
            .create(CreateTrainee {
                name: req.name,
                email: req.email,
                password: req.password,
                timezone: patch_field(req.timezone),
            })
            .await?;

        Ok(Response::new(trainee_to_profile(trainee)))
    }

    async fn get_trainee(
        &self,
        request: Request<pb::GetTraineeRequest>,
    ) -> Result<Response<pb::TraineeProfile>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let trainee = self.trainees.get(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(trainee_to_profile(trainee)))
    }

    async fn update_trainee(
        &self,
        request: Request<pb::UpdateTraineeRequest>,
    ) -> Result<Response<pb::TraineeProfile>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let patch = UpdateTrainee {
            name: patch_field(req.name),
            email: patch_field(req.email),
            timezone: patch_field(req.timezone),
        };
        let trainee = self.trainees.update(parse_id(&req.id, "id")?, patch).await?;

        Ok(Response::new(trainee_to_profile(trainee)))
    }

    async fn delete_trainee(
        &self,
        request: Request<pb::DeleteTraineeRequest>,
    ) -> Result<Response<pb::DeleteTraineeResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        self.trainees.delete(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(pb::DeleteTraineeResponse { ok: true }))
    }
}
