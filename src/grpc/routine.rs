use tonic::{Request, Response, Status};

use crate::auth::TokenAuthenticator;
use crate::grpc::convert::{parse_id, routine_to_proto, slots_from_proto};
use crate::grpc::validation::require_fields;
use crate::grpc::AppContext;
use crate::proto::gym::v1 as pb;
use crate::services::RoutineService;

/// Routines are addressed by owning trainee. With duplicate rows the oldest
/// one wins for update and delete.
#[derive(Debug, Clone)]
pub struct RoutineGrpcService {
    routines: RoutineService,
    auth: TokenAuthenticator,
}

impl RoutineGrpcService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            routines: RoutineService::new(ctx.db.clone()),
            auth: ctx.auth.clone(),
        }
    }
}

#[tonic::async_trait]
impl pb::routine_service_server::RoutineService for RoutineGrpcService {
    async fn list_routines(
        &self,
        request: Request<pb::ListRoutinesRequest>,
    ) -> Result<Response<pb::ListRoutinesResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;

        let filter = if req.trainee_id.is_empty() {
            None
        } else {
            Some(parse_id(&req.trainee_id, "trainee_id")?)
        };
        let routines = self.routines.list(filter).await?;

        Ok(Response::new(pb::ListRoutinesResponse {
            routines: routines.into_iter().map(routine_to_proto).collect(),
        }))
    }

    async fn create_routine(
        &self,
        request: Request<pb::CreateRoutineRequest>,
    ) -> Result<Response<pb::Routine>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[
            ("trainee_id", !req.trainee_id.is_empty()),
            ("availability", !req.availability.is_empty()),
        ])?;

        let routine = self
            .routines
            .create(
                parse_id(&req.trainee_id, "trainee_id")?,
                slots_from_proto(req.availability),
            )
            .await?;

        Ok(Response::new(routine_to_proto(routine)))
    }

    async fn get_routine_by_trainee(
        &self,
        request: Request<pb::GetRoutineByTraineeRequest>,
    ) -> Result<Response<pb::Routine>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("trainee_id", !req.trainee_id.is_empty())])?;

        let routine = self
            .routines
            .get_by_trainee(parse_id(&req.trainee_id, "trainee_id")?)
            .await?;

        Ok(Response::new(routine_to_proto(routine)))
    }

    async fn update_routine_by_trainee(
        &self,
        request: Request<pb::UpdateRoutineByTraineeRequest>,
    ) -> Result<Response<pb::Routine>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[
            ("trainee_id", !req.trainee_id.is_empty()),
            ("availability", !req.availability.is_empty()),
        ])?;

        let routine = self
            .routines
            .update_by_trainee(
                parse_id(&req.trainee_id, "trainee_id")?,
                slots_from_proto(req.availability),
            )
            .await?;

        Ok(Response::new(routine_to_proto(routine)))
    }

    async fn delete_routine_by_trainee(
        &self,
        request: Request<pb::DeleteRoutineByTraineeRequest>,
    ) -> Result<Response<pb::DeleteRoutineResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("trainee_id", !req.trainee_id.is_empty())])?;

        self.routines
            .delete_by_trainee(parse_id(&req.trainee_id, "trainee_id")?)
            .await?;

        Ok(Response::new(pb::DeleteRoutineResponse { ok: true }))
    }
}
