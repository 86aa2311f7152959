use tonic::{Request, Response, Status};

use crate::auth::TokenAuthenticator;
use crate::grpc::convert::{parse_id, workout_to_proto};
use crate::grpc::validation::{patch_field, require_fields};
use crate::grpc::AppContext;
use crate::models::{CreateWorkout, UpdateWorkout};
use crate::proto::gym::v1 as pb;
use crate::services::WorkoutService;

#[derive(Debug, Clone)]
pub struct WorkoutGrpcService {
    workouts: WorkoutService,
    auth: TokenAuthenticator,
}

impl WorkoutGrpcService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            workouts: WorkoutService::new(ctx.db.clone()),
            auth: ctx.auth.clone(),
        }
    }
}

#[tonic::async_trait]
impl pb::workout_service_server::WorkoutService for WorkoutGrpcService {
    async fn list_workouts(
        &self,
        request: Request<pb::ListWorkoutsRequest>,
    ) -> Result<Response<pb::ListWorkoutsResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;

        let workouts = self.workouts.list().await?;

        Ok(Response::new(pb::ListWorkoutsResponse {
            workouts: workouts.into_iter().map(workout_to_proto).collect(),
        }))
    }

    async fn create_workout(
        &self,
        request: Request<pb::CreateWorkoutRequest>,
    ) -> Result<Response<pb::Workout>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[
            ("name", !req.name.is_empty()),
            ("duration", req.duration > 0),
        ])?;

        let workout = self
            .workouts
            .create(CreateWorkout {
                name: req.name,
                duration: req.duration,
                description: req.description,
                color: req.color,
            })
            .await?;

        Ok(Response::new(workout_to_proto(workout)))
    }

    async fn get_workout(
        &self,
        request: Request<pb::GetWorkoutRequest>,
    ) -> Result<Response<pb::Workout>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let workout = self.workouts.get(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(workout_to_proto(workout)))
    }

    async fn update_workout(
        &self,
        request: Request<pb::UpdateWorkoutRequest>,
    ) -> Result<Response<pb::Workout>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let patch = UpdateWorkout {
            name: patch_field(req.name),
            // Zero means "unchanged" for the numeric field.
            duration: (req.duration != 0).then_some(req.duration),
            description: patch_field(req.description),
            color: patch_field(req.color),
        };
        let workout = self.workouts.update(parse_id(&req.id, "id")?, patch).await?;

        Ok(Response::new(workout_to_proto(workout)))
    }

    async fn delete_workout(
        &self,
        request: Request<pb::DeleteWorkoutRequest>,
    ) -> Result<Response<pb::DeleteWorkoutResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        self.workouts.delete(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(pb::DeleteWorkoutResponse { ok: true }))
    }
}
