use tonic::{Request, Response, Status};

use crate::auth::TokenAuthenticator;
use crate::error::ServiceError;
use crate::grpc::convert::{parse_id, registration_to_proto, timestamp_to_datetime};
use crate::grpc::validation::{patch_field, require_fields};
use crate::grpc::AppContext;
use crate::models::{CreateRegistration, UpdateRegistration};
use crate::proto::gym::v1 as pb;
use crate::services::RegistrationService;

#[derive(Debug, Clone)]
pub struct RegistrationGrpcService {
    registrations: RegistrationService,
    auth: TokenAuthenticator,
}

impl RegistrationGrpcService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            registrations: RegistrationService::new(ctx.db.clone()),
            auth: ctx.auth.clone(),
        }
    }
}

#[tonic::async_trait]
impl pb::registration_service_server::RegistrationService for RegistrationGrpcService {
    async fn list_registrations(
        &self,
        request: Request<pb::ListRegistrationsRequest>,
    ) -> Result<Response<pb::ListRegistrationsResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;

        let registrations = self.registrations.list().await?;

        Ok(Response::new(pb::ListRegistrationsResponse {
            registrations: registrations
                .into_iter()
                .map(registration_to_proto)
                .collect(),
        }))
    }

    async fn create_registration(
        &self,
        request: Request<pb::CreateRegistrationRequest>,
    ) -> Result<Response<pb::Registration>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[
            ("event_id", !req.event_id.is_empty()),
            ("trainee_id", !req.trainee_id.is_empty()),
            ("invitee_email", !req.invitee_email.is_empty()),
            ("start_time", req.start_time.is_some()),
        ])?;

        let start_time = req
            .start_time
            .as_ref()
            .map(timestamp_to_datetime)
            .transpose()?
            .ok_or_else(|| ServiceError::MissingRequiredField("start_time".into()))?;
        let end_time = req
            .end_time
            .as_ref()
            .map(timestamp_to_datetime)
            .transpose()?;

        let registration = self
            .registrations
            .create(CreateRegistration {
                event_id: req.event_id,
                trainee_id: parse_id(&req.trainee_id, "trainee_id")?,
                invitee_email: req.invitee_email,
                start_time,
                end_time,
                status: patch_field(req.status),
            })
            .await?;

        Ok(Response::new(registration_to_proto(registration)))
    }

    async fn get_registration(
        &self,
        request: Request<pb::GetRegistrationRequest>,
    ) -> Result<Response<pb::Registration>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let registration = self.registrations.get(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(registration_to_proto(registration)))
    }

    async fn update_registration(
        &self,
        request: Request<pb::UpdateRegistrationRequest>,
    ) -> Result<Response<pb::Registration>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        let patch = UpdateRegistration {
            event_id: patch_field(req.event_id),
            invitee_email: patch_field(req.invitee_email),
            start_time: req
                .start_time
                .as_ref()
                .map(timestamp_to_datetime)
                .transpose()?,
            end_time: req
                .end_time
                .as_ref()
                .map(timestamp_to_datetime)
                .transpose()?,
            status: patch_field(req.status),
        };
        let registration = self
            .registrations
            .update(parse_id(&req.id, "id")?, patch)
            .await?;

        Ok(Response::new(registration_to_proto(registration)))
    }

    async fn delete_registration(
        &self,
        request: Request<pb::DeleteRegistrationRequest>,
    ) -> Result<Response<pb::DeleteRegistrationResponse>, Status> {
        let req = request.into_inner();
        self.auth.authenticate(&req.token)?;
        require_fields(&[("id", !req.id.is_empty())])?;

        self.registrations.delete(parse_id(&req.id, "id")?).await?;

        Ok(Response::new(pb::DeleteRegistrationResponse { ok: true }))
    }
}
