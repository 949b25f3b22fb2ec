use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::get_providers::APIResponse;
use slotkeeper_domain::Person;
use slotkeeper_infra::SlotkeeperContext;

pub async fn get_providers_controller(
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    execute(GetProvidersUseCase {}, &ctx)
        .await
        .map(|providers| HttpResponse::Ok().json(APIResponse::new(providers)))
        .map_err(|e| match e {
            UseCaseError::StorageError => SlotkeeperError::InternalError,
        })
}

/// Served from the providers cache
#[derive(Debug)]
pub struct GetProvidersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProvidersUseCase {
    type Response = Vec<Person>;

    type Errors = UseCaseError;

    const NAME: &'static str = "GetProviders";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        ctx.providers_cache
            .get()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
