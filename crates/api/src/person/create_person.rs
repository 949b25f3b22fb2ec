use crate::error::SlotkeeperError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use slotkeeper_api_structs::create_person::{APIResponse, RequestBody};
use slotkeeper_domain::{Channel, Person};
use slotkeeper_infra::SlotkeeperContext;

pub async fn create_person_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SlotkeeperContext>,
) -> Result<HttpResponse, SlotkeeperError> {
    let body = body.into_inner();
    let usecase = CreatePersonUseCase {
        display_name: body.display_name,
        phone: body.phone,
        email: body.email,
        is_provider: body.is_provider,
    };

    execute(usecase, &ctx)
        .await
        .map(|person| HttpResponse::Created().json(APIResponse::new(person)))
        .map_err(|e| match e {
            UseCaseError::EmptyName => {
                SlotkeeperError::BadClientData("The display name cannot be empty".into())
            }
            UseCaseError::InvalidPhone(phone) => {
                SlotkeeperError::BadClientData(format!("Invalid phone number: {}", phone))
            }
            UseCaseError::InvalidEmail(email) => {
                SlotkeeperError::BadClientData(format!("Invalid email: {}", email))
            }
            UseCaseError::StorageError => SlotkeeperError::InternalError,
        })
}

#[derive(Debug)]
pub struct CreatePersonUseCase {
    pub display_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_provider: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    InvalidPhone(String),
    InvalidEmail(String),
    StorageError,
}

fn validate_contact(
    channel: Channel,
    value: &Option<String>,
    invalid: fn(String) -> UseCaseError,
) -> Result<Option<String>, UseCaseError> {
    match value.as_ref().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(v) => match channel.normalize_address(v) {
            Some(_) => Ok(Some(v.to_string())),
            None => Err(invalid(v.to_string())),
        },
        None => Ok(None),
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePersonUseCase {
    type Response = Person;

    type Errors = UseCaseError;

    const NAME: &'static str = "CreatePerson";

    async fn execute(&mut self, ctx: &SlotkeeperContext) -> Result<Self::Response, Self::Errors> {
        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        let mut person = Person::new(display_name.to_string());
        person.phone =
            validate_contact(Channel::WhatsApp, &self.phone, UseCaseError::InvalidPhone)?;
        person.email =
            validate_contact(Channel::Email, &self.email, UseCaseError::InvalidEmail)?;
        person.is_provider = self.is_provider;

        ctx.repos
            .persons
            .insert(&person)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if person.is_provider {
            ctx.providers_cache.invalidate();
        }

        Ok(person)
    }
}
