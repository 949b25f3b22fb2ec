use crate::dtos::PersonDTO;
use serde::{Deserialize, Serialize};
use slotkeeper_domain::Person;

pub mod create_person {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub display_name: String,
        pub phone: Option<String>,
        pub email: Option<String>,
        #[serde(default)]
        pub is_provider: bool,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub person: PersonDTO,
    }

    impl APIResponse {
        pub fn new(person: Person) -> Self {
            Self {
                person: PersonDTO::new(person),
            }
        }
    }
}

pub mod get_providers {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub providers: Vec<PersonDTO>,
    }

    impl APIResponse {
        pub fn new(providers: Vec<Person>) -> Self {
            Self {
                providers: providers.into_iter().map(PersonDTO::new).collect(),
            }
        }
    }
}
