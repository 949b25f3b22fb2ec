use serde::{Deserialize, Serialize};
use slotkeeper_domain::{Person, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDTO {
    pub id: ID,
    pub display_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_provider: bool,
}

impl PersonDTO {
    pub fn new(person: Person) -> Self {
        Self {
            id: person.id,
            display_name: person.display_name,
            phone: person.phone,
            email: person.email,
            is_provider: person.is_provider,
        }
    }
}
