use super::IPersonRepo;
use crate::repos::shared::inmemory_repo::*;
use slotkeeper_domain::{Person, ID};

pub struct InMemoryPersonRepo {
    persons: std::sync::Mutex<Vec<Person>>,
}

impl InMemoryPersonRepo {
    pub fn new() -> Self {
        Self {
            persons: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IPersonRepo for InMemoryPersonRepo {
    async fn insert(&self, person: &Person) -> anyhow::Result<()> {
        insert(person, &self.persons);
        Ok(())
    }

    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>> {
        Ok(find(person_id, &self.persons))
    }

    async fn find_providers(&self) -> anyhow::Result<Vec<Person>> {
        Ok(find_by(&self.persons, |p| p.is_provider))
    }
}
