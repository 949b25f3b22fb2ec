mod inmemory;
mod postgres;

pub use inmemory::InMemoryPersonRepo;
pub use postgres::PostgresPersonRepo;
use slotkeeper_domain::{Person, ID};

/// The contact directory
#[async_trait::async_trait]
pub trait IPersonRepo: Send + Sync {
    async fn insert(&self, person: &Person) -> anyhow::Result<()>;
    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>>;
    async fn find_providers(&self) -> anyhow::Result<Vec<Person>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inmemory_person_queries() {
        let repo = InMemoryPersonRepo::new();
        let mut provider = Person::new("Grace".into());
        provider.is_provider = true;
        provider.phone = Some("593991234567".into());
        let requester = Person::new("Ada".into());

        repo.insert(&provider).await.unwrap();
        repo.insert(&requester).await.unwrap();

        assert_eq!(repo.find(&requester.id).await.unwrap(), Some(requester));
        assert_eq!(repo.find(&ID::new()).await.unwrap(), None);
        assert_eq!(repo.find_providers().await.unwrap(), vec![provider]);
    }
}
