use crate::repos::IPersonRepo;
use crate::system::ISys;
use slotkeeper_domain::Person;
use std::sync::{Arc, Mutex};
use tracing::info;

struct CachedProviders {
    providers: Vec<Person>,
    fetched_at: i64,
}

#[derive(Default)]
struct CacheState {
    cached: Option<CachedProviders>,
    /// Bumped by every `invalidate`. A read that started under an older
    /// generation is not stored.
    generation: u64,
}

/// Holds the list of providers in memory for `ttl_millis` before reading
/// it from the contact directory again. `invalidate` forces the next `get`
/// to read through.
pub struct ProvidersCache {
    persons: Arc<dyn IPersonRepo>,
    sys: Arc<dyn ISys>,
    ttl_millis: i64,
    state: Mutex<CacheState>,
}

impl ProvidersCache {
    pub fn new(persons: Arc<dyn IPersonRepo>, sys: Arc<dyn ISys>, ttl_millis: i64) -> Self {
        Self {
            persons,
            sys,
            ttl_millis,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub async fn get(&self) -> anyhow::Result<Vec<Person>> {
        let now = self.sys.get_timestamp_millis();
        let generation = {
            let state = self.state.lock().unwrap();
            if let Some(cached) = state.cached.as_ref() {
                if now - cached.fetched_at < self.ttl_millis {
                    return Ok(cached.providers.clone());
                }
            }
            state.generation
        };

        let providers = self.persons.find_providers().await?;
        let mut state = self.state.lock().unwrap();
        if state.generation == generation {
            info!("Refreshed providers cache with {} providers", providers.len());
            state.cached = Some(CachedProviders {
                providers: providers.clone(),
                fetched_at: now,
            });
        }
        Ok(providers)
    }

    pub fn invalidate(&self) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::InMemoryPersonRepo;
    use chrono::NaiveDateTime;
    use slotkeeper_domain::ID;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct SteppingSys {
        now: AtomicI64,
    }

    impl ISys for SteppingSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.now.load(Ordering::SeqCst)
        }

        fn get_local_datetime(&self) -> NaiveDateTime {
            NaiveDateTime::from_timestamp_opt(self.get_timestamp_millis() / 1000, 0).unwrap()
        }
    }

    /// Reads the providers, then yields before returning them, so writes
    /// can land while the read is in flight.
    struct YieldingPersonRepo {
        inner: InMemoryPersonRepo,
    }

    #[async_trait::async_trait]
    impl IPersonRepo for YieldingPersonRepo {
        async fn insert(&self, person: &Person) -> anyhow::Result<()> {
            self.inner.insert(person).await
        }

        async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>> {
            self.inner.find(person_id).await
        }

        async fn find_providers(&self) -> anyhow::Result<Vec<Person>> {
            let providers = self.inner.find_providers().await?;
            tokio::task::yield_now().await;
            Ok(providers)
        }
    }

    fn provider(name: &str) -> Person {
        let mut p = Person::new(name.into());
        p.is_provider = true;
        p
    }

    #[tokio::test]
    async fn serves_cached_providers_until_ttl_expires() {
        let persons = Arc::new(InMemoryPersonRepo::new());
        let sys = Arc::new(SteppingSys {
            now: AtomicI64::new(0),
        });
        let cache = ProvidersCache::new(persons.clone(), sys.clone(), 1000);

        persons.insert(&provider("Grace")).await.unwrap();
        assert_eq!(cache.get().await.unwrap().len(), 1);

        persons.insert(&provider("Linus")).await.unwrap();
        sys.now.store(999, Ordering::SeqCst);
        assert_eq!(cache.get().await.unwrap().len(), 1);

        sys.now.store(1000, Ordering::SeqCst);
        assert_eq!(cache.get().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refresh() {
        let persons = Arc::new(InMemoryPersonRepo::new());
        let sys = Arc::new(SteppingSys {
            now: AtomicI64::new(0),
        });
        let cache = ProvidersCache::new(persons.clone(), sys, 60_000);

        assert!(cache.get().await.unwrap().is_empty());
        persons.insert(&provider("Grace")).await.unwrap();
        assert!(cache.get().await.unwrap().is_empty());

        cache.invalidate();
        assert_eq!(cache.get().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalidate_during_refresh_is_not_lost() {
        let persons = Arc::new(YieldingPersonRepo {
            inner: InMemoryPersonRepo::new(),
        });
        let sys = Arc::new(SteppingSys {
            now: AtomicI64::new(0),
        });
        let cache = ProvidersCache::new(persons.clone(), sys, 60_000);

        let (in_flight, _) = tokio::join!(cache.get(), async {
            persons.insert(&provider("Grace")).await.unwrap();
            cache.invalidate();
        });
        assert!(in_flight.unwrap().is_empty());

        assert_eq!(cache.get().await.unwrap().len(), 1);
    }
}
