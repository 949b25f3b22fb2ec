use super::IPersonRepo;
use slotkeeper_domain::{Person, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresPersonRepo {
    pool: PgPool,
}

impl PostgresPersonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PersonRaw {
    person_uid: Uuid,
    display_name: String,
    phone: Option<String>,
    email: Option<String>,
    is_provider: bool,
}

impl Into<Person> for PersonRaw {
    fn into(self) -> Person {
        Person {
            id: self.person_uid.into(),
            display_name: self.display_name,
            phone: self.phone,
            email: self.email,
            is_provider: self.is_provider,
        }
    }
}

#[async_trait::async_trait]
impl IPersonRepo for PostgresPersonRepo {
    async fn insert(&self, person: &Person) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO persons(person_uid, display_name, phone, email, is_provider)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(person.id.inner_ref())
        .bind(&person.display_name)
        .bind(&person.phone)
        .bind(&person.email)
        .bind(person.is_provider)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>> {
        let raw = sqlx::query_as::<_, PersonRaw>(
            r#"
            SELECT * FROM persons AS p
            WHERE p.person_uid = $1
            "#,
        )
        .bind(person_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(raw.map(|p| p.into()))
    }

    async fn find_providers(&self) -> anyhow::Result<Vec<Person>> {
        let rows = sqlx::query_as::<_, PersonRaw>(
            r#"
            SELECT * FROM persons AS p
            WHERE p.is_provider
            ORDER BY p.display_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|p| p.into()).collect())
    }
}
