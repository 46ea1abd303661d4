use std::time::Duration;

use crate::models::Account;
use sqlx::{postgres::PgPoolOptions, PgPool, Result};

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> sqlx::PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
        .expect("Could not connect to the database")
}

/// Creates the account table when it does not exist yet
pub async fn init_db(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS account (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            date_joined DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }

    /// Create a new account using a reference to an `Account` struct. The id
    /// on the input is ignored; the database assigns a fresh one.
    pub async fn create_account(&self, new_account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&new_account.name)
        .bind(&new_account.email)
        .bind(&new_account.address)
        .bind(&new_account.phone_number)
        .bind(new_account.date_joined)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// List every account, ordered by id
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM account
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;
        Ok(rows)
    }

    /// Get an account by ID
    pub async fn get_account_by_id(&self, id: i32) -> Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// Overwrite every mutable field of an existing account
    pub async fn update_account(&self, account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE account
            SET name = $1,
                email = $2,
                address = $3,
                phone_number = $4,
                date_joined = $5
            WHERE id = $6
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .bind(account.id)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    /// Delete an account by ID. Deleting an id that was never persisted is a no-op.
    pub async fn delete_account(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }
}
