//! The user store: a single `users` table and the handful of statements the
//! web handlers run against it.
//!
//! Every call checks a connection out of the sea-orm pool for exactly one
//! statement. The pool guard hands the connection back on every exit path,
//! errors included.

use sea_orm::{ActiveValue, ConnectionTrait, QueryOrder, Statement, prelude::*};

pub use error::StoreError;
pub use users::Model as User;

mod error;
pub mod users;

type ResultStore<T> = Result<T, StoreError>;

/// How an untrusted search term reaches the SQL text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The term is formatted straight into the statement. Injectable.
    Interpolated,
    /// The term travels as a bound parameter.
    Parameterized,
}

#[derive(Clone, Debug)]
pub struct Store {
    database: DatabaseConnection,
}

impl Store {
    /// Return a builder for `Store`.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Every user, in insertion order.
    pub async fn users(&self) -> ResultStore<Vec<User>> {
        users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await
            .map_err(Into::into)
    }

    pub async fn user(&self, id: i64) -> ResultStore<User> {
        users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(StoreError::UserNotFound(id))
    }

    /// Users whose name contains `term`.
    ///
    /// With [`Binding::Interpolated`] a term such as `x' OR 1=1 --` rewrites
    /// the `WHERE` clause, and a stray quote turns into a syntax error coming
    /// back as [`StoreError::Database`].
    pub async fn search_users(&self, term: &str, binding: Binding) -> ResultStore<Vec<User>> {
        match binding {
            Binding::Interpolated => {
                let sql = format!(
                    "SELECT id, username, email FROM users WHERE username LIKE '%{term}%'"
                );
                tracing::debug!("running interpolated search: {sql}");
                let backend = self.database.get_database_backend();
                users::Entity::find()
                    .from_raw_sql(Statement::from_string(backend, sql))
                    .all(&self.database)
                    .await
                    .map_err(Into::into)
            }
            Binding::Parameterized => users::Entity::find()
                .filter(users::Column::Username.contains(term))
                .order_by_asc(users::Column::Id)
                .all(&self.database)
                .await
                .map_err(Into::into),
        }
    }

    /// Delete every user. Returns how many rows went away.
    pub async fn delete_all(&self) -> ResultStore<u64> {
        let res = users::Entity::delete_many().exec(&self.database).await?;
        tracing::debug!("deleted {} users", res.rows_affected);
        Ok(res.rows_affected)
    }

    /// Insert a user. Blank username or email is rejected, the email format
    /// is not checked.
    pub async fn create_user(&self, username: &str, email: &str) -> ResultStore<User> {
        let username = normalize_required("username", username)?;
        let email = normalize_required("email", email)?;

        let user = users::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
        }
        .insert(&self.database)
        .await?;

        Ok(user)
    }
}

fn normalize_required(field: &str, value: &str) -> ResultStore<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidField(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

#[derive(Default)]
pub struct StoreBuilder {
    database: Option<DatabaseConnection>,
}

impl StoreBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> StoreBuilder {
        self.database = Some(db);
        self
    }

    /// Construct `Store`
    pub fn build(self) -> ResultStore<Store> {
        let database = self.database.ok_or(StoreError::MissingDatabase)?;
        Ok(Store { database })
    }
}
