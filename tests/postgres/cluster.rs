//! Embedded `PostgreSQL` cluster shared by the adapter integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use postgresql_embedded::{PostgreSQL, Settings, Status};
use rstest::fixture;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Schema applied to every temporary database.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2024-05-01-000000_create_tasks/up.sql");

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();
static DATABASE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded cluster kept alive for the whole test binary.
pub struct ManagedCluster {
    settings: Settings,
    runtime: Runtime,
    postgres: Option<PostgreSQL>,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(Settings::default());
        runtime.block_on(async {
            postgres.setup().await?;
            if !matches!(postgres.status(), Status::Started) {
                postgres.start().await?;
            }
            Ok::<(), postgresql_embedded::Error>(())
        })?;
        Ok(Self {
            settings: postgres.settings().clone(),
            runtime,
            postgres: Some(postgres),
        })
    }

    /// Builds a connection URL for `database` on this cluster.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.settings.url(database)
    }

    /// Creates a uniquely named database with the task schema applied.
    pub fn temporary_database(&'static self, prefix: &str) -> Result<TemporaryDatabase, BoxError> {
        let name = format!(
            "{prefix}_{}_{}",
            std::process::id(),
            DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        self.execute_admin_sql(&format!("CREATE DATABASE {}", quote_identifier(&name)))?;
        let database = TemporaryDatabase {
            cluster: self,
            name,
        };
        let mut conn = PgConnection::establish(&database.url())?;
        conn.batch_execute(CREATE_TASKS_SQL)?;
        Ok(database)
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = PgConnection::establish(&self.database_url("postgres"))?;
        diesel::sql_query(sql).execute(&mut conn)?;
        Ok(())
    }
}

impl Drop for ManagedCluster {
    fn drop(&mut self) {
        if let Some(postgres) = self.postgres.take() {
            drop(self.runtime.block_on(postgres.stop()));
        }
    }
}

/// Database dropped again when the guard goes out of scope.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Connection URL for this database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        let sql = format!("DROP DATABASE IF EXISTS {} WITH (FORCE)", quote_identifier(&self.name));
        drop(self.cluster.execute_admin_sql(&sql));
    }
}

/// Provides the shared cluster, starting it on first use.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    SHARED_CLUSTER.get_or_init(|| match ManagedCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    })
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
