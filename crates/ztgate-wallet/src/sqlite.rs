//! SQLite implementation of the Wallet trait.
//!
//! This is the primary storage backend for enrolled identities. It uses
//! rusqlite with bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};

use ztgate_core::{Identity, MspId, Username};

use crate::error::{Result, WalletError};
use crate::migration;
use crate::traits::Wallet;

/// SQLite-based wallet implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime.
pub struct SqliteWallet {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteWallet {
    /// Open a SQLite wallet at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite wallet.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Map a poisoned mutex into a wallet error.
fn poisoned(e: PoisonError<MutexGuard<'_, Connection>>) -> WalletError {
    WalletError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
        Some(format!("mutex poisoned: {}", e)),
    ))
}

/// Map a failed spawn_blocking join into a wallet error.
fn join_failed(e: tokio::task::JoinError) -> WalletError {
    WalletError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

// Helper to convert a row to Identity
fn row_to_identity(row: &rusqlite::Row<'_>) -> rusqlite::Result<Identity> {
    let username: String = row.get("username")?;
    let certificate: Vec<u8> = row.get("certificate")?;
    let private_key: Vec<u8> = row.get("private_key")?;
    let msp_id: String = row.get("msp_id")?;
    let enrolled_at: i64 = row.get("enrolled_at")?;

    Ok(Identity {
        username: Username::new(username),
        certificate: Bytes::from(certificate),
        private_key: Bytes::from(private_key),
        msp_id: MspId::new(msp_id),
        enrolled_at,
    })
}

#[async_trait]
impl Wallet for SqliteWallet {
    async fn put(&self, identity: &Identity) -> Result<()> {
        let identity = identity.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(poisoned)?;

            conn.execute(
                "INSERT INTO identities (username, certificate, private_key, msp_id, enrolled_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(username) DO UPDATE SET
                    certificate = excluded.certificate,
                    private_key = excluded.private_key,
                    msp_id = excluded.msp_id,
                    enrolled_at = excluded.enrolled_at",
                params![
                    identity.username.as_str(),
                    identity.certificate.as_ref(),
                    identity.private_key.as_ref(),
                    identity.msp_id.as_str(),
                    identity.enrolled_at,
                ],
            )?;

            Ok(())
        })
        .await
        .map_err(join_failed)?
    }

    async fn get(&self, username: &Username) -> Result<Option<Identity>> {
        let username = username.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(poisoned)?;

            conn.query_row(
                "SELECT username, certificate, private_key, msp_id, enrolled_at
                 FROM identities WHERE username = ?1",
                params![username.as_str()],
                row_to_identity,
            )
            .optional()
            .map_err(WalletError::from)
        })
        .await
        .map_err(join_failed)?
    }

    async fn remove(&self, username: &Username) -> Result<bool> {
        let username = username.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(poisoned)?;

            let removed = conn.execute(
                "DELETE FROM identities WHERE username = ?1",
                params![username.as_str()],
            )?;

            Ok(removed > 0)
        })
        .await
        .map_err(join_failed)?
    }

    async fn list(&self) -> Result<Vec<Username>> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(poisoned)?;

            let mut stmt = conn.prepare("SELECT username FROM identities ORDER BY username")?;

            let usernames: Vec<Username> = stmt
                .query_map([], |row| {
                    let name: String = row.get(0)?;
                    Ok(Username::new(name))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(usernames)
        })
        .await
        .map_err(join_failed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_identity(username: &str) -> Identity {
        Identity::new(
            Username::new(username),
            format!("cert-{}", username).into_bytes(),
            format!("key-{}", username).into_bytes(),
            MspId::new("Org1MSP"),
            1_700_000_000_000,
        )
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let wallet = SqliteWallet::open_memory().unwrap();
        let identity = make_identity("alice");

        wallet.put(&identity).await.unwrap();

        let retrieved = wallet.get(&Username::new("alice")).await.unwrap().unwrap();
        assert_eq!(retrieved, identity);
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let wallet = SqliteWallet::open_memory().unwrap();

        let result = wallet.get(&Username::new("bob")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_upserts_on_reenrollment() {
        let wallet = SqliteWallet::open_memory().unwrap();
        let first = make_identity("alice");
        wallet.put(&first).await.unwrap();

        let mut second = make_identity("alice");
        second.certificate = Bytes::from_static(b"renewed cert");
        second.enrolled_at = first.enrolled_at + 1000;
        wallet.put(&second).await.unwrap();

        let retrieved = wallet.get(&Username::new("alice")).await.unwrap().unwrap();
        assert_eq!(retrieved.certificate, second.certificate);
        assert_eq!(retrieved.enrolled_at, second.enrolled_at);
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let wallet = SqliteWallet::open_memory().unwrap();
        wallet.put(&make_identity("alice")).await.unwrap();

        assert!(wallet.get(&Username::new("Alice")).await.unwrap().is_none());
        assert!(wallet.get(&Username::new("alice ")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let wallet = SqliteWallet::open_memory().unwrap();
        wallet.put(&make_identity("alice")).await.unwrap();

        assert!(wallet.remove(&Username::new("alice")).await.unwrap());
        assert!(wallet.get(&Username::new("alice")).await.unwrap().is_none());
        assert!(!wallet.remove(&Username::new("alice")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list() {
        let wallet = SqliteWallet::open_memory().unwrap();
        wallet.put(&make_identity("bob")).await.unwrap();
        wallet.put(&make_identity("alice")).await.unwrap();

        let names = wallet.list().await.unwrap();
        assert_eq!(names, vec![Username::new("alice"), Username::new("bob")]);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.db");

        {
            let wallet = SqliteWallet::open(&path).unwrap();
            wallet.put(&make_identity("alice")).await.unwrap();
        }

        let wallet = SqliteWallet::open(&path).unwrap();
        let retrieved = wallet.get(&Username::new("alice")).await.unwrap().unwrap();
        assert_eq!(retrieved.username, Username::new("alice"));
    }
}
