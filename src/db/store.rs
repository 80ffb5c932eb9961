//! Connection-scoped token storage.
//!
//! Every operation opens its own connection and transaction. On return the
//! transaction is committed; on error it is dropped, which rolls it back. The
//! connection is closed in both cases.

use crate::config::uri::resolve_sqlite_target;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::token::Token;
use rusqlite::{Connection, OpenFlags, TransactionBehavior};

/// Explicit configuration for [`TokenStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub connection_uri: String,
}

/// Row counts read together in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: i64,
    pub distinct: i64,
}

pub struct TokenStore {
    target: String,
}

impl TokenStore {
    pub fn new(cfg: StoreConfig) -> AppResult<Self> {
        let target = resolve_sqlite_target(&cfg.connection_uri)?;
        Ok(Self { target })
    }

    /// The filename (or SQLite URI) every connection is opened against.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Open a fresh connection. The database must already exist.
    pub fn connect(&self) -> AppResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Connection::open_with_flags(&self.target, flags)?)
    }

    /// Run `func` on a fresh connection inside one transaction: committed
    /// when `func` returns `Ok`, rolled back otherwise.
    pub fn with_tx<F, T>(&self, behavior: TransactionBehavior, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(behavior)?;
        let out = func(&*tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Insert one token as a bound parameter.
    pub fn insert_token(&self, token: &str) -> AppResult<()> {
        self.with_tx(TransactionBehavior::Immediate, |conn| {
            queries::insert_token(conn, token)
        })
    }

    /// Fetch every row of `tokens`, in whatever order the database yields.
    pub fn list_tokens(&self) -> AppResult<Vec<Token>> {
        self.with_tx(TransactionBehavior::Deferred, queries::load_tokens)
    }

    /// Insert, then read the table back. Two scopes, one after the other.
    pub fn insert_and_list(&self, token: &str) -> AppResult<Vec<Token>> {
        self.insert_token(token)?;
        self.list_tokens()
    }

    pub fn count_tokens(&self) -> AppResult<i64> {
        self.with_tx(TransactionBehavior::Deferred, queries::count_tokens)
    }

    pub fn token_counts(&self) -> AppResult<TokenCounts> {
        self.with_tx(TransactionBehavior::Deferred, |conn| {
            Ok(TokenCounts {
                total: queries::count_tokens(conn)?,
                distinct: queries::count_distinct_tokens(conn)?,
            })
        })
    }
}
