//! Persistence of wallets.
//!
//! [`WalletRepository`] is the only seam between the service and storage.
//! Names are never validated here: anything written through a repository is
//! stored as is.
use async_trait::async_trait;

use crate::{EngineError, NewWallet, ResultEngine, Wallet};

pub use database::SeaOrmWalletRepository;
pub use memory::InMemoryWalletRepository;

mod database;
mod memory;

#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ResultEngine<Option<Wallet>>;

    async fn exists_by_id(&self, id: i64) -> ResultEngine<bool>;

    /// All wallets, in insertion order.
    async fn find_all(&self) -> ResultEngine<Vec<Wallet>>;

    /// Wallets whose name contains `pattern`, ignoring case.
    async fn find_all_by_name_like_ignore_case(
        &self,
        pattern: &str,
    ) -> ResultEngine<Vec<Wallet>>;

    /// Insert a new wallet; the store assigns the id.
    async fn save(&self, wallet: NewWallet) -> ResultEngine<Wallet>;

    /// Re-persist an existing wallet's mutable fields.
    async fn update(&self, wallet: Wallet) -> ResultEngine<Wallet>;

    async fn delete_by_id(&self, id: i64) -> ResultEngine<()>;
}

/// Ids the store never hands out must not reach it.
fn ensure_storable_id(id: i64) -> ResultEngine<()> {
    if id <= 0 {
        return Err(EngineError::ConstraintViolation(format!(
            "wallet id must be positive, got {id}"
        )));
    }
    Ok(())
}
