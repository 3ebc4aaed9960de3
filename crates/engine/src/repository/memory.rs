use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{NewWallet, ResultEngine, Wallet};

use super::{WalletRepository, ensure_storable_id};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    wallets: Vec<Wallet>,
}

/// [`WalletRepository`] keeping wallets in memory, in insertion order.
///
/// Meant for tests and for running the server without a database.
#[derive(Debug, Default)]
pub struct InMemoryWalletRepository {
    store: Mutex<Store>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with already persisted wallets.
    ///
    /// The id counter continues after the highest seeded id.
    pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
        let last_id = wallets.iter().map(|w| w.id).max().unwrap_or(0);
        Self {
            store: Mutex::new(Store { last_id, wallets }),
        }
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn find_by_id(&self, id: i64) -> ResultEngine<Option<Wallet>> {
        ensure_storable_id(id)?;
        let store = self.store.lock().await;
        Ok(store.wallets.iter().find(|w| w.id == id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> ResultEngine<bool> {
        ensure_storable_id(id)?;
        let store = self.store.lock().await;
        Ok(store.wallets.iter().any(|w| w.id == id))
    }

    async fn find_all(&self) -> ResultEngine<Vec<Wallet>> {
        Ok(self.store.lock().await.wallets.clone())
    }

    async fn find_all_by_name_like_ignore_case(
        &self,
        pattern: &str,
    ) -> ResultEngine<Vec<Wallet>> {
        let pattern = pattern.to_lowercase();
        let store = self.store.lock().await;
        Ok(store
            .wallets
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&pattern))
            .cloned()
            .collect())
    }

    async fn save(&self, wallet: NewWallet) -> ResultEngine<Wallet> {
        let mut store = self.store.lock().await;
        store.last_id += 1;
        let wallet = wallet.into_wallet(store.last_id);
        store.wallets.push(wallet.clone());
        Ok(wallet)
    }

    async fn update(&self, wallet: Wallet) -> ResultEngine<Wallet> {
        ensure_storable_id(wallet.id)?;
        let mut store = self.store.lock().await;
        let Some(stored) = store.wallets.iter_mut().find(|w| w.id == wallet.id) else {
            return Err(sea_orm::DbErr::RecordNotUpdated.into());
        };
        stored.name = wallet.name;
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> ResultEngine<()> {
        ensure_storable_id(id)?;
        self.store.lock().await.wallets.retain(|w| w.id != id);
        Ok(())
    }
}
