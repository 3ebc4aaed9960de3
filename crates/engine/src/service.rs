use std::sync::Arc;

use api_types::wallet::{CreateWalletDto, UpdateWalletDto, WalletDto};
use chrono::Utc;

use crate::{
    EngineError, ResultEngine,
    mapper::{apply_update, new_wallet_from, to_dto, to_dtos},
    repository::{InMemoryWalletRepository, WalletRepository},
    validation::{validate_create, validate_id, validate_update},
};

/// Wallet use cases on top of a [`WalletRepository`].
#[derive(Clone)]
pub struct WalletService {
    repository: Arc<dyn WalletRepository>,
}

impl std::fmt::Debug for WalletService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletService").finish_non_exhaustive()
    }
}

impl WalletService {
    /// Return a builder for `WalletService`. Help to build the struct.
    pub fn builder() -> WalletServiceBuilder {
        WalletServiceBuilder::default()
    }

    pub async fn create_wallet(&self, dto: CreateWalletDto) -> ResultEngine<WalletDto> {
        let name = validate_create(&dto)?;
        let wallet = self
            .repository
            .save(new_wallet_from(name, Utc::now()))
            .await?;
        tracing::debug!(wallet_id = wallet.id, "wallet created");
        Ok(to_dto(&wallet))
    }

    /// Rename an existing wallet. The creation date never changes.
    pub async fn update_wallet(&self, dto: UpdateWalletDto) -> ResultEngine<WalletDto> {
        let (id, name) = validate_update(&dto)?;
        let wallet = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::wallet_not_found(id))?;

        let wallet = self.repository.update(apply_update(wallet, name)).await?;
        tracing::debug!(wallet_id = id, "wallet renamed");
        Ok(to_dto(&wallet))
    }

    pub async fn find_by_id(&self, id: i64) -> ResultEngine<WalletDto> {
        let id = validate_id(Some(id))?;
        self.repository
            .find_by_id(id)
            .await?
            .map(|wallet| to_dto(&wallet))
            .ok_or_else(|| EngineError::wallet_not_found(id))
    }

    /// All wallets in insertion order.
    pub async fn get_wallets(&self) -> ResultEngine<Vec<WalletDto>> {
        Ok(to_dtos(self.repository.find_all().await?))
    }

    pub async fn find_all_by_name_like_ignore_case(
        &self,
        pattern: &str,
    ) -> ResultEngine<Vec<WalletDto>> {
        let wallets = self
            .repository
            .find_all_by_name_like_ignore_case(pattern)
            .await?;
        Ok(to_dtos(wallets))
    }

    pub async fn delete_wallet_by_id(&self, id: i64) -> ResultEngine<()> {
        let id = validate_id(Some(id))?;
        if !self.repository.exists_by_id(id).await? {
            return Err(EngineError::wallet_not_found(id));
        }
        self.repository.delete_by_id(id).await?;
        tracing::debug!(wallet_id = id, "wallet deleted");
        Ok(())
    }
}

/// The builder for `WalletService`
#[derive(Default)]
pub struct WalletServiceBuilder {
    repository: Option<Arc<dyn WalletRepository>>,
}

impl WalletServiceBuilder {
    /// Pass the repository wallets are stored in
    pub fn repository(mut self, repository: impl WalletRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Construct `WalletService`. Without a repository wallets are kept in
    /// memory.
    pub fn build(self) -> ResultEngine<WalletService> {
        let repository = self.repository.unwrap_or_else(|| {
            Arc::new(InMemoryWalletRepository::new()) as Arc<dyn WalletRepository>
        });
        Ok(WalletService { repository })
    }
}
