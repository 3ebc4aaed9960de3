use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, LikeExpr},
};

use crate::{NewWallet, ResultEngine, Wallet, wallets};

use super::{WalletRepository, ensure_storable_id};

/// [`WalletRepository`] backed by a relational database through sea-orm.
#[derive(Clone, Debug)]
pub struct SeaOrmWalletRepository {
    database: DatabaseConnection,
}

impl SeaOrmWalletRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

const LIKE_ESCAPE: char = '!';

/// Escape `LIKE` wildcards so the pattern is matched literally.
fn like_contains(pattern: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(pattern.len() + 2);
    escaped.push('%');
    for c in pattern.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

#[async_trait]
impl WalletRepository for SeaOrmWalletRepository {
    async fn find_by_id(&self, id: i64) -> ResultEngine<Option<Wallet>> {
        ensure_storable_id(id)?;
        let model = wallets::Entity::find_by_id(id).one(&self.database).await?;
        Ok(model.map(Wallet::from))
    }

    async fn exists_by_id(&self, id: i64) -> ResultEngine<bool> {
        ensure_storable_id(id)?;
        let count = wallets::Entity::find_by_id(id)
            .count(&self.database)
            .await?;
        Ok(count > 0)
    }

    async fn find_all(&self) -> ResultEngine<Vec<Wallet>> {
        let models = wallets::Entity::find()
            .order_by_asc(wallets::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Wallet::from).collect())
    }

    async fn find_all_by_name_like_ignore_case(
        &self,
        pattern: &str,
    ) -> ResultEngine<Vec<Wallet>> {
        let models = wallets::Entity::find()
            .filter(
                Expr::col(wallets::Column::NameLower).like(like_contains(pattern)),
            )
            .order_by_asc(wallets::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Wallet::from).collect())
    }

    async fn save(&self, wallet: NewWallet) -> ResultEngine<Wallet> {
        let model = wallets::ActiveModel::from(&wallet)
            .insert(&self.database)
            .await?;
        Ok(Wallet::from(model))
    }

    async fn update(&self, wallet: Wallet) -> ResultEngine<Wallet> {
        ensure_storable_id(wallet.id)?;
        let model = wallets::ActiveModel::from(&wallet)
            .update(&self.database)
            .await?;
        Ok(Wallet::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> ResultEngine<()> {
        ensure_storable_id(id)?;
        wallets::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
