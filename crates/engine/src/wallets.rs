//! The module contains `Wallet` struct and its database mapping.

use chrono::{DateTime, SubsecRound, Utc};

use sea_orm::entity::{ActiveValue, prelude::*};

/// A wallet.
///
/// A wallet is a named container owned by a user, used to group expenses
/// (a budget, an account, a family pot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallet {
    /// Assigned by the store on insert, never changed afterwards.
    pub id: i64,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    pub user_id: Option<i64>,
}

/// A wallet that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWallet {
    pub name: String,
    pub creation_date: DateTime<Utc>,
    pub user_id: Option<i64>,
}

impl NewWallet {
    /// Build a wallet created at `now`.
    ///
    /// The timestamp is truncated to microseconds, which is what the
    /// database keeps.
    pub fn new(name: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            creation_date: now.trunc_subsecs(6),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach the id handed out by the store.
    pub fn into_wallet(self, id: i64) -> Wallet {
        Wallet {
            id,
            name: self.name,
            creation_date: self.creation_date,
            user_id: self.user_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// `name` folded with Unicode lowercase rules; searched instead of
    /// `LOWER(name)`, which SQLite only applies to ASCII.
    pub name_lower: String,
    pub creation_date: DateTimeUtc,
    pub user_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Wallet {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            creation_date: value.creation_date,
            user_id: value.user_id,
        }
    }
}

impl From<&NewWallet> for ActiveModel {
    fn from(value: &NewWallet) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(value.name.clone()),
            name_lower: ActiveValue::Set(value.name.to_lowercase()),
            creation_date: ActiveValue::Set(value.creation_date),
            user_id: ActiveValue::Set(value.user_id),
        }
    }
}

/// Only the name is mutable: the creation date is left untouched.
impl From<&Wallet> for ActiveModel {
    fn from(value: &Wallet) -> Self {
        Self {
            id: ActiveValue::Unchanged(value.id),
            name: ActiveValue::Set(value.name.clone()),
            name_lower: ActiveValue::Set(value.name.to_lowercase()),
            creation_date: ActiveValue::NotSet,
            user_id: ActiveValue::NotSet,
        }
    }
}
