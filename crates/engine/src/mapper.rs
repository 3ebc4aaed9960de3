//! Conversions between stored wallets and their wire representations.
use api_types::wallet::WalletDto;
use chrono::{DateTime, Utc};

use crate::{NewWallet, Wallet};

pub fn to_dto(wallet: &Wallet) -> WalletDto {
    WalletDto {
        id: wallet.id,
        name: wallet.name.clone(),
        creation_date: wallet.creation_date,
        user_id: wallet.user_id,
    }
}

pub fn to_dtos(wallets: Vec<Wallet>) -> Vec<WalletDto> {
    wallets.iter().map(to_dto).collect()
}

/// `name` must already be validated.
pub fn new_wallet_from(name: String, now: DateTime<Utc>) -> NewWallet {
    NewWallet::new(name, now)
}

/// Rename `wallet`, keeping its id, creation date and owner.
pub fn apply_update(mut wallet: Wallet, name: String) -> Wallet {
    wallet.name = name;
    wallet
}
