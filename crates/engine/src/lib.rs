//! Wallet management: storage, validation and use cases.
pub use error::{EngineError, ErrorCode, FieldError, ValidationErrors};
pub use repository::{InMemoryWalletRepository, SeaOrmWalletRepository, WalletRepository};
pub use service::{WalletService, WalletServiceBuilder};
pub use wallets::{NewWallet, Wallet};

pub mod mapper;
pub mod validation;
pub mod wallets;

mod error;
mod repository;
mod service;

pub type ResultEngine<T> = Result<T, EngineError>;
