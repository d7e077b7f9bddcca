//! Method selectors.
//!
//! A selector is the first four bytes of the SHA-256 digest of the method's ABI name.
//! The set of methods is closed: anything that does not resolve against a contract's
//! method table is rejected with [`ContractError::UnknownMethod`].

use crate::ContractError;

pub type Selector = [u8; 4];

/// Derives the selector for an ABI method name.
pub fn selector(name: &str) -> Selector {
    let digest = sp_io::hashing::sha2_256(name.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Mint,
    Name,
    Symbol,
    TotalSupply,
    MaxSupply,
    Remaining,
    OwnerOf,
    TokenUri,
    BaseUri,
    Banner,
    Icon,
    Description,
    Website,
}

impl Method {
    pub const ALL: [Method; 13] = [
        Method::Mint,
        Method::Name,
        Method::Symbol,
        Method::TotalSupply,
        Method::MaxSupply,
        Method::Remaining,
        Method::OwnerOf,
        Method::TokenUri,
        Method::BaseUri,
        Method::Banner,
        Method::Icon,
        Method::Description,
        Method::Website,
    ];

    pub const fn abi_name(self) -> &'static str {
        match self {
            Method::Mint => "mint",
            Method::Name => "name",
            Method::Symbol => "symbol",
            Method::TotalSupply => "totalSupply",
            Method::MaxSupply => "maxSupply",
            Method::Remaining => "remaining",
            Method::OwnerOf => "ownerOf",
            Method::TokenUri => "tokenURI",
            Method::BaseUri => "baseURI",
            Method::Banner => "banner",
            Method::Icon => "icon",
            Method::Description => "description",
            Method::Website => "website",
        }
    }

    pub fn selector(self) -> Selector {
        selector(self.abi_name())
    }

    /// Whether the method writes to storage.
    pub const fn is_mutating(self) -> bool {
        matches!(self, Method::Mint)
    }

    /// Finds the method in `table` whose selector is `selector`.
    pub fn resolve(table: &[Method], selector: &Selector) -> Result<Method, ContractError> {
        table
            .iter()
            .copied()
            .find(|method| &method.selector() == selector)
            .ok_or(ContractError::UnknownMethod)
    }
}

/// True when no two methods in `table` share a selector.
pub fn has_distinct_selectors(table: &[Method]) -> bool {
    table.iter().enumerate().all(|(i, method)| {
        let own = method.selector();
        table[i + 1..].iter().all(|other| other.selector() != own)
    })
}
