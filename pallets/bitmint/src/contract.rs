//! Contract variants and their method handlers.
//!
//! [`Counter`] is a bare supply counter. [`Collection`] composes a [`CappedIssuer`] and
//! records an owner per minted token. Both are configured through compile-time
//! parameter traits rather than runtime arguments.

use codec::Encode;
use core::marker::PhantomData;
use sp_core::U256;
use sp_std::prelude::*;

use crate::{
    abi::{CalldataReader, ResponseWriter},
    dispatch::{Method, Selector},
    issuer::{CappedIssuer, CollectionMetadata},
    ledger::{SupplyLedger, SupplyTerms},
    storage::{OwnerRegistry, SlotStorage},
    ContractError,
};

/// Name, symbol and cap of an issuer.
pub trait IssuerParams {
    const NAME: &'static str;
    const SYMBOL: &'static str;
    const MAX_SUPPLY: u64;

    fn terms() -> SupplyTerms<'static> {
        SupplyTerms {
            name: Self::NAME.as_bytes(),
            symbol: Self::SYMBOL.as_bytes(),
            max_supply: U256::from(Self::MAX_SUPPLY),
        }
    }
}

/// Collection metadata on top of the issuer terms.
pub trait CollectionParams: IssuerParams {
    const BASE_URI: &'static str;
    const BANNER: &'static str;
    const ICON: &'static str;
    const DESCRIPTION: &'static str;
    const WEBSITE: &'static str;

    fn metadata() -> CollectionMetadata<'static> {
        CollectionMetadata {
            base_uri: Self::BASE_URI.as_bytes(),
            banner: Self::BANNER.as_bytes(),
            icon: Self::ICON.as_bytes(),
            description: Self::DESCRIPTION.as_bytes(),
            website: Self::WEBSITE.as_bytes(),
        }
    }
}

/// Host-provided context of a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext<AccountId> {
    pub caller: AccountId,
}

/// Supply change made by a successful mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Issued {
    /// Set only by contracts that track ownership.
    pub token_id: Option<U256>,
    pub total_supply: U256,
}

/// Result of a dispatched call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub output: Vec<u8>,
    pub issued: Option<Issued>,
}

impl Receipt {
    fn view(output: ResponseWriter) -> Self {
        Self { output: output.into_inner(), issued: None }
    }
}

pub trait Contract<AccountId> {
    /// Methods reachable through [`Contract::call_method`].
    const METHODS: &'static [Method];

    fn max_supply() -> U256;

    /// Writes the deployment constants unless already initialized.
    ///
    /// Returns whether anything was written.
    fn initialize<S>(store: S) -> Result<bool, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>;

    fn execute<S>(
        store: S,
        ctx: CallContext<AccountId>,
        method: Method,
        calldata: &[u8],
    ) -> Result<Receipt, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>;

    fn call_method<S>(
        store: S,
        ctx: CallContext<AccountId>,
        selector: &Selector,
        calldata: &[u8],
    ) -> Result<Receipt, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>,
    {
        let method = Method::resolve(Self::METHODS, selector)?;
        Self::execute(store, ctx, method, calldata)
    }
}

/// Supply counter: `mint` returns the new total.
pub struct Counter<P>(PhantomData<P>);

impl<P: IssuerParams, AccountId> Contract<AccountId> for Counter<P> {
    const METHODS: &'static [Method] =
        &[Method::Mint, Method::Name, Method::Symbol, Method::TotalSupply, Method::MaxSupply];

    fn max_supply() -> U256 {
        U256::from(P::MAX_SUPPLY)
    }

    fn initialize<S>(store: S) -> Result<bool, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>,
    {
        SupplyLedger::new(store).initialize(&P::terms())
    }

    fn execute<S>(
        store: S,
        _ctx: CallContext<AccountId>,
        method: Method,
        _calldata: &[u8],
    ) -> Result<Receipt, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>,
    {
        let mut ledger = SupplyLedger::new(store);
        let mut out = ResponseWriter::new();

        match method {
            Method::Mint => {
                let total_supply = ledger.issue()?;
                out.write_u256(total_supply);
                return Ok(Receipt {
                    output: out.into_inner(),
                    issued: Some(Issued { token_id: None, total_supply }),
                });
            }
            Method::Name => out.write_string_with_length(&ledger.name()?)?,
            Method::Symbol => out.write_string_with_length(&ledger.symbol()?)?,
            Method::TotalSupply => out.write_u256(ledger.total_issued()?),
            Method::MaxSupply => out.write_u256(ledger.max_supply()?),
            _ => return Err(ContractError::UnknownMethod),
        }

        Ok(Receipt::view(out))
    }
}

/// Token collection: `mint` assigns the next token id to the caller and returns it.
pub struct Collection<P>(PhantomData<P>);

impl<P: CollectionParams, AccountId: Clone + Encode> Contract<AccountId> for Collection<P> {
    const METHODS: &'static [Method] = &[
        Method::Mint,
        Method::Remaining,
        Method::Name,
        Method::Symbol,
        Method::TotalSupply,
        Method::MaxSupply,
        Method::OwnerOf,
        Method::TokenUri,
        Method::BaseUri,
        Method::Banner,
        Method::Icon,
        Method::Description,
        Method::Website,
    ];

    fn max_supply() -> U256 {
        U256::from(P::MAX_SUPPLY)
    }

    fn initialize<S>(store: S) -> Result<bool, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>,
    {
        CappedIssuer::<S, AccountId>::new(store).initialize(&P::terms(), &P::metadata())
    }

    fn execute<S>(
        store: S,
        ctx: CallContext<AccountId>,
        method: Method,
        calldata: &[u8],
    ) -> Result<Receipt, ContractError>
    where
        S: SlotStorage + OwnerRegistry<AccountId>,
    {
        let mut issuer = CappedIssuer::<S, AccountId>::new(store);
        let mut out = ResponseWriter::new();

        match method {
            Method::Mint => {
                let token_id = issuer.mint(ctx.caller)?;
                let total_supply = issuer.ledger().total_issued()?;
                out.write_u256(token_id);
                return Ok(Receipt {
                    output: out.into_inner(),
                    issued: Some(Issued { token_id: Some(token_id), total_supply }),
                });
            }
            Method::Remaining => out.write_u256(issuer.remaining()?),
            Method::Name => out.write_string_with_length(&issuer.ledger().name()?)?,
            Method::Symbol => out.write_string_with_length(&issuer.ledger().symbol()?)?,
            Method::TotalSupply => out.write_u256(issuer.ledger().total_issued()?),
            Method::MaxSupply => out.write_u256(issuer.ledger().max_supply()?),
            Method::OwnerOf => {
                let token_id = CalldataReader::new(calldata).read_u256()?;
                out.write_bytes_with_length(&issuer.owner_of(token_id)?.encode())?;
            }
            Method::TokenUri => {
                let token_id = CalldataReader::new(calldata).read_u256()?;
                out.write_string_with_length(&issuer.token_uri(token_id)?)?;
            }
            Method::BaseUri => out.write_string_with_length(&issuer.base_uri()?)?,
            Method::Banner => out.write_string_with_length(&issuer.banner()?)?,
            Method::Icon => out.write_string_with_length(&issuer.icon()?)?,
            Method::Description => out.write_string_with_length(&issuer.description()?)?,
            Method::Website => out.write_string_with_length(&issuer.website()?)?,
        }

        Ok(Receipt::view(out))
    }
}
