//! Deployment constants for the contracts shipped with this pallet.

use crate::contract::{Collection, CollectionParams, Counter, IssuerParams};

/// BitMint NFT: plain supply counter capped at 1000.
pub struct BitMintNft;

impl IssuerParams for BitMintNft {
    const NAME: &'static str = "BitMint NFT";
    const SYMBOL: &'static str = "BMNT";
    const MAX_SUPPLY: u64 = 1000;
}

pub type BitMintCounter = Counter<BitMintNft>;

/// BitMint Genesis: owned tokens capped at 1000.
pub struct BitMintGenesis;

impl IssuerParams for BitMintGenesis {
    const NAME: &'static str = "BitMint Genesis";
    const SYMBOL: &'static str = "BMG";
    const MAX_SUPPLY: u64 = 1000;
}

impl CollectionParams for BitMintGenesis {
    const BASE_URI: &'static str = "ipfs://bitmint/genesis/";
    const BANNER: &'static str = "ipfs://bitmint/genesis/banner.png";
    const ICON: &'static str = "ipfs://bitmint/genesis/icon.png";
    const DESCRIPTION: &'static str = "1000 sequentially minted BitMint genesis tokens";
    const WEBSITE: &'static str = "https://bitmint.example";
}

pub type BitMintCollection = Collection<BitMintGenesis>;
