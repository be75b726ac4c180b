use alloy_primitives::{uint, Address, U512};

/// Reserved fixed key of the total-supply cell. Every derived key
/// carries a nonzero region field and can never land here.
pub const TOTAL_SUPPLY_KEY: U512 = U512::ZERO;

// Region tags live directly above the identifier field. Keys are 512
// bits wide so the nested allowance derivation keeps its tag intact:
// the deepest key spans bits 0..322, spender below owner below tag.
pub const BALANCE_REGION: U512 = uint!(1_U512);
pub const ALLOWANCE_REGION: U512 = uint!(2_U512);

/// Width of a normalized account identifier, in bits.
pub const ID_BITS: usize = 160;

const ID_MASK: U512 = U512::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0, 0, 0, 0, 0]);

/// Packs `region` above the identifier field: `region << 160 | (id & mask)`.
///
/// Identifiers wider than 160 bits keep their low-order bits; that
/// truncation is part of the persisted layout. Region inputs never lose
/// bits: the widest region, a first-level allowance key, still fits the
/// shifted field with 190 bits to spare, so keys from different regions
/// cannot meet.
pub fn derive_key(region: U512, id: U512) -> U512 {
    (region << ID_BITS) | (id & ID_MASK)
}

pub fn balance_key(account: Address) -> U512 {
    derive_key(BALANCE_REGION, address_word(account))
}

/// Two-level derivation: the (allowance-region, owner) key is itself the
/// region input for the spender.
pub fn allowance_key(owner: Address, spender: Address) -> U512 {
    derive_key(
        derive_key(ALLOWANCE_REGION, address_word(owner)),
        address_word(spender),
    )
}

fn address_word(account: Address) -> U512 {
    U512::from_be_slice(account.as_slice())
}
