use getset::{
    CopyGetters,
    Setters,
};
use num_traits::Zero;

use super::{
    BaseCurrency,
    Collateral,
    InvalidPositionTerms,
    Mon,
    OptionKind,
    PositionId,
    QuoteCurrency,
    TimestampNs,
};

/// A short option position together with the collateral backing it.
///
/// The contract terms are immutable for the lifetime of the position,
/// only the `collateral` is changed and only ever by the `Rebalancer`.
///
/// Generics:
/// - `I`: The numeric data type of currencies.
/// - `D`: The constant decimal precision of the currencies.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters, Setters)]
pub struct Position<I, const D: u8>
where
    I: Mon<D>,
{
    /// The stable identifier assigned by the position source.
    #[getset(get_copy = "pub")]
    id: PositionId,

    /// Whether it is a short call or a short put.
    #[getset(get_copy = "pub")]
    option_kind: OptionKind,

    /// The strike price of the option.
    #[getset(get_copy = "pub")]
    strike: QuoteCurrency<I, D>,

    /// When the option expires.
    #[getset(get_copy = "pub")]
    expiry: TimestampNs,

    /// The number of options written.
    #[getset(get_copy = "pub")]
    amount: BaseCurrency<I, D>,

    /// The collateral currently posted for the position.
    #[getset(get_copy = "pub", set = "pub(crate)")]
    collateral: Collateral<I, D>,
}

impl<I, const D: u8> Position<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance, validating the position terms.
    pub fn new(
        id: PositionId,
        option_kind: OptionKind,
        strike: QuoteCurrency<I, D>,
        expiry: TimestampNs,
        amount: BaseCurrency<I, D>,
        collateral: Collateral<I, D>,
    ) -> Result<Self, InvalidPositionTerms> {
        let position = Self {
            id,
            option_kind,
            strike,
            expiry,
            amount,
            collateral,
        };
        position.validate()?;
        Ok(position)
    }

    /// Check the invariants of the position.
    /// Positions coming from a `PositionSource` are checked again before being tracked,
    /// as their data may be stale or inconsistent.
    pub fn validate(&self) -> Result<(), InvalidPositionTerms> {
        if self.amount <= BaseCurrency::zero() {
            return Err(InvalidPositionTerms::AmountLTEZero(self.id));
        }
        if self.strike <= QuoteCurrency::zero() {
            return Err(InvalidPositionTerms::StrikeLTEZero(self.id));
        }
        if self.collateral.is_negative() {
            return Err(InvalidPositionTerms::NegativeCollateral(self.id));
        }
        Ok(())
    }
}

impl<I, const D: u8> std::fmt::Display for Position<I, D>
where
    I: Mon<D>,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position( id: {}, {} {} @ strike {}, expiry: {}, collateral: {} )",
            self.id, self.option_kind, self.amount, self.strike, self.expiry, self.collateral
        )
    }
}
