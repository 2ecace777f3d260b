use crate::types::{
    BaseCurrency,
    Collateral,
    Mon,
    OptionKind,
    QuoteCurrency,
    TimestampNs,
};

/// Computes the minimum collateral a short option position must hold at a given spot price
/// to not be liquidated.
///
/// Implementations must be pure: the same inputs always yield the same output.
pub trait RiskModel<I, const D: u8>
where
    I: Mon<D>,
{
    /// The minimum collateral, denominated in the collateral currency.
    ///
    /// # Arguments:
    /// `option_kind`: Whether its a short call or short put.
    /// `strike`: The strike price of the option.
    /// `expiry`: The expiry of the option.
    /// `spot`: The spot price at which the requirement is evaluated.
    /// `amount`: The number of options written.
    fn min_collateral(
        &self,
        option_kind: OptionKind,
        strike: QuoteCurrency<I, D>,
        expiry: TimestampNs,
        spot: QuoteCurrency<I, D>,
        amount: BaseCurrency<I, D>,
    ) -> Collateral<I, D>;
}
