/*
[INPUT]:  Caller strings and SDK decimal/side strings
[OUTPUT]: Typed addresses, floats and sides (or surfaced errors)
[POS]:    Marshalling layer - primitive conversions between binding and SDK types
[UPDATE]: When the SDK changes a wire representation
*/

use alloy_primitives::Address;

use crate::error::{BindingError, Result};

/// Parse a caller-supplied account address
///
/// Accepts "0x"-prefixed or bare 20-byte hex. Checksum case is not enforced.
pub(crate) fn parse_address(address: &str) -> Result<Address> {
    let trimmed = address.trim();
    trimmed.parse::<Address>().map_err(|e| {
        BindingError::invalid_input(format!("malformed account address {trimmed:?}: {e}"))
    })
}

/// Parse a decimal string from an SDK response
///
/// Never falls back to a default: an unparsable field fails the whole call.
pub(crate) fn parse_decimal(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BindingError::malformed_response(format!("{field}: {value:?}")))
}

/// Map the exchange side code to `is_buy` ("B" bid, "A" ask)
pub(crate) fn parse_side(side: &str) -> Result<bool> {
    match side {
        "B" => Ok(true),
        "A" => Ok(false),
        other => Err(BindingError::malformed_response(format!("side: {other:?}"))),
    }
}
