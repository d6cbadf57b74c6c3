/*
[INPUT]:  Exchange action statuses from the SDK
[OUTPUT]: Typed placement and cancellation acknowledgments
[POS]:    Data layer - exchange client response types
[UPDATE]: When the exchange reports new status kinds
*/

use serde::{Deserialize, Serialize};

/// Exchange acknowledgment of a placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum OrderAck {
    /// Order is on the book
    Resting { oid: u64 },
    /// Order crossed and filled immediately
    Filled {
        oid: u64,
        total_size: f64,
        avg_price: f64,
    },
    WaitingForFill,
    WaitingForTrigger,
    /// Accepted without an order id
    Accepted,
}

impl OrderAck {
    /// Exchange-assigned order id, when the status carries one
    pub fn oid(&self) -> Option<u64> {
        match self {
            OrderAck::Resting { oid } | OrderAck::Filled { oid, .. } => Some(*oid),
            _ => None,
        }
    }

    pub fn is_resting(&self) -> bool {
        matches!(self, OrderAck::Resting { .. })
    }
}

/// Confirmation that one order was cancelled
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CancelAck {
    pub asset: String,
    pub oid: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ack_oid() {
        assert_eq!(OrderAck::Resting { oid: 7 }.oid(), Some(7));
        assert_eq!(
            OrderAck::Filled {
                oid: 8,
                total_size: 0.1,
                avg_price: 3001.5
            }
            .oid(),
            Some(8)
        );
        assert_eq!(OrderAck::WaitingForFill.oid(), None);
        assert!(OrderAck::Resting { oid: 7 }.is_resting());
        assert!(!OrderAck::Accepted.is_resting());
    }
}
