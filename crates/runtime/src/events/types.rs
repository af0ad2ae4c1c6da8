//! Notification payloads delivered to subscribers.
//!
//! These are the only contract between the scoreboard and a rendering layer.
//! Serialized with serde they take the shape widgets consume:
//!
//! ```text
//! {"type":"assetChanged","assetName":"charm","value":4}
//! {"type":"scoreChanged","value":0}
//! ```

use ledger_core::Asset;
use serde::{Deserialize, Serialize};

/// Kinds of notification a handler can subscribe to.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// A single counter was committed.
    AssetChanged,
    /// The derived victory-point total was recomputed.
    ScoreChanged,
}

/// One completed state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    AssetChanged {
        #[serde(rename = "assetName")]
        asset: Asset,
        value: i64,
    },
    ScoreChanged {
        value: i64,
    },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::AssetChanged { .. } => EventKind::AssetChanged,
            Event::ScoreChanged { .. } => EventKind::ScoreChanged,
        }
    }

    /// Asset the event is about, if any.
    pub fn asset(&self) -> Option<Asset> {
        match self {
            Event::AssetChanged { asset, .. } => Some(*asset),
            Event::ScoreChanged { .. } => None,
        }
    }

    /// New value carried by the event.
    pub fn value(&self) -> i64 {
        match self {
            Event::AssetChanged { value, .. } | Event::ScoreChanged { value } => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_match_widget_contract() {
        let event = Event::AssetChanged {
            asset: Asset::Charm,
            value: 4,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({"type": "assetChanged", "assetName": "charm", "value": 4})
        );

        let event = Event::ScoreChanged { value: -2 };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({"type": "scoreChanged", "value": -2})
        );
    }

    #[test]
    fn kind_follows_variant() {
        let event = Event::AssetChanged {
            asset: Asset::GameplayVp,
            value: 1,
        };
        assert_eq!(event.kind(), EventKind::AssetChanged);
        assert_eq!(event.asset(), Some(Asset::GameplayVp));
        assert_eq!(Event::ScoreChanged { value: 3 }.kind(), EventKind::ScoreChanged);
    }
}
