//! Requests from control surfaces.
//!
//! Buttons and other controls describe what they want as a [`Command`] and
//! hand it to [`crate::Scoreboard::execute`]. Commands travel as JSON shaped
//! like the notifications:
//!
//! ```text
//! {"type":"increment","assetName":"herb","amount":-5}
//! {"type":"set","assetName":"charm","value":4}
//! {"type":"reset"}
//! ```

use ledger_core::{Asset, LedgerError};
use serde::Serialize;
use serde_json::Value;

use super::errors::{Result, ScoreboardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Add `amount` (negative to remove) subject to the ledger's floor rule.
    Increment {
        #[serde(rename = "assetName")]
        asset: Asset,
        amount: i64,
    },
    /// Overwrite a counter.
    Set {
        #[serde(rename = "assetName")]
        asset: Asset,
        value: i64,
    },
    /// Restore the default board.
    Reset,
}

impl Command {
    /// Parses a JSON command.
    ///
    /// Unknown asset names fail with [`LedgerError::UnknownAsset`] and
    /// non-integer amounts with [`LedgerError::InvalidValue`], the same
    /// errors the typed API raises.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(ScoreboardError::CommandSyntax)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ScoreboardError::InvalidCommand("missing \"type\"".into()))?;

        match kind {
            "increment" => {
                let (asset, amount) = asset_and_integer(value, "amount")?;
                Ok(Self::Increment { asset, amount })
            }
            "set" => {
                let (asset, value) = asset_and_integer(value, "value")?;
                Ok(Self::Set { asset, value })
            }
            "reset" => Ok(Self::Reset),
            other => Err(ScoreboardError::InvalidCommand(format!(
                "unknown command type {other:?}"
            ))),
        }
    }
}

fn asset_and_integer(command: &Value, field: &str) -> Result<(Asset, i64)> {
    let name = command
        .get("assetName")
        .and_then(Value::as_str)
        .ok_or_else(|| ScoreboardError::InvalidCommand("missing \"assetName\"".into()))?;
    let asset = Asset::parse(name)?;

    let raw = command.get(field).ok_or_else(|| {
        ScoreboardError::InvalidCommand(format!("missing {field:?} for {asset}"))
    })?;
    let integer = raw.as_i64().ok_or_else(|| LedgerError::InvalidValue {
        asset,
        reason: format!("{field} must be an integer, got {raw}"),
    })?;

    Ok((asset, integer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_command() {
        assert_eq!(
            Command::from_json(r#"{"type":"increment","assetName":"herb","amount":-5}"#).unwrap(),
            Command::Increment {
                asset: Asset::Herb,
                amount: -5
            }
        );
        assert_eq!(
            Command::from_json(r#"{"type":"set","assetName":"charm","value":4}"#).unwrap(),
            Command::Set {
                asset: Asset::Charm,
                value: 4
            }
        );
        assert_eq!(Command::from_json(r#"{"type":"reset"}"#).unwrap(), Command::Reset);
    }

    #[test]
    fn unknown_asset_is_a_ledger_error() {
        let err = Command::from_json(r#"{"type":"set","assetName":"mana","value":1}"#).unwrap_err();
        assert!(matches!(
            err.as_ledger(),
            Some(LedgerError::UnknownAsset { name }) if name == "mana"
        ));

        let err = Command::from_json(r#"{"type":"set","assetName":"Charm","value":4}"#).unwrap_err();
        assert!(matches!(err.as_ledger(), Some(LedgerError::UnknownAsset { .. })));
    }

    #[test]
    fn non_integer_amount_is_invalid_value() {
        for amount in ["1.5", "\"5\"", "null", "true"] {
            let text = format!(r#"{{"type":"increment","assetName":"gold","amount":{amount}}}"#);
            let err = Command::from_json(&text).unwrap_err();
            assert!(
                matches!(
                    err.as_ledger(),
                    Some(LedgerError::InvalidValue {
                        asset: Asset::Gold,
                        ..
                    })
                ),
                "amount {amount} gave {err:?}"
            );
        }
    }

    #[test]
    fn malformed_commands() {
        assert!(matches!(
            Command::from_json("{"),
            Err(ScoreboardError::CommandSyntax(_))
        ));
        assert!(matches!(
            Command::from_json(r#"{"type":"undo"}"#),
            Err(ScoreboardError::InvalidCommand(_))
        ));
        assert!(matches!(
            Command::from_json(r#"{"type":"set","value":1}"#),
            Err(ScoreboardError::InvalidCommand(_))
        ));
    }

    #[test]
    fn serialized_commands_parse_back() {
        let command = Command::Increment {
            asset: Asset::GameplayVp,
            amount: 1,
        };
        let value = serde_json::to_value(command).unwrap();
        assert_eq!(value["assetName"], "gameplay_vp");
        assert_eq!(Command::from_value(&value).unwrap(), command);
    }
}
